use std::time::Instant;

use crate::entities::{BCInstance, Bin};

/// Result of one covering run: the sequence of covered bins produced for a
/// [`BCInstance`]. Items that never ended up in a covered bin are simply
/// absent.
#[derive(Debug, Clone)]
pub struct BCSolution {
    pub bins: Vec<Bin>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl BCSolution {
    pub fn new(bins: Vec<Bin>) -> Self {
        Self {
            bins,
            time_stamp: Instant::now(),
        }
    }

    /// Number of covered bins, the quantity the covering algorithms maximize.
    pub fn n_covered(&self) -> usize {
        self.bins.len()
    }

    /// Total size of all items placed in covered bins.
    pub fn covered_size(&self) -> f64 {
        self.bins.iter().map(|bin| bin.sum()).sum()
    }

    /// Fraction of the instance's total item size that ended up in covered bins.
    pub fn covered_ratio(&self, instance: &BCInstance) -> f64 {
        match instance.total_item_size() {
            total if total > 0.0 => self.covered_size() / total,
            _ => 0.0,
        }
    }
}
