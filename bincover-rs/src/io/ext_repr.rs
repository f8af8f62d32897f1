use serde::{Deserialize, Serialize};

/// Bin covering problem instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBCInstance {
    /// The name of the instance
    pub name: String,
    /// Covering threshold every bin has to reach
    pub bin_size: f64,
    /// Sizes of the items available to cover bins with
    pub item_sizes: Vec<f64>,
}

/// Bin covering solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBCSolution {
    /// Covered bins composing the solution, each listing the sizes of its items
    pub bins: Vec<Vec<f64>>,
    /// Number of covered bins
    pub n_covered: usize,
    /// Fraction of the total item size that ended up in covered bins
    pub covered_ratio: f64,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}
