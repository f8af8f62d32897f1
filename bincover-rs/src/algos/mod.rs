use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{BCInstance, BCSolution};

mod ordered;
mod three_quarters;
mod two_thirds;

#[doc(inline)]
pub use ordered::ordered;
#[doc(inline)]
pub use three_quarters::three_quarters;
#[doc(inline)]
pub use two_thirds::two_thirds;

/// Rejection of a covering call, raised before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoverError {
    #[error("bin size must be strictly positive and finite, got {bin_size}")]
    InvalidBinSize { bin_size: f64 },
    #[error("item size must be strictly positive and finite, got {item_size} at index {index}")]
    InvalidItemSize { item_size: f64, index: usize },
}

/// Checks the preconditions shared by all covering algorithms.
/// Runs before any copy or sort, so a rejected call leaves the caller's
/// collection untouched.
pub(crate) fn validate(bin_size: f64, item_sizes: &[f64]) -> Result<(), CoverError> {
    if !(bin_size.is_finite() && bin_size > 0.0) {
        return Err(CoverError::InvalidBinSize { bin_size });
    }
    match item_sizes
        .iter()
        .find_position(|&&size| !(size.is_finite() && size > 0.0))
    {
        Some((index, &item_size)) => Err(CoverError::InvalidItemSize { item_size, index }),
        None => Ok(()),
    }
}

/// Private working copy of `item_sizes`, sorted in descending order.
pub(crate) fn sorted_desc(item_sizes: &[f64]) -> Vec<f64> {
    let mut items = item_sizes.to_vec();
    items.sort_unstable_by(|a, b| b.total_cmp(a));
    items
}

/// Selects one of the covering algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverAlgo {
    /// Single-pass descending greedy, no approximation guarantee
    Ordered,
    /// Csirik et al. (1999), asymptotically >= 2/3 of the optimal bin count
    TwoThirds,
    /// Csirik et al. (1999), asymptotically >= 3/4 of the optimal bin count
    ThreeQuarters,
}

impl CoverAlgo {
    /// Runs the selected algorithm on `instance` and wraps the covered bins
    /// into a [`BCSolution`].
    pub fn run(&self, instance: &BCInstance) -> Result<BCSolution, CoverError> {
        let bins = match self {
            CoverAlgo::Ordered => ordered(instance.bin_size, &instance.item_sizes)?,
            CoverAlgo::TwoThirds => two_thirds(instance.bin_size, &instance.item_sizes)?,
            CoverAlgo::ThreeQuarters => three_quarters(instance.bin_size, &instance.item_sizes)?,
        };
        let solution = BCSolution::new(bins);
        debug!(
            "[{:?}] covered {} bins out of {} items",
            self,
            solution.n_covered(),
            instance.item_qty()
        );
        Ok(solution)
    }
}
