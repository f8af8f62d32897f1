use std::mem;

use crate::algos::{CoverError, validate};
use crate::entities::Bin;
use crate::util::assertions;

/// Single-pass greedy covering: consumes the items in descending order of size
/// and seals the active bin every time it reaches `bin_size`.
/// A trailing bin that never reaches coverage is discarded.
pub fn ordered(bin_size: f64, item_sizes: &[f64]) -> Result<Vec<Bin>, CoverError> {
    validate(bin_size, item_sizes)?;
    let bins = cover(bin_size, item_sizes.to_vec());
    debug_assert!(assertions::bins_are_covered(bin_size, &bins));
    debug_assert!(assertions::bins_are_submultiset(item_sizes, &bins));
    Ok(bins)
}

/// Greedy pass over an owned working copy, sorting it itself.
/// Also flushes the residual tiers of [`three_quarters`](crate::algos::three_quarters).
pub(super) fn cover(bin_size: f64, mut items: Vec<f64>) -> Vec<Bin> {
    items.sort_unstable_by(|a, b| b.total_cmp(a));

    let mut bins = vec![];
    let mut bin = Bin::new();
    for item in items {
        bin.push(item);
        if bin.is_covered(bin_size) {
            bins.push(mem::take(&mut bin));
        }
    }
    bins
}
