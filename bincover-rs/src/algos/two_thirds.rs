use std::collections::VecDeque;

use crate::algos::{CoverError, sorted_desc, validate};
use crate::entities::Bin;
use crate::util::assertions;

/// 2/3-approximation algorithm from Csirik et al. (1999): seeds each bin with
/// the largest remaining item, then fills it with the smallest remaining items
/// until it is covered. Asymptotically covers at least 2/3 of the optimal
/// number of bins.
pub fn two_thirds(bin_size: f64, item_sizes: &[f64]) -> Result<Vec<Bin>, CoverError> {
    validate(bin_size, item_sizes)?;
    let bins = cover(bin_size, sorted_desc(item_sizes).into());
    debug_assert!(assertions::bins_are_covered(bin_size, &bins));
    debug_assert!(assertions::bins_are_submultiset(item_sizes, &bins));
    Ok(bins)
}

/// Consumes a descending-sorted working copy: one seed from the large end,
/// then fillers from the small end until the bin is covered.
fn cover(bin_size: f64, mut items: VecDeque<f64>) -> Vec<Bin> {
    let mut bins = vec![];
    while let Some(largest) = items.pop_front() {
        let mut bin = Bin::new();
        bin.push(largest);
        while !bin.is_covered(bin_size) {
            match items.pop_back() {
                Some(smallest) => bin.push(smallest),
                None => break,
            }
        }
        if bin.is_covered(bin_size) {
            bins.push(bin);
        }
        // an uncovered bin at this point means the items ran out, the next
        // pop_front terminates the loop and the partial bin is dropped
    }
    bins
}
