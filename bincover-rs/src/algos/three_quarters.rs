use std::collections::VecDeque;
use std::mem;

use crate::algos::{CoverError, ordered, sorted_desc, validate};
use crate::entities::Bin;
use crate::util::assertions;

/// 3/4-approximation algorithm from Csirik et al. (1999).
///
/// Items are split into three tiers relative to `bin_size`: big (`>= 1/2`),
/// medium (`[1/3, 1/2)`) and small (`< 1/3`). Each bin is seeded with either
/// the single largest big item or the two largest medium items, whichever
/// weighs more, and then filled up from the small end. Once a tier required
/// for this interleaving runs out, the remaining tiers are flushed through the
/// greedy [`ordered`] pass. Asymptotically covers at least 3/4 of the optimal
/// number of bins.
pub fn three_quarters(bin_size: f64, item_sizes: &[f64]) -> Result<Vec<Bin>, CoverError> {
    validate(bin_size, item_sizes)?;
    let bins = cover(bin_size, sorted_desc(item_sizes));
    debug_assert!(assertions::bins_are_covered(bin_size, &bins));
    debug_assert!(assertions::bins_are_submultiset(item_sizes, &bins));
    Ok(bins)
}

fn cover(bin_size: f64, sorted: Vec<f64>) -> Vec<Bin> {
    // the tier deques inherit the descending order of `sorted`
    let mut big: VecDeque<f64> = sorted
        .iter()
        .copied()
        .filter(|&item| item >= bin_size / 2.0)
        .collect();
    let mut medium: VecDeque<f64> = sorted
        .iter()
        .copied()
        .filter(|&item| bin_size / 3.0 <= item && item < bin_size / 2.0)
        .collect();
    let mut small: VecDeque<f64> = sorted
        .iter()
        .copied()
        .filter(|&item| item < bin_size / 3.0)
        .collect();

    let mut bins = vec![];
    let mut bin = Bin::new();
    loop {
        if small.is_empty() {
            // no small items left to interleave: flush the remaining big items
            // (together with whatever the active bin holds) and the medium
            // items through the greedy pass
            let residual: Vec<f64> = big.into_iter().chain(bin.into_items()).collect();
            bins.extend(ordered::cover(bin_size, residual));
            bins.extend(ordered::cover(bin_size, medium.into()));
            return bins;
        } else if big.is_empty() && medium.is_empty() {
            bins.extend(ordered::cover(bin_size, small.into()));
            return bins;
        } else {
            // seed with the single largest big item or the two largest medium
            // items, whichever weighs more; ties go to the big item
            let big_candidate = big.front().copied().unwrap_or(0.0);
            let medium_pair: f64 = medium.iter().take(2).sum();
            if big_candidate >= medium_pair {
                if let Some(item) = big.pop_front() {
                    bin.push(item);
                }
            } else {
                for _ in 0..2 {
                    if let Some(item) = medium.pop_front() {
                        bin.push(item);
                    }
                }
            }

            while !bin.is_covered(bin_size) {
                match small.pop_back() {
                    Some(smallest) => bin.push(smallest),
                    None => break,
                }
            }

            if bin.is_covered(bin_size) {
                bins.push(mem::take(&mut bin));
            }
            // if small ran dry mid-bin the partial bin persists into the next
            // iteration, which returns via the small-is-empty branch
        }
    }
}
