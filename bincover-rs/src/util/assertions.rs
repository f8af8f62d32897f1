use std::collections::HashMap;

use float_cmp::approx_eq;
use ordered_float::OrderedFloat;

use crate::entities::Bin;

//Various checks to verify correctness of covering results
//Used in debug_assertion!() blocks

pub fn bins_are_covered(bin_size: f64, bins: &[Bin]) -> bool {
    bins.iter().all(|bin| bin.is_covered(bin_size))
}

/// Checks that no item occurs more often across `bins` than in `item_sizes`.
pub fn bins_are_submultiset(item_sizes: &[f64], bins: &[Bin]) -> bool {
    let mut available: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
    for &item in item_sizes {
        *available.entry(OrderedFloat(item)).or_insert(0) += 1;
    }

    bins.iter()
        .flat_map(|bin| bin.items())
        .all(|&item| match available.get_mut(&OrderedFloat(item)) {
            Some(qty) if *qty > 0 => {
                *qty -= 1;
                true
            }
            _ => false,
        })
}

/// Checks that a bin's cached sum matches the recomputed total of its items.
pub fn bin_sum_matches_items(bin: &Bin) -> bool {
    approx_eq!(f64, bin.sum(), bin.items().iter().sum(), ulps = 4)
}
