use std::time::Instant;

use crate::entities::{BCInstance, BCSolution};
use crate::io::ext_repr::ExtBCSolution;

/// Exports a solution out of the library
pub fn export(instance: &BCInstance, solution: &BCSolution, epoch: Instant) -> ExtBCSolution {
    ExtBCSolution {
        bins: solution
            .bins
            .iter()
            .map(|bin| bin.items().to_vec())
            .collect(),
        n_covered: solution.n_covered(),
        covered_ratio: solution.covered_ratio(instance),
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}
