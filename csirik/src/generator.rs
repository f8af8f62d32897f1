use anyhow::{Result, ensure};
use bincover_rs::entities::BCInstance;
use itertools::Itertools;
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use rand_distr::Normal;

use crate::config::{GeneratorConfig, SizeDistribution};

/// Generates a random bin covering instance according to `config`.
pub fn generate(config: GeneratorConfig, rng: &mut impl Rng) -> Result<BCInstance> {
    ensure!(config.n_items > 0, "generator needs at least one item");

    let item_sizes = match config.distribution {
        SizeDistribution::Uniform { min, max } => {
            ensure!(
                min > 0.0 && min <= max,
                "uniform size range must be positive and non-empty: [{min}, {max}]"
            );
            let distr = Uniform::new_inclusive(min, max)?;
            (0..config.n_items).map(|_| distr.sample(rng)).collect_vec()
        }
        SizeDistribution::Normal { mean, std_dev } => {
            ensure!(mean > 0.0, "normal size mean must be positive: {mean}");
            let distr = Normal::new(mean, std_dev)?;
            (0..config.n_items)
                .map(|_| {
                    // resample until strictly positive, sizes <= 0 have no
                    // covering semantics
                    loop {
                        let sample = distr.sample(rng);
                        if sample > 0.0 {
                            break sample;
                        }
                    }
                })
                .collect_vec()
        }
    };

    Ok(BCInstance::new(config.bin_size, item_sizes)?)
}
