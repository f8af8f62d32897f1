use bincover_rs::algos::CoverAlgo;
use serde::{Deserialize, Serialize};

/// Configuration for the csirik driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CsirikConfig {
    /// Covering algorithm to run
    pub algorithm: CoverAlgo,
    /// Seed for the PRNG. If undefined, the generator runs in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Parameters for randomly generated instances (used when no input file is provided)
    pub generator: GeneratorConfig,
}

impl Default for CsirikConfig {
    fn default() -> Self {
        Self {
            algorithm: CoverAlgo::ThreeQuarters,
            prng_seed: Some(0),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Parameters of the random instance generator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Covering threshold of the generated instance
    pub bin_size: f64,
    /// Number of items to generate
    pub n_items: usize,
    /// Distribution to draw the item sizes from
    pub distribution: SizeDistribution,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bin_size: 1000.0,
            n_items: 100,
            distribution: SizeDistribution::Uniform {
                min: 1.0,
                max: 500.0,
            },
        }
    }
}

/// Item size distribution of the generator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SizeDistribution {
    /// Uniformly distributed sizes in `[min, max]`
    Uniform { min: f64, max: f64 },
    /// Normally distributed sizes, resampled until strictly positive
    Normal { mean: f64, std_dev: f64 },
}
