use bincover_rs::io::ext_repr::{ExtBCInstance, ExtBCSolution};
use serde::{Deserialize, Serialize};

use crate::config::CsirikConfig;

/// Record written to the solution folder after a run
#[derive(Serialize, Deserialize, Clone)]
pub struct BCOutput {
    pub instance: ExtBCInstance,
    pub solution: ExtBCSolution,
    pub config: CsirikConfig,
}
