use anyhow::{Context, Result};

use crate::entities::BCInstance;
use crate::io::ext_repr::ExtBCInstance;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtBCInstance) -> Result<BCInstance> {
    BCInstance::new(ext_instance.bin_size, ext_instance.item_sizes.clone())
        .with_context(|| format!("invalid instance '{}'", ext_instance.name))
}
