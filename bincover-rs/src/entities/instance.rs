use crate::algos::{CoverError, validate};

/// Instance of the bin covering problem: a multiset of item sizes to be packed
/// into as many bins as possible, each reaching `bin_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct BCInstance {
    /// Covering threshold every bin has to reach
    pub bin_size: f64,
    /// Sizes of the items available to cover bins with
    pub item_sizes: Vec<f64>,
}

impl BCInstance {
    /// Creates an instance, rejecting non-positive (or non-finite) sizes.
    pub fn new(bin_size: f64, item_sizes: Vec<f64>) -> Result<Self, CoverError> {
        validate(bin_size, &item_sizes)?;
        Ok(Self {
            bin_size,
            item_sizes,
        })
    }

    pub fn total_item_size(&self) -> f64 {
        self.item_sizes.iter().sum()
    }

    pub fn item_qty(&self) -> usize {
        self.item_sizes.len()
    }
}
