use std::fmt;

/// A bin accumulating items during a covering run.
/// The running sum is kept in lockstep with the item list; items are only ever
/// appended, never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bin {
    items: Vec<f64>,
    sum: f64,
}

impl Bin {
    pub fn new() -> Self {
        Self {
            items: vec![],
            sum: 0.0,
        }
    }

    /// Appends a single item.
    pub fn push(&mut self, item: f64) {
        self.items.push(item);
        self.sum += item;
    }

    /// Appends every item of `items` in order. Flattens one level: appending a
    /// slice is equivalent to pushing each of its items individually.
    pub fn extend_from(&mut self, items: &[f64]) {
        for &item in items {
            self.push(item);
        }
    }

    /// A bin is covered once its total size reaches the covering threshold.
    pub fn is_covered(&self, bin_size: f64) -> bool {
        self.sum >= bin_size
    }

    /// Cached total size of all items in the bin.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn items(&self) -> &[f64] {
        &self.items
    }

    pub fn into_items(self) -> Vec<f64> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}
