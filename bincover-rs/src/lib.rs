//! Approximation algorithms for the bin covering problem: packing items into
//! as many bins as possible such that every bin's total size reaches a fixed
//! capacity (the mirror image of bin packing).

/// The covering algorithms and their shared validation
pub mod algos;

/// Entities to model bin covering instances and solutions
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
