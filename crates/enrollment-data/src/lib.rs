//! Data layer for the school enrollment statistics tool.
//!
//! Parses the bundled enrollment dataset and assembles the per-year tables
//! into the `(year, school, grade)` cube consumed by the report.

pub mod assembler;
pub mod dataset;

pub use assembler::{build_cube, YearTable};
pub use dataset::{parse_dataset, reference_cube, reference_dataset, Dataset};
pub use enrollment_core as core;
