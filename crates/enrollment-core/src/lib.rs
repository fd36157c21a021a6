//! Core domain for the school enrollment statistics tool.
//!
//! Holds the school roster and dataset configuration, the three-dimensional
//! `(year, school, grade)` enrollment cube with its strided views, the
//! NaN-skipping reductions, the school selector, and shared error and
//! formatting helpers.

pub mod config;
pub mod cube;
pub mod error;
pub mod formatting;
pub mod models;
pub mod selector;
pub mod settings;
pub mod stats;

pub use config::DatasetConfig;
pub use cube::{Axis, CubeView, EnrollmentCube};
pub use error::{EnrollmentError, Result};
pub use models::SchoolRecord;
