//! Category normalization for prediction requests.
//!
//! Maps the human-readable names a user picks to the canonical tokens the
//! classifier was trained on. Tables are closed: unknown keys are errors,
//! never passed through.

pub mod degree;
pub mod error;
pub mod mapping;

pub use degree::{DEGREE_TABLE, degree_mapping};
pub use error::{KeyLookupError, MappingBuildError};
pub use mapping::{CategoryMapping, MappingEntry};
