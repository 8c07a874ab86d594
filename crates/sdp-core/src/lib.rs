//! Student depression risk prediction pipeline.
//!
//! Ties the normalizer, the feature vector builder, and a loaded classifier
//! together behind [`predict`]. Callers build the read-only handles once and
//! pass them in through a [`PredictionContext`].

pub mod context;
pub mod error;
pub mod pipeline;

pub use context::PredictionContext;
pub use error::PredictError;
pub use pipeline::{PredictionOutcome, normalize_form, predict};
