//! Feature vector construction for prediction requests.
//!
//! This crate turns a normalized [`sdp_model::RawInputRecord`] into the exact
//! feature vector a trained classifier expects:
//!
//! - **schema**: the classifier's ordered feature columns
//! - **encode**: one-hot encoding by literal value and schema reconciliation

pub mod encode;
pub mod error;
pub mod schema;

pub use encode::{
    EncodedFeatureVector, OneHotColumn, Reconciled, build_feature_vector, one_hot, reconcile,
};
pub use error::SchemaError;
pub use schema::FeatureSchema;
