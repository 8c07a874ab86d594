#![deny(unsafe_code)]

//! Loading and running the pre-trained depression risk classifier.
//!
//! - **ensemble**: the gradient-boosted tree model and its on-disk layout
//! - **classifier**: the [`Classifier`] inference seam
//! - **loader**: reading, pinning, and validating the artifact file
//! - **hash**: SHA-256 helpers for pins and schema fingerprints

pub mod classifier;
pub mod ensemble;
pub mod error;
pub mod hash;
pub mod loader;

pub use crate::classifier::{Classifier, Inference, check_shape};
pub use crate::ensemble::{
    ArtifactFile, GradientBoostedTrees, MODEL_FORMAT, MODEL_FORMAT_VERSION, Node, Tree,
};
pub use crate::error::{ArtifactError, InferenceError};
pub use crate::hash::{schema_fingerprint, sha256_hex};
pub use crate::loader::{ArtifactSummary, DEFAULT_MODEL_PATH, ModelArtifact};
