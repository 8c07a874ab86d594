use std::path::PathBuf;

use sdp_transform::SchemaError;

/// Failures while loading or verifying a model artifact. All are fatal at
/// startup.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Model file not found. Please ensure '{}' is in the directory.", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid sha256 pin: {message}")]
    InvalidSha256 { message: String },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("unsupported model format: {message}")]
    UnsupportedFormat { message: String },

    #[error("invalid feature schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("invalid tree {tree} node {node}: {message}")]
    InvalidTree {
        tree: usize,
        node: usize,
        message: String,
    },

    #[error("invalid model parameter {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },
}

impl ArtifactError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Failures of a single inference call. Never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("feature vector has {actual} columns, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("feature column {index} is '{actual}', model expects '{expected}'")]
    ColumnMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("model produced a non-finite score ({0})")]
    NonFiniteScore(f64),
}
