//! Loading the classifier artifact from disk.
//!
//! The artifact is read once at startup. An optional SHA-256 pin guards
//! against serving predictions from a model other than the one the feature
//! schema was fit for.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use sdp_transform::{EncodedFeatureVector, FeatureSchema};

use crate::classifier::{Classifier, Inference};
use crate::ensemble::{ArtifactFile, GradientBoostedTrees};
use crate::error::{ArtifactError, InferenceError};
use crate::hash::{normalize_sha256_pin, schema_fingerprint, sha256_hex};

/// Default artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "depression_best_rs_gbt_model.json";

/// Summary of a loaded artifact, for logs and the `schema` listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArtifactSummary {
    pub path: PathBuf,
    pub sha256: String,
    pub feature_count: usize,
    pub tree_count: usize,
    pub schema_fingerprint: String,
}

/// A verified, loaded classifier artifact.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    path: PathBuf,
    sha256: String,
    model: GradientBoostedTrees,
}

impl ModelArtifact {
    /// Read, verify, parse, and validate the artifact at `path`.
    ///
    /// # Errors
    ///
    /// [`ArtifactError::NotFound`] when the file is missing; other variants
    /// for unreadable, mismatched, or malformed artifacts.
    pub fn load(path: &Path, sha256_pin: Option<&str>) -> Result<Self, ArtifactError> {
        let expected = sha256_pin.map(normalize_sha256_pin).transpose()?;

        debug!(path = %path.display(), "reading model artifact");
        let bytes = std::fs::read(path).map_err(|e| ArtifactError::io(path, e))?;
        let actual = sha256_hex(&bytes);
        if let Some(expected) = expected
            && expected != actual
        {
            return Err(ArtifactError::Sha256Mismatch {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }

        let file: ArtifactFile =
            serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let model = GradientBoostedTrees::from_file(file)?;

        let artifact = Self {
            path: path.to_path_buf(),
            sha256: actual,
            model,
        };
        info!(
            path = %artifact.path.display(),
            sha256 = %artifact.sha256,
            feature_count = artifact.model.schema().len(),
            tree_count = artifact.model.tree_count(),
            pinned = sha256_pin.is_some(),
            "model artifact loaded"
        );
        Ok(artifact)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    pub fn model(&self) -> &GradientBoostedTrees {
        &self.model
    }

    pub fn summary(&self) -> ArtifactSummary {
        ArtifactSummary {
            path: self.path.clone(),
            sha256: self.sha256.clone(),
            feature_count: self.model.schema().len(),
            tree_count: self.model.tree_count(),
            schema_fingerprint: schema_fingerprint(self.model.schema()),
        }
    }
}

impl Classifier for ModelArtifact {
    fn feature_schema(&self) -> &FeatureSchema {
        self.model.feature_schema()
    }

    fn predict(&self, vector: &EncodedFeatureVector<'_>) -> Result<Inference, InferenceError> {
        self.model.predict(vector)
    }
}
