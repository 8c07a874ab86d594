//! Process-wide handles shared by every prediction request.
//!
//! The degree mapping and the classifier are built once at startup and are
//! read-only afterwards. [`PredictionContext`] borrows both, so any number of
//! requests can run against the same handles without locking.

use std::fmt;

use sdp_artifact::Classifier;
use sdp_normalization::CategoryMapping;
use sdp_transform::FeatureSchema;

/// Read-only handles a prediction request runs against.
#[derive(Clone, Copy)]
pub struct PredictionContext<'a> {
    degrees: &'a CategoryMapping,
    classifier: &'a dyn Classifier,
}

impl<'a> PredictionContext<'a> {
    pub fn new(degrees: &'a CategoryMapping, classifier: &'a dyn Classifier) -> Self {
        Self {
            degrees,
            classifier,
        }
    }

    /// Degree display-name to token table.
    pub fn degrees(&self) -> &'a CategoryMapping {
        self.degrees
    }

    pub fn classifier(&self) -> &'a dyn Classifier {
        self.classifier
    }

    /// The classifier's ordered feature columns.
    pub fn schema(&self) -> &'a FeatureSchema {
        self.classifier.feature_schema()
    }
}

impl fmt::Debug for PredictionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionContext")
            .field("degrees", &self.degrees.name())
            .field("degree_count", &self.degrees.len())
            .field("feature_count", &self.schema().len())
            .finish()
    }
}
