//! The inference seam between the request pipeline and a loaded model.

use sdp_model::RiskLabel;
use sdp_transform::{EncodedFeatureVector, FeatureSchema};

use crate::ensemble::GradientBoostedTrees;
use crate::error::InferenceError;

/// Outcome of one single-record inference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inference {
    pub label: RiskLabel,
    /// Positive-class probability.
    pub probability: f64,
}

/// A trained binary classifier with a remembered feature schema.
///
/// Implementations are read-only after load and can be shared across threads.
pub trait Classifier: Send + Sync {
    /// Ordered feature columns the classifier was trained on.
    fn feature_schema(&self) -> &FeatureSchema;

    /// Predict one record.
    ///
    /// # Errors
    ///
    /// Fails when `vector` does not match [`Classifier::feature_schema`]
    /// column for column.
    fn predict(&self, vector: &EncodedFeatureVector<'_>) -> Result<Inference, InferenceError>;
}

/// Check that `vector` has exactly the columns of `schema`, in order.
pub fn check_shape(
    schema: &FeatureSchema,
    vector: &EncodedFeatureVector<'_>,
) -> Result<(), InferenceError> {
    if vector.len() != schema.len() {
        return Err(InferenceError::ShapeMismatch {
            expected: schema.len(),
            actual: vector.len(),
        });
    }
    let columns = vector.columns();
    if std::ptr::eq(columns, schema.columns()) {
        return Ok(());
    }
    for (index, (expected, actual)) in schema.columns().iter().zip(columns).enumerate() {
        if expected != actual {
            return Err(InferenceError::ColumnMismatch {
                index,
                expected: expected.clone(),
                actual: actual.clone(),
            });
        }
    }
    Ok(())
}

impl Classifier for GradientBoostedTrees {
    fn feature_schema(&self) -> &FeatureSchema {
        self.schema()
    }

    fn predict(&self, vector: &EncodedFeatureVector<'_>) -> Result<Inference, InferenceError> {
        check_shape(self.schema(), vector)?;
        let raw = self.decision_function(&vector.to_f64_row())?;
        if !raw.is_finite() {
            return Err(InferenceError::NonFiniteScore(raw));
        }
        Ok(Inference {
            label: GradientBoostedTrees::label(raw),
            probability: GradientBoostedTrees::probability(raw),
        })
    }
}
