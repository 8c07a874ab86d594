//! The single-record request pipeline.
//!
//! ```text
//! FormInput -> normalize (degree lookup) -> RawInputRecord
//!           -> one-hot + reconcile       -> EncodedFeatureVector
//!           -> classifier                -> PredictionResult
//! ```
//!
//! Every step is synchronous and runs to completion or fails the request.
//! Nothing is retried.

use serde::Serialize;
use tracing::{debug, info_span};

use sdp_model::{FormInput, PredictionResult, RawInputRecord};
use sdp_normalization::{CategoryMapping, KeyLookupError};
use sdp_transform::{OneHotColumn, build_feature_vector};

use crate::context::PredictionContext;
use crate::error::PredictError;

/// A prediction plus what reconciliation did to the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub result: PredictionResult,
    /// Schema columns set to 1, in schema order.
    pub active_columns: Vec<String>,
    /// Synthesized columns the model was never trained on.
    pub dropped: Vec<OneHotColumn>,
}

impl PredictionOutcome {
    /// True when at least one submitted value had no trained column.
    pub fn has_dropped_columns(&self) -> bool {
        !self.dropped.is_empty()
    }
}

/// Replace the degree display name with its canonical token.
///
/// All other fields are already in model form.
pub fn normalize_form(
    form: &FormInput,
    degrees: &CategoryMapping,
) -> Result<RawInputRecord, KeyLookupError> {
    let token = degrees.normalize(&form.degree)?;
    Ok(RawInputRecord::from_form(form, token))
}

/// Run one form submission through the full pipeline.
///
/// # Errors
///
/// [`PredictError::KeyLookup`] for a degree outside the mapping table and
/// [`PredictError::Inference`] when the classifier rejects the vector.
pub fn predict(
    context: &PredictionContext<'_>,
    form: &FormInput,
) -> Result<PredictionOutcome, PredictError> {
    let span = info_span!("predict", features = context.schema().len());
    let _guard = span.enter();

    let record = normalize_form(form, context.degrees())?;
    let reconciled = build_feature_vector(&record, context.schema());
    let inference = context.classifier().predict(&reconciled.vector)?;
    debug!(dropped = reconciled.dropped.len(), "prediction complete");

    Ok(PredictionOutcome {
        active_columns: reconciled
            .vector
            .active_columns()
            .into_iter()
            .map(str::to_string)
            .collect(),
        dropped: reconciled.dropped,
        result: PredictionResult {
            label: inference.label,
            probability: inference.probability,
            input: form.clone(),
            record,
        },
    })
}
