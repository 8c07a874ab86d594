use sdp_artifact::InferenceError;
use sdp_normalization::KeyLookupError;

/// Failures of a single prediction request. Fatal to that request only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    KeyLookup(#[from] KeyLookupError),

    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}
