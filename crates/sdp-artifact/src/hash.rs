use sha2::{Digest, Sha256};

use sdp_transform::FeatureSchema;

use crate::error::ArtifactError;

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(digest)
}

/// Stable fingerprint of a schema's column names and order.
///
/// Names are NUL-separated so `["ab", "c"]` and `["a", "bc"]` differ.
pub fn schema_fingerprint(schema: &FeatureSchema) -> String {
    let mut hasher = Sha256::new();
    for column in schema.columns() {
        hasher.update(column.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}

/// Check that a configured pin is 64 hex digits and lowercase it.
pub fn normalize_sha256_pin(pin: &str) -> Result<String, ArtifactError> {
    let trimmed = pin.trim();
    if trimmed.len() != 64 {
        return Err(ArtifactError::InvalidSha256 {
            message: format!("expected 64 hex digits, got {}", trimmed.len()),
        });
    }
    if !trimmed.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ArtifactError::InvalidSha256 {
            message: "contains non-hex characters".to_string(),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}
