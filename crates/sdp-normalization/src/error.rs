#![deny(unsafe_code)]

/// A key outside a mapping's closed set was looked up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {mapping} '{key}'{}", format_suggestions(.suggestions))]
pub struct KeyLookupError {
    pub mapping: String,
    pub key: String,
    /// Closest known display names, best first.
    pub suggestions: Vec<String>,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingBuildError {
    #[error("duplicate display name '{display}' in {mapping} mapping")]
    DuplicateDisplay { mapping: String, display: String },

    #[error("empty display name or token for '{display}' in {mapping} mapping")]
    EmptyEntry { mapping: String, display: String },
}
