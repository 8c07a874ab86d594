use thiserror::Error;

/// Errors raised while building form values and records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("{field} {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("{field} {value} must be a multiple of {step}")]
    InvalidStep {
        field: &'static str,
        value: String,
        step: String,
    },

    #[error("invalid {field} '{value}': not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("unknown prediction class {0} (expected 0 or 1)")]
    UnknownClass(i64),
}

pub type Result<T> = std::result::Result<T, ModelError>;

impl ModelError {
    /// Name the form field the rejected value was submitted for.
    pub fn for_field(self, name: &'static str) -> Self {
        match self {
            Self::InvalidChoice {
                value, expected, ..
            } => Self::InvalidChoice {
                field: name,
                value,
                expected,
            },
            Self::OutOfRange {
                value, min, max, ..
            } => Self::OutOfRange {
                field: name,
                value,
                min,
                max,
            },
            Self::InvalidStep { value, step, .. } => Self::InvalidStep {
                field: name,
                value,
                step,
            },
            Self::NotANumber { value, .. } => Self::NotANumber { field: name, value },
            other => other,
        }
    }

    pub(crate) fn invalid_choice(field: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::InvalidChoice {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
