use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::{FormInput, RawInputRecord};

/// Binary classifier outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum RiskLabel {
    /// Class 0.
    NoElevatedRisk,
    /// Class 1.
    ElevatedRisk,
}

impl RiskLabel {
    pub fn from_class(class: i64) -> Result<Self, ModelError> {
        match class {
            0 => Ok(RiskLabel::NoElevatedRisk),
            1 => Ok(RiskLabel::ElevatedRisk),
            other => Err(ModelError::UnknownClass(other)),
        }
    }

    pub fn class(&self) -> u8 {
        match self {
            RiskLabel::NoElevatedRisk => 0,
            RiskLabel::ElevatedRisk => 1,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            RiskLabel::NoElevatedRisk => "You likely do not have Depression",
            RiskLabel::ElevatedRisk => "You likely have Depression",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RiskLabel::NoElevatedRisk => {
                "however, if you have concerns about your mental health, consider seeking professional advice."
            }
            RiskLabel::ElevatedRisk => {
                "see a healthcare professional for a proper diagnosis and support."
            }
        }
    }
}

impl TryFrom<i64> for RiskLabel {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_class(value)
    }
}

impl From<RiskLabel> for u8 {
    fn from(value: RiskLabel) -> Self {
        value.class()
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// Outcome of one prediction request, kept only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    /// Positive-class probability reported by the classifier.
    pub probability: f64,
    /// The submission as the user entered it.
    pub input: FormInput,
    /// The normalized record that was encoded.
    pub record: RawInputRecord,
}
