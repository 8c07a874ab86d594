//! Closed enumerations offered by the prediction form.
//!
//! Each variant renders to the exact token the classifier saw during
//! training (`"Male"`, `"7-8 hours"`, ...). Parsing is case-insensitive and
//! ignores surrounding whitespace so CSV and command-line input can be typed
//! loosely; rendering is always canonical.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Look up `raw` among the canonical renderings of `all`.
fn parse_choice<T: Copy>(
    field: &'static str,
    raw: &str,
    all: &[T],
    render: fn(T) -> &'static str,
) -> Result<T, ModelError> {
    let trimmed = raw.trim();
    all.iter()
        .copied()
        .find(|candidate| render(*candidate).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| {
            let expected: Vec<&str> = all.iter().copied().map(render).collect();
            ModelError::invalid_choice(field, raw, &expected)
        })
}

/// Student gender as offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("gender", s, &Self::ALL, |g| g.as_str())
    }
}

impl TryFrom<String> for Gender {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}

/// Yes/No answer used by family history and suicidal thoughts.
///
/// The two form fields list their options in different orders, so each
/// field owns its own option list; see [`YesNo::FAMILY_HISTORY_OPTIONS`] and
/// [`YesNo::SUICIDAL_THOUGHTS_OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const FAMILY_HISTORY_OPTIONS: [YesNo; 2] = [YesNo::No, YesNo::Yes];
    pub const SUICIDAL_THOUGHTS_OPTIONS: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("yes/no answer", s, &Self::SUICIDAL_THOUGHTS_OPTIONS, |v| {
            v.as_str()
        })
    }
}

impl TryFrom<String> for YesNo {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YesNo> for String {
    fn from(value: YesNo) -> Self {
        value.as_str().to_string()
    }
}

/// Typical nightly sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SleepDuration {
    #[default]
    LessThan5Hours,
    FiveToSixHours,
    SevenToEightHours,
    MoreThan8Hours,
    Others,
}

impl SleepDuration {
    pub const ALL: [SleepDuration; 5] = [
        SleepDuration::LessThan5Hours,
        SleepDuration::FiveToSixHours,
        SleepDuration::SevenToEightHours,
        SleepDuration::MoreThan8Hours,
        SleepDuration::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepDuration::LessThan5Hours => "Less than 5 hours",
            SleepDuration::FiveToSixHours => "5-6 hours",
            SleepDuration::SevenToEightHours => "7-8 hours",
            SleepDuration::MoreThan8Hours => "More than 8 hours",
            SleepDuration::Others => "Others",
        }
    }
}

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SleepDuration {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("sleep duration", s, &Self::ALL, |v| v.as_str())
    }
}

impl TryFrom<String> for SleepDuration {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SleepDuration> for String {
    fn from(value: SleepDuration) -> Self {
        value.as_str().to_string()
    }
}

/// Self-reported dietary habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DietaryHabits {
    #[default]
    Healthy,
    Moderate,
    Unhealthy,
}

impl DietaryHabits {
    pub const ALL: [DietaryHabits; 3] = [
        DietaryHabits::Healthy,
        DietaryHabits::Moderate,
        DietaryHabits::Unhealthy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryHabits::Healthy => "Healthy",
            DietaryHabits::Moderate => "Moderate",
            DietaryHabits::Unhealthy => "Unhealthy",
        }
    }
}

impl fmt::Display for DietaryHabits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryHabits {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("dietary habits", s, &Self::ALL, |v| v.as_str())
    }
}

impl TryFrom<String> for DietaryHabits {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DietaryHabits> for String {
    fn from(value: DietaryHabits) -> Self {
        value.as_str().to_string()
    }
}
