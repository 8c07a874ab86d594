#![deny(unsafe_code)]

//! Range-checked numeric form values.
//!
//! The form enforces its slider and select ranges; these newtypes carry the
//! same ranges so a built record can never hold a value the form would not
//! have produced. `Display` renders the literal token used in one-hot column
//! names (`age_20`, `cgpa_7.5`, `study_hours_4`, `academic_pressure_3`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 16;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ModelError::OutOfRange {
                field: "age",
                value: value.to_string(),
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Age {
    fn default() -> Self {
        Self(20)
    }
}

impl TryFrom<u8> for Age {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for u8 {
    fn from(value: Age) -> Self {
        value.0
    }
}

impl FromStr for Age {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_integer("age", s)?)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct StudyHours(u8);

impl StudyHours {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 12;

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if value > Self::MAX {
            return Err(ModelError::OutOfRange {
                field: "study hours",
                value: value.to_string(),
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for StudyHours {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<u8> for StudyHours {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudyHours> for u8 {
    fn from(value: StudyHours) -> Self {
        value.0
    }
}

impl FromStr for StudyHours {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_integer("study hours", s)?)
    }
}

impl fmt::Display for StudyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cumulative grade point average on a 0.0-10.0 scale in 0.1 steps.
///
/// Stored as tenths so equality and column naming never depend on float
/// rounding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Cgpa(u8);

impl Cgpa {
    pub const MAX_TENTHS: u8 = 100;

    /// Tolerance when snapping a float onto the 0.1 grid.
    const STEP_EPSILON: f64 = 1e-6;

    pub fn from_tenths(tenths: u8) -> Result<Self, ModelError> {
        if tenths > Self::MAX_TENTHS {
            return Err(ModelError::OutOfRange {
                field: "cgpa",
                value: format!("{}.{}", tenths / 10, tenths % 10),
                min: "0.0".to_string(),
                max: "10.0".to_string(),
            });
        }
        Ok(Self(tenths))
    }

    pub fn new(value: f64) -> Result<Self, ModelError> {
        if !value.is_finite() {
            return Err(ModelError::NotANumber {
                field: "cgpa",
                value: value.to_string(),
            });
        }
        if !(0.0..=10.0).contains(&value) {
            return Err(ModelError::OutOfRange {
                field: "cgpa",
                value: value.to_string(),
                min: "0.0".to_string(),
                max: "10.0".to_string(),
            });
        }
        let scaled = value * 10.0;
        let snapped = scaled.round();
        if (scaled - snapped).abs() > Self::STEP_EPSILON {
            return Err(ModelError::InvalidStep {
                field: "cgpa",
                value: value.to_string(),
                step: "0.1".to_string(),
            });
        }
        // In range and on the grid, so 0..=100 fits a u8.
        Self::from_tenths(snapped as u8)
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Default for Cgpa {
    fn default() -> Self {
        Self(40)
    }
}

impl TryFrom<f64> for Cgpa {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cgpa> for f64 {
    fn from(value: Cgpa) -> Self {
        value.as_f64()
    }
}

impl FromStr for Cgpa {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| ModelError::NotANumber {
            field: "cgpa",
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}

/// Always renders one decimal digit (`4.0`, `7.5`, `10.0`), the way the
/// training frame stringified float columns.
impl fmt::Display for Cgpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// A 1-5 self-assessment (academic pressure, study satisfaction, financial
/// stress).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            let expected: Vec<String> = (Self::MIN..=Self::MAX).map(|v| v.to_string()).collect();
            return Err(ModelError::InvalidChoice {
                field: "rating",
                value: value.to_string(),
                expected: expected.join(", "),
            });
        }
        Ok(Self(value))
    }

    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl FromStr for Rating {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_integer("rating", s)?)
    }
}

impl TryFrom<String> for Rating {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rating> for String {
    fn from(value: Rating) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_integer(field: &'static str, raw: &str) -> Result<u8, ModelError> {
    raw.trim().parse::<u8>().map_err(|_| ModelError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bounds() {
        assert!(Age::new(16).is_ok());
        assert!(Age::new(100).is_ok());
        assert!(Age::new(15).is_err());
        assert!(Age::new(101).is_err());
        assert_eq!(Age::default().get(), 20);
    }

    #[test]
    fn cgpa_renders_one_decimal() {
        assert_eq!(Cgpa::new(4.0).unwrap().to_string(), "4.0");
        assert_eq!(Cgpa::new(7.5).unwrap().to_string(), "7.5");
        assert_eq!(Cgpa::new(10.0).unwrap().to_string(), "10.0");
        assert_eq!(Cgpa::new(0.0).unwrap().to_string(), "0.0");
    }

    #[test]
    fn cgpa_snaps_float_noise() {
        // 0.1 * 3 is 0.30000000000000004 in binary floating point.
        let cgpa = Cgpa::new(0.1 * 3.0).unwrap();
        assert_eq!(cgpa.tenths(), 3);
        assert_eq!(cgpa.to_string(), "0.3");
    }

    #[test]
    fn cgpa_rejects_off_grid_and_out_of_range() {
        assert!(matches!(
            Cgpa::new(7.55),
            Err(ModelError::InvalidStep { .. })
        ));
        assert!(matches!(
            Cgpa::new(10.1),
            Err(ModelError::OutOfRange { .. })
        ));
        assert!(matches!(
            Cgpa::new(f64::NAN),
            Err(ModelError::NotANumber { .. })
        ));
    }

    #[test]
    fn study_hours_bounds() {
        assert_eq!("0".parse::<StudyHours>().unwrap().get(), 0);
        assert!("13".parse::<StudyHours>().is_err());
        assert!("four".parse::<StudyHours>().is_err());
    }

    #[test]
    fn rating_parses_tokens() {
        assert_eq!("3".parse::<Rating>().unwrap().to_string(), "3");
        assert!("0".parse::<Rating>().is_err());
        assert!("6".parse::<Rating>().is_err());
        assert_eq!(Rating::all().count(), 5);
    }
}
