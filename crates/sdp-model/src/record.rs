//! Form submissions and the model-form records derived from them.
//!
//! A [`FormInput`] is what the user picked, with the degree still in its
//! human-readable form. A [`RawInputRecord`] is the same submission after
//! category normalization, ready for one-hot encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{DietaryHabits, Gender, SleepDuration, YesNo};
use crate::error::ModelError;
use crate::values::{Age, Cgpa, Rating, StudyHours};

/// The attributes collected by the form, in the column order the model's
/// training frame used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Gender,
    Age,
    FamilyHistory,
    AcademicPressure,
    Cgpa,
    StudyHours,
    StudySatisfaction,
    SleepDuration,
    DietaryHabits,
    Degree,
    SuicidalThoughts,
    FinancialStress,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Gender,
        Field::Age,
        Field::FamilyHistory,
        Field::AcademicPressure,
        Field::Cgpa,
        Field::StudyHours,
        Field::StudySatisfaction,
        Field::SleepDuration,
        Field::DietaryHabits,
        Field::Degree,
        Field::SuicidalThoughts,
        Field::FinancialStress,
    ];

    /// Column name in the model's input frame; one-hot columns are prefixed
    /// with it.
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::Age => "age",
            Field::FamilyHistory => "family_history",
            Field::AcademicPressure => "academic_pressure",
            Field::Cgpa => "cgpa",
            Field::StudyHours => "study_hours",
            Field::StudySatisfaction => "study_satisfaction",
            Field::SleepDuration => "sleep_duration",
            Field::DietaryHabits => "dietary_habits",
            Field::Degree => "degree",
            Field::SuicidalThoughts => "suicidal_thoughts",
            Field::FinancialStress => "financial_stress",
        }
    }

    /// Heading used when echoing the submission back to the user.
    pub fn display_label(&self) -> &'static str {
        match self {
            Field::Gender => "Gender",
            Field::Age => "Age",
            Field::FamilyHistory => "Family History",
            Field::AcademicPressure => "Academic Pressure",
            Field::Cgpa => "CGPA",
            Field::StudyHours => "Study Hours",
            Field::StudySatisfaction => "Study Satisfaction",
            Field::SleepDuration => "Sleep Duration",
            Field::DietaryHabits => "Dietary Habits",
            Field::Degree => "Degree",
            Field::SuicidalThoughts => "Suicidal Thoughts",
            Field::FinancialStress => "Financial Stress",
        }
    }

    /// Find the field owning a one-hot column such as `study_hours_4`.
    ///
    /// Longest prefix wins so `study_hours_*` is never attributed to a
    /// shorter field name.
    pub fn for_column(column: &str) -> Option<Field> {
        Self::ALL
            .iter()
            .copied()
            .filter(|field| {
                column
                    .strip_prefix(field.column_name())
                    .is_some_and(|rest| rest.starts_with('_'))
            })
            .max_by_key(|field| field.column_name().len())
    }

    /// Parse a submitted value, naming this field in the error.
    pub fn parse<T>(&self, raw: &str) -> Result<T, ModelError>
    where
        T: FromStr<Err = ModelError>,
    {
        raw.parse()
            .map_err(|error: ModelError| error.for_field(self.column_name()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A form submission as entered by the user.
///
/// `Default` mirrors the form's initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub gender: Gender,
    pub age: Age,
    #[serde(deserialize_with = "field_value::family_history")]
    pub family_history: YesNo,
    #[serde(deserialize_with = "field_value::academic_pressure")]
    pub academic_pressure: Rating,
    pub cgpa: Cgpa,
    pub study_hours: StudyHours,
    #[serde(deserialize_with = "field_value::study_satisfaction")]
    pub study_satisfaction: Rating,
    pub sleep_duration: SleepDuration,
    pub dietary_habits: DietaryHabits,
    /// Human-readable degree name, e.g. "Bachelor of Technology".
    pub degree: String,
    #[serde(deserialize_with = "field_value::suicidal_thoughts")]
    pub suicidal_thoughts: YesNo,
    #[serde(deserialize_with = "field_value::financial_stress")]
    pub financial_stress: Rating,
}

/// Deserializers for the form fields whose value types are shared.
mod field_value {
    use super::*;

    fn named<'de, D, T>(deserializer: D, field: Field) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr<Err = ModelError>,
    {
        let raw = String::deserialize(deserializer)?;
        field.parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn family_history<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<YesNo, D::Error> {
        named(deserializer, Field::FamilyHistory)
    }

    pub fn suicidal_thoughts<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<YesNo, D::Error> {
        named(deserializer, Field::SuicidalThoughts)
    }

    pub fn academic_pressure<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Rating, D::Error> {
        named(deserializer, Field::AcademicPressure)
    }

    pub fn study_satisfaction<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Rating, D::Error> {
        named(deserializer, Field::StudySatisfaction)
    }

    pub fn financial_stress<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Rating, D::Error> {
        named(deserializer, Field::FinancialStress)
    }
}

/// First entry of the form's degree list.
pub const DEFAULT_DEGREE_DISPLAY: &str = "Bachelor of Pharmacy";

impl Default for FormInput {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            age: Age::default(),
            family_history: YesNo::FAMILY_HISTORY_OPTIONS[0],
            academic_pressure: Rating::default(),
            cgpa: Cgpa::default(),
            study_hours: StudyHours::default(),
            study_satisfaction: Rating::default(),
            sleep_duration: SleepDuration::default(),
            dietary_habits: DietaryHabits::default(),
            degree: DEFAULT_DEGREE_DISPLAY.to_string(),
            suicidal_thoughts: YesNo::SUICIDAL_THOUGHTS_OPTIONS[0],
            financial_stress: Rating::default(),
        }
    }
}

impl FormInput {
    /// Label/value pairs for the input echo, in form order.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        Field::ALL
            .iter()
            .map(|field| (field.display_label(), self.display_value(*field)))
            .collect()
    }

    fn display_value(&self, field: Field) -> String {
        match field {
            Field::Gender => self.gender.to_string(),
            Field::Age => self.age.to_string(),
            Field::FamilyHistory => self.family_history.to_string(),
            Field::AcademicPressure => self.academic_pressure.to_string(),
            Field::Cgpa => self.cgpa.to_string(),
            Field::StudyHours => self.study_hours.to_string(),
            Field::StudySatisfaction => self.study_satisfaction.to_string(),
            Field::SleepDuration => self.sleep_duration.to_string(),
            Field::DietaryHabits => self.dietary_habits.to_string(),
            Field::Degree => self.degree.clone(),
            Field::SuicidalThoughts => self.suicidal_thoughts.to_string(),
            Field::FinancialStress => self.financial_stress.to_string(),
        }
    }
}

/// A submission in model form: the degree is its canonical training token.
///
/// Built fresh per prediction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputRecord {
    pub gender: Gender,
    pub age: Age,
    pub family_history: YesNo,
    pub academic_pressure: Rating,
    pub cgpa: Cgpa,
    pub study_hours: StudyHours,
    pub study_satisfaction: Rating,
    pub sleep_duration: SleepDuration,
    pub dietary_habits: DietaryHabits,
    /// Canonical degree token, e.g. "B.Tech".
    pub degree: String,
    pub suicidal_thoughts: YesNo,
    pub financial_stress: Rating,
}

impl RawInputRecord {
    /// Copy a form submission, substituting the normalized degree token.
    pub fn from_form(form: &FormInput, degree_token: impl Into<String>) -> Self {
        Self {
            gender: form.gender,
            age: form.age,
            family_history: form.family_history,
            academic_pressure: form.academic_pressure,
            cgpa: form.cgpa,
            study_hours: form.study_hours,
            study_satisfaction: form.study_satisfaction,
            sleep_duration: form.sleep_duration,
            dietary_habits: form.dietary_habits,
            degree: degree_token.into(),
            suicidal_thoughts: form.suicidal_thoughts,
            financial_stress: form.financial_stress,
        }
    }

    /// The literal value of every field as it appears in one-hot column
    /// names, in [`Field::ALL`] order. Numeric fields are rendered verbatim.
    pub fn field_values(&self) -> [(Field, String); 12] {
        [
            (Field::Gender, self.gender.to_string()),
            (Field::Age, self.age.to_string()),
            (Field::FamilyHistory, self.family_history.to_string()),
            (Field::AcademicPressure, self.academic_pressure.to_string()),
            (Field::Cgpa, self.cgpa.to_string()),
            (Field::StudyHours, self.study_hours.to_string()),
            (Field::StudySatisfaction, self.study_satisfaction.to_string()),
            (Field::SleepDuration, self.sleep_duration.to_string()),
            (Field::DietaryHabits, self.dietary_habits.to_string()),
            (Field::Degree, self.degree.clone()),
            (Field::SuicidalThoughts, self.suicidal_thoughts.to_string()),
            (Field::FinancialStress, self.financial_stress.to_string()),
        ]
    }
}
