//! Data model for student depression risk prediction.
//!
//! - **enums**: closed form choices (gender, sleep, diet, yes/no)
//! - **values**: range-checked numeric values (age, CGPA, study hours, ratings)
//! - **record**: form submissions and normalized model-form records
//! - **prediction**: classifier labels and prediction results

pub mod enums;
pub mod error;
pub mod prediction;
pub mod record;
pub mod values;

pub use enums::{DietaryHabits, Gender, SleepDuration, YesNo};
pub use error::{ModelError, Result};
pub use prediction::{PredictionResult, RiskLabel};
pub use record::{DEFAULT_DEGREE_DISPLAY, Field, FormInput, RawInputRecord};
pub use values::{Age, Cgpa, Rating, StudyHours};
