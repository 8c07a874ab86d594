//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sdp_model::{
    Age, Cgpa, DietaryHabits, Field, FormInput, Gender, Rating, SleepDuration, StudyHours, YesNo,
};

#[derive(Parser)]
#[command(
    name = "sdp",
    version,
    about = "Student depression risk prediction",
    long_about = "Predict depression risk for a student from lifestyle and academic \
                  attributes using a pre-trained classifier.\n\n\
                  The classifier is a screening aid, not a diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow submitted form values in logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML config file (default: sdp.toml in the working directory, if present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact path (overrides SDP_MODEL_PATH and the config file).
    #[arg(long = "model", value_name = "PATH", global = true)]
    pub model: Option<PathBuf>,

    /// Expected SHA-256 of the model artifact.
    #[arg(long = "model-sha256", value_name = "HEX", global = true)]
    pub model_sha256: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict one student's risk from form values.
    Predict(PredictArgs),

    /// Predict every row of a CSV file.
    Batch(BatchArgs),

    /// List allowed values for every form field.
    Options,

    /// Show the model's feature columns.
    Schema,
}

/// Form fields. Omitted fields take the form's initial values.
#[derive(Args)]
pub struct PredictArgs {
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Age in years (16-100).
    #[arg(long)]
    pub age: Option<Age>,

    /// Family history of mental illness (Yes/No).
    #[arg(long = "family-history", value_parser = |raw: &str| Field::FamilyHistory.parse::<YesNo>(raw))]
    pub family_history: Option<YesNo>,

    /// Academic pressure (1-5).
    #[arg(long = "academic-pressure", value_parser = |raw: &str| Field::AcademicPressure.parse::<Rating>(raw))]
    pub academic_pressure: Option<Rating>,

    /// CGPA (0.0-10.0, one decimal).
    #[arg(long)]
    pub cgpa: Option<Cgpa>,

    /// Daily study hours (0-12).
    #[arg(long = "study-hours")]
    pub study_hours: Option<StudyHours>,

    /// Study satisfaction (1-5).
    #[arg(long = "study-satisfaction", value_parser = |raw: &str| Field::StudySatisfaction.parse::<Rating>(raw))]
    pub study_satisfaction: Option<Rating>,

    /// e.g. "7-8 hours"; see `sdp options`.
    #[arg(long = "sleep-duration")]
    pub sleep_duration: Option<SleepDuration>,

    #[arg(long = "dietary-habits")]
    pub dietary_habits: Option<DietaryHabits>,

    /// Full degree name, e.g. "Bachelor of Technology".
    #[arg(long)]
    pub degree: Option<String>,

    /// Ever had suicidal thoughts (Yes/No).
    #[arg(long = "suicidal-thoughts", value_parser = |raw: &str| Field::SuicidalThoughts.parse::<YesNo>(raw))]
    pub suicidal_thoughts: Option<YesNo>,

    /// Financial stress (1-5).
    #[arg(long = "financial-stress", value_parser = |raw: &str| Field::FinancialStress.parse::<Rating>(raw))]
    pub financial_stress: Option<Rating>,

    /// List submitted values that have no model column.
    #[arg(long)]
    pub explain: bool,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

impl PredictArgs {
    pub fn to_form(&self) -> FormInput {
        let defaults = FormInput::default();
        FormInput {
            gender: self.gender.unwrap_or(defaults.gender),
            age: self.age.unwrap_or(defaults.age),
            family_history: self.family_history.unwrap_or(defaults.family_history),
            academic_pressure: self.academic_pressure.unwrap_or(defaults.academic_pressure),
            cgpa: self.cgpa.unwrap_or(defaults.cgpa),
            study_hours: self.study_hours.unwrap_or(defaults.study_hours),
            study_satisfaction: self
                .study_satisfaction
                .unwrap_or(defaults.study_satisfaction),
            sleep_duration: self.sleep_duration.unwrap_or(defaults.sleep_duration),
            dietary_habits: self.dietary_habits.unwrap_or(defaults.dietary_habits),
            degree: self.degree.clone().unwrap_or(defaults.degree),
            suicidal_thoughts: self.suicidal_thoughts.unwrap_or(defaults.suicidal_thoughts),
            financial_stress: self.financial_stress.unwrap_or(defaults.financial_stress),
        }
    }
}

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file with one submission per row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
