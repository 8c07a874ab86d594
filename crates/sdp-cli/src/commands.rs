use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use sdp_artifact::{Classifier, ModelArtifact};
use sdp_cli::batch::{BatchReport, run_batch_file};
use sdp_cli::config::{ModelSettings, load_config, model_path_from_env, resolve_model_settings};
use sdp_cli::logging::redact_value;
use sdp_cli::summary::{degree_table, options_table, print_batch, print_prediction, print_schema};
use sdp_core::{PredictionContext, predict};
use sdp_normalization::{CategoryMapping, degree_mapping};

use crate::cli::{BatchArgs, Cli, OutputFormatArg, PredictArgs};

/// The two read-only handles every request runs against.
pub struct Handles {
    pub degrees: CategoryMapping,
    pub model: ModelArtifact,
}

impl Handles {
    pub fn context(&self) -> PredictionContext<'_> {
        PredictionContext::new(&self.degrees, &self.model)
    }
}

pub fn model_settings(cli: &Cli) -> Result<ModelSettings> {
    let file = load_config(cli.config.as_deref())?;
    Ok(resolve_model_settings(
        cli.model.as_deref(),
        cli.model_sha256.as_deref(),
        model_path_from_env(),
        &file,
    ))
}

/// Build the degree table and load the model. Any failure here halts the
/// process before input is accepted.
pub fn load_handles(settings: &ModelSettings) -> Result<Handles> {
    let span = info_span!("startup", model = %settings.path.display());
    let _guard = span.enter();
    let degrees = degree_mapping().context("build degree table")?;
    let model = ModelArtifact::load(&settings.path, settings.sha256.as_deref())?;
    info!(degrees = degrees.len(), "ready");
    Ok(Handles { degrees, model })
}

pub fn run_predict(handles: &Handles, args: &PredictArgs) -> Result<()> {
    let form = args.to_form();
    trace!(
        degree = redact_value(&form.degree),
        age = redact_value(&form.age.to_string()),
        "submitted form"
    );
    let outcome = predict(&handles.context(), &form)?;
    debug!(
        label = redact_value(&outcome.result.label.to_string()),
        dropped = outcome.dropped.len(),
        "prediction"
    );
    match args.format {
        OutputFormatArg::Table => print_prediction(&outcome, args.explain),
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}

/// Returns the report so the caller can pick the exit code.
pub fn run_batch(handles: &Handles, args: &BatchArgs) -> Result<BatchReport> {
    let report = run_batch_file(&handles.context(), &args.input)?;
    match args.format {
        OutputFormatArg::Table => print_batch(&report),
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(report)
}

/// Needs no model.
pub fn run_options() -> Result<()> {
    let degrees = degree_mapping().context("build degree table")?;
    println!("{}", options_table());
    println!();
    println!("{}", degree_table(&degrees));
    Ok(())
}

pub fn run_schema(settings: &ModelSettings) -> Result<()> {
    let model = ModelArtifact::load(&settings.path, settings.sha256.as_deref())?;
    print_schema(&model.summary(), model.feature_schema());
    Ok(())
}
