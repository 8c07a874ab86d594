//! CSV batch prediction.
//!
//! Each row is an independent request run through the same pipeline. A row
//! that fails to parse or predict is recorded and the remaining rows still
//! run.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use sdp_core::{PredictionContext, PredictionOutcome, predict};
use sdp_model::FormInput;

/// Expected CSV header, in column order.
pub const BATCH_HEADERS: [&str; 12] = [
    "gender",
    "age",
    "family_history",
    "academic_pressure",
    "cgpa",
    "study_hours",
    "study_satisfaction",
    "sleep_duration",
    "dietary_habits",
    "degree",
    "suicidal_thoughts",
    "financial_stress",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    /// 1-based data row, header excluded.
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PredictionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub records: Vec<BatchRecord>,
}

impl BatchReport {
    pub fn failed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.error.is_some())
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

pub fn run_batch_file(context: &PredictionContext<'_>, path: &Path) -> Result<BatchReport> {
    let file =
        std::fs::File::open(path).with_context(|| format!("open batch file {}", path.display()))?;
    run_batch(context, file).with_context(|| format!("read batch file {}", path.display()))
}

/// Predict every row of a CSV document.
///
/// # Errors
///
/// Fails only when the header itself is unreadable or lacks a column. Row
/// problems are reported in the returned [`BatchReport`].
pub fn run_batch<R: io::Read>(context: &PredictionContext<'_>, reader: R) -> Result<BatchReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    check_headers(reader.headers().context("read CSV header")?)?;

    let span = info_span!("batch");
    let _guard = span.enter();
    let mut report = BatchReport::default();
    for (index, row) in reader.deserialize::<FormInput>().enumerate() {
        let row_number = index + 1;
        let result = row
            .map_err(|error| error.to_string())
            .and_then(|form| predict(context, &form).map_err(|error| error.to_string()));
        let record = match result {
            Ok(outcome) => BatchRecord {
                row: row_number,
                outcome: Some(outcome),
                error: None,
            },
            Err(error) => {
                warn!(row = row_number, "batch row failed");
                BatchRecord {
                    row: row_number,
                    outcome: None,
                    error: Some(error),
                }
            }
        };
        report.records.push(record);
    }
    info!(
        rows = report.records.len(),
        failed = report.failed_count(),
        "batch complete"
    );
    Ok(report)
}

fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = BATCH_HEADERS
        .iter()
        .copied()
        .filter(|expected| !headers.iter().any(|header| header == *expected))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("batch file is missing columns: {}", missing.join(", "))
    }
}
