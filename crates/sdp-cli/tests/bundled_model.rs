//! The sample artifact and CSV shipped with the repository.

use std::path::PathBuf;

use sdp_artifact::{Classifier, ModelArtifact};
use sdp_cli::batch::run_batch_file;
use sdp_core::PredictionContext;
use sdp_model::Field;
use sdp_normalization::{DEGREE_TABLE, degree_mapping};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn load() -> ModelArtifact {
    ModelArtifact::load(
        &repo_root().join("models/depression_best_rs_gbt_model.json"),
        None,
    )
    .unwrap()
}

#[test]
fn sample_model_knows_every_degree_token() {
    let model = load();
    let schema = model.feature_schema();
    for (display, token) in DEGREE_TABLE {
        assert!(
            schema.contains(&format!("degree_{token}")),
            "{display} -> {token}"
        );
    }
    assert_eq!(schema.unattributed_columns().count(), 0);
}

#[test]
fn sample_csv_runs_cleanly() {
    let model = load();
    let degrees = degree_mapping().unwrap();
    let context = PredictionContext::new(&degrees, &model);

    let report = run_batch_file(&context, &repo_root().join("demos/students.csv")).unwrap();
    assert_eq!(report.records.len(), 4);
    assert!(!report.has_failures());

    let unseen_age = report.records[3].outcome.as_ref().unwrap();
    assert!(
        unseen_age
            .dropped
            .iter()
            .any(|column| column.field == Field::Age)
    );
}
