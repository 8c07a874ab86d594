//! Tests for reading and verifying model artifacts from disk.

use std::fs;
use std::path::Path;

use sdp_artifact::{ArtifactError, Classifier, ModelArtifact, sha256_hex};
use sdp_model::{Field, RiskLabel};
use sdp_transform::{OneHotColumn, reconcile};

const STUMP: &str = r#"{
  "format": "sdp.gbt-classifier",
  "format_version": 1,
  "feature_names": ["suicidal_thoughts_No", "suicidal_thoughts_Yes"],
  "classes": [0, 1],
  "init_score": -0.25,
  "learning_rate": 0.5,
  "trees": [
    {
      "nodes": [
        {"split": {"feature": 1, "threshold": 0.5, "left": 1, "right": 2}},
        {"leaf": {"value": -1.0}},
        {"leaf": {"value": 2.0}}
      ]
    }
  ]
}"#;

fn write_model(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("model.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_reports_expected_path() {
    let err = ModelArtifact::load(Path::new("no_such_model.json"), None).unwrap_err();
    assert!(matches!(err, ArtifactError::NotFound { .. }));
    insta::assert_snapshot!(
        err.to_string(),
        @"Model file not found. Please ensure 'no_such_model.json' is in the directory."
    );
}

#[test]
fn loads_valid_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(dir.path(), STUMP);

    let artifact = ModelArtifact::load(&path, None).unwrap();
    assert_eq!(artifact.sha256(), sha256_hex(STUMP.as_bytes()));
    assert_eq!(artifact.model().tree_count(), 1);
    assert_eq!(
        artifact.feature_schema().columns(),
        ["suicidal_thoughts_No", "suicidal_thoughts_Yes"]
    );

    let summary = artifact.summary();
    assert_eq!(summary.feature_count, 2);
    assert_eq!(summary.schema_fingerprint.len(), 64);
}

#[test]
fn loaded_artifact_predicts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(dir.path(), STUMP);
    let artifact = ModelArtifact::load(&path, None).unwrap();

    let yes = [OneHotColumn::new(Field::SuicidalThoughts, "Yes")];
    let reconciled = reconcile(&yes, artifact.feature_schema());
    let inference = artifact.predict(&reconciled.vector).unwrap();
    // -0.25 + 0.5 * 2.0
    assert_eq!(inference.label, RiskLabel::ElevatedRisk);
    assert!(inference.probability > 0.5);

    let no = [OneHotColumn::new(Field::SuicidalThoughts, "No")];
    let reconciled = reconcile(&no, artifact.feature_schema());
    let inference = artifact.predict(&reconciled.vector).unwrap();
    assert_eq!(inference.label, RiskLabel::NoElevatedRisk);
}

#[test]
fn pinned_sha256_must_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(dir.path(), STUMP);

    let good = sha256_hex(STUMP.as_bytes()).to_ascii_uppercase();
    assert!(ModelArtifact::load(&path, Some(&good)).is_ok());

    let bad = "0".repeat(64);
    let err = ModelArtifact::load(&path, Some(&bad)).unwrap_err();
    match err {
        ArtifactError::Sha256Mismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, bad);
            assert_eq!(actual, sha256_hex(STUMP.as_bytes()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_pin_is_rejected_before_reading() {
    let err = ModelArtifact::load(Path::new("no_such_model.json"), Some("abc")).unwrap_err();
    assert!(matches!(err, ArtifactError::InvalidSha256 { .. }));
}

#[test]
fn invalid_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(dir.path(), "{ not json");
    let err = ModelArtifact::load(&path, None).unwrap_err();
    assert!(matches!(err, ArtifactError::Json { .. }));
}

#[test]
fn duplicate_feature_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let contents = STUMP.replace("suicidal_thoughts_No", "suicidal_thoughts_Yes");
    let path = write_model(dir.path(), &contents);
    let err = ModelArtifact::load(&path, None).unwrap_err();
    assert!(matches!(err, ArtifactError::Schema(_)));
}
