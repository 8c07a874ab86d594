//! End-to-end pipeline tests against a small in-memory ensemble.

use proptest::prelude::*;

use sdp_artifact::{
    ArtifactFile, GradientBoostedTrees, MODEL_FORMAT, MODEL_FORMAT_VERSION, Node, Tree,
};
use sdp_core::{PredictError, PredictionContext, predict};
use sdp_model::{
    Age, Cgpa, DietaryHabits, Field, FormInput, Gender, Rating, RiskLabel, SleepDuration,
    StudyHours, YesNo,
};
use sdp_normalization::{CategoryMapping, DEGREE_TABLE, degree_mapping};

fn feature_names() -> Vec<String> {
    let mut columns = vec!["gender_Female".to_string(), "gender_Male".to_string()];
    columns.extend((18..=30).map(|age| format!("age_{age}")));
    columns.extend(["cgpa_7.5".to_string(), "cgpa_8.0".to_string()]);
    columns.extend(
        ["B.Pharm", "B.Tech", "BSc", "PhD"]
            .iter()
            .map(|degree| format!("degree_{degree}")),
    );
    columns.extend([
        "suicidal_thoughts_No".to_string(),
        "suicidal_thoughts_Yes".to_string(),
    ]);
    columns.extend((1..=5).map(|rating| format!("financial_stress_{rating}")));
    columns
}

/// Elevated risk iff suicidal thoughts are reported, nudged down by B.Tech.
fn model() -> GradientBoostedTrees {
    let names = feature_names();
    let index = |name: &str| names.iter().position(|column| column == name).unwrap();
    let file = ArtifactFile {
        format: MODEL_FORMAT.to_string(),
        format_version: MODEL_FORMAT_VERSION,
        feature_names: names.clone(),
        classes: vec![0, 1],
        init_score: 0.0,
        learning_rate: 1.0,
        trees: vec![
            Tree {
                nodes: vec![
                    Node::Split {
                        feature: index("suicidal_thoughts_Yes"),
                        threshold: 0.5,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf { value: -1.5 },
                    Node::Leaf { value: 1.5 },
                ],
            },
            Tree {
                nodes: vec![
                    Node::Split {
                        feature: index("degree_B.Tech"),
                        threshold: 0.5,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf { value: 0.0 },
                    Node::Leaf { value: -0.5 },
                ],
            },
        ],
    };
    GradientBoostedTrees::from_file(file).unwrap()
}

fn scenario_form() -> FormInput {
    FormInput {
        gender: Gender::Male,
        age: Age::new(20).unwrap(),
        family_history: YesNo::No,
        academic_pressure: Rating::new(3).unwrap(),
        cgpa: Cgpa::new(7.5).unwrap(),
        study_hours: StudyHours::new(4).unwrap(),
        study_satisfaction: Rating::new(4).unwrap(),
        sleep_duration: SleepDuration::SevenToEightHours,
        dietary_habits: DietaryHabits::Healthy,
        degree: "Bachelor of Technology".to_string(),
        suicidal_thoughts: YesNo::No,
        financial_stress: Rating::new(2).unwrap(),
    }
}

fn degrees() -> CategoryMapping {
    degree_mapping().unwrap()
}

#[test]
fn technology_scenario_sets_only_btech() {
    let degrees = degrees();
    let model = model();
    let context = PredictionContext::new(&degrees, &model);

    let outcome = predict(&context, &scenario_form()).unwrap();
    assert_eq!(outcome.result.record.degree, "B.Tech");
    assert_eq!(outcome.result.label, RiskLabel::NoElevatedRisk);
    let degree_columns: Vec<&str> = outcome
        .active_columns
        .iter()
        .map(String::as_str)
        .filter(|column| column.starts_with("degree_"))
        .collect();
    assert_eq!(degree_columns, ["degree_B.Tech"]);
    // -1.5 + -0.5
    assert!((outcome.result.probability - 1.0 / (1.0 + 2f64.exp())).abs() < 1e-12);
}

#[test]
fn phd_goes_through_lookup() {
    let degrees = degrees();
    let model = model();
    let context = PredictionContext::new(&degrees, &model);

    let form = FormInput {
        degree: "PhD".to_string(),
        suicidal_thoughts: YesNo::Yes,
        ..scenario_form()
    };
    let outcome = predict(&context, &form).unwrap();
    assert_eq!(outcome.result.record.degree, "PhD");
    assert!(outcome.active_columns.contains(&"degree_PhD".to_string()));
    assert_eq!(outcome.result.label, RiskLabel::ElevatedRisk);
}

#[test]
fn unseen_age_is_dropped_not_rejected() {
    let degrees = degrees();
    let model = model();
    let context = PredictionContext::new(&degrees, &model);

    let form = FormInput {
        age: Age::new(99).unwrap(),
        ..scenario_form()
    };
    let outcome = predict(&context, &form).unwrap();
    assert!(outcome.has_dropped_columns());
    assert!(
        outcome
            .dropped
            .iter()
            .any(|column| column.field == Field::Age && column.column == "age_99")
    );
    assert!(
        !outcome
            .active_columns
            .iter()
            .any(|column| column.starts_with("age_"))
    );
}

#[test]
fn unknown_degree_fails_the_request() {
    let degrees = degrees();
    let model = model();
    let context = PredictionContext::new(&degrees, &model);

    let form = FormInput {
        degree: "Bachelor of Technolgy".to_string(),
        ..scenario_form()
    };
    match predict(&context, &form).unwrap_err() {
        PredictError::KeyLookup(err) => {
            assert_eq!(
                err.suggestions.first().map(String::as_str),
                Some("Bachelor of Technology")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn context_is_shared_across_threads() {
    let degrees = degrees();
    let model = model();
    let context = PredictionContext::new(&degrees, &model);
    let expected = predict(&context, &scenario_form()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| predict(&context, &scenario_form()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn outcome_serializes_label_as_class() {
    let degrees = degrees();
    let model = model();
    let context = PredictionContext::new(&degrees, &model);

    let outcome = predict(&context, &scenario_form()).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["result"]["label"], 0);
    assert_eq!(json["result"]["record"]["degree"], "B.Tech");
    assert_eq!(json["result"]["input"]["degree"], "Bachelor of Technology");
}

prop_compose! {
    fn arb_form()(
        gender in prop::sample::select(Gender::ALL.to_vec()),
        age in 16u8..=100,
        cgpa in 0u8..=100,
        hours in 0u8..=12,
        pressure in 1u8..=5,
        satisfaction in 1u8..=5,
        sleep in prop::sample::select(SleepDuration::ALL.to_vec()),
        diet in prop::sample::select(DietaryHabits::ALL.to_vec()),
        degree in prop::sample::select(DEGREE_TABLE.to_vec()),
        suicidal in any::<bool>(),
        family in any::<bool>(),
        stress in 1u8..=5,
    ) -> FormInput {
        let yes_no = |yes: bool| if yes { YesNo::Yes } else { YesNo::No };
        FormInput {
            gender,
            age: Age::new(age).unwrap(),
            family_history: yes_no(family),
            academic_pressure: Rating::new(pressure).unwrap(),
            cgpa: Cgpa::from_tenths(cgpa).unwrap(),
            study_hours: StudyHours::new(hours).unwrap(),
            study_satisfaction: Rating::new(satisfaction).unwrap(),
            sleep_duration: sleep,
            dietary_habits: diet,
            degree: degree.0.to_string(),
            suicidal_thoughts: yes_no(suicidal),
            financial_stress: Rating::new(stress).unwrap(),
        }
    }
}

proptest! {
    #[test]
    fn every_valid_form_predicts_deterministically(form in arb_form()) {
        let degrees = degrees();
        let model = model();
        let context = PredictionContext::new(&degrees, &model);

        let first = predict(&context, &form).unwrap();
        let second = predict(&context, &form).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!((0.0..=1.0).contains(&first.result.probability));

        let expected = if form.suicidal_thoughts.is_yes() {
            RiskLabel::ElevatedRisk
        } else {
            RiskLabel::NoElevatedRisk
        };
        prop_assert_eq!(first.result.label, expected);
    }
}
