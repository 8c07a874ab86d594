//! Tests for sdp-model types.

use sdp_model::{
    Age, Cgpa, DietaryHabits, Field, FormInput, Gender, PredictionResult, Rating,
    RawInputRecord, RiskLabel, SleepDuration, StudyHours, YesNo,
};

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

#[test]
fn field_values_render_literal_tokens() {
    let record = RawInputRecord::from_form(&scenario_form(), "B.Tech");
    let values = record.field_values();

    let fields: Vec<Field> = values.iter().map(|(field, _)| *field).collect();
    assert_eq!(fields, Field::ALL.to_vec());

    let rendered: Vec<&str> = values.iter().map(|(_, value)| value.as_str()).collect();
    assert_eq!(
        rendered,
        vec![
            "Male", "20", "No", "3", "7.5", "4", "4", "7-8 hours", "Healthy", "B.Tech", "No",
            "2",
        ]
    );
}

#[test]
fn record_keeps_form_values_and_swaps_degree() {
    let form = scenario_form();
    let record = RawInputRecord::from_form(&form, "B.Tech");
    assert_eq!(record.degree, "B.Tech");
    assert_eq!(record.age, form.age);
    assert_eq!(record.cgpa, form.cgpa);
    assert_eq!(record.sleep_duration, form.sleep_duration);
}

#[test]
fn risk_label_classes() {
    assert_eq!(RiskLabel::from_class(0).unwrap(), RiskLabel::NoElevatedRisk);
    assert_eq!(RiskLabel::from_class(1).unwrap(), RiskLabel::ElevatedRisk);
    assert!(RiskLabel::from_class(2).is_err());
    assert_eq!(RiskLabel::ElevatedRisk.headline(), "You likely have Depression");
}

#[test]
fn prediction_result_serializes() {
    let form = scenario_form();
    let result = PredictionResult {
        label: RiskLabel::ElevatedRisk,
        probability: 0.8,
        record: RawInputRecord::from_form(&form, "B.Tech"),
        input: form,
    };
    let json = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(json["label"], 1);
    assert_eq!(json["input"]["sleep_duration"], "7-8 hours");
    assert_eq!(json["input"]["academic_pressure"], "3");
    assert_eq!(json["record"]["degree"], "B.Tech");
    assert_eq!(json["record"]["cgpa"], 7.5);

    let round: PredictionResult = serde_json::from_value(json).expect("deserialize result");
    assert_eq!(round, result);
}

#[test]
fn form_input_rejects_out_of_range_json() {
    let mut json = serde_json::to_value(FormInput::default()).unwrap();
    json["age"] = serde_json::json!(12);
    let err = serde_json::from_value::<FormInput>(json).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
