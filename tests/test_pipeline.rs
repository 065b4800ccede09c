//! End-to-end tests for the full prediction pipeline

use cardiabetics::pipeline::{ModelContext, Verdict, DIABETES_FEATURES, HEART_FEATURES};
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_identity_artifacts_score_exactly_half() {
    let dir = TempDir::new().unwrap();
    common::write_identity_artifacts(dir.path());

    let context = ModelContext::load(dir.path()).unwrap();
    let assessment = context
        .predict_diabetes(&common::sample_diabetes_record())
        .unwrap();

    // Zero coefficients and zero intercept: sigmoid(0) = 0.5, which sits on
    // the inclusive low-risk boundary.
    assert_eq!(assessment.probability, 0.5);
    assert_eq!(assessment.verdict, Verdict::LowRisk);
}

#[test]
fn test_diabetes_end_to_end_with_known_coefficients() {
    let dir = TempDir::new().unwrap();
    common::write_identity_artifacts(dir.path());
    // Overwrite the model with a constant high-risk logit of 2.0
    common::write_classifier(
        &dir.path().join("diabetes_model.json"),
        &DIABETES_FEATURES,
        &[0.0; 8],
        2.0,
    );

    let context = ModelContext::load(dir.path()).unwrap();
    let assessment = context
        .predict_diabetes(&common::sample_diabetes_record())
        .unwrap();

    let expected = 1.0 / (1.0 + (-2.0f64).exp());
    assert!((assessment.probability - expected).abs() < 1e-12);
    assert!((0.0..=1.0).contains(&assessment.probability));
    assert_eq!(assessment.verdict, Verdict::HighRisk);
    assert!((assessment.score() - 0.88).abs() < 1e-12);
}

#[test]
fn test_heart_end_to_end_reads_encoded_vector() {
    let dir = TempDir::new().unwrap();
    common::write_identity_artifacts(dir.path());
    // Weight only the sex_male indicator (column 6): the sample record is
    // male, so the logit is exactly 3.0.
    let mut coefficients = [0.0; 16];
    coefficients[6] = 3.0;
    common::write_classifier(
        &dir.path().join("heart_model.json"),
        &HEART_FEATURES,
        &coefficients,
        0.0,
    );

    let context = ModelContext::load(dir.path()).unwrap();
    let assessment = context.predict_heart(&common::sample_heart_record()).unwrap();

    let expected = 1.0 / (1.0 + (-3.0f64).exp());
    assert!((assessment.probability - expected).abs() < 1e-12);
    assert_eq!(assessment.verdict, Verdict::HighRisk);
}

#[test]
fn test_scaler_is_applied_before_classification() {
    let dir = TempDir::new().unwrap();
    common::write_identity_artifacts(dir.path());
    // Scale glucose (column 1) as (x - 100) / 10, then weight it with 1.0.
    // The sample record's glucose of 100 scales to 0, giving a logit of 0.
    let mut mean = [0.0; 8];
    let mut scale = [1.0; 8];
    mean[1] = 100.0;
    scale[1] = 10.0;
    common::write_scaler(
        &dir.path().join("diabetes_scaler.json"),
        &DIABETES_FEATURES,
        &mean,
        &scale,
    );
    let mut coefficients = [0.0; 8];
    coefficients[1] = 1.0;
    common::write_classifier(
        &dir.path().join("diabetes_model.json"),
        &DIABETES_FEATURES,
        &coefficients,
        0.0,
    );

    let context = ModelContext::load(dir.path()).unwrap();

    let record = common::sample_diabetes_record();
    let at_mean = context.predict_diabetes(&record).unwrap();
    assert_eq!(at_mean.probability, 0.5);

    let mut elevated = record;
    elevated.glucose = 180; // scales to 8.0, logit 8.0
    let high = context.predict_diabetes(&elevated).unwrap();
    let expected = 1.0 / (1.0 + (-8.0f64).exp());
    assert!((high.probability - expected).abs() < 1e-12);
    assert_eq!(high.verdict, Verdict::HighRisk);
}

#[test]
fn test_prediction_is_deterministic() {
    let dir = TempDir::new().unwrap();
    common::write_identity_artifacts(dir.path());
    common::write_classifier(
        &dir.path().join("heart_model.json"),
        &HEART_FEATURES,
        &[0.1; 16],
        -0.5,
    );

    let context = ModelContext::load(dir.path()).unwrap();
    let record = common::sample_heart_record();

    let first = context.predict_heart(&record).unwrap();
    let second = context.predict_heart(&record).unwrap();

    assert_eq!(
        first.probability, second.probability,
        "Identical input must yield an identical probability"
    );
    assert_eq!(first.verdict, second.verdict);
}

#[test]
fn test_context_load_fails_when_any_artifact_is_missing() {
    let dir = TempDir::new().unwrap();
    common::write_identity_artifacts(dir.path());
    std::fs::remove_file(dir.path().join("heart_model.json")).unwrap();

    assert!(
        ModelContext::load(dir.path()).is_err(),
        "A missing artifact must make the whole context fail to load"
    );
}
