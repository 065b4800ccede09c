//! Shared test utilities and artifact fixture generators

use std::fs;
use std::path::Path;

use serde_json::json;

use cardiabetics::pipeline::{
    ChestPainType, DiabetesRecord, HeartRecord, RestingEcg, Sex, StSlope, Thalassemia,
    DIABETES_FEATURES, HEART_FEATURES,
};

/// Write a scaler artifact with the given parameters
pub fn write_scaler(path: &Path, feature_names: &[&str], mean: &[f64], scale: &[f64]) {
    let artifact = json!({
        "feature_names": feature_names,
        "mean": mean,
        "scale": scale,
    });
    fs::write(path, serde_json::to_string_pretty(&artifact).unwrap()).unwrap();
}

/// Write a classifier artifact with the given parameters
pub fn write_classifier(path: &Path, feature_names: &[&str], coefficients: &[f64], intercept: f64) {
    let artifact = json!({
        "feature_names": feature_names,
        "coefficients": coefficients,
        "intercept": intercept,
    });
    fs::write(path, serde_json::to_string_pretty(&artifact).unwrap()).unwrap();
}

/// Write all four artifacts with identity scalers (mean 0, scale 1) and
/// zero-coefficient classifiers, so every prediction scores exactly 0.5.
pub fn write_identity_artifacts(dir: &Path) {
    write_scaler(
        &dir.join("diabetes_scaler.json"),
        &DIABETES_FEATURES,
        &[0.0; 8],
        &[1.0; 8],
    );
    write_classifier(
        &dir.join("diabetes_model.json"),
        &DIABETES_FEATURES,
        &[0.0; 8],
        0.0,
    );
    write_scaler(
        &dir.join("heart_scaler.json"),
        &HEART_FEATURES,
        &[0.0; 16],
        &[1.0; 16],
    );
    write_classifier(
        &dir.join("heart_model.json"),
        &HEART_FEATURES,
        &[0.0; 16],
        0.0,
    );
}

/// The diabetes record used as the worked end-to-end example
pub fn sample_diabetes_record() -> DiabetesRecord {
    DiabetesRecord {
        pregnancies: 1,
        glucose: 100,
        blood_pressure: 70,
        skin_thickness: 20,
        insulin: 80,
        bmi: 25.0,
        diabetes_pedigree_function: 0.5,
        age: 30,
    }
}

/// The heart disease record used as the worked end-to-end example
pub fn sample_heart_record() -> HeartRecord {
    HeartRecord {
        age: 50,
        resting_blood_pressure: 120,
        cholesterol: 200,
        max_heart_rate: 150,
        oldpeak: 1.0,
        num_major_vessels: 0,
        sex: Sex::Male,
        chest_pain_type: ChestPainType::TypicalAngina,
        resting_ecg: RestingEcg::Normal,
        st_slope: StSlope::Upsloping,
        thalassemia: Thalassemia::Normal,
    }
}
