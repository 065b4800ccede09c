//! Unit tests for feature encoding

use cardiabetics::pipeline::{
    encode_diabetes, encode_heart, ChestPainType, RestingEcg, StSlope, Thalassemia,
    DIABETES_FEATURES, HEART_FEATURES,
};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_diabetes_encoding_order() {
    let record = common::sample_diabetes_record();
    let features = encode_diabetes(&record);

    assert_eq!(features.len(), 8, "Diabetes vector must have 8 features");
    assert_eq!(
        features,
        vec![1.0, 100.0, 70.0, 20.0, 80.0, 25.0, 0.5, 30.0],
        "Field order must be [pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi, dpf, age]"
    );
}

#[test]
fn test_heart_encoding_order() {
    let record = common::sample_heart_record();
    let features = encode_heart(&record);

    assert_eq!(features.len(), 16, "Heart vector must have 16 features");
    assert_eq!(
        features,
        vec![
            50.0, 120.0, 200.0, 150.0, 1.0, 0.0, // numeric block
            1.0, // sex_male
            0.0, 0.0, 1.0, // cp: atypical, non-anginal, typical
            1.0, 0.0, // ecg: normal, ST-T abnormality
            0.0, 1.0, // slope: flat, upsloping
            1.0, 0.0, // thal: normal, reversible
        ]
    );
}

#[test]
fn test_heart_indicators_are_binary() {
    let mut record = common::sample_heart_record();
    record.chest_pain_type = ChestPainType::NonAnginal;
    record.resting_ecg = RestingEcg::StTAbnormality;
    record.st_slope = StSlope::Flat;
    record.thalassemia = Thalassemia::ReversibleDefect;

    let features = encode_heart(&record);
    for &value in &features[6..] {
        assert!(
            value == 0.0 || value == 1.0,
            "Indicator columns must be exactly 0 or 1, got {}",
            value
        );
    }
}

#[test]
fn test_chest_pain_indicator_exclusivity() {
    // Columns 7..10 are cp_atypical, cp_non_anginal, cp_typical
    let named = [
        ChestPainType::AtypicalAngina,
        ChestPainType::NonAnginal,
        ChestPainType::TypicalAngina,
    ];

    for cp in named {
        let mut record = common::sample_heart_record();
        record.chest_pain_type = cp;
        let features = encode_heart(&record);
        let set: f64 = features[7..10].iter().sum();
        assert_eq!(set, 1.0, "Exactly one chest pain indicator must be set for {:?}", cp);
    }

    // The reference category has no column: all three indicators stay zero
    let mut record = common::sample_heart_record();
    record.chest_pain_type = ChestPainType::Asymptomatic;
    let features = encode_heart(&record);
    assert_eq!(
        &features[7..10],
        &[0.0, 0.0, 0.0],
        "Asymptomatic chest pain must encode as all-zero indicators"
    );
}

#[test]
fn test_declared_feature_names_match_vector_lengths() {
    assert_eq!(DIABETES_FEATURES.len(), 8);
    assert_eq!(HEART_FEATURES.len(), 16);
    assert_eq!(HEART_FEATURES[6], "sex_male");
    assert_eq!(HEART_FEATURES[9], "cp_typical");
}
