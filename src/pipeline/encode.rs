//! Feature encoding - maps input records to fixed-order feature vectors
//!
//! Column order is an external contract with the fitted scaler/model
//! artifacts. The name lists below are checked against artifact metadata at
//! load time; permuting them here without refitting the models would corrupt
//! every prediction.

use crate::pipeline::record::{
    ChestPainType, DiabetesRecord, HeartRecord, RestingEcg, Sex, StSlope, Thalassemia,
};

/// Column order the diabetes scaler and model were fit on
pub const DIABETES_FEATURES: [&str; 8] = [
    "pregnancies",
    "glucose",
    "blood_pressure",
    "skin_thickness",
    "insulin",
    "bmi",
    "diabetes_pedigree_function",
    "age",
];

/// Column order the heart disease scaler and model were fit on.
///
/// Categorical fields use a drop-one indicator scheme: the reference
/// categories (asymptomatic chest pain, left ventricular hypertrophy ECG,
/// downsloping slope, fixed-defect thalassemia) have no column and are
/// represented by all-zero indicators within their group.
pub const HEART_FEATURES: [&str; 16] = [
    "age",
    "resting_blood_pressure",
    "cholesterol",
    "max_heart_rate",
    "oldpeak",
    "num_major_vessels",
    "sex_male",
    "cp_atypical",
    "cp_non_anginal",
    "cp_typical",
    "ecg_normal",
    "ecg_st_t_abnormality",
    "slope_flat",
    "slope_upsloping",
    "thal_normal",
    "thal_reversible",
];

/// Encode a diabetes record into its 8-element feature vector
pub fn encode_diabetes(record: &DiabetesRecord) -> Vec<f64> {
    vec![
        record.pregnancies as f64,
        record.glucose as f64,
        record.blood_pressure as f64,
        record.skin_thickness as f64,
        record.insulin as f64,
        record.bmi,
        record.diabetes_pedigree_function,
        record.age as f64,
    ]
}

/// Encode a heart disease record into its 16-element feature vector
pub fn encode_heart(record: &HeartRecord) -> Vec<f64> {
    vec![
        record.age as f64,
        record.resting_blood_pressure as f64,
        record.cholesterol as f64,
        record.max_heart_rate as f64,
        record.oldpeak,
        record.num_major_vessels as f64,
        indicator(record.sex == Sex::Male),
        indicator(record.chest_pain_type == ChestPainType::AtypicalAngina),
        indicator(record.chest_pain_type == ChestPainType::NonAnginal),
        indicator(record.chest_pain_type == ChestPainType::TypicalAngina),
        indicator(record.resting_ecg == RestingEcg::Normal),
        indicator(record.resting_ecg == RestingEcg::StTAbnormality),
        indicator(record.st_slope == StSlope::Flat),
        indicator(record.st_slope == StSlope::Upsloping),
        indicator(record.thalassemia == Thalassemia::Normal),
        indicator(record.thalassemia == Thalassemia::ReversibleDefect),
    ]
}

fn indicator(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}
