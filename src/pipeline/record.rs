//! Input records for both prediction domains
//!
//! A record holds raw, already-validated user input. Range clamping happens
//! at the input surface (CLI flags / interactive prompts); the pipeline
//! assumes values are within their declared ranges and never re-validates.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Raw health metrics for a diabetes risk prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiabetesRecord {
    /// Number of pregnancies (0-20)
    pub pregnancies: u32,
    /// Plasma glucose concentration (0-200)
    pub glucose: u32,
    /// Diastolic blood pressure in mm Hg (0-150)
    pub blood_pressure: u32,
    /// Triceps skin fold thickness in mm (0-100)
    pub skin_thickness: u32,
    /// 2-hour serum insulin in mu U/ml (0-900)
    pub insulin: u32,
    /// Body mass index (0.0-70.0)
    pub bmi: f64,
    /// Diabetes pedigree function (0.0-3.0)
    pub diabetes_pedigree_function: f64,
    /// Age in years (10-120)
    pub age: u32,
}

/// Raw health metrics for a heart disease risk prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRecord {
    /// Age in years (20-120)
    pub age: u32,
    /// Resting blood pressure in mm Hg (80-200)
    pub resting_blood_pressure: u32,
    /// Serum cholesterol in mg/dL (100-600)
    pub cholesterol: u32,
    /// Maximum heart rate achieved (60-250)
    pub max_heart_rate: u32,
    /// ST depression induced by exercise relative to rest (0.0-6.0)
    pub oldpeak: f64,
    /// Number of major vessels colored by fluoroscopy (0-3)
    pub num_major_vessels: u32,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    pub resting_ecg: RestingEcg,
    pub st_slope: StSlope,
    pub thalassemia: Thalassemia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChestPainType {
    TypicalAngina,
    AtypicalAngina,
    NonAnginal,
    Asymptomatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RestingEcg {
    Normal,
    StTAbnormality,
    LeftVentricularHypertrophy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Thalassemia {
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        })
    }
}

impl fmt::Display for ChestPainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChestPainType::TypicalAngina => "typical angina",
            ChestPainType::AtypicalAngina => "atypical angina",
            ChestPainType::NonAnginal => "non-anginal",
            ChestPainType::Asymptomatic => "asymptomatic",
        })
    }
}

impl fmt::Display for RestingEcg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RestingEcg::Normal => "normal",
            RestingEcg::StTAbnormality => "ST-T abnormality",
            RestingEcg::LeftVentricularHypertrophy => "left ventricular hypertrophy",
        })
    }
}

impl fmt::Display for StSlope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StSlope::Upsloping => "upsloping",
            StSlope::Flat => "flat",
            StSlope::Downsloping => "downsloping",
        })
    }
}

impl fmt::Display for Thalassemia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Thalassemia::Normal => "normal",
            Thalassemia::FixedDefect => "fixed defect",
            Thalassemia::ReversibleDefect => "reversible defect",
        })
    }
}
