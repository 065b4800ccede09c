//! Command-line argument definitions using clap
//!
//! Every health metric can be supplied as a flag for non-interactive use;
//! anything left unset is collected through the interactive form. Range
//! clamping lives here and in the prompts - the pipeline itself never
//! re-validates ranges.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::pipeline::record::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};

/// Cardiabetics - predict diabetes and heart disease risk from health metrics
#[derive(Parser, Debug)]
#[command(name = "cardiabetics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory containing the fitted model and scaler artifacts
    #[arg(long, global = true, default_value = "models")]
    pub artifacts: PathBuf,

    /// Emit the assessment as JSON instead of a styled result card
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress the banner and decorative output
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict diabetes risk
    Diabetes(DiabetesArgs),
    /// Predict heart disease risk
    Heart(HeartArgs),
}

/// Diabetes health metrics. Unset fields are prompted for interactively.
#[derive(Args, Debug, Default)]
pub struct DiabetesArgs {
    /// Number of pregnancies
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=20))]
    pub pregnancies: Option<u32>,

    /// Plasma glucose concentration
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=200))]
    pub glucose: Option<u32>,

    /// Diastolic blood pressure (mm Hg)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=150))]
    pub blood_pressure: Option<u32>,

    /// Triceps skin fold thickness (mm)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub skin_thickness: Option<u32>,

    /// 2-hour serum insulin (mu U/ml)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=900))]
    pub insulin: Option<u32>,

    /// Body mass index
    #[arg(long, value_parser = parse_bmi)]
    pub bmi: Option<f64>,

    /// Diabetes pedigree function
    #[arg(long, value_parser = parse_pedigree)]
    pub diabetes_pedigree_function: Option<f64>,

    /// Age in years
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=120))]
    pub age: Option<u32>,
}

/// Heart disease health metrics. Unset fields are prompted for interactively.
#[derive(Args, Debug, Default)]
pub struct HeartArgs {
    /// Age in years
    #[arg(long, value_parser = clap::value_parser!(u32).range(20..=120))]
    pub age: Option<u32>,

    /// Resting blood pressure (mm Hg)
    #[arg(long, value_parser = clap::value_parser!(u32).range(80..=200))]
    pub resting_blood_pressure: Option<u32>,

    /// Serum cholesterol (mg/dL)
    #[arg(long, value_parser = clap::value_parser!(u32).range(100..=600))]
    pub cholesterol: Option<u32>,

    /// Maximum heart rate achieved
    #[arg(long, value_parser = clap::value_parser!(u32).range(60..=250))]
    pub max_heart_rate: Option<u32>,

    /// ST depression induced by exercise relative to rest
    #[arg(long, value_parser = parse_oldpeak)]
    pub oldpeak: Option<f64>,

    /// Number of major vessels colored by fluoroscopy
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=3))]
    pub num_major_vessels: Option<u32>,

    #[arg(long, value_enum)]
    pub sex: Option<Sex>,

    #[arg(long, value_enum)]
    pub chest_pain_type: Option<ChestPainType>,

    #[arg(long, value_enum)]
    pub resting_ecg: Option<RestingEcg>,

    #[arg(long, value_enum)]
    pub st_slope: Option<StSlope>,

    #[arg(long, value_enum)]
    pub thalassemia: Option<Thalassemia>,
}

fn parse_ranged_f64(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not in {}..={}", value, min, max))
    }
}

fn parse_bmi(s: &str) -> Result<f64, String> {
    parse_ranged_f64(s, 0.0, 70.0)
}

fn parse_pedigree(s: &str) -> Result<f64, String> {
    parse_ranged_f64(s, 0.0, 3.0)
}

fn parse_oldpeak(s: &str) -> Result<f64, String> {
    parse_ranged_f64(s, 0.0, 6.0)
}
