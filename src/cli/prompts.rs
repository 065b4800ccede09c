//! Interactive health metric forms using dialoguer
//!
//! Defaults match the original intake form. A value already supplied as a
//! CLI flag is taken as-is and its prompt is skipped.

use anyhow::Result;
use dialoguer::{Input, Select};

use crate::cli::args::{DiabetesArgs, HeartArgs};
use crate::pipeline::interpret::Domain;
use crate::pipeline::record::{
    ChestPainType, DiabetesRecord, HeartRecord, RestingEcg, Sex, StSlope, Thalassemia,
};

/// Ask which prediction pipeline to run
pub fn select_domain() -> Result<Domain> {
    let choice = Select::new()
        .with_prompt("Choose prediction type")
        .items(&["Diabetes", "Heart Disease"])
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => Domain::Diabetes,
        _ => Domain::HeartDisease,
    })
}

/// Collect a complete diabetes record, prompting for fields not given as flags
pub fn diabetes_form(args: &DiabetesArgs) -> Result<DiabetesRecord> {
    Ok(DiabetesRecord {
        pregnancies: prompt_u32("Pregnancies", 0, 20, 1, args.pregnancies)?,
        glucose: prompt_u32("Glucose", 0, 200, 100, args.glucose)?,
        blood_pressure: prompt_u32("Blood Pressure", 0, 150, 70, args.blood_pressure)?,
        skin_thickness: prompt_u32("Skin Thickness", 0, 100, 20, args.skin_thickness)?,
        insulin: prompt_u32("Insulin", 0, 900, 80, args.insulin)?,
        bmi: prompt_f64("BMI", 0.0, 70.0, 25.0, args.bmi)?,
        diabetes_pedigree_function: prompt_f64(
            "Diabetes Pedigree Function",
            0.0,
            3.0,
            0.5,
            args.diabetes_pedigree_function,
        )?,
        age: prompt_u32("Age", 10, 120, 30, args.age)?,
    })
}

/// Collect a complete heart disease record, prompting for fields not given as
/// flags
pub fn heart_form(args: &HeartArgs) -> Result<HeartRecord> {
    Ok(HeartRecord {
        age: prompt_u32("Age", 20, 120, 50, args.age)?,
        resting_blood_pressure: prompt_u32(
            "Resting Blood Pressure",
            80,
            200,
            120,
            args.resting_blood_pressure,
        )?,
        cholesterol: prompt_u32("Cholesterol (mg/dL)", 100, 600, 200, args.cholesterol)?,
        max_heart_rate: prompt_u32("Max Heart Rate Achieved", 60, 250, 150, args.max_heart_rate)?,
        oldpeak: prompt_f64("Oldpeak (ST depression)", 0.0, 6.0, 1.0, args.oldpeak)?,
        num_major_vessels: prompt_u32(
            "Number of Major Vessels (0-3)",
            0,
            3,
            0,
            args.num_major_vessels,
        )?,
        sex: prompt_select("Sex", &[Sex::Male, Sex::Female], args.sex)?,
        chest_pain_type: prompt_select(
            "Chest Pain Type",
            &[
                ChestPainType::TypicalAngina,
                ChestPainType::AtypicalAngina,
                ChestPainType::NonAnginal,
                ChestPainType::Asymptomatic,
            ],
            args.chest_pain_type,
        )?,
        resting_ecg: prompt_select(
            "Resting ECG",
            &[
                RestingEcg::Normal,
                RestingEcg::StTAbnormality,
                RestingEcg::LeftVentricularHypertrophy,
            ],
            args.resting_ecg,
        )?,
        st_slope: prompt_select(
            "ST Slope",
            &[StSlope::Upsloping, StSlope::Flat, StSlope::Downsloping],
            args.st_slope,
        )?,
        thalassemia: prompt_select(
            "Thalassemia",
            &[
                Thalassemia::Normal,
                Thalassemia::FixedDefect,
                Thalassemia::ReversibleDefect,
            ],
            args.thalassemia,
        )?,
    })
}

fn prompt_u32(label: &str, min: u32, max: u32, default: u32, preset: Option<u32>) -> Result<u32> {
    if let Some(value) = preset {
        return Ok(value);
    }

    let value = Input::<u32>::new()
        .with_prompt(format!("{} [{}-{}]", label, min, max))
        .default(default)
        .validate_with(move |input: &u32| -> Result<(), String> {
            if (min..=max).contains(input) {
                Ok(())
            } else {
                Err(format!("enter a value between {} and {}", min, max))
            }
        })
        .interact_text()?;

    Ok(value)
}

fn prompt_f64(label: &str, min: f64, max: f64, default: f64, preset: Option<f64>) -> Result<f64> {
    if let Some(value) = preset {
        return Ok(value);
    }

    let value = Input::<f64>::new()
        .with_prompt(format!("{} [{}-{}]", label, min, max))
        .default(default)
        .validate_with(move |input: &f64| -> Result<(), String> {
            if (min..=max).contains(input) {
                Ok(())
            } else {
                Err(format!("enter a value between {} and {}", min, max))
            }
        })
        .interact_text()?;

    Ok(value)
}

fn prompt_select<T: Copy + ToString>(label: &str, options: &[T], preset: Option<T>) -> Result<T> {
    if let Some(value) = preset {
        return Ok(value);
    }

    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let choice = Select::new()
        .with_prompt(label)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[choice])
}
