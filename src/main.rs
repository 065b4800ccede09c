//! Cardiabetics: Disease Risk Score Calculator
//!
//! A command-line tool for predicting diabetes and heart disease risk from
//! simple health metrics using pre-fit scaler and classifier artifacts.

mod cli;
mod pipeline;
mod report;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{diabetes_form, heart_form, select_domain, Cli, Commands, DiabetesArgs, HeartArgs};
use pipeline::{Domain, ModelContext};
use report::display_assessment;
use utils::{create_spinner, finish_with_success, print_artifact_source, print_banner};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let decorate = !cli.plain && !cli.json;

    if decorate {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_artifact_source(&cli.artifacts);
    }

    // Load all artifacts up front - if any is missing or corrupt, fail fast
    // before collecting input.
    let spinner = decorate.then(|| create_spinner("Loading model artifacts..."));
    let context = ModelContext::load(&cli.artifacts).with_context(|| {
        format!(
            "failed to load model artifacts from '{}'",
            cli.artifacts.display()
        )
    })?;
    if let Some(pb) = &spinner {
        finish_with_success(pb, "Model artifacts loaded");
    }

    let assessment = match &cli.command {
        Some(Commands::Diabetes(args)) => {
            let record = diabetes_form(args)?;
            context.predict_diabetes(&record)?
        }
        Some(Commands::Heart(args)) => {
            let record = heart_form(args)?;
            context.predict_heart(&record)?
        }
        None => match select_domain()? {
            Domain::Diabetes => {
                let record = diabetes_form(&DiabetesArgs::default())?;
                context.predict_diabetes(&record)?
            }
            Domain::HeartDisease => {
                let record = heart_form(&HeartArgs::default())?;
                context.predict_heart(&record)?
            }
        },
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        display_assessment(&assessment);
    }

    Ok(())
}
