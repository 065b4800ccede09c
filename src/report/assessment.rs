//! Risk assessment result card

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::interpret::{RiskAssessment, Verdict};
use crate::utils::styling::{BULB, CHECK, WARNING};

/// Print the assessment as a styled result card
pub fn display_assessment(assessment: &RiskAssessment) {
    println!();
    match assessment.verdict {
        Verdict::HighRisk => println!(
            "    {}{}",
            WARNING,
            style(assessment.headline()).red().bold()
        ),
        Verdict::LowRisk => println!(
            "    {}{}",
            CHECK,
            style(assessment.headline()).green().bold()
        ),
    }
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("Prediction"),
        Cell::new(assessment.domain.to_string()),
    ]);

    table.add_row(vec![
        Cell::new("Risk Score"),
        Cell::new(format!("{:.2}", assessment.score())),
    ]);

    table.add_row(vec![
        Cell::new("Verdict"),
        Cell::new(assessment.verdict.to_string()).fg(match assessment.verdict {
            Verdict::HighRisk => Color::Red,
            Verdict::LowRisk => Color::Green,
        }),
    ]);

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    println!();
    println!("    {}{}", BULB, style(&assessment.advisory).italic());
    println!();
}
