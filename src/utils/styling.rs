//! Terminal styling utilities for a modern, visually appealing TUI

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static STETHOSCOPE: Emoji<'_, '_> = Emoji("🩺 ", ">> ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
pub static BULB: Emoji<'_, '_> = Emoji("💡 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
     ██████╗ █████╗ ██████╗ ██████╗ ██╗ █████╗ ██████╗ ███████╗████████╗██╗ ██████╗███████╗
    ██╔════╝██╔══██╗██╔══██╗██╔══██╗██║██╔══██╗██╔══██╗██╔════╝╚══██╔══╝██║██╔════╝██╔════╝
    ██║     ███████║██████╔╝██║  ██║██║███████║██████╔╝█████╗     ██║   ██║██║     ███████╗
    ██║     ██╔══██║██╔══██╗██║  ██║██║██╔══██║██╔══██╗██╔══╝     ██║   ██║██║     ╚════██║
    ╚██████╗██║  ██║██║  ██║██████╔╝██║██║  ██║██████╔╝███████╗   ██║   ██║╚██████╗███████║
     ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚═╝╚═╝  ╚═╝╚═════╝ ╚══════╝   ╚═╝   ╚═╝ ╚═════╝╚══════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        STETHOSCOPE,
        style("Your ML-powered health companion for predicting Diabetes & Heart Disease").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print an informational line about where artifacts are loaded from
pub fn print_artifact_source(dir: &Path) {
    println!(
        "    {}{}",
        FOLDER,
        style(format!("Artifacts: {}", dir.display())).dim()
    );
}
