//! CLI module - argument parsing and interactive prompts

pub mod args;
pub mod prompts;

pub use args::{Cli, Commands, DiabetesArgs, HeartArgs};
pub use prompts::*;
