//! Cardiabetics: Disease Risk Scoring Library
//!
//! A library for scoring diabetes and heart disease risk from simple health
//! metrics using pre-fit scaler and classifier artifacts.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
