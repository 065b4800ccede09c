//! Report module - result display

pub mod assessment;

pub use assessment::display_assessment;
