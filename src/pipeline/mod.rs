//! Pipeline module - encoding, artifacts, and prediction

pub mod artifacts;
pub mod encode;
pub mod error;
pub mod interpret;
pub mod predict;
pub mod record;

pub use artifacts::{Classifier, Scaler};
pub use encode::{encode_diabetes, encode_heart, DIABETES_FEATURES, HEART_FEATURES};
pub use error::PipelineError;
pub use interpret::{interpret, Domain, RiskAssessment, Verdict, RISK_THRESHOLD};
pub use predict::{ModelContext, RiskModel};
pub use record::*;
