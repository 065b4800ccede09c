//! Prediction context - load-once artifacts and the end-to-end pipeline
//!
//! `ModelContext` replaces load-at-import globals: both (scaler, classifier)
//! pairs are loaded explicitly at startup into an immutable context that is
//! passed to the prediction functions and shared read-only for the process
//! lifetime.

use std::path::Path;

use crate::pipeline::artifacts::{check_feature_order, Classifier, Scaler};
use crate::pipeline::encode::{encode_diabetes, encode_heart, DIABETES_FEATURES, HEART_FEATURES};
use crate::pipeline::error::PipelineError;
use crate::pipeline::interpret::{interpret, Domain, RiskAssessment};
use crate::pipeline::record::{DiabetesRecord, HeartRecord};

/// Artifact file names within the artifact directory
pub const DIABETES_SCALER_FILE: &str = "diabetes_scaler.json";
pub const DIABETES_MODEL_FILE: &str = "diabetes_model.json";
pub const HEART_SCALER_FILE: &str = "heart_scaler.json";
pub const HEART_MODEL_FILE: &str = "heart_model.json";

/// One domain's fitted (scaler, classifier) pair
#[derive(Debug, Clone)]
pub struct RiskModel {
    scaler: Scaler,
    classifier: Classifier,
}

impl RiskModel {
    /// Load a domain's artifacts and verify their fitted column order against
    /// the encoder's declared order.
    pub fn load(
        dir: &Path,
        scaler_file: &str,
        model_file: &str,
        declared_features: &[&str],
    ) -> Result<Self, PipelineError> {
        let scaler = Scaler::load(&dir.join(scaler_file))?;
        check_feature_order(scaler_file, &scaler.feature_names, declared_features)?;

        let classifier = Classifier::load(&dir.join(model_file))?;
        check_feature_order(model_file, &classifier.feature_names, declared_features)?;

        Ok(Self { scaler, classifier })
    }

    /// Scale a raw feature vector and score it
    pub fn score(&self, features: &[f64]) -> Result<f64, PipelineError> {
        let scaled = self.scaler.transform(features)?;
        self.classifier.predict_probability(&scaled)
    }
}

/// Both prediction pipelines, loaded once and immutable thereafter
#[derive(Debug, Clone)]
pub struct ModelContext {
    diabetes: RiskModel,
    heart: RiskModel,
}

impl ModelContext {
    /// Load all four artifacts from a directory. Any failure is fatal: the
    /// caller should exit rather than serve partial predictions.
    pub fn load(dir: &Path) -> Result<Self, PipelineError> {
        let diabetes = RiskModel::load(
            dir,
            DIABETES_SCALER_FILE,
            DIABETES_MODEL_FILE,
            &DIABETES_FEATURES,
        )?;
        let heart = RiskModel::load(dir, HEART_SCALER_FILE, HEART_MODEL_FILE, &HEART_FEATURES)?;

        Ok(Self { diabetes, heart })
    }

    /// Run the full diabetes pipeline for one record
    pub fn predict_diabetes(
        &self,
        record: &DiabetesRecord,
    ) -> Result<RiskAssessment, PipelineError> {
        let probability = self.diabetes.score(&encode_diabetes(record))?;
        Ok(interpret(Domain::Diabetes, probability))
    }

    /// Run the full heart disease pipeline for one record
    pub fn predict_heart(&self, record: &HeartRecord) -> Result<RiskAssessment, PipelineError> {
        let probability = self.heart.score(&encode_heart(record))?;
        Ok(interpret(Domain::HeartDisease, probability))
    }
}
