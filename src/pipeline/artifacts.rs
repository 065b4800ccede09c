//! Pre-fit scaler and classifier artifacts
//!
//! Artifacts are opaque to the rest of the crate: a scaler exposes
//! `transform` and a classifier exposes `predict_probability`, both fit
//! offline and serialized as JSON parameter sets. They are loaded once at
//! startup and never mutated afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pipeline::error::PipelineError;

/// Per-feature affine normalization fit during training: `(x - mean) / scale`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    /// Column order the scaler was fit on
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    /// Load a fitted scaler from a JSON artifact file
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let scaler: Scaler = read_artifact(path)?;

        if scaler.mean.len() != scaler.feature_names.len()
            || scaler.scale.len() != scaler.feature_names.len()
        {
            return Err(PipelineError::ArtifactInvalid {
                path: path.to_path_buf(),
                message: format!(
                    "{} feature names but {} means and {} scales",
                    scaler.feature_names.len(),
                    scaler.mean.len(),
                    scaler.scale.len()
                ),
            });
        }

        if let Some(i) = scaler.scale.iter().position(|&s| s == 0.0) {
            return Err(PipelineError::ArtifactInvalid {
                path: path.to_path_buf(),
                message: format!("zero scale for feature '{}'", scaler.feature_names[i]),
            });
        }

        Ok(scaler)
    }

    /// Apply the fitted normalization to a feature vector.
    ///
    /// The vector must have the length the scaler was fit on; anything else
    /// means the encoder and the artifact have drifted apart.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PipelineError> {
        if features.len() != self.feature_names.len() {
            return Err(PipelineError::FeatureVectorMismatch {
                artifact: "scaler".to_string(),
                expected: self.feature_names.len(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

/// Fitted logistic regression parameters exposed only through
/// `predict_probability`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    /// Column order the model was fit on
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl Classifier {
    /// Load a fitted classifier from a JSON artifact file
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let classifier: Classifier = read_artifact(path)?;

        if classifier.coefficients.len() != classifier.feature_names.len() {
            return Err(PipelineError::ArtifactInvalid {
                path: path.to_path_buf(),
                message: format!(
                    "{} feature names but {} coefficients",
                    classifier.feature_names.len(),
                    classifier.coefficients.len()
                ),
            });
        }

        Ok(classifier)
    }

    /// Probability of the positive (disease-present) class for a scaled
    /// feature vector. Deterministic and pure.
    pub fn predict_probability(&self, scaled: &[f64]) -> Result<f64, PipelineError> {
        if scaled.len() != self.coefficients.len() {
            return Err(PipelineError::FeatureVectorMismatch {
                artifact: "classifier".to_string(),
                expected: self.coefficients.len(),
                actual: scaled.len(),
            });
        }

        let logit: f64 = self.intercept
            + scaled
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>();

        Ok(1.0 / (1.0 + (-logit).exp()))
    }
}

fn read_artifact<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, PipelineError> {
    let contents = fs::read_to_string(path).map_err(|source| PipelineError::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| PipelineError::ArtifactParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Verify that an artifact's fitted column order matches the encoder's
/// declared column order. Checked once at load time so that a refit with
/// different columns fails fast instead of silently mis-scoring.
pub fn check_feature_order(
    artifact: &str,
    fitted: &[String],
    declared: &[&str],
) -> Result<(), PipelineError> {
    if fitted.len() != declared.len() {
        return Err(PipelineError::FeatureVectorMismatch {
            artifact: artifact.to_string(),
            expected: declared.len(),
            actual: fitted.len(),
        });
    }

    for (index, (found, expected)) in fitted.iter().zip(declared.iter()).enumerate() {
        if found != expected {
            return Err(PipelineError::FeatureOrderMismatch {
                artifact: artifact.to_string(),
                index,
                expected: (*expected).to_string(),
                found: found.clone(),
            });
        }
    }

    Ok(())
}
