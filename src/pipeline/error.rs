//! Error types for artifact loading and prediction
//!
//! `ArtifactRead`/`ArtifactParse`/`ArtifactInvalid` are fatal at startup: if
//! any model or scaler fails to load, no prediction can be served. The
//! mismatch variants guard the feature-vector contract between the encoders
//! and the fitted artifacts, which would otherwise fail silently.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the prediction pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Artifact file could not be read from disk
    #[error("failed to read artifact file '{path}'")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the expected schema
    #[error("failed to parse artifact file '{path}'")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact parsed but its contents are internally inconsistent
    #[error("invalid artifact '{path}': {message}")]
    ArtifactInvalid { path: PathBuf, message: String },

    /// Feature vector length does not match what the artifact was fit on
    #[error(
        "feature vector mismatch for {artifact}: expected {expected} features, got {actual}"
    )]
    FeatureVectorMismatch {
        artifact: String,
        expected: usize,
        actual: usize,
    },

    /// Encoder column order disagrees with the artifact's fitted column order
    #[error(
        "feature order mismatch for {artifact}: column {index} is '{found}', expected '{expected}'"
    )]
    FeatureOrderMismatch {
        artifact: String,
        index: usize,
        expected: String,
        found: String,
    },
}
