//! Risk interpretation - maps a probability to a verdict and advisory text

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decision threshold for the positive class. The boundary itself is low
/// risk: only `p > 0.5` reads as high risk.
pub const RISK_THRESHOLD: f64 = 0.5;

/// Which disease pipeline produced an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Diabetes,
    HeartDisease,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Domain::Diabetes => "diabetes",
            Domain::HeartDisease => "heart disease",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    HighRisk,
    LowRisk,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::HighRisk => "High risk",
            Verdict::LowRisk => "Low risk",
        })
    }
}

/// Final result of one prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub domain: Domain,
    pub verdict: Verdict,
    /// Raw classifier probability of the positive class
    pub probability: f64,
    pub advisory: String,
}

impl RiskAssessment {
    /// Probability rounded to two decimal places for display
    pub fn score(&self) -> f64 {
        (self.probability * 100.0).round() / 100.0
    }

    /// One-line headline, e.g. "High risk of diabetes. (Risk Score: 0.82)"
    pub fn headline(&self) -> String {
        format!(
            "{} of {}. (Risk Score: {:.2})",
            self.verdict, self.domain, self.probability
        )
    }
}

/// Apply the fixed decision threshold and attach the domain's advisory text
pub fn interpret(domain: Domain, probability: f64) -> RiskAssessment {
    let verdict = if probability > RISK_THRESHOLD {
        Verdict::HighRisk
    } else {
        Verdict::LowRisk
    };

    let advisory = match (domain, verdict) {
        (Domain::Diabetes, Verdict::HighRisk) => {
            "Consider scheduling a check-up with your doctor."
        }
        (Domain::Diabetes, Verdict::LowRisk) => "Keep up the healthy habits!",
        (Domain::HeartDisease, Verdict::HighRisk) => "Please consult a cardiologist.",
        (Domain::HeartDisease, Verdict::LowRisk) => {
            "Your heart is doing great - keep it up!"
        }
    };

    RiskAssessment {
        domain,
        verdict,
        probability,
        advisory: advisory.to_string(),
    }
}
