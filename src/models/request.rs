use std::fmt;

use serde::{Deserialize, Serialize};

/// Patient gender as collected by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A report analysis request as supplied by the input adapter.
///
/// Immutable once constructed. The adapter is responsible for validating
/// that `report_text` is plausibly a medical report (see [`crate::validate`]);
/// the core takes the fields at face value. Age and gender may be
/// absent; they render as the literal token `unknown` in patient
/// profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub patient_name: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub report_text: String,
}

impl AnalysisRequest {
    /// Coarse bucket key for the knowledge base: `"<age>-<gender>"`.
    pub fn patient_profile(&self) -> String {
        let age = self
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let gender = self
            .gender
            .map(|g| g.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!("{age}-{gender}")
    }
}

/// The four-field projection of a request that is sent to the model.
///
/// Serialized as the user message of the completion call. Constructing
/// this projection is the preprocessing step: nothing beyond these four
/// fields ever reaches a provider.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPayload {
    pub patient_name: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub report: String,
}

impl ModelPayload {
    pub fn from_request(request: &AnalysisRequest) -> Self {
        Self {
            patient_name: request.patient_name.clone(),
            age: request.age,
            gender: request.gender,
            report: request.report_text.clone(),
        }
    }
}
