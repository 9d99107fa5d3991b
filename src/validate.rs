//! Report-text plausibility validation.
//!
//! The input adapter runs this after text extraction, before building an
//! [`crate::models::AnalysisRequest`]. The check is deliberately crude:
//! a minimum length and a handful of terms that appear in virtually
//! every real lab report.

use thiserror::Error;

/// Terms expected in a genuine medical report.
const MEDICAL_TERMS: [&str; 18] = [
    "blood",
    "test",
    "report",
    "laboratory",
    "lab",
    "patient",
    "specimen",
    "reference range",
    "analysis",
    "results",
    "medical",
    "diagnostic",
    "hemoglobin",
    "wbc",
    "rbc",
    "platelet",
    "glucose",
    "creatinine",
];

const MIN_REPORT_CHARS: usize = 50;
const MIN_TERM_MATCHES: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Extracted text is too short. Please ensure the document contains valid text.")]
    TooShort,

    #[error("The uploaded file doesn't appear to be a medical report. Please upload a valid medical report.")]
    NotAMedicalReport,
}

/// Check that extracted text plausibly is a medical report.
pub fn validate_report_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() < MIN_REPORT_CHARS {
        return Err(ValidationError::TooShort);
    }

    let lower = text.to_lowercase();
    let matches = MEDICAL_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .count();
    if matches < MIN_TERM_MATCHES {
        return Err(ValidationError::NotAMedicalReport);
    }

    Ok(())
}
