use serde::Deserialize;

use crate::errors::AppError;

/// Body of `POST /analyze`. Absent fields decode as empty and are rejected below.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_description: String,
}

pub const REQUIRED_FIELDS_MESSAGE: &str = "Resume and job description are required";

/// Rejects blank fields, and fields over `max_chars` when a cap is configured.
///
/// Runs before the upstream call; no sanitization of the text is attempted.
pub fn validate_request(
    request: &AnalysisRequest,
    max_chars: Option<usize>,
) -> Result<(), AppError> {
    if request.resume.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    if let Some(max) = max_chars {
        let too_long = |text: &str| text.chars().count() > max;
        if too_long(&request.resume) || too_long(&request.job_description) {
            return Err(AppError::Validation(format!(
                "Each field must be {max} characters or less"
            )));
        }
    }

    Ok(())
}
