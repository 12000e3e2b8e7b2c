//! Axum route handler for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::extract::extract_analysis;
use crate::analysis::prompts::{build_user_prompt, ANALYSIS_SYSTEM_PROMPT};
use crate::analysis::schema::validate_report;
use crate::analysis::validation::{validate_request, AnalysisRequest};
use crate::errors::AppError;
use crate::llm_client::UpstreamChatRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub content: Value,
}

/// POST /analyze
///
/// validate → build envelope → one upstream call → extract → parse → (schema) → 200.
/// Dropping this future on client disconnect also drops the outbound request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    validate_request(&request, state.config.max_input_chars)?;

    info!(
        "Analyzing resume ({} chars) against job description ({} chars)",
        request.resume.chars().count(),
        request.job_description.chars().count()
    );

    let upstream_request = UpstreamChatRequest::new(
        ANALYSIS_SYSTEM_PROMPT,
        build_user_prompt(&request.resume, &request.job_description),
    );

    let raw_body = state.llm.complete(&upstream_request).await?;
    let content = extract_analysis(&raw_body)?;

    if state.config.strict_schema {
        validate_report(&content)?;
    }

    Ok(Json(AnalysisResponse { content }))
}
