use crate::error::AppError;
use crate::models::{SummarizeRequest, SummarizeResponse};
use crate::services::summary;
use crate::startup::AppState;
use axum::{Json, extract::State};

/// Produce an AI-generated risk summary for a set of breach records.
#[tracing::instrument(skip(state, request))]
pub async fn summarize_breach(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    // Checked per call rather than at startup so the service still runs
    // (and reports a configuration error) without a key.
    if state.config.google.api_key.is_empty() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "Google API key not configured"
        )));
    }

    if request.breach_data.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "No breach data provided"
        )));
    }

    let summary = summary::summarize(state.text_provider.as_ref(), &request.breach_data).await?;

    Ok(Json(SummarizeResponse { summary }))
}
