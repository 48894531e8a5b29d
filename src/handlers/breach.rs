use crate::error::AppError;
use crate::models::{CheckBreachRequest, CheckBreachResponse};
use crate::startup::AppState;
use axum::{Json, extract::State};
use std::time::Duration;
use validator::Validate;

/// Check a banking detail against the breach dataset.
///
/// Responds only after the configured artificial delay, which simulates
/// the latency of a real lookup service and applies to hits and misses
/// alike. When an email address accompanies a hit, a simulated breach
/// notification goes out; the response does not reflect it.
#[tracing::instrument(skip(state, request))]
pub async fn check_breach(
    State(state): State<AppState>,
    Json(request): Json<CheckBreachRequest>,
) -> Result<Json<CheckBreachResponse>, AppError> {
    request.validate()?;
    let detail = request.detail.as_deref().unwrap_or_default();

    let breaches = state.repository.find_breaches(detail);

    tokio::time::sleep(Duration::from_secs(
        state.config.dataset.lookup_delay_seconds,
    ))
    .await;

    if breaches.is_empty() {
        return Ok(Json(CheckBreachResponse {
            breached: false,
            breaches: None,
        }));
    }

    tracing::info!(matches = breaches.len(), "Detail found in breach dataset");

    if let Some(email) = &request.email {
        state.notifier.notify(email, &breaches).await;
    }

    Ok(Json(CheckBreachResponse {
        breached: true,
        breaches: Some(breaches),
    }))
}
