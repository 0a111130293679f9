//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::Instrument;

use dialog_core::{DialogError, DialogResponse, IntentRequest};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub intents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<&DialogError> for ErrorResponse {
    fn from(err: &DialogError) -> Self {
        Self {
            error: err.user_message(),
            code: err.code().into(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        intents: state
            .dispatcher
            .intent_names()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// Dialog hook endpoint, one call per conversation turn
pub async fn dialog_handler(
    State(state): State<AppState>,
    Json(request): Json<IntentRequest>,
) -> Result<Json<DialogResponse>, (StatusCode, Json<ErrorResponse>)> {
    let span = tracing::info_span!(
        "turn",
        turn_id = %uuid::Uuid::new_v4(),
        intent = %request.intent_name(),
        source = %request.invocation_source,
    );

    async move {
        match state.dispatcher.dispatch(&request) {
            Ok(response) => {
                tracing::info!("Answered with {}", response.action_type());
                Ok(Json(response))
            }
            Err(e) => {
                tracing::error!("Dialog error: {}", e);
                Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&e))))
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dialog_core::{DialogAction, InvocationSource, SessionAttributes, Slots};

    fn state() -> AppState {
        AppState {
            dispatcher: Arc::new(robo_advisor::dispatcher()),
        }
    }

    fn request(intent: &str) -> IntentRequest {
        let slots = Slots::from([
            ("age".to_string(), Some("30".to_string())),
            ("investmentAmount".to_string(), Some("10000".to_string())),
        ]);
        IntentRequest::new(intent, InvocationSource::DialogCodeHook, slots, SessionAttributes::new())
    }

    #[tokio::test]
    async fn test_health_lists_intents() {
        let Json(health) = health_check(State(state())).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.intents, vec!["RecommendPortfolio".to_string()]);
    }

    #[tokio::test]
    async fn test_dialog_turn() {
        let Json(response) = dialog_handler(State(state()), Json(request("RecommendPortfolio")))
            .await
            .unwrap();
        assert!(matches!(response.dialog_action, DialogAction::Delegate { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_intent_is_bad_request() {
        let (status, Json(body)) = dialog_handler(State(state()), Json(request("Other")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "UNSUPPORTED_INTENT");
    }
}
