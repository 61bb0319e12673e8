//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{
        AnalyzeRequestDto, AnalyzeResponseDto, ErrorResponseDto, SessionStateDto, StoredPathDto,
    },
    ui::state::AppState,
};

const ANALYSIS_FAILED_MESSAGE: &str = "Erro interno na análise.";
const INVALID_BODY_MESSAGE: &str = "Corpo da requisição inválido.";

type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);

fn error_response(status: StatusCode, error: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(ErrorResponseDto {
            error: error.into(),
        }),
    )
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Read formation and phase from a board snapshot and attach a coach comment
pub async fn analyze_tactics(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalyzeResponseDto>, ErrorResponse> {
    let request = AnalyzeRequestDto::from_body(&body).map_err(|e| {
        tracing::debug!("Rejected analysis request: {}", e);
        error_response(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE)
    })?;

    match state.analyze_tactics_usecase.execute(request.into()).await {
        Ok(analysis) => Ok(Json(analysis.into())),
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ANALYSIS_FAILED_MESSAGE,
            ))
        }
    }
}

/// Debug endpoint to get current connections and stored paths (for testing purposes)
pub async fn debug_session_state(State(state): State<Arc<AppState>>) -> Json<SessionStateDto> {
    let session = state.get_session_state_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(SessionStateDto {
        connections: session
            .connections
            .into_iter()
            .map(|id| id.into_string())
            .collect(),
        paths: session.strokes.iter().map(StoredPathDto::from).collect(),
    })
}
