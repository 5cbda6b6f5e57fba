use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::events::DraftPickEvent;
use crate::services::pipeline::PickPipeline;

pub struct AppState {
    pub pipeline: PickPipeline,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/draft-pick", post(draft_pick))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>, bind_addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("API Server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn draft_pick(
    State(state): State<Arc<AppState>>,
    Json(event): Json<DraftPickEvent>,
) -> Response {
    if let Err(e) = event.validate() {
        return e.into_response();
    }

    let span = info_span!(
        "draft_pick",
        request_id = %Uuid::new_v4(),
        pick = event.pick_number,
        player = %event.player
    );

    match state.pipeline.handle(&event).instrument(span).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error!("❌ [API] {} ({})", self, status);
        (
            status,
            Json(json!({
                "ok": false,
                "error": self.kind(),
                "detail": self.to_string(),
            })),
        )
            .into_response()
    }
}
