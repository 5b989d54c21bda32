use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::fetch::Fetch;
use crate::layout::{self, PageData, PageOptions, PAGE_OPTIONS};
use crate::session::{SessionSlot, SessionSummary};

pub fn router<F>(fetch: F) -> Router
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/ping", get(ping))
        .route("/layout", get(load_layout::<F>))
        .route("/layout/options", get(layout_options))
        .route("/sessions/summary", post(summarize_sessions))
        .with_state(fetch)
}

async fn ping() -> String {
    "Pong".to_string()
}

async fn load_layout<F>(State(fetch): State<F>) -> Result<Json<PageData>, (StatusCode, Json<Value>)>
where
    F: Fetch + Clone + Send + Sync + 'static,
{
    info!("Loading page data");

    layout::load(&fetch).await.map(Json).map_err(|e| {
        error!("Page load failed: {}", e);
        (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() })))
    })
}

async fn layout_options() -> Json<PageOptions> {
    Json(PAGE_OPTIONS)
}

async fn summarize_sessions(Json(sessions): Json<Vec<SessionSlot>>) -> Json<Vec<SessionSummary>> {
    info!(count = sessions.len(), "Summarizing sessions");

    Json(sessions.iter().map(SessionSlot::summary).collect())
}
