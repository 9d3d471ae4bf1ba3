//! Access log route.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use docai_store::{AccessLogEntry, DocumentStore};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 50;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/access-log", get(recent_access))
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

/// GET /api/access-log?limit=: newest entries first.
async fn recent_access(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<Vec<AccessLogEntry>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    Ok(Json(state.store.recent_access(limit)?))
}
