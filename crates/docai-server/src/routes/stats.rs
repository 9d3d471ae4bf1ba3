//! Collection statistics route.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use docai_store::{format_file_size, CollectionStats, DocumentStore};
use serde::Serialize;

use super::RoleQuery;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    #[serde(flatten)]
    stats: CollectionStats,
    total_size: String,
}

/// GET /api/stats: analytics over the documents visible to the role.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoleQuery>,
) -> ApiResult<Json<StatsResponse>> {
    let role = query.role()?;
    let documents = state.store.list_for_role(role)?;
    let stats = CollectionStats::from_documents(&documents);
    let total_size = format_file_size(stats.total_size_bytes);
    Ok(Json(StatsResponse { stats, total_size }))
}
