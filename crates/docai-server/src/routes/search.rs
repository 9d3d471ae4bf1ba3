//! Relevance search route.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use docai_core::DocumentCategory;
use docai_store::{AccessAction, AccessRecord, DocumentFilter, DocumentStore};
use serde::Deserialize;

use super::{parse_role, record_access};
use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
    category: Option<String>,
    role: Option<String>,
    author: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

/// GET /api/search?q=&category=&role=&author=&from=&to=: ranked matches among
/// visible documents that pass the author and date filters.
async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let role = parse_role(params.role.as_deref())?;
    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
        .map(str::parse::<DocumentCategory>)
        .transpose()?;

    let filter = DocumentFilter::parse(
        params.author.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
    )?;

    let documents = state.store.list_matching(role, &filter)?;
    let results = state.engine.search(&documents, &params.q, category);

    record_access(
        &state,
        AccessRecord::new(role, AccessAction::Search).detail(params.q.clone()),
    );

    Ok(Json(serde_json::json!({
        "total": results.len(),
        "results": results,
        "query": params.q,
    })))
}
