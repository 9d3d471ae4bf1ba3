//! HTTP route handlers.

pub mod access;
pub mod documents;
pub mod search;
pub mod stats;

use std::sync::Arc;

use axum::Router;
use docai_core::Role;
use docai_store::{AccessRecord, DocumentStore};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(documents::routes())
        .merge(search::routes())
        .merge(stats::routes())
        .merge(access::routes())
}

/// `?role=` query parameter; absent or blank means `All`.
#[derive(Debug, Default, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

impl RoleQuery {
    pub fn role(&self) -> docai_core::Result<Role> {
        parse_role(self.role.as_deref())
    }
}

pub fn parse_role(raw: Option<&str>) -> docai_core::Result<Role> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(r) => r.parse(),
        None => Ok(Role::All),
    }
}

/// Access logging never fails a request.
pub(crate) fn record_access(state: &AppState, record: AccessRecord) {
    if let Err(e) = state.store.log_access(record) {
        warn!("Failed to record access: {}", e);
    }
}
