//! Document routes: upload, list, fetch, download, delete.

use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use docai_core::{Document, Error, Role};
use docai_ingest::{archive_path, BatchFailure, Upload};
use docai_store::{AccessAction, AccessRecord, DocumentFilter, DocumentStore};
use serde::Deserialize;
use tracing::{info, warn};

use super::{parse_role, record_access, RoleQuery};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Uploader recorded when the form carries none.
const DEFAULT_UPLOADER: &str = "anonymous";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/documents", post(upload_documents).get(list_documents))
        .route("/documents/{id}", get(get_document).delete(delete_document))
        .route("/documents/{id}/download", get(download_document))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    role: Option<String>,
    author: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

/// GET /api/documents?role=&author=&from=&to=: documents visible to the
/// caller's role, optionally narrowed by author and upload day.
async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Document>>> {
    let role = parse_role(query.role.as_deref())?;
    let filter = DocumentFilter::parse(
        query.author.as_deref(),
        query.from.as_deref(),
        query.to.as_deref(),
    )?;
    Ok(Json(state.store.list_matching(role, &filter)?))
}

/// POST /api/documents: multipart upload; one text field `uploader` and any
/// number of file fields.
async fn upload_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoleQuery>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let role = query.role()?;
    let mut uploader = None;
    let mut uploads = Vec::new();
    let mut failures = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(filename) = field.file_name().map(sanitize_filename) else {
            if field.name() == Some("uploader") {
                uploader = field.text().await.ok().filter(|u| !u.trim().is_empty());
            }
            continue;
        };
        let mime = field.content_type().map(str::to_string);

        match field.bytes().await {
            Ok(bytes) => uploads.push(Upload::new(filename, mime, bytes.to_vec())),
            Err(e) => failures.push(BatchFailure {
                filename,
                error: format!("Read failed: {}", e),
            }),
        }
    }

    let uploader = uploader.unwrap_or_else(|| DEFAULT_UPLOADER.to_string());
    let batch_state = Arc::clone(&state);
    let batch_uploader = uploader.clone();
    let mut report = tokio::task::spawn_blocking(move || {
        batch_state.ingester().ingest_batch(&uploads, &batch_uploader)
    })
    .await
    .map_err(|e| Error::Internal(format!("ingest task failed: {}", e)))?;
    report.failures.extend(failures);

    for doc in &report.documents {
        record_access(
            &state,
            AccessRecord::new(role, AccessAction::Upload)
                .document(&doc.id)
                .detail(&doc.original_name),
        );
    }

    info!(
        "Upload by {}: {} stored, {} failed",
        uploader,
        report.documents.len(),
        report.failures.len()
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "uploaded": report.documents.len(),
            "errors": report.failures.len(),
            "documents": report.documents,
            "errorDetails": report.failures,
        })),
    ))
}

/// GET /api/documents/{id}: one document, if the role may see it.
async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RoleQuery>,
) -> ApiResult<Json<Document>> {
    let role = query.role()?;
    let doc = visible_document(&state, &id, role)?;
    record_access(&state, AccessRecord::new(role, AccessAction::View).document(&id));
    Ok(Json(doc))
}

/// GET /api/documents/{id}/download: the uploaded bytes, or the extracted
/// text when the original file is gone.
async fn download_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RoleQuery>,
) -> ApiResult<impl IntoResponse> {
    let role = query.role()?;
    let doc = visible_document(&state, &id, role)?;

    let path = archive_path(&state.config.data_paths.uploads, &doc);
    let (content_type, body) = match std::fs::read(&path) {
        Ok(bytes) => (doc.file_type.clone(), bytes),
        Err(_) => (
            "text/plain; charset=utf-8".to_string(),
            doc.content.clone().into_bytes(),
        ),
    };
    record_access(&state, AccessRecord::new(role, AccessAction::Download).document(&id));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", sanitize_filename(&doc.original_name)),
            ),
        ],
        body,
    ))
}

/// DELETE /api/documents/{id}
async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RoleQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let role = query.role()?;
    let doc = visible_document(&state, &id, role)?;
    if !state.store.delete(&id)? {
        return Err(ApiError::not_found(format!("document {}", id)));
    }

    let path = archive_path(&state.config.data_paths.uploads, &doc);
    if path.exists() {
        if let Err(e) = std::fs::remove_file(&path) {
            warn!("Could not remove {}: {}", path.display(), e);
        }
    }
    record_access(&state, AccessRecord::new(role, AccessAction::Delete).document(&id));
    info!("Deleted document {}", id);

    Ok(Json(serde_json::json!({ "deleted": true, "id": id })))
}

fn visible_document(state: &AppState, id: &str, role: Role) -> ApiResult<Document> {
    state
        .store
        .get(id)?
        .filter(|doc| doc.is_visible_to(role))
        .ok_or_else(|| ApiError::not_found(format!("document {}", id)))
}

/// Sanitize a filename to prevent path traversal.
fn sanitize_filename(name: &str) -> String {
    let name = name.replace(['/', '\\'], "").replace("..", "");

    std::path::Path::new(&name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string()
}
