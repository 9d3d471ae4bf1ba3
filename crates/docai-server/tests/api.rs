//! End-to-end API tests: requests go through the full router against a
//! temporary data directory.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use docai_core::DocAiConfig;
use docai_server::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "docai-test-boundary";
const INVOICE: &str = "Invoice #123 payment due. Budget review scheduled. Tax filing reminder.";

fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = DocAiConfig::with_defaults(dir.path()).unwrap();
    let state = AppState::new(config).unwrap();
    (build_router(Arc::new(state)), dir)
}

fn multipart_body(uploader: &str, files: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"uploader\"\r\n\r\n{uploader}\r\n"
        )
        .as_bytes(),
    );
    for (name, mime, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn upload(app: &Router, files: &[(&str, &str, &[u8])]) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri("/api/documents")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body("alice", files)))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

async fn upload_invoice(app: &Router) -> String {
    let body = upload(app, &[("invoice_march.txt", "text/plain", INVOICE.as_bytes())]).await;
    body["documents"][0]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_upload_reports_failures_and_stores_rest() {
    let (app, _dir) = test_app();
    let body = upload(
        &app,
        &[
            ("invoice_march.txt", "text/plain", INVOICE.as_bytes()),
            ("broken.txt", "text/plain", &[0xff, 0xfe, 0xfd]),
        ],
    )
    .await;

    assert_eq!(body["uploaded"], 1);
    assert_eq!(body["errors"], 1);
    assert_eq!(body["errorDetails"][0]["filename"], "broken.txt");

    let doc = &body["documents"][0];
    assert_eq!(doc["category"], "Finance");
    assert_eq!(doc["accessLevel"], serde_json::json!(["Finance", "Admin"]));
    assert_eq!(doc["uploader"], "alice");
    assert_eq!(doc["fileType"], "text/plain");
    assert!(doc["metadata"]["title"].is_string());
    assert!(doc["uploadDate"].is_string());
}

#[tokio::test]
async fn test_listing_is_role_filtered() {
    let (app, _dir) = test_app();
    upload_invoice(&app).await;
    upload(&app, &[("notes.txt", "text/plain", b"The quick brown fox jumps.")]).await;

    let (status, hr) = get_json(&app, "/api/documents?role=HR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hr.as_array().unwrap().len(), 1);
    assert_eq!(hr[0]["category"], "Uncategorized");

    let (_, finance) = get_json(&app, "/api/documents?role=Finance").await;
    assert_eq!(finance.as_array().unwrap().len(), 2);
    assert_eq!(finance[0]["originalName"], "invoice_march.txt");

    let (_, admin) = get_json(&app, "/api/documents?role=Admin").await;
    assert_eq!(admin.as_array().unwrap().len(), 2);

    let (status, _) = get_json(&app, "/api/documents?role=Intern").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_and_download_respect_visibility() {
    let (app, _dir) = test_app();
    let id = upload_invoice(&app).await;

    let (status, _) = get_json(&app, &format!("/api/documents/{id}?role=HR")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, doc) = get_json(&app, &format!("/api/documents/{id}?role=Finance")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["id"], id.as_str());

    let request = Request::builder()
        .uri(format!("/api/documents/{id}/download?role=Admin"))
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, INVOICE.as_bytes());

    let (status, _) = get_json(&app, "/api/documents/missing?role=Admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_ranks_and_highlights() {
    let (app, _dir) = test_app();
    upload_invoice(&app).await;

    let (status, body) = get_json(&app, "/api/search?q=budget&role=Finance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["query"], "budget");
    let result = &body["results"][0];
    let score = result["relevanceScore"].as_f64().unwrap();
    assert!(score > 0.0 && score <= 100.0);
    assert!(result["highlightedSummary"]
        .as_str()
        .unwrap()
        .contains("<mark>Budget</mark>"));
    assert_eq!(result["matchedContent"][0], "Budget review scheduled");

    let (_, hidden) = get_json(&app, "/api/search?q=budget&role=HR").await;
    assert_eq!(hidden["total"], 0);

    let (_, stop_words) = get_json(&app, "/api/search?q=the%20and&role=Admin").await;
    assert_eq!(stop_words["total"], 0);

    let (_, filtered) = get_json(&app, "/api/search?q=budget&category=Legal&role=Admin").await;
    assert_eq!(filtered["total"], 0);

    let (status, _) = get_json(&app, "/api/search?q=budget&category=Recipes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_missing() {
    let (app, _dir) = test_app();
    let id = upload_invoice(&app).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/documents/{id}?role=Admin"))
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["deleted"], true);
    assert_eq!(body["id"], id.as_str());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/documents/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = get_json(&app, "/api/documents?role=Admin").await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_hidden_document_is_not_found() {
    let (app, _dir) = test_app();
    let id = upload_invoice(&app).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/documents/{id}?role=HR"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, doc) = get_json(&app, &format!("/api/documents/{id}?role=Finance")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["id"], id.as_str());
}

#[tokio::test]
async fn test_author_and_date_filters() {
    let (app, _dir) = test_app();
    upload_invoice(&app).await;
    upload(
        &app,
        &[("memo.txt", "text/plain", b"Author: Jane Doe\nQuarterly budget notes.")],
    )
    .await;

    let (_, jane) = get_json(&app, "/api/documents?role=Admin&author=jane").await;
    assert_eq!(jane.as_array().unwrap().len(), 1);
    assert_eq!(jane[0]["metadata"]["author"], "Jane Doe");

    let (_, ranged) =
        get_json(&app, "/api/documents?role=Admin&from=2000-01-01&to=2999-12-31").await;
    assert_eq!(ranged.as_array().unwrap().len(), 2);

    let (_, before) = get_json(&app, "/api/documents?role=Admin&to=2000-01-01").await;
    assert!(before.as_array().unwrap().is_empty());

    let (_, searched) = get_json(&app, "/api/search?q=budget&role=Admin&author=JANE").await;
    assert_eq!(searched["total"], 1);
    assert_eq!(searched["results"][0]["document"]["originalName"], "memo.txt");

    let (_, none) = get_json(&app, "/api/search?q=budget&role=Admin&from=2999-01-01").await;
    assert_eq!(none["total"], 0);

    let (status, _) = get_json(&app, "/api/documents?role=Admin&from=15/03/2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_and_access_log() {
    let (app, _dir) = test_app();
    upload_invoice(&app).await;
    get_json(&app, "/api/search?q=invoice&role=Finance").await;

    let (status, stats) = get_json(&app, "/api/stats?role=Admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalDocuments"], 1);
    assert_eq!(stats["byCategory"][0]["category"], "Finance");
    assert_eq!(stats["byCategory"][0]["count"], 1);
    assert_eq!(stats["totalSizeBytes"], INVOICE.len());
    assert_eq!(stats["totalSize"], "71 B");

    let (_, empty) = get_json(&app, "/api/stats?role=HR").await;
    assert_eq!(empty["totalDocuments"], 0);
    assert_eq!(empty["totalSize"], "0 B");

    let (status, log) = get_json(&app, "/api/access-log?limit=10").await;
    assert_eq!(status, StatusCode::OK);
    let entries = log.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["action"], "search");
    assert_eq!(entries[0]["detail"], "invoice");
    assert_eq!(entries[1]["action"], "upload");
}
