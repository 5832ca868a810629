//! Shared helpers for the HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use explorer_api::{AppState, build_app};
use explorer_core::config::AppConfig;
use explorer_database::MemoryItemStore;
use explorer_service::ItemService;

/// Test application over an in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// A fresh app whose store has not been initialized.
    pub fn uninitialized() -> Self {
        let config = AppConfig::default();
        let service = ItemService::new(Arc::new(MemoryItemStore::new()), config.explorer.clone());
        Self {
            router: build_app(AppState::new(config, service)),
        }
    }

    /// A fresh app with the root folder in place.
    pub async fn new() -> Self {
        let app = Self::uninitialized();
        let response = app.request("GET", "/api/init", None).await;
        assert_eq!(response.status, StatusCode::OK);
        app
    }

    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body).await
    }

    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create an item and return its JSON.
    pub async fn create(&self, name: &str, is_folder: bool, parent: Option<&str>, by: &str) -> Value {
        let file_key = (!is_folder).then_some("course");
        let response = self
            .request(
                "POST",
                "/api/items",
                Some(json!({
                    "name": name,
                    "isFolder": is_folder,
                    "fileKey": file_key,
                    "parentFolderId": parent,
                    "createdBy": by,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["item"].clone()
    }

    /// Names of the children of `folder` (root when `None`).
    pub async fn child_names(&self, folder: Option<&str>, sort: &str) -> Vec<String> {
        let uri = match folder {
            Some(id) => format!("/api/items?folderId={id}&sortBy={sort}"),
            None => format!("/api/items?sortBy={sort}"),
        };
        let response = self.request("GET", &uri, None).await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["items"]
            .as_array()
            .expect("items array")
            .iter()
            .map(|i| i["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
