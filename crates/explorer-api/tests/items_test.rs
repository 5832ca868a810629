//! HTTP tests for the item endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::uninitialized();
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let app = TestApp::uninitialized();
    for _ in 0..2 {
        let response = app.request("GET", "/api/init", None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["message"], "Database initialized");
    }
}

#[tokio::test]
async fn test_listing_before_init_is_server_error() {
    let app = TestApp::uninitialized();
    let response = app.request("GET", "/api/items", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn test_docs_rename_example() {
    let app = TestApp::new().await;
    app.create("intro", false, None, "alice").await;
    let docs = app.create("Docs", true, None, "alice").await;
    assert_eq!(docs["path"], "home/Docs/");
    assert_eq!(docs["created_by"], "alice");

    assert_eq!(app.child_names(None, "name_asc").await, vec!["Docs", "intro"]);

    let id = docs["id"].as_str().unwrap();
    let uri = format!("/api/items/{id}");

    let response = app
        .request("PATCH", &uri, Some(json!({"name": "Documents", "updatedBy": "bob"})))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["error"],
        "Unauthorized: Only the creator can update this item"
    );
    assert_eq!(app.child_names(None, "name_asc").await[0], "Docs");

    let response = app
        .request("PATCH", &uri, Some(json!({"name": "Documents", "updatedBy": "alice"})))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["item"]["name"], "Documents");
    assert_eq!(response.body["item"]["path"], "home/Documents/");
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/items", Some(json!({"isFolder": true, "createdBy": "alice"})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "name is required");

    let response = app
        .request("POST", "/api/items", Some(json!({"name": "Docs", "isFolder": true})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "createdBy is required");

    let response = app.raw_request("POST", "/api/items", "{not json".to_string()).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_duplicate_path_conflicts() {
    let app = TestApp::new().await;
    app.create("Docs", true, None, "alice").await;
    let response = app
        .request(
            "POST",
            "/api/items",
            Some(json!({"name": "Docs", "isFolder": true, "createdBy": "bob"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_errors() {
    let app = TestApp::new().await;
    let docs = app.create("Docs", true, None, "alice").await;
    let uri = format!("/api/items/{}", docs["id"].as_str().unwrap());

    let response = app.request("PATCH", &uri, Some(json!({"name": "x"}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "updatedBy is required");

    let missing = "/api/items/00000000-0000-0000-0000-999999999999";
    let response = app.request("PATCH", missing, Some(json!({"updatedBy": "alice"}))).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Item not found");

    let response = app.request("PATCH", &uri, Some(json!({"updatedBy": "bob"}))).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("PATCH", &uri, Some(json!({"updatedBy": "alice"}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "No fields to update");

    let response = app
        .request("PATCH", &uri, Some(json!({"name": "a/b", "updatedBy": "alice"})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "name cannot contain '/'");

    let response = app
        .request("PATCH", "/api/items/not-a-uuid", Some(json!({"name": "x", "updatedBy": "alice"})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_cascades() {
    let app = TestApp::new().await;
    let a = app.create("A", true, None, "alice").await;
    let a_id = a["id"].as_str().unwrap().to_string();
    let b = app.create("B", true, Some(&a_id), "alice").await;
    let b_id = b["id"].as_str().unwrap().to_string();
    let c = app.create("C", true, Some(&b_id), "alice").await;
    let c_id = c["id"].as_str().unwrap().to_string();
    assert_eq!(c["path"], "home/A/B/C/");

    let uri = format!("/api/items/{a_id}");
    let response = app.request("DELETE", &uri, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "deletedBy is required");

    let response = app.request("DELETE", &uri, Some(json!({"deletedBy": "bob"}))).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("DELETE", &uri, Some(json!({"deletedBy": "alice"}))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"success": true}));

    assert!(app.child_names(None, "name_asc").await.is_empty());
    for id in [b_id, c_id] {
        let response = app
            .request("DELETE", &format!("/api/items/{id}"), Some(json!({"deletedBy": "alice"})))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_listing_sorts_and_params() {
    let app = TestApp::new().await;
    app.create("b-file", false, None, "alice").await;
    app.create("Zeta", true, None, "alice").await;
    app.create("a-file", false, None, "alice").await;
    app.create("alpha", true, None, "alice").await;

    assert_eq!(
        app.child_names(None, "name_asc").await,
        vec!["alpha", "Zeta", "a-file", "b-file"]
    );
    assert_eq!(
        app.child_names(None, "name_desc").await,
        vec!["Zeta", "alpha", "b-file", "a-file"]
    );

    let response = app.request("GET", "/api/items?folderId=null", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 4);

    let response = app.request("GET", "/api/items?sortBy=size_asc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/items?folderId=xyz", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_rewrites_descendants() {
    let app = TestApp::new().await;
    let a = app.create("A", true, None, "alice").await;
    let b = app.create("B", true, None, "alice").await;
    let b_id = b["id"].as_str().unwrap().to_string();
    app.create("notes", false, Some(&b_id), "alice").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/items/{b_id}"),
            Some(json!({
                "updatedBy": "alice",
                "newParentFolderId": a["id"],
                "newPath": "home/A/B/",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["item"]["parent_folder_id"], a["id"]);

    let uri = format!("/api/items?folderId={b_id}");
    let response = app.request("GET", &uri, None).await;
    assert_eq!(response.body["items"][0]["path"], "home/A/B/notes");
}
