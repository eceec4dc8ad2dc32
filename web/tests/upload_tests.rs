/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;
use dept_core::consts::DEFAULT_DEPARTMENT_ID;
use dept_core::gateway;
use dept_core::resources::Faculty;
use dept_core::storage::{ObjectStore, StorageError, StorageType};
use serde_json::json;
use std::sync::Arc;
use web::endpoints::upload::UploadResponse;
use web::error::ErrorResponse;

#[derive(Debug)]
struct UnavailableStore;

#[async_trait]
impl ObjectStore for UnavailableStore {
    async fn put(&self, _key: &str, _body: Bytes, _content_type: &str) -> Result<String, StorageError> {
        Err(StorageError::Rejected(503))
    }
}

#[derive(Debug)]
struct BucketStore;

#[async_trait]
impl ObjectStore for BucketStore {
    async fn put(&self, key: &str, _body: Bytes, _content_type: &str) -> Result<String, StorageError> {
        Ok(format!("https://bucket.example/{}", key))
    }
}

fn image(folder: &str) -> MultipartForm {
    MultipartForm::new().add_text("folder", folder).add_part(
        "file",
        Part::bytes(b"\x89PNG fake image".to_vec())
            .file_name("My Photo.png")
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn test_failed_object_storage_falls_back_to_local_disk() {
    let app = common::test_app_with_store(Some(Arc::new(UnavailableStore))).await;
    let token = app.token().await;

    let faculty = gateway::create_from_json::<Faculty, _>(
        &app.state.db,
        json!({
            "name": "Dr. Noor",
            "designation": "Lecturer",
            "email": "noor@dept.edu",
            "departmentId": DEFAULT_DEPARTMENT_ID,
        }),
    )
    .await
    .expect("faculty should be created");

    let res = app
        .server
        .post("/api/upload")
        .authorization_bearer(&token)
        .multipart(image("faculty").add_text("entityId", faculty.id.to_string()))
        .await;

    res.assert_status_ok();
    let body = res.json::<UploadResponse>();
    assert!(body.success);
    assert_eq!(body.storage_type, StorageType::Local);
    assert!(body.url.starts_with("/uploads/faculty/"));
    assert!(body.url.ends_with("-My-Photo.png"));
    assert_eq!(body.file_path.as_deref(), Some(body.url.as_str()));

    let relative = body.key.clone();
    assert!(app.upload_dir.join(&relative).exists());

    let stored = gateway::get::<Faculty, _>(&app.state.db, faculty.id)
        .await
        .expect("faculty should still exist");
    assert_eq!(stored.image_url.as_deref(), Some(body.url.as_str()));

    let served = app.server.get(&body.url).await;
    served.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_entity_stores_nothing() {
    let app = common::test_app().await;
    let token = app.token().await;

    for entity_id in [uuid::Uuid::new_v4().to_string(), "not-an-id".to_string()] {
        let res = app
            .server
            .post("/api/upload")
            .authorization_bearer(&token)
            .multipart(image("faculty").add_text("entityId", entity_id))
            .await;

        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }

    let folder = app.upload_dir.join("faculty");
    let stored = std::fs::read_dir(&folder).map(|entries| entries.count()).unwrap_or(0);
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_object_storage_success() {
    let app = common::test_app_with_store(Some(Arc::new(BucketStore))).await;
    let token = app.token().await;

    let res = app
        .server
        .post("/api/upload")
        .authorization_bearer(&token)
        .multipart(image("news"))
        .await;

    res.assert_status_ok();
    let body = res.json::<UploadResponse>();
    assert_eq!(body.storage_type, StorageType::S3);
    assert!(body.url.starts_with("https://bucket.example/news/"));
    assert_eq!(body.file_path, None);
}

#[tokio::test]
async fn test_upload_without_store_is_local() {
    let app = common::test_app().await;
    let token = app.token().await;

    let res = app
        .server
        .post("/api/upload")
        .authorization_bearer(&token)
        .multipart(image("general"))
        .await;

    res.assert_status_ok();
    assert_eq!(res.json::<UploadResponse>().storage_type, StorageType::Local);
}

#[tokio::test]
async fn test_upload_rejections() {
    let app = common::test_app().await;
    let token = app.token().await;

    let res = app.server.post("/api/upload").multipart(image("news")).await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);

    let res = app
        .server
        .post("/api/upload")
        .authorization_bearer(&token)
        .multipart(MultipartForm::new().add_text("folder", "news"))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<ErrorResponse>().error, "No file uploaded");

    let res = app
        .server
        .post("/api/upload")
        .authorization_bearer(&token)
        .multipart(image("../etc"))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .post("/api/upload")
        .authorization_bearer(&token)
        .multipart(image("general").add_text("entityId", "anything"))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .post("/api/upload")
        .authorization_bearer(&token)
        .multipart(MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![0u8; 2048]).file_name("big.bin"),
        ))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}
