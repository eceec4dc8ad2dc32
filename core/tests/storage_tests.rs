/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use bytes::Bytes;
use dept_core::storage::*;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug)]
struct FailingStore;

#[async_trait]
impl ObjectStore for FailingStore {
    async fn put(&self, _key: &str, _body: Bytes, _content_type: &str) -> Result<String, StorageError> {
        Err(StorageError::Rejected(503))
    }
}

#[derive(Debug)]
struct SlowStore;

#[async_trait]
impl ObjectStore for SlowStore {
    async fn put(&self, key: &str, _body: Bytes, _content_type: &str) -> Result<String, StorageError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(format!("https://cdn.example/{}", key))
    }
}

#[derive(Debug)]
struct WorkingStore;

#[async_trait]
impl ObjectStore for WorkingStore {
    async fn put(&self, key: &str, _body: Bytes, _content_type: &str) -> Result<String, StorageError> {
        Ok(format!("https://cdn.example/{}", key))
    }
}

fn temp_store() -> LocalStore {
    let dir = std::env::temp_dir().join(format!("portal-uploads-{}", Uuid::new_v4()));
    LocalStore::new(dir, "/uploads/")
}

#[tokio::test]
async fn test_remote_success_is_reported_as_s3() {
    let local = temp_store();
    let stored = store_upload(
        Some(&WorkingStore),
        &local,
        "news/1-a.png",
        Bytes::from_static(b"png"),
        "image/png",
        Duration::from_secs(1),
    )
    .await
    .unwrap();

    assert_eq!(stored.storage_type, StorageType::S3);
    assert_eq!(stored.url, "https://cdn.example/news/1-a.png");
    assert!(!local.root().join("news/1-a.png").exists());
}

#[tokio::test]
async fn test_failure_falls_back_to_local_disk() {
    let local = temp_store();
    let stored = store_upload(
        Some(&FailingStore),
        &local,
        "faculty/1-photo.jpg",
        Bytes::from_static(b"jpeg bytes"),
        "image/jpeg",
        Duration::from_secs(1),
    )
    .await
    .unwrap();

    assert_eq!(stored.storage_type, StorageType::Local);
    assert_eq!(stored.url, "/uploads/faculty/1-photo.jpg");

    let written = tokio::fs::read(local.root().join("faculty/1-photo.jpg"))
        .await
        .unwrap();
    assert_eq!(written, b"jpeg bytes");

    tokio::fs::remove_dir_all(local.root()).await.unwrap();
}

#[tokio::test]
async fn test_timeout_falls_back_to_local_disk() {
    let local = temp_store();
    let stored = store_upload(
        Some(&SlowStore),
        &local,
        "events/1-poster.png",
        Bytes::from_static(b"poster"),
        "image/png",
        Duration::from_millis(50),
    )
    .await
    .unwrap();

    assert_eq!(stored.storage_type, StorageType::Local);
    tokio::fs::remove_dir_all(local.root()).await.unwrap();
}

#[tokio::test]
async fn test_without_remote_store_writes_locally() {
    let local = temp_store();
    let stored = store_upload(
        None,
        &local,
        "societies/1-logo.svg",
        Bytes::from_static(b"<svg/>"),
        "image/svg+xml",
        Duration::from_secs(1),
    )
    .await
    .unwrap();

    assert_eq!(stored.storage_type, StorageType::Local);
    assert_eq!(stored.key, "societies/1-logo.svg");
    tokio::fs::remove_dir_all(local.root()).await.unwrap();
}

#[tokio::test]
async fn test_local_store_rejects_escaping_keys() {
    let local = temp_store();
    let err = local.save("../outside.txt", b"nope").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
}

#[test]
fn test_upload_key_layout() {
    let key = upload_key("faculty", "My Photo.JPG");
    let (folder, name) = key.split_once('/').unwrap();
    assert_eq!(folder, "faculty");
    assert!(name.ends_with("-My-Photo.JPG"));
}
