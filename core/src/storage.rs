/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! File uploads: a remote object store with a local disk fallback.

use crate::input::{load_secret, sanitize_file_name};
use crate::types::Cli;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Object storage rejected upload with status {0}")]
    Rejected(u16),
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug {
    /// Stores `body` under `key` and returns its public URL.
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<String, StorageError>;
}

/// S3 compatible bucket reached through plain HTTP `PUT` requests.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    client: Client,
    endpoint: String,
    bucket: String,
    access_key_id: String,
    secret_access_key: String,
    public_url: Option<String>,
}

impl HttpObjectStore {
    pub fn new(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        public_url: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            public_url: public_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    /// Returns `None` unless endpoint, bucket and credentials are all configured.
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        let endpoint = cli.s3_endpoint.clone()?;
        let bucket = cli.s3_bucket.clone();
        let access_key_id = cli.s3_access_key_id.clone();
        let secret = cli
            .s3_secret_access_key_file
            .as_deref()
            .map(load_secret)
            .filter(|secret| !secret.is_empty());

        match (bucket, access_key_id, secret) {
            (Some(bucket), Some(access_key_id), Some(secret)) => Some(Self::new(
                endpoint,
                bucket,
                access_key_id,
                secret,
                cli.s3_public_url.clone(),
            )),
            _ => {
                warn!("S3_ENDPOINT is set but bucket or credentials are missing, uploads will be stored locally");
                None
            }
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<String, StorageError> {
        let response = self
            .client
            .put(self.object_url(key))
            .basic_auth(&self.access_key_id, Some(&self.secret_access_key))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::Rejected(response.status().as_u16()));
        }

        Ok(match &self.public_url {
            Some(public_url) => format!("{}/{}", public_url, key),
            None => self.object_url(key),
        })
    }
}

/// Files written below a directory that is served under `url_prefix`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    url_prefix: String,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            root: root.into(),
            url_prefix: format!("/{}", url_prefix.trim_matches('/')),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub async fn save(&self, key: &str, body: &[u8]) -> Result<String, StorageError> {
        let relative = Path::new(key);

        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let path = self.root.join(relative);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&path, body).await?;
        debug!(path = %path.display(), "stored upload on local disk");

        Ok(format!("{}/{}", self.url_prefix, key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    S3,
    Local,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::S3 => "s3",
            StorageType::Local => "local",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub url: String,
    pub key: String,
    pub storage_type: StorageType,
}

/// `{folder}/{unix millis}-{sanitized name}`
pub fn upload_key(folder: &str, file_name: &str) -> String {
    format!(
        "{}/{}-{}",
        folder,
        Utc::now().timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

/// Tries the remote store first and falls back to local disk when it is not
/// configured, fails or does not answer within `timeout`.
pub async fn store_upload(
    remote: Option<&dyn ObjectStore>,
    local: &LocalStore,
    key: &str,
    body: Bytes,
    content_type: &str,
    timeout: Duration,
) -> Result<StoredFile, StorageError> {
    if let Some(remote) = remote {
        match tokio::time::timeout(timeout, remote.put(key, body.clone(), content_type)).await {
            Ok(Ok(url)) => {
                return Ok(StoredFile {
                    url,
                    key: key.to_string(),
                    storage_type: StorageType::S3,
                });
            }
            Ok(Err(e)) => warn!(error = %e, key, "object storage upload failed, using local disk"),
            Err(_) => warn!(key, "object storage upload timed out, using local disk"),
        }
    }

    let url = local.save(key, &body).await?;

    Ok(StoredFile {
        url,
        key: key.to_string(),
        storage_type: StorageType::Local,
    })
}
