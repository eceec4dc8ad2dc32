/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use dept_core::input::check_folder_name;
use dept_core::resources::ResourceKind;
use dept_core::storage::{StorageType, store_upload, upload_key};
use dept_core::types::ServerState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_FOLDER: &str = "general";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub key: String,
    pub storage_type: StorageType,
}

struct UploadedFile {
    name: String,
    content_type: String,
    data: Bytes,
}

/// Entity whose `imageUrl` a folder's files belong to.
pub fn folder_owner(folder: &str) -> Option<ResourceKind> {
    ResourceKind::from_slug(folder).filter(ResourceKind::has_image)
}

/// Accepts `file`, `folder` and an optional `entityId`. Object storage is
/// tried first; the file lands on local disk when it is unavailable.
pub async fn post_upload(
    state: State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> WebResult<Json<UploadResponse>> {
    let mut file: Option<UploadedFile> = None;
    let mut folder: Option<String> = None;
    let mut entity_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;

                file = Some(UploadedFile {
                    name,
                    content_type,
                    data,
                });
            }
            Some("folder") => folder = Some(field.text().await?.trim().to_string()),
            Some("entityId") => {
                entity_id = Some(field.text().await?.trim().to_string()).filter(|id| !id.is_empty())
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| WebError::BadRequest("No file uploaded".to_string()))?;

    if file.data.is_empty() {
        return Err(WebError::BadRequest("Uploaded file is empty".to_string()));
    }

    if file.data.len() > state.cli.max_upload_bytes {
        return Err(WebError::BadRequest(format!(
            "File exceeds the maximum size of {} bytes",
            state.cli.max_upload_bytes
        )));
    }

    let folder = folder
        .filter(|folder| !folder.is_empty())
        .unwrap_or_else(|| DEFAULT_FOLDER.to_string());

    check_folder_name(&folder)
        .map_err(|e| WebError::BadRequest(format!("Invalid folder: {}", e)))?;

    let owner = folder_owner(&folder);

    if entity_id.is_some() && owner.is_none() {
        return Err(WebError::BadRequest(format!(
            "Folder {} does not belong to an entity",
            folder
        )));
    }

    if let (Some(owner), Some(entity_id)) = (owner, entity_id.as_deref()) {
        owner.ensure_exists(&state.db, entity_id).await?;
    }

    let key = upload_key(&folder, &file.name);
    let stored = store_upload(
        state.store.as_deref(),
        &state.cli.local_store(),
        &key,
        file.data,
        &file.content_type,
        state.cli.upload_timeout(),
    )
    .await?;

    info!(key = %stored.key, storage = stored.storage_type.as_str(), "stored upload");

    if let (Some(owner), Some(entity_id)) = (owner, entity_id) {
        owner
            .attach_image(&state.db, &entity_id, stored.url.clone())
            .await?;
    }

    let file_path = match stored.storage_type {
        StorageType::Local => Some(stored.url.clone()),
        StorageType::S3 => None,
    };

    Ok(Json(UploadResponse {
        success: true,
        url: stored.url,
        file_path,
        key: stored.key,
        storage_type: stored.storage_type,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_owner() {
        assert_eq!(folder_owner("faculty"), Some(ResourceKind::Faculty));
        assert_eq!(folder_owner("news"), Some(ResourceKind::News));
        assert_eq!(folder_owner("events"), Some(ResourceKind::Event));
        assert_eq!(folder_owner("programs"), None);
        assert_eq!(folder_owner("general"), None);
    }
}
