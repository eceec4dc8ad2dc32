/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use dept_core::gateway;
use dept_core::resources::ContactSubmission;
use dept_core::types::*;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Public admission inquiry form. Triage fields are dropped so a visitor
/// always creates a `new` submission.
pub async fn post_contact(
    state: State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MContactSubmission>)> {
    let Json(mut body) = body?;

    if let Some(object) = body.as_object_mut() {
        object.remove("status");
        object.remove("adminNotes");
    }

    let submission = gateway::create_from_json::<ContactSubmission, _>(&state.db, body).await?;

    info!(id = %submission.id, "received admission inquiry");
    Ok((StatusCode::CREATED, Json(submission)))
}
