/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Collection endpoints shared by every administrable entity.
//!
//! `GET /api/{slug}` lists (optionally narrowed by `?id=` or filters),
//! `POST` creates, `PUT` updates the record named by the body's `id` and
//! `DELETE ?id=` removes one.

use super::SuccessResponse;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dept_core::gateway;
use dept_core::resources::Resource;
use dept_core::types::ServerState;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize, Debug, Default)]
pub struct IdQuery {
    pub id: Option<String>,
}

pub fn routes<R: Resource>() -> Router<Arc<ServerState>> {
    let base = format!("/api/{}", R::KIND.slug());

    Router::new()
        .route(
            &base,
            get(list::<R>)
                .post(create::<R>)
                .put(update::<R>)
                .delete(remove::<R>),
        )
        .route(&format!("{}/{{id}}", base), get(get_one::<R>))
}

pub async fn list<R: Resource>(
    state: State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> WebResult<Response> {
    if let Some(id) = params.get("id").filter(|id| !id.trim().is_empty()) {
        let model = gateway::get::<R, _>(&state.db, gateway::parse_id::<R>(id)?).await?;
        return Ok(Json(model).into_response());
    }

    let models = gateway::find::<R, _>(&state.db, &params).await?;
    Ok(Json(models).into_response())
}

pub async fn get_one<R: Resource>(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<R::Model>> {
    let model = gateway::get::<R, _>(&state.db, gateway::parse_id::<R>(&id)?).await?;
    Ok(Json(model))
}

pub async fn create<R: Resource>(
    state: State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<(StatusCode, Json<R::Model>)> {
    let Json(body) = body?;
    let model = gateway::create_from_json::<R, _>(&state.db, body).await?;

    info!(kind = R::KIND.slug(), id = %R::id(&model), "created record");
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn update<R: Resource>(
    state: State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<Json<R::Model>> {
    let Json(mut body) = body?;
    let id = take_id(&mut body)?;
    let id = gateway::parse_id::<R>(&id)?;
    let model = gateway::update_from_json::<R, _>(&state.db, id, body).await?;

    info!(kind = R::KIND.slug(), id = %R::id(&model), "updated record");
    Ok(Json(model))
}

pub async fn remove<R: Resource>(
    state: State<Arc<ServerState>>,
    Query(query): Query<IdQuery>,
) -> WebResult<Json<SuccessResponse>> {
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(WebError::id_required)?;

    gateway::delete::<R, _>(&state.db, gateway::parse_id::<R>(&id)?).await?;

    info!(kind = R::KIND.slug(), id = %id, "deleted record");
    Ok(Json(SuccessResponse { success: true }))
}

/// Removes the `id` member from an update body. Numeric ids are accepted too.
pub fn take_id(body: &mut Value) -> WebResult<String> {
    match body.as_object_mut().and_then(|object| object.remove("id")) {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(id),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(WebError::id_required()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_id() {
        let mut body = json!({"id": "abc", "name": "x"});
        assert_eq!(take_id(&mut body).ok().as_deref(), Some("abc"));
        assert_eq!(body, json!({"name": "x"}));

        let mut body = json!({"id": 7});
        assert_eq!(take_id(&mut body).ok().as_deref(), Some("7"));

        let mut body = json!({"name": "x"});
        assert!(take_id(&mut body).is_err());

        let mut body = json!({"id": ""});
        assert!(take_id(&mut body).is_err());
    }
}
