/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! `/api/messages` serves both message collections. Without a `type` a GET
//! returns `{chairperson, viceChancellor}`; writes pick the collection from
//! the `type` member of the body or the query.

use super::crud;
use super::SuccessResponse;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dept_core::messages::{MessageKind, list_messages};
use dept_core::resources::{ChairpersonMessage, ViceChancellorMessage};
use dept_core::types::ServerState;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Deserialize, Debug, Default)]
pub struct MessageQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
}

fn parse_kind(kind: &str) -> WebResult<MessageKind> {
    kind.parse()
        .map_err(|_| WebError::BadRequest(format!("Unknown message type: {}", kind)))
}

/// Removes `type` from a write body.
fn take_kind(body: &mut Value, query: &MessageQuery) -> WebResult<MessageKind> {
    let from_body = body
        .as_object_mut()
        .and_then(|object| object.remove("type"))
        .and_then(|kind| kind.as_str().map(str::to_string));

    match from_body.or_else(|| query.kind.clone()) {
        Some(kind) => parse_kind(&kind),
        None => Err(WebError::BadRequest("type is required".to_string())),
    }
}

fn narrow(query: &MessageQuery) -> Query<HashMap<String, String>> {
    let mut params = HashMap::new();

    if let Some(id) = &query.id {
        params.insert("id".to_string(), id.clone());
    }

    Query(params)
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(query): Query<MessageQuery>,
) -> WebResult<Response> {
    match query.kind.as_deref().map(parse_kind).transpose()? {
        Some(MessageKind::Chairperson) => {
            crud::list::<ChairpersonMessage>(state, narrow(&query)).await
        }
        Some(MessageKind::ViceChancellor) => {
            crud::list::<ViceChancellorMessage>(state, narrow(&query)).await
        }
        None if query.id.is_some() => {
            Err(WebError::BadRequest("type is required".to_string()))
        }
        None => Ok(Json(list_messages(&state.db).await?).into_response()),
    }
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Query(query): Query<MessageQuery>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<Response> {
    let Json(mut body) = body?;
    let kind = take_kind(&mut body, &query)?;

    let created = match kind {
        MessageKind::Chairperson => crud::create::<ChairpersonMessage>(state, Ok(Json(body)))
            .await?
            .into_response(),
        MessageKind::ViceChancellor => {
            crud::create::<ViceChancellorMessage>(state, Ok(Json(body)))
                .await?
                .into_response()
        }
    };

    Ok(created)
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Query(query): Query<MessageQuery>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<Response> {
    let Json(mut body) = body?;
    let kind = take_kind(&mut body, &query)?;

    let updated = match kind {
        MessageKind::Chairperson => crud::update::<ChairpersonMessage>(state, Ok(Json(body)))
            .await?
            .into_response(),
        MessageKind::ViceChancellor => {
            crud::update::<ViceChancellorMessage>(state, Ok(Json(body)))
                .await?
                .into_response()
        }
    };

    Ok(updated)
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Query(query): Query<MessageQuery>,
) -> WebResult<Json<SuccessResponse>> {
    let kind = match query.kind.as_deref() {
        Some(kind) => parse_kind(kind)?,
        None => return Err(WebError::BadRequest("type is required".to_string())),
    };

    let id = Query(crud::IdQuery {
        id: query.id.clone(),
    });

    match kind {
        MessageKind::Chairperson => crud::remove::<ChairpersonMessage>(state, id).await,
        MessageKind::ViceChancellor => crud::remove::<ViceChancellorMessage>(state, id).await,
    }
}
