/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use dept_core::session::{
    SessionContext, authenticate, clear_session_cookie, encode_session, session_cookie,
};
use dept_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

/// Signs a user in. The token is returned in the body and set as cookie.
pub async fn post_login(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(body) = body?;
    let token = login(&state, &body.email, &body.password).await?;
    let cookie = session_cookie(&token, state.cli.session_ttl_hours, state.cli.secure_cookies);

    let res = BaseResponse {
        error: false,
        message: token,
    };

    Ok(([(SET_COOKIE, cookie)], Json(res)).into_response())
}

pub async fn post_logout(state: State<Arc<ServerState>>) -> Response {
    let res = BaseResponse {
        error: false,
        message: "Logged out".to_string(),
    };

    (
        [(SET_COOKIE, clear_session_cookie(state.cli.secure_cookies))],
        Json(res),
    )
        .into_response()
}

pub async fn get_session(Extension(session): Extension<SessionContext>) -> Json<SessionContext> {
    Json(session)
}

/// Verifies credentials and issues a session token.
pub async fn login(state: &ServerState, email: &str, password: &str) -> WebResult<String> {
    let user = authenticate(&state.db, email, password).await?;
    let token = encode_session(&state.session_secret, &user, state.cli.session_ttl_hours)?;

    info!(user = %user.id, "user signed in");
    Ok(token)
}
