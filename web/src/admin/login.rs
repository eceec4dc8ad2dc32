/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::endpoints::auth::login;
use crate::error::WebResult;
use crate::html::{Notice, escape, notice, page};
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use dept_core::consts::{ADMIN_PREFIX, LOGIN_PATH};
use dept_core::session::{clear_session_cookie, session_cookie};
use dept_core::types::ServerState;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn login_page(email: &str, problem: Option<&Notice>) -> Html<String> {
    let body = format!(
        r#"{}<form method="post" action="{}" class="login-form">
<div class="field"><label for="email">Email</label><input type="email" id="email" name="email" value="{}" required></div>
<div class="field"><label for="password">Password</label><input type="password" id="password" name="password" required></div>
<button type="submit">Sign in</button></form>"#,
        notice(problem),
        LOGIN_PATH,
        escape(email)
    );

    Html(page("Sign in", None, &body))
}

pub async fn get_login() -> Html<String> {
    login_page("", None)
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    Form(form): Form<LoginForm>,
) -> WebResult<Response> {
    match login(&state, &form.email, &form.password).await {
        Ok(token) => {
            let cookie =
                session_cookie(&token, state.cli.session_ttl_hours, state.cli.secure_cookies);
            Ok(([(SET_COOKIE, cookie)], Redirect::to(ADMIN_PREFIX)).into_response())
        }
        Err(e) => {
            debug!(error = %e, "admin sign in rejected");
            let problem = Notice::error(e.public_message());
            Ok((e.status(), login_page(&form.email, Some(&problem))).into_response())
        }
    }
}

pub async fn post_logout(state: State<Arc<ServerState>>) -> Response {
    (
        [(SET_COOKIE, clear_session_cookie(state.cli.secure_cookies))],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}
