/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebError;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use dept_core::consts::LOGIN_PATH;
use dept_core::session::{
    GuardOutcome, SessionContext, SessionError, guard, resolve_session, token_from_authorization,
    token_from_cookies,
};
use dept_core::types::ServerState;
use std::sync::Arc;
use tracing::debug;

/// Session cookie first, then a bearer token.
pub fn request_token(headers: &HeaderMap) -> Option<String> {
    let from_cookie = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_cookies);

    if let Some(token) = from_cookie {
        return Some(token.to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_authorization)
        .map(str::to_string)
}

/// Resolves the caller's session and applies the access rules to every
/// request. Admin pages redirect to the login form, API calls get a 401.
pub async fn session_guard(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let session = match request_token(req.headers()) {
        Some(token) => match resolve_session(&state.db, &state.session_secret, &token).await {
            Ok(session) => Some(session),
            Err(SessionError::Database(err)) => return WebError::Database(err).into_response(),
            Err(e) => {
                debug!(error = %e, "ignoring invalid session token");
                None
            }
        },
        None => None,
    };

    let outcome = guard(
        req.method().as_str(),
        req.uri().path(),
        session.is_some(),
    );

    match outcome {
        GuardOutcome::Allow => {}
        GuardOutcome::RedirectToLogin => {
            debug!(path = %req.uri().path(), "redirecting anonymous request to login");
            return Redirect::to(LOGIN_PATH).into_response();
        }
        GuardOutcome::Unauthorized => {
            return WebError::authentication_required().into_response();
        }
    }

    if let Some(session) = session {
        req.extensions_mut().insert::<SessionContext>(session);
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_token_prefers_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; portal_session=from-cookie"),
        );
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));

        assert_eq!(request_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_request_token_falls_back_to_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));

        assert_eq!(request_token(&headers).as_deref(), Some("from-header"));
        assert_eq!(request_token(&HeaderMap::new()), None);
    }
}
