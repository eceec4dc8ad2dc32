/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Signed session tokens and the access rules built on them.

use crate::consts::*;
use crate::resources::ResourceKind;
use crate::types::*;
use chrono::{Duration, Utc};
use entity::user::Role;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_auth::verify_password;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Session is invalid or expired")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Session user no longer exists")]
    UnknownUser,
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
    pub role: Role,
}

/// The signed-in user attached to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub expires_at: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    Unauthorized,
}

pub fn encode_session(secret: &str, user: &MUser, ttl_hours: i64) -> Result<String, SessionError> {
    let now = Utc::now();
    let exp = (now + Duration::hours(ttl_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = Claims {
        exp,
        iat,
        id: user.id,
        role: user.role,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

pub fn decode_session(secret: &str, token: &str) -> Result<Claims, SessionError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

pub async fn authenticate<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<MUser, SessionError> {
    let user = EUser::find()
        .filter(CUser::Email.eq(email.trim().to_lowercase()))
        .one(db)
        .await?
        .ok_or(SessionError::InvalidCredentials)?;

    verify_password(password, &user.password).map_err(|_| SessionError::InvalidCredentials)?;

    Ok(user)
}

/// Decodes a token and loads the user behind it.
pub async fn resolve_session<C: ConnectionTrait>(
    db: &C,
    secret: &str,
    token: &str,
) -> Result<SessionContext, SessionError> {
    let claims = decode_session(secret, token)?;

    let user = EUser::find_by_id(claims.id)
        .one(db)
        .await?
        .ok_or(SessionError::UnknownUser)?;

    Ok(SessionContext {
        user_id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
        expires_at: claims.exp,
    })
}

pub fn token_from_cookies(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

pub fn token_from_authorization(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

pub fn session_cookie(token: &str, ttl_hours: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl_hours * 3600
    );

    if secure {
        cookie.push_str("; Secure");
    }

    cookie
}

pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE);

    if secure {
        cookie.push_str("; Secure");
    }

    cookie
}

pub fn is_login_path(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}

pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with(&format!("{}/", ADMIN_PREFIX))
}

/// Whether an API call needs a signed-in user. Reads of public
/// collections, authentication and the public contact form are open.
pub fn api_requires_session(method: &str, path: &str) -> bool {
    let Some(rest) = path.strip_prefix(API_PREFIX) else {
        return false;
    };

    let mut segments = rest.trim_matches('/').split('/');
    let collection = segments.next().unwrap_or_default();

    match (method, collection) {
        (_, "auth") => rest.trim_end_matches('/') == "/auth/session",
        (_, "health") => false,
        ("POST", "contact") => false,
        ("GET" | "HEAD", "messages") => false,
        ("GET" | "HEAD", collection) => ResourceKind::from_slug(collection)
            .map(|kind| !kind.public_read())
            .unwrap_or(false),
        _ => true,
    }
}

/// Decides what happens to a request given whether it carries a valid session.
pub fn guard(method: &str, path: &str, authenticated: bool) -> GuardOutcome {
    if authenticated {
        return GuardOutcome::Allow;
    }

    if is_admin_path(path) && !is_login_path(path) {
        return GuardOutcome::RedirectToLogin;
    }

    if api_requires_session(method, path) {
        return GuardOutcome::Unauthorized;
    }

    GuardOutcome::Allow
}
