/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dept_core::gateway::GatewayError;
use dept_core::session::SessionError;
use dept_core::storage::StorageError;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Body of every failed API call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Constraint(String),
    Validation {
        message: String,
        fields: BTreeMap<String, String>,
    },
    Database(DbErr),
    Storage(StorageError),
    JsonParsing(JsonRejection),
    FormParsing(FormRejection),
    Multipart(MultipartError),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Constraint(msg) => write!(f, "Constraint violation: {}", msg),
            WebError::Validation { message, .. } => write!(f, "Validation error: {}", message),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::Storage(err) => write!(f, "Storage error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::FormParsing(err) => write!(f, "Form parsing error: {}", err),
            WebError::Multipart(err) => write!(f, "Multipart error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::Storage(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::FormParsing(err) => Some(err),
            WebError::Multipart(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<GatewayError> for WebError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Validation { message, fields } => WebError::Validation { message, fields },
            GatewayError::NotFound(_) => WebError::NotFound(err.to_string()),
            GatewayError::Constraint(msg) => WebError::Constraint(msg),
            GatewayError::Database(err) => WebError::Database(err),
        }
    }
}

impl From<SessionError> for WebError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Database(err) => WebError::Database(err),
            err => WebError::Unauthorized(err.to_string()),
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<StorageError> for WebError {
    fn from(err: StorageError) -> Self {
        WebError::Storage(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<FormRejection> for WebError {
    fn from(err: FormRejection) -> Self {
        WebError::FormParsing(err)
    }
}

impl From<MultipartError> for WebError {
    fn from(err: MultipartError) -> Self {
        WebError::Multipart(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_)
            | WebError::Constraint(_)
            | WebError::Validation { .. }
            | WebError::JsonParsing(_)
            | WebError::FormParsing(_) => StatusCode::BAD_REQUEST,
            WebError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Multipart(err) => err.status(),
            WebError::Database(_) | WebError::Storage(_) | WebError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to a client. Server side failures are logged
    /// and replaced by a generic text.
    pub fn public_message(&self) -> String {
        match self {
            WebError::BadRequest(msg)
            | WebError::Unauthorized(msg)
            | WebError::NotFound(msg)
            | WebError::Constraint(msg) => msg.clone(),
            WebError::Validation { message, .. } => message.clone(),
            WebError::JsonParsing(err) => format!("Invalid JSON: {}", err.body_text()),
            WebError::FormParsing(err) => format!("Invalid form: {}", err.body_text()),
            WebError::Multipart(err) => format!("Invalid upload: {}", err.body_text()),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                "Database error".to_string()
            }
            WebError::Storage(err) => {
                tracing::error!("Storage error: {}", err);
                "Failed to store file".to_string()
            }
            WebError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                "Internal server error".to_string()
            }
        }
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn id_required() -> Self {
        WebError::BadRequest("id is required".to_string())
    }

    pub fn authentication_required() -> Self {
        WebError::Unauthorized("Authentication required".to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.public_message();
        let fields = match self {
            WebError::Validation { fields, .. } => fields,
            _ => BTreeMap::new(),
        };

        (status, Json(ErrorResponse { error, fields })).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_errors_keep_their_status() {
        let not_found: WebError = GatewayError::NotFound("Faculty member").into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.public_message(), "Faculty member not found");

        let constraint: WebError =
            GatewayError::Constraint("Department 1 does not exist".to_string()).into();
        assert_eq!(constraint.status(), StatusCode::BAD_REQUEST);

        let validation: WebError = GatewayError::validation("Name is required").into();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.public_message(), "Name is required");
    }

    #[test]
    fn test_database_errors_are_hidden() {
        let err = WebError::Database(DbErr::Custom("relation does not exist".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Database error");
    }

    #[test]
    fn test_session_errors_are_unauthorized() {
        let err: WebError = SessionError::InvalidCredentials.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.public_message(), "Invalid email or password");
    }
}
