/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{admin_kind, list_href};
use crate::error::{WebError, WebResult};
use crate::html::{self, FormView, Notice, page};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use dept_core::form::{form_to_json, form_values};
use dept_core::gateway::{self, GatewayError};
use dept_core::resources::{Lookups, Resource, ResourceKind};
use dept_core::session::SessionContext;
use dept_core::types::ServerState;
use dept_core::with_resource;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<'a> {
    Add,
    Edit(&'a str),
}

struct FormPage<'a> {
    kind: ResourceKind,
    mode: FormMode<'a>,
    values: HashMap<String, String>,
    errors: BTreeMap<String, String>,
    notice: Option<Notice>,
}

/// Prefilled values of an empty add form.
pub fn default_values(kind: ResourceKind) -> HashMap<String, String> {
    kind.fields()
        .iter()
        .filter_map(|field| {
            field
                .default
                .map(|value| (field.name.to_string(), value.to_string()))
        })
        .collect()
}

async fn render_form(state: &ServerState, session: &SessionContext, form: FormPage<'_>) -> Html<String> {
    let mut notice = form.notice;

    let lookups = match Lookups::load(&state.db, &form.kind.references()).await {
        Ok(lookups) => lookups,
        Err(e) => {
            error!(kind = form.kind.slug(), error = %e, "failed to load form options");
            notice.get_or_insert_with(|| Notice::error("Failed to load options."));
            Lookups::default()
        }
    };

    let list = list_href(form.kind);
    let (title, action, submit) = match form.mode {
        FormMode::Add => (
            format!("Add {}", form.kind.singular()),
            format!("{}/add", list),
            "Create",
        ),
        FormMode::Edit(id) => (
            format!("Edit {}", form.kind.singular()),
            format!("{}/edit/{}", list, id),
            "Save",
        ),
    };

    let body = format!(
        "{}{}",
        html::notice(notice.as_ref()),
        html::form(&FormView {
            fields: form.kind.fields(),
            values: &form.values,
            errors: &form.errors,
            lookups: &lookups,
            action: &action,
            cancel: &list,
            submit,
        })
    );

    Html(page(&title, Some(session), &body))
}

/// Re-renders the submitted form with the server's error text in place.
async fn rejected(
    state: &ServerState,
    session: &SessionContext,
    kind: ResourceKind,
    mode: FormMode<'_>,
    values: HashMap<String, String>,
    err: GatewayError,
) -> Response {
    let err = WebError::from(err);
    let status = err.status();
    let message = err.public_message();
    let errors = match err {
        WebError::Validation { fields, .. } => fields,
        _ => BTreeMap::new(),
    };

    let form = FormPage {
        kind,
        mode,
        values,
        errors,
        notice: Some(Notice::error(message)),
    };

    (status, render_form(state, session, form).await).into_response()
}

pub async fn get_add(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
    Path(entity): Path<String>,
) -> WebResult<Html<String>> {
    let kind = admin_kind(&entity)?;

    let form = FormPage {
        kind,
        mode: FormMode::Add,
        values: default_values(kind),
        errors: BTreeMap::new(),
        notice: None,
    };

    Ok(render_form(&state, &session, form).await)
}

pub async fn post_add(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
    Path(entity): Path<String>,
    Form(values): Form<HashMap<String, String>>,
) -> WebResult<Response> {
    let kind = admin_kind(&entity)?;
    let body = form_to_json(kind.fields(), &values);

    let result = with_resource!(kind, R => {
        gateway::create_from_json::<R, _>(&state.db, body)
            .await
            .map(|model| R::id(&model).to_string())
    });

    match result {
        Ok(id) => {
            info!(kind = kind.slug(), id = %id, "created record from admin");
            Ok(Redirect::to(&list_href(kind)).into_response())
        }
        Err(e) => Ok(rejected(&state, &session, kind, FormMode::Add, values, e).await),
    }
}

pub async fn get_edit(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
    Path((entity, id)): Path<(String, String)>,
) -> WebResult<Html<String>> {
    let kind = admin_kind(&entity)?;

    let values = with_resource!(kind, R => {
        let model = gateway::get::<R, _>(&state.db, gateway::parse_id::<R>(&id)?).await?;
        form_values(R::fields(), &model)
    });

    let form = FormPage {
        kind,
        mode: FormMode::Edit(&id),
        values,
        errors: BTreeMap::new(),
        notice: None,
    };

    Ok(render_form(&state, &session, form).await)
}

pub async fn post_edit(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
    Path((entity, id)): Path<(String, String)>,
    Form(values): Form<HashMap<String, String>>,
) -> WebResult<Response> {
    let kind = admin_kind(&entity)?;
    let body = form_to_json(kind.fields(), &values);

    let result = with_resource!(kind, R => {
        match gateway::parse_id::<R>(&id) {
            Ok(parsed) => gateway::update_from_json::<R, _>(&state.db, parsed, body)
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        }
    });

    match result {
        Ok(()) => {
            info!(kind = kind.slug(), id = %id, "updated record from admin");
            Ok(Redirect::to(&list_href(kind)).into_response())
        }
        Err(e) => Ok(rejected(&state, &session, kind, FormMode::Edit(&id), values, e).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let values = default_values(ResourceKind::Faculty);
        assert_eq!(values.get("isActive").map(String::as_str), Some("true"));
        assert!(!values.contains_key("name"));

        let values = default_values(ResourceKind::User);
        assert_eq!(values.get("role").map(String::as_str), Some("editor"));
    }
}
