/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Admin area: dashboard, sortable entity lists and add/edit forms.
//! Every page except the login form sits behind the session guard, so
//! handlers can rely on the [`SessionContext`] extension.

pub mod form;
pub mod list;
pub mod login;
pub mod messages;

use crate::error::{WebError, WebResult};
use crate::html::page;
use axum::Extension;
use axum::extract::State;
use axum::response::Html;
use dept_core::resources::ResourceKind;
use dept_core::session::SessionContext;
use dept_core::types::ServerState;
use std::fmt::Write;
use std::sync::Arc;

/// Entity behind an `/admin/{entity}` segment.
pub fn admin_kind(entity: &str) -> WebResult<ResourceKind> {
    ResourceKind::from_slug(entity).ok_or_else(|| WebError::not_found("Page"))
}

pub fn list_href(kind: ResourceKind) -> String {
    format!("/admin/{}", kind.slug())
}

pub async fn get_dashboard(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
) -> WebResult<Html<String>> {
    let mut cards = String::from(r#"<div class="cards">"#);

    for kind in ResourceKind::ALL {
        let count = kind.count(&state.db).await?;
        let _ = write!(
            cards,
            r#"<a class="card" href="{}"><strong>{}</strong> {}</a> "#,
            list_href(kind),
            count,
            kind.plural()
        );
    }

    cards.push_str("</div>");

    Ok(Html(page("Dashboard", Some(&session), &cards)))
}
