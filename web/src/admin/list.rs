/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{admin_kind, list_href};
use crate::error::{WebError, WebResult};
use crate::html::{self, Notice, page, retry_block};
use axum::Extension;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use dept_core::gateway::{self, GatewayError};
use dept_core::resources::{Lookups, Resource};
use dept_core::session::SessionContext;
use dept_core::table::{DataTable, SortDirection};
use dept_core::types::ServerState;
use dept_core::with_resource;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub table: Option<String>,
}

impl ListQuery {
    /// Applies `?sort=<column>&dir=asc|desc`. Unknown columns are ignored.
    pub fn apply<T>(&self, table: &mut DataTable<T>) {
        let Some(column) = self.sort.as_deref().and_then(|c| c.parse::<usize>().ok()) else {
            return;
        };

        let direction = match self.dir.as_deref() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        table.sort_by(column, direction);
    }
}

pub async fn load_table<R: Resource>(
    db: &DatabaseConnection,
) -> Result<DataTable<R::Model>, GatewayError> {
    let lookups = Lookups::load(db, &R::KIND.references()).await?;
    let rows = gateway::find::<R, _>(db, &HashMap::new()).await?;

    Ok(DataTable::new(
        rows,
        R::columns(&lookups),
        R::KIND.plural(),
        R::KIND.slug(),
        |row: &R::Model| R::id(row).to_string(),
    ))
}

fn render_list<R: Resource>(
    session: &SessionContext,
    table: &DataTable<R::Model>,
    notice: Option<&Notice>,
) -> Html<String> {
    let href = list_href(R::KIND);
    let body = format!(
        r#"{}<p><a class="button" href="{}/add">Add {}</a></p>{}"#,
        html::notice(notice),
        href,
        R::KIND.singular(),
        html::table(table, &href, true)
    );

    Html(page(R::KIND.plural(), Some(session), &body))
}

fn load_failed<R: Resource>(session: &SessionContext, err: GatewayError) -> Response {
    error!(kind = R::KIND.slug(), error = %err, "failed to load admin list");

    let body = retry_block(
        &format!("Failed to load {}.", R::KIND.plural().to_lowercase()),
        &list_href(R::KIND),
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(page(R::KIND.plural(), Some(session), &body)),
    )
        .into_response()
}

async fn list_page<R: Resource>(
    state: &ServerState,
    session: &SessionContext,
    query: &ListQuery,
) -> Response {
    let mut table = match load_table::<R>(&state.db).await {
        Ok(table) => table,
        Err(e) => return load_failed::<R>(session, e),
    };

    query.apply(&mut table);
    render_list::<R>(session, &table, None).into_response()
}

/// Removes the row from the loaded table once the delete succeeds, then
/// reconciles with a fresh read. A failed delete keeps the row and shows
/// the reason.
async fn delete_page<R: Resource>(
    state: &ServerState,
    session: &SessionContext,
    id: &str,
) -> Response {
    let db = &state.db;

    let mut table = match load_table::<R>(db).await {
        Ok(table) => table,
        Err(e) => return load_failed::<R>(session, e),
    };

    let result = table
        .delete_row(id, |id| async move {
            let id = gateway::parse_id::<R>(&id)?;
            gateway::delete::<R, _>(db, id).await
        })
        .await;

    let notice = match result {
        Ok(()) => {
            info!(kind = R::KIND.slug(), id, "deleted record from admin");

            match gateway::find::<R, _>(db, &HashMap::new()).await {
                Ok(fresh) => {
                    if table.reconcile(fresh) {
                        debug!(kind = R::KIND.slug(), "list changed while deleting");
                    }
                }
                Err(e) => warn!(kind = R::KIND.slug(), error = %e, "failed to refresh list"),
            }

            Notice::success(format!("{} deleted.", R::KIND.singular()))
        }
        Err(e) => {
            warn!(kind = R::KIND.slug(), id, error = %e, "admin delete failed");
            Notice::error(format!(
                "Failed to delete {}: {}",
                R::KIND.singular().to_lowercase(),
                WebError::from(e).public_message()
            ))
        }
    };

    let status = match notice.level {
        html::NoticeLevel::Success => StatusCode::OK,
        html::NoticeLevel::Error => StatusCode::BAD_REQUEST,
    };

    (status, render_list::<R>(session, &table, Some(&notice))).into_response()
}

pub async fn get_list(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
    Path(entity): Path<String>,
    Query(query): Query<ListQuery>,
) -> WebResult<Response> {
    let kind = admin_kind(&entity)?;
    Ok(with_resource!(kind, R => list_page::<R>(&state, &session, &query).await))
}

pub async fn post_delete(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
    Path((entity, id)): Path<(String, String)>,
) -> WebResult<Response> {
    let kind = admin_kind(&entity)?;
    Ok(with_resource!(kind, R => delete_page::<R>(&state, &session, &id).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dept_core::table::TableColumn;
    use serde_json::{Value, json};

    fn table() -> DataTable<Value> {
        DataTable::new(
            vec![json!({"id": "1", "name": "b"}), json!({"id": "2", "name": "a"})],
            vec![TableColumn::path("Name", "name")],
            "Faculty",
            "faculty",
            |row: &Value| row["id"].as_str().unwrap_or_default().to_string(),
        )
    }

    #[test]
    fn test_list_query_sorts() {
        let mut table = table();
        let query = ListQuery {
            sort: Some("0".to_string()),
            dir: Some("desc".to_string()),
            table: None,
        };

        query.apply(&mut table);
        let state = table.sort_state().map(|state| (state.column, state.direction));
        assert_eq!(state, Some((0, SortDirection::Desc)));
    }

    #[test]
    fn test_list_query_ignores_bad_column() {
        let mut table = table();
        let query = ListQuery {
            sort: Some("9".to_string()),
            ..Default::default()
        };

        query.apply(&mut table);
        assert!(table.sort_state().is_none());

        let query = ListQuery {
            sort: Some("name".to_string()),
            ..Default::default()
        };

        query.apply(&mut table);
        assert!(table.sort_state().is_none());
    }
}
