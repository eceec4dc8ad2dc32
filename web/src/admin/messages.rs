/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::list::ListQuery;
use crate::html::{self, page, retry_block};
use axum::Extension;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use dept_core::gateway::GatewayError;
use dept_core::messages::{MessageKind, MessageListing, list_messages};
use dept_core::resources::{Lookups, ResourceKind};
use dept_core::session::SessionContext;
use dept_core::table::{DataTable, TableColumn};
use dept_core::types::ServerState;
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

fn row_id(row: &Value) -> String {
    row.get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub fn chairperson_table(listing: &MessageListing, lookups: &Lookups) -> DataTable<Value> {
    DataTable::new(
        listing.chairperson_rows(lookups),
        vec![
            TableColumn::path("Name", "name"),
            TableColumn::path("Title", "title"),
            TableColumn::path("Department", "department.name"),
            TableColumn::path("Updated", "updatedAt"),
        ],
        ResourceKind::ChairpersonMessage.plural(),
        ResourceKind::ChairpersonMessage.slug(),
        row_id,
    )
}

pub fn vice_chancellor_table(listing: &MessageListing) -> DataTable<Value> {
    DataTable::new(
        listing.vice_chancellor_rows(),
        vec![
            TableColumn::path("Name", "name"),
            TableColumn::path("Title", "title"),
            TableColumn::path("Updated", "updatedAt"),
        ],
        ResourceKind::ViceChancellorMessage.plural(),
        ResourceKind::ViceChancellorMessage.slug(),
        row_id,
    )
}

async fn load(state: &ServerState) -> Result<(MessageListing, Lookups), GatewayError> {
    let listing = list_messages(&state.db).await?;
    let lookups = Lookups::load(&state.db, &[ResourceKind::Department]).await?;
    Ok((listing, lookups))
}

fn section(kind: MessageKind, table: &DataTable<Value>) -> String {
    let slug = kind.resource().slug();

    format!(
        r#"<section><h2>{}</h2><p><a class="button" href="/admin/{}/add">Add {}</a></p>{}</section>"#,
        kind.resource().plural(),
        slug,
        kind.resource().singular(),
        html::table(table, &format!("/admin/messages?table={}", kind.as_str()), true)
    )
}

/// Both message collections, read together, each in its own sortable table.
pub async fn get_messages(
    state: State<Arc<ServerState>>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<ListQuery>,
) -> Response {
    let (listing, lookups) = match load(&state).await {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(error = %e, "failed to load messages");
            let body = retry_block("Failed to load messages.", "/admin/messages");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(page("Messages", Some(&session), &body)),
            )
                .into_response();
        }
    };

    let mut chairperson = chairperson_table(&listing, &lookups);
    let mut vice_chancellor = vice_chancellor_table(&listing);

    match query.table.as_deref().and_then(|t| t.parse::<MessageKind>().ok()) {
        Some(MessageKind::Chairperson) => query.apply(&mut chairperson),
        Some(MessageKind::ViceChancellor) => query.apply(&mut vice_chancellor),
        None => {}
    }

    let body = format!(
        "{}{}",
        section(MessageKind::Chairperson, &chairperson),
        section(MessageKind::ViceChancellor, &vice_chancellor)
    );

    Html(page("Messages", Some(&session), &body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dept_core::table::CellValue;
    use serde_json::json;

    #[test]
    fn test_department_column_reads_nested_path() {
        let rows = vec![
            json!({"id": "a", "name": "Dr. A", "department": {"id": "d", "name": "Physics"}}),
            json!({"id": "b", "name": "Dr. B", "department": null}),
        ];

        let table = DataTable::new(
            rows,
            vec![TableColumn::path("Department", "department.name")],
            "Chairperson Messages",
            "chairperson-messages",
            row_id,
        );

        let cells: Vec<Vec<CellValue>> = table.rows().into_iter().map(|row| table.cells(row)).collect();
        assert_eq!(cells[0][0], CellValue::Text("Physics".to_string()));
        assert_eq!(cells[1][0], CellValue::Null);
        assert_eq!(table.edit_href(table.rows()[0]), "/admin/chairperson-messages/edit/a");
    }
}
