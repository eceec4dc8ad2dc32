/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Sortable admin table over any row type.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 3,
            CellValue::Bool(_) => 0,
            CellValue::Number(_) => 1,
            CellValue::Text(_) => 2,
        }
    }

    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(true) => write!(f, "Yes"),
            CellValue::Bool(false) => write!(f, "No"),
            CellValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Text(value.format("%Y-%m-%d %H:%M").to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Null),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Follows a dotted path like `department.name` through nested objects.
/// Any missing or non-object step yields `None`.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
}

pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

pub struct TableColumn<T> {
    pub header: String,
    accessor: Accessor<T>,
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for TableColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl<T> TableColumn<T> {
    pub fn new(
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            accessor: Arc::new(accessor),
        }
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

impl TableColumn<Value> {
    pub fn path(header: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(header, move |row: &Value| {
            resolve_path(row, &path)
                .map(CellValue::from)
                .unwrap_or(CellValue::Null)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

/// Rows in insertion order plus the columns and sort state needed to
/// render them. Sorting never reorders the stored rows, only the view.
pub struct DataTable<T> {
    rows: Vec<T>,
    columns: Vec<TableColumn<T>>,
    entity_name: String,
    entity_path: String,
    primary_key: KeyFn<T>,
    sort: Option<SortState>,
}

impl<T> DataTable<T> {
    pub fn new(
        rows: Vec<T>,
        columns: Vec<TableColumn<T>>,
        entity_name: impl Into<String>,
        entity_path: impl Into<String>,
        primary_key: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            rows,
            columns,
            entity_name: entity_name.into(),
            entity_path: entity_path.into(),
            primary_key: Arc::new(primary_key),
            sort: None,
        }
    }

    pub fn columns(&self) -> &[TableColumn<T>] {
        &self.columns
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn empty_message(&self) -> String {
        format!("No {} found.", self.entity_name.to_lowercase())
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    /// Returns false and leaves the table unsorted for an unknown column.
    pub fn sort_by(&mut self, column: usize, direction: SortDirection) -> bool {
        if column >= self.columns.len() {
            return false;
        }

        self.sort = Some(SortState { column, direction });
        true
    }

    /// Sort state after clicking `column`: the same column flips, another starts ascending.
    pub fn next_sort(&self, column: usize) -> SortState {
        match self.sort {
            Some(state) if state.column == column => SortState {
                column,
                direction: state.direction.flip(),
            },
            _ => SortState {
                column,
                direction: SortDirection::Asc,
            },
        }
    }

    pub fn toggle_sort(&mut self, column: usize) -> bool {
        let next = self.next_sort(column);
        self.sort_by(next.column, next.direction)
    }

    pub fn key(&self, row: &T) -> String {
        (self.primary_key)(row)
    }

    /// Rows in display order. Nulls go last regardless of direction and
    /// equal values keep their insertion order.
    pub fn rows(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self.rows.iter().collect();

        let Some(SortState { column, direction }) = self.sort else {
            return rows;
        };

        let Some(column) = self.columns.get(column) else {
            return rows;
        };

        rows.sort_by(|a, b| {
            let (a, b) = (column.value(a), column.value(b));

            match (a.is_null(), b.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => match direction {
                    SortDirection::Asc => a.compare(&b),
                    SortDirection::Desc => b.compare(&a),
                },
            }
        });

        rows
    }

    pub fn cells(&self, row: &T) -> Vec<CellValue> {
        self.columns.iter().map(|column| column.value(row)).collect()
    }

    pub fn edit_href(&self, row: &T) -> String {
        format!("/admin/{}/edit/{}", self.entity_path, self.key(row))
    }

    pub fn delete_href(&self, row: &T) -> String {
        format!("/admin/{}/delete/{}", self.entity_path, self.key(row))
    }

    /// Runs `on_delete` and drops the row locally once it succeeds.
    /// On failure the row stays and the error is handed back.
    pub async fn delete_row<F, Fut, E>(&mut self, id: &str, on_delete: F) -> Result<(), E>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        on_delete(id.to_string()).await?;

        let primary_key = Arc::clone(&self.primary_key);
        self.rows.retain(|row| primary_key(row) != id);
        Ok(())
    }

    /// Replaces local rows with a fresh fetch. Returns true when the set of
    /// keys differs from what the table held.
    pub fn reconcile(&mut self, fresh: Vec<T>) -> bool {
        let mut local: Vec<String> = self.rows.iter().map(|row| self.key(row)).collect();
        let mut remote: Vec<String> = fresh.iter().map(|row| self.key(row)).collect();
        local.sort();
        remote.sort();

        self.rows = fresh;
        local != remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn people() -> DataTable<Value> {
        DataTable::new(
            vec![
                json!({"id": "1", "name": "Bilal", "age": 40, "department": {"name": "CS"}}),
                json!({"id": "2", "name": "ayesha", "age": null, "department": null}),
                json!({"id": "3", "name": "Zara", "age": 31, "department": {"name": "EE"}}),
                json!({"id": "4", "name": "Bilal", "age": 25}),
            ],
            vec![
                TableColumn::path("Name", "name"),
                TableColumn::path("Age", "age"),
                TableColumn::path("Department", "department.name"),
            ],
            "People",
            "people",
            |row: &Value| row["id"].as_str().unwrap_or_default().to_string(),
        )
    }

    fn ids(table: &DataTable<Value>) -> Vec<String> {
        table.rows().into_iter().map(|row| table.key(row)).collect()
    }

    #[test]
    fn unsorted_keeps_insertion_order() {
        assert_eq!(ids(&people()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn text_sort_is_case_insensitive_and_stable() {
        let mut table = people();
        assert!(table.toggle_sort(0));
        assert_eq!(ids(&table), vec!["2", "1", "4", "3"]);

        assert!(table.toggle_sort(0));
        assert_eq!(table.sort_state().map(|s| s.direction), Some(SortDirection::Desc));
        assert_eq!(ids(&table), vec!["3", "1", "4", "2"]);
    }

    #[test]
    fn third_toggle_restores_ascending_order() {
        for column in [0, 1] {
            let mut table = people();

            table.toggle_sort(column);
            let ascending = ids(&table);

            table.toggle_sort(column);
            let descending = ids(&table);
            assert_ne!(ascending, descending);

            table.toggle_sort(column);
            assert_eq!(table.sort_state().map(|s| s.direction), Some(SortDirection::Asc));
            assert_eq!(ids(&table), ascending);
        }
    }

    #[test]
    fn nulls_sort_last_in_both_directions() {
        let mut table = people();
        table.sort_by(1, SortDirection::Asc);
        assert_eq!(ids(&table), vec!["4", "3", "1", "2"]);

        table.sort_by(1, SortDirection::Desc);
        assert_eq!(ids(&table), vec!["1", "3", "4", "2"]);
    }

    #[test]
    fn new_column_starts_ascending() {
        let mut table = people();
        table.sort_by(0, SortDirection::Desc);
        let next = table.next_sort(1);
        assert_eq!(next.column, 1);
        assert_eq!(next.direction, SortDirection::Asc);
    }

    #[test]
    fn unknown_column_is_ignored() {
        let mut table = people();
        assert!(!table.sort_by(7, SortDirection::Asc));
        assert_eq!(table.sort_state(), None);
    }

    #[test]
    fn dotted_paths_short_circuit() {
        let nested = json!({"a": {"b": 5}});
        assert_eq!(resolve_path(&nested, "a.b"), Some(&json!(5)));
        assert_eq!(resolve_path(&nested, "a.c"), None);
        assert_eq!(resolve_path(&nested, "x.y"), None);
        assert_eq!(resolve_path(&nested, "a.b.c"), None);

        let listed = json!({"tags": ["x", "y"]});
        assert_eq!(resolve_path(&listed, "tags.0"), None);

        let row = json!({"department": null, "program": {"department": {"name": "CS"}}});
        assert_eq!(resolve_path(&row, "department.name"), None);
        assert_eq!(resolve_path(&row, "missing.name"), None);
        assert_eq!(
            resolve_path(&row, "program.department.name"),
            Some(&json!("CS"))
        );

        let table = people();
        let cells = table.cells(&table.rows()[1]);
        assert_eq!(cells[2], CellValue::Null);
        assert_eq!(cells[2].to_string(), "");
    }

    #[test]
    fn hrefs_use_entity_path_and_key() {
        let table = people();
        let first = table.rows()[0];
        assert_eq!(table.edit_href(first), "/admin/people/edit/1");
        assert_eq!(table.delete_href(first), "/admin/people/delete/1");
        assert_eq!(table.empty_message(), "No people found.");
    }

    #[tokio::test]
    async fn failed_delete_keeps_row() {
        let mut table = people();
        let result: Result<(), String> = table
            .delete_row("2", |_| async { Err("still referenced".to_string()) })
            .await;

        assert_eq!(result, Err("still referenced".to_string()));
        assert_eq!(table.len(), 4);
    }

    #[tokio::test]
    async fn successful_delete_removes_row_then_reconciles() {
        let mut table = people();
        let result: Result<(), String> = table
            .delete_row("2", |id| async move {
                assert_eq!(id, "2");
                Ok(())
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(ids(&table), vec!["1", "3", "4"]);

        let fresh = vec![json!({"id": "1", "name": "Bilal"}), json!({"id": "3", "name": "Zara"})];
        assert!(table.reconcile(fresh));
        assert_eq!(ids(&table), vec!["1", "3"]);
    }
}
