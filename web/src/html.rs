/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Server rendered markup for the admin area.

use dept_core::resources::{FieldKind, FieldSpec, Lookups, ResourceKind};
use dept_core::session::SessionContext;
use dept_core::table::{DataTable, SortDirection};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    fn render(&self) -> String {
        let class = match self.level {
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Error => "notice notice-error",
        };

        format!(r#"<div class="{}" role="alert">{}</div>"#, class, escape(&self.text))
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:0}header{display:flex;gap:1rem;align-items:center;padding:.5rem 1rem;background:#1f2937;color:#fff}header a{color:#fff;margin-right:.75rem}main{padding:1rem 2rem}table{border-collapse:collapse;width:100%}th,td{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}.actions form{display:inline}.notice-error{color:#b91c1c}.notice-success{color:#15803d}.field{margin-bottom:.75rem}.field-error{color:#b91c1c;margin:.25rem 0}.preview{max-height:80px;display:block}";

fn navigation() -> String {
    let mut nav = String::from(r#"<nav><a href="/admin">Dashboard</a>"#);

    for kind in ResourceKind::ALL {
        if matches!(
            kind,
            ResourceKind::ChairpersonMessage | ResourceKind::ViceChancellorMessage
        ) {
            continue;
        }

        let _ = write!(nav, r#"<a href="/admin/{}">{}</a>"#, kind.slug(), kind.plural());
    }

    nav.push_str(r#"<a href="/admin/messages">Messages</a></nav>"#);
    nav
}

/// Full page. Navigation and the logout button only show for a signed-in user.
pub fn page(title: &str, session: Option<&SessionContext>, body: &str) -> String {
    let header = match session {
        Some(session) => format!(
            r#"<header>{}<span class="user">{}</span><form method="post" action="/admin/logout"><button type="submit">Log out</button></form></header>"#,
            navigation(),
            escape(&session.name)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{} | Admin</title><style>{}</style></head>
<body>{}<main><h1>{}</h1>{}</main></body>
</html>"#,
        escape(title),
        STYLE,
        header,
        escape(title),
        body
    )
}

/// Page shown when a list cannot be loaded.
pub fn retry_block(message: &str, href: &str) -> String {
    format!(
        r#"{}<p><a class="button" href="{}">Try again</a></p>"#,
        Notice::error(message).render(),
        escape(href)
    )
}

pub fn notice(notice: Option<&Notice>) -> String {
    notice.map(Notice::render).unwrap_or_default()
}

/// Sortable table with edit and delete actions per row. Header links point
/// at `base_href`, which may already carry a query.
pub fn table<T>(table: &DataTable<T>, base_href: &str, actions: bool) -> String {
    if table.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, escape(&table.empty_message()));
    }

    let sort = table.sort_state();
    let separator = if base_href.contains('?') { "&amp;" } else { "?" };
    let mut out = String::from("<table><thead><tr>");

    for (index, column) in table.columns().iter().enumerate() {
        let next = table.next_sort(index);
        let marker = match sort {
            Some(state) if state.column == index => match state.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            },
            _ => "",
        };

        let _ = write!(
            out,
            r#"<th><a href="{}{}sort={}&amp;dir={}">{}{}</a></th>"#,
            escape(base_href),
            separator,
            index,
            next.direction.as_str(),
            escape(&column.header),
            marker
        );
    }

    if actions {
        out.push_str("<th>Actions</th>");
    }

    out.push_str("</tr></thead><tbody>");

    for row in table.rows() {
        out.push_str("<tr>");

        for cell in table.cells(row) {
            let _ = write!(out, "<td>{}</td>", escape(&cell.to_string()));
        }

        if actions {
            let _ = write!(
                out,
                r#"<td class="actions"><a href="{}">Edit</a><form method="post" action="{}" onsubmit="return confirm('Are you sure you want to delete this {}?')"><button type="submit">Delete</button></form></td>"#,
                escape(&table.edit_href(row)),
                escape(&table.delete_href(row)),
                escape(&table.entity_name().to_lowercase())
            );
        }

        out.push_str("</tr>");
    }

    out.push_str("</tbody></table>");
    out
}

/// Values, errors and lookups a form is rendered from.
pub struct FormView<'a> {
    pub fields: &'a [FieldSpec],
    pub values: &'a HashMap<String, String>,
    pub errors: &'a BTreeMap<String, String>,
    pub lookups: &'a Lookups,
    pub action: &'a str,
    pub cancel: &'a str,
    pub submit: &'a str,
}

pub fn form(view: &FormView<'_>) -> String {
    let mut out = format!(
        r#"<form method="post" action="{}" class="entity-form">"#,
        escape(view.action)
    );

    for field in view.fields {
        let value = view
            .values
            .get(field.name)
            .map(String::as_str)
            .unwrap_or_default();

        let _ = write!(
            out,
            r#"<div class="field"><label for="{}">{}{}</label>{}"#,
            field.name,
            escape(field.label),
            if field.required { " *" } else { "" },
            input(field, value, view.lookups)
        );

        if let Some(error) = view.errors.get(field.name) {
            let _ = write!(out, r#"<p class="field-error">{}</p>"#, escape(error));
        }

        out.push_str("</div>");
    }

    let _ = write!(
        out,
        r#"<div class="form-actions"><a href="{}">Cancel</a><button type="submit">{}</button></div></form>"#,
        escape(view.cancel),
        escape(view.submit)
    );

    out
}

fn input(field: &FieldSpec, value: &str, lookups: &Lookups) -> String {
    let required = if field.required { " required" } else { "" };
    let name = field.name;
    let value = escape(value);

    let typed = |kind: &str| {
        format!(
            r#"<input type="{}" id="{}" name="{}" value="{}"{}>"#,
            kind, name, name, value, required
        )
    };

    match field.kind {
        FieldKind::Text => typed("text"),
        FieldKind::Email => typed("email"),
        FieldKind::Url => typed("url"),
        FieldKind::Number => typed("number"),
        FieldKind::Date => typed("date"),
        FieldKind::DateTime => typed("datetime-local"),
        FieldKind::Password => format!(
            r#"<input type="password" id="{}" name="{}" autocomplete="new-password">"#,
            name, name
        ),
        FieldKind::LongText => format!(
            r#"<textarea id="{}" name="{}" rows="6"{}>{}</textarea>"#,
            name, name, required, value
        ),
        FieldKind::Checkbox => format!(
            r#"<input type="checkbox" id="{}" name="{}" value="true"{}>"#,
            name,
            name,
            if matches!(value.as_str(), "true" | "on" | "1") {
                " checked"
            } else {
                ""
            }
        ),
        FieldKind::Image => {
            let preview = if value.is_empty() {
                String::new()
            } else {
                format!(r#"<img class="preview" src="{}" alt="">"#, value)
            };

            format!(
                r#"<input type="text" id="{}" name="{}" value="{}" placeholder="/uploads/...">{}"#,
                name, name, value, preview
            )
        }
        FieldKind::Select(options) => {
            let options = options.iter().map(|option| (option.to_string(), option.to_string()));
            select(field, &value, options)
        }
        FieldKind::Reference(kind) => {
            let options = lookups
                .options(kind)
                .iter()
                .map(|item| (item.id.clone(), item.name.clone()));
            select(field, &value, options)
        }
    }
}

fn select(
    field: &FieldSpec,
    selected: &str,
    options: impl Iterator<Item = (String, String)>,
) -> String {
    let mut out = format!(
        r#"<select id="{}" name="{}"{}><option value="">Select...</option>"#,
        field.name,
        field.name,
        if field.required { " required" } else { "" }
    );

    for (value, label) in options {
        let value = escape(&value);
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            value,
            if value == selected { " selected" } else { "" },
            escape(&label)
        );
    }

    out.push_str("</select>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dept_core::resources::{Faculty, Resource};
    use dept_core::table::TableColumn;
    use serde_json::{Value, json};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_table_empty_message() {
        let table: DataTable<Value> = DataTable::new(
            Vec::new(),
            vec![TableColumn::path("Name", "name")],
            "Faculty",
            "faculty",
            |row: &Value| row["id"].to_string(),
        );

        assert!(super::table(&table, "/admin/faculty", true).contains("No faculty found."));
    }

    #[test]
    fn test_table_rows_and_actions() {
        let mut table = DataTable::new(
            vec![json!({"id": "a", "name": "Zed"}), json!({"id": "b", "name": "<Amy>"})],
            vec![TableColumn::path("Name", "name")],
            "Faculty",
            "faculty",
            |row: &Value| row["id"].as_str().unwrap_or_default().to_string(),
        );
        table.toggle_sort(0);

        let html = super::table(&table, "/admin/faculty", true);
        assert!(html.contains("&lt;Amy&gt;"));
        assert!(html.find("&lt;Amy&gt;") < html.find("Zed"));
        assert!(html.contains(r#"href="/admin/faculty/edit/b""#));
        assert!(html.contains(r#"action="/admin/faculty/delete/a""#));
        assert!(html.contains("sort=0&amp;dir=desc"));
    }

    #[test]
    fn test_form_marks_required_and_errors() {
        let mut values = HashMap::new();
        values.insert("name".to_string(), "Ada".to_string());
        values.insert("isActive".to_string(), "true".to_string());

        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), "Email is required".to_string());

        let lookups = Lookups::default();
        let html = form(&FormView {
            fields: Faculty::fields(),
            values: &values,
            errors: &errors,
            lookups: &lookups,
            action: "/admin/faculty/add",
            cancel: "/admin/faculty",
            submit: "Create",
        });

        assert!(html.contains(r#"name="name" value="Ada" required"#));
        assert!(html.contains(r#"name="isActive" value="true" checked"#));
        assert!(html.contains("Email is required"));
        assert!(html.contains(r#"<select id="departmentId" name="departmentId" required>"#));
    }
}
