/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Conversion between admin HTML forms and JSON payloads.

use crate::resources::{FieldKind, FieldSpec};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Turns submitted form fields into the JSON body the gateway expects.
///
/// Blank optional inputs become `null`, unchecked checkboxes become `false`
/// and a blank password is left out so editing a user keeps the old one.
pub fn form_to_json(fields: &[FieldSpec], form: &HashMap<String, String>) -> Value {
    let mut object = Map::new();

    for field in fields {
        let raw = form.get(field.name).map(|value| value.trim());

        let value = match (field.kind, raw) {
            (FieldKind::Checkbox, raw) => {
                Value::Bool(raw.is_some_and(|v| matches!(v, "on" | "true" | "1")))
            }
            (FieldKind::Password, Some(v)) if !v.is_empty() => Value::String(v.to_string()),
            (FieldKind::Password, _) | (_, None) => continue,
            (_, Some("")) if field.required => Value::String(String::new()),
            (_, Some("")) => Value::Null,
            (FieldKind::Number, Some(v)) => number_or_text(v),
            (FieldKind::Reference(target), Some(v)) if target.numeric_id() => number_or_text(v),
            (_, Some(v)) => Value::String(v.to_string()),
        };

        object.insert(field.name.to_string(), value);
    }

    Value::Object(object)
}

fn number_or_text(v: &str) -> Value {
    v.parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(v.to_string()))
}

/// Input values for an edit form, prefilled from a stored record.
pub fn form_values<M: Serialize>(fields: &[FieldSpec], model: &M) -> HashMap<String, String> {
    let Ok(Value::Object(object)) = serde_json::to_value(model) else {
        return HashMap::new();
    };

    fields
        .iter()
        .filter(|field| field.kind != FieldKind::Password)
        .map(|field| {
            let value = match object.get(field.name) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => match field.kind {
                    FieldKind::Date => s.chars().take(10).collect(),
                    FieldKind::DateTime => s.chars().take(16).collect(),
                    _ => s.clone(),
                },
                Some(other) => other.to_string(),
            };

            (field.name.to_string(), value)
        })
        .collect()
}
