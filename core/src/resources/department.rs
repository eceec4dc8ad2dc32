/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::double_option;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::Deserialize;

pub struct Department;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeDepartmentRequest {
    pub name: String,
    pub description: String,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub history: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub vision: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub mission: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub history: Option<Option<String>>,
}

static FIELDS: [FieldSpec; 5] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("description", "Description", FieldKind::LongText),
    FieldSpec::optional("vision", "Vision", FieldKind::LongText),
    FieldSpec::optional("mission", "Mission", FieldKind::LongText),
    FieldSpec::optional("history", "History", FieldKind::LongText),
];

impl Resource for Department {
    type Entity = EDepartment;
    type Model = MDepartment;
    type Active = ADepartment;
    type Id = Uuid;
    type Create = MakeDepartmentRequest;
    type Patch = PatchDepartmentRequest;

    const KIND: ResourceKind = ResourceKind::Department;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MDepartment) -> Uuid {
        model.id
    }

    fn label(model: &MDepartment) -> String {
        model.name.clone()
    }

    fn new_active(body: MakeDepartmentRequest) -> ADepartment {
        let now = Utc::now().naive_utc();

        ADepartment {
            id: Set(Uuid::new_v4()),
            name: Set(body.name),
            description: Set(body.description),
            vision: Set(body.vision),
            mission: Set(body.mission),
            history: Set(body.history),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut ADepartment, patch: PatchDepartmentRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(vision) = patch.vision {
            active.vision = Set(vision);
        }
        if let Some(mission) = patch.mission {
            active.mission = Set(mission);
        }
        if let Some(history) = patch.history {
            active.history = Set(history);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn order(select: Select<EDepartment>) -> Select<EDepartment> {
        select.order_by_asc(CDepartment::Name)
    }

    fn columns(_lookups: &Lookups) -> Vec<TableColumn<MDepartment>> {
        vec![
            TableColumn::new("Name", |d: &MDepartment| d.name.clone().into()),
            TableColumn::new("Description", |d: &MDepartment| {
                d.description.chars().take(80).collect::<String>().into()
            }),
            TableColumn::new("Updated", |d: &MDepartment| d.updated_at.into()),
        ]
    }
}
