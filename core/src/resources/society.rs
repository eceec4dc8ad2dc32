/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::double_option;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, ColumnTrait, QueryOrder};
use serde::Deserialize;

pub struct Society;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeSocietyRequest {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub department_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchSocietyRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub department_id: Option<Option<Uuid>>,
}

static FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::optional("description", "Description", FieldKind::LongText),
    FieldSpec::optional("imageUrl", "Logo", FieldKind::Image),
    FieldSpec::optional(
        "departmentId",
        "Department",
        FieldKind::Reference(ResourceKind::Department),
    ),
];

impl Resource for Society {
    type Entity = ESociety;
    type Model = MSociety;
    type Active = ASociety;
    type Id = Uuid;
    type Create = MakeSocietyRequest;
    type Patch = PatchSocietyRequest;

    const KIND: ResourceKind = ResourceKind::Society;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MSociety) -> Uuid {
        model.id
    }

    fn label(model: &MSociety) -> String {
        model.name.clone()
    }

    fn new_active(body: MakeSocietyRequest) -> ASociety {
        let now = Utc::now().naive_utc();

        ASociety {
            id: Set(Uuid::new_v4()),
            name: Set(body.name),
            description: Set(body.description),
            image_url: Set(body.image_url),
            department_id: Set(body.department_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut ASociety, patch: PatchSocietyRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(department_id) = patch.department_id {
            active.department_id = Set(department_id);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeSocietyRequest) -> Vec<Check<Self>> {
        body.department_id
            .map(|id| Check::Reference(Reference::Department(id)))
            .into_iter()
            .collect()
    }

    fn patch_checks(patch: &PatchSocietyRequest) -> Vec<Check<Self>> {
        patch
            .department_id
            .flatten()
            .map(|id| Check::Reference(Reference::Department(id)))
            .into_iter()
            .collect()
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(department_id) = parse_param::<Uuid>(params, "departmentId")? {
            condition = condition.add(CSociety::DepartmentId.eq(department_id));
        }

        Ok(condition)
    }

    fn order(select: Select<ESociety>) -> Select<ESociety> {
        select.order_by_asc(CSociety::Name)
    }

    fn image_patch(url: String) -> Option<PatchSocietyRequest> {
        Some(PatchSocietyRequest {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }

    fn columns(lookups: &Lookups) -> Vec<TableColumn<MSociety>> {
        let departments = lookups.names(ResourceKind::Department);

        vec![
            TableColumn::new("Name", |s: &MSociety| s.name.clone().into()),
            TableColumn::new("Department", move |s: &MSociety| {
                s.department_id
                    .and_then(|id| departments.get(&id.to_string()).cloned())
                    .into()
            }),
            TableColumn::new("Created", |s: &MSociety| s.created_at.into()),
        ]
    }
}
