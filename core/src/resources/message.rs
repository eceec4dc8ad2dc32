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

pub struct ChairpersonMessage;
pub struct ViceChancellorMessage;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeChairpersonMessageRequest {
    pub name: String,
    pub title: String,
    pub message: String,
    pub image_url: Option<String>,
    pub department_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchChairpersonMessageRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub department_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeViceChancellorMessageRequest {
    pub name: String,
    pub title: String,
    pub message: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchViceChancellorMessageRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

static CHAIRPERSON_FIELDS: [FieldSpec; 5] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("message", "Message", FieldKind::LongText),
    FieldSpec::optional("imageUrl", "Photo", FieldKind::Image),
    FieldSpec::required(
        "departmentId",
        "Department",
        FieldKind::Reference(ResourceKind::Department),
    ),
];

static VICE_CHANCELLOR_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("message", "Message", FieldKind::LongText),
    FieldSpec::optional("imageUrl", "Photo", FieldKind::Image),
];

impl Resource for ChairpersonMessage {
    type Entity = EChairpersonMessage;
    type Model = MChairpersonMessage;
    type Active = AChairpersonMessage;
    type Id = Uuid;
    type Create = MakeChairpersonMessageRequest;
    type Patch = PatchChairpersonMessageRequest;

    const KIND: ResourceKind = ResourceKind::ChairpersonMessage;

    fn fields() -> &'static [FieldSpec] {
        &CHAIRPERSON_FIELDS
    }

    fn id(model: &MChairpersonMessage) -> Uuid {
        model.id
    }

    fn label(model: &MChairpersonMessage) -> String {
        format!("{} ({})", model.name, model.title)
    }

    fn new_active(body: MakeChairpersonMessageRequest) -> AChairpersonMessage {
        let now = Utc::now().naive_utc();

        AChairpersonMessage {
            id: Set(Uuid::new_v4()),
            name: Set(body.name),
            title: Set(body.title),
            message: Set(body.message),
            image_url: Set(body.image_url),
            department_id: Set(body.department_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut AChairpersonMessage, patch: PatchChairpersonMessageRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(message) = patch.message {
            active.message = Set(message);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(department_id) = patch.department_id {
            active.department_id = Set(department_id);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeChairpersonMessageRequest) -> Vec<Check<Self>> {
        vec![Check::Reference(Reference::Department(body.department_id))]
    }

    fn patch_checks(patch: &PatchChairpersonMessageRequest) -> Vec<Check<Self>> {
        patch
            .department_id
            .map(|id| Check::Reference(Reference::Department(id)))
            .into_iter()
            .collect()
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(department_id) = parse_param::<Uuid>(params, "departmentId")? {
            condition = condition.add(CChairpersonMessage::DepartmentId.eq(department_id));
        }

        Ok(condition)
    }

    fn order(select: Select<EChairpersonMessage>) -> Select<EChairpersonMessage> {
        select.order_by_desc(CChairpersonMessage::UpdatedAt)
    }

    fn image_patch(url: String) -> Option<PatchChairpersonMessageRequest> {
        Some(PatchChairpersonMessageRequest {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }

    fn columns(lookups: &Lookups) -> Vec<TableColumn<MChairpersonMessage>> {
        let departments = lookups.names(ResourceKind::Department);

        vec![
            TableColumn::new("Name", |m: &MChairpersonMessage| m.name.clone().into()),
            TableColumn::new("Title", |m: &MChairpersonMessage| m.title.clone().into()),
            TableColumn::new("Department", move |m: &MChairpersonMessage| {
                departments.get(&m.department_id.to_string()).cloned().into()
            }),
            TableColumn::new("Updated", |m: &MChairpersonMessage| m.updated_at.into()),
        ]
    }
}

impl Resource for ViceChancellorMessage {
    type Entity = EViceChancellorMessage;
    type Model = MViceChancellorMessage;
    type Active = AViceChancellorMessage;
    type Id = Uuid;
    type Create = MakeViceChancellorMessageRequest;
    type Patch = PatchViceChancellorMessageRequest;

    const KIND: ResourceKind = ResourceKind::ViceChancellorMessage;

    fn fields() -> &'static [FieldSpec] {
        &VICE_CHANCELLOR_FIELDS
    }

    fn id(model: &MViceChancellorMessage) -> Uuid {
        model.id
    }

    fn label(model: &MViceChancellorMessage) -> String {
        format!("{} ({})", model.name, model.title)
    }

    fn new_active(body: MakeViceChancellorMessageRequest) -> AViceChancellorMessage {
        let now = Utc::now().naive_utc();

        AViceChancellorMessage {
            id: Set(Uuid::new_v4()),
            name: Set(body.name),
            title: Set(body.title),
            message: Set(body.message),
            image_url: Set(body.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut AViceChancellorMessage, patch: PatchViceChancellorMessageRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(message) = patch.message {
            active.message = Set(message);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn order(select: Select<EViceChancellorMessage>) -> Select<EViceChancellorMessage> {
        select.order_by_desc(CViceChancellorMessage::UpdatedAt)
    }

    fn image_patch(url: String) -> Option<PatchViceChancellorMessageRequest> {
        Some(PatchViceChancellorMessageRequest {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }

    fn columns(_lookups: &Lookups) -> Vec<TableColumn<MViceChancellorMessage>> {
        vec![
            TableColumn::new("Name", |m: &MViceChancellorMessage| m.name.clone().into()),
            TableColumn::new("Title", |m: &MViceChancellorMessage| m.title.clone().into()),
            TableColumn::new("Updated", |m: &MViceChancellorMessage| m.updated_at.into()),
        ]
    }
}
