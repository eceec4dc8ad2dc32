/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::consts::EVENT_TYPES;
use crate::input::{double_option, flexible_datetime, flexible_datetime_opt};
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue::Set, ColumnTrait, QueryOrder};
use serde::Deserialize;

pub struct Event;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeEventRequest {
    pub title: String,
    pub description: String,
    pub event_type: String,
    #[serde(deserialize_with = "flexible_datetime")]
    pub date: NaiveDateTime,
    pub venue: Option<String>,
    pub image_url: Option<String>,
    pub department_id: Option<Uuid>,
    pub society_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    pub date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "double_option")]
    pub venue: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub department_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub society_id: Option<Option<Uuid>>,
}

static FIELDS: [FieldSpec; 8] = [
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("eventType", "Type", FieldKind::Select(&EVENT_TYPES)),
    FieldSpec::required("date", "Date", FieldKind::DateTime),
    FieldSpec::optional("venue", "Venue", FieldKind::Text),
    FieldSpec::required("description", "Description", FieldKind::LongText),
    FieldSpec::optional("imageUrl", "Image", FieldKind::Image),
    FieldSpec::optional(
        "departmentId",
        "Department",
        FieldKind::Reference(ResourceKind::Department),
    ),
    FieldSpec::optional(
        "societyId",
        "Society",
        FieldKind::Reference(ResourceKind::Society),
    ),
];

impl Resource for Event {
    type Entity = EEvent;
    type Model = MEvent;
    type Active = AEvent;
    type Id = Uuid;
    type Create = MakeEventRequest;
    type Patch = PatchEventRequest;

    const KIND: ResourceKind = ResourceKind::Event;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MEvent) -> Uuid {
        model.id
    }

    fn label(model: &MEvent) -> String {
        model.title.clone()
    }

    fn new_active(body: MakeEventRequest) -> AEvent {
        let now = Utc::now().naive_utc();

        AEvent {
            id: Set(Uuid::new_v4()),
            title: Set(body.title),
            description: Set(body.description),
            event_type: Set(body.event_type),
            date: Set(body.date),
            venue: Set(body.venue),
            image_url: Set(body.image_url),
            department_id: Set(body.department_id),
            society_id: Set(body.society_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut AEvent, patch: PatchEventRequest) {
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(event_type) = patch.event_type {
            active.event_type = Set(event_type);
        }
        if let Some(date) = patch.date {
            active.date = Set(date);
        }
        if let Some(venue) = patch.venue {
            active.venue = Set(venue);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(department_id) = patch.department_id {
            active.department_id = Set(department_id);
        }
        if let Some(society_id) = patch.society_id {
            active.society_id = Set(society_id);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeEventRequest) -> Vec<Check<Self>> {
        let mut checks = Vec::new();

        if let Some(department_id) = body.department_id {
            checks.push(Check::Reference(Reference::Department(department_id)));
        }

        if let Some(society_id) = body.society_id {
            checks.push(Check::Reference(Reference::Society(society_id)));
        }

        checks
    }

    fn patch_checks(patch: &PatchEventRequest) -> Vec<Check<Self>> {
        let mut checks = Vec::new();

        if let Some(department_id) = patch.department_id.flatten() {
            checks.push(Check::Reference(Reference::Department(department_id)));
        }

        if let Some(society_id) = patch.society_id.flatten() {
            checks.push(Check::Reference(Reference::Society(society_id)));
        }

        checks
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(event_type) = param(params, "type") {
            condition = condition.add(CEvent::EventType.eq(event_type));
        }

        if let Some(department_id) = parse_param::<Uuid>(params, "departmentId")? {
            condition = condition.add(CEvent::DepartmentId.eq(department_id));
        }

        if let Some(society_id) = parse_param::<Uuid>(params, "societyId")? {
            condition = condition.add(CEvent::SocietyId.eq(society_id));
        }

        Ok(condition)
    }

    fn order(select: Select<EEvent>) -> Select<EEvent> {
        select.order_by_desc(CEvent::Date)
    }

    fn image_patch(url: String) -> Option<PatchEventRequest> {
        Some(PatchEventRequest {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }

    fn columns(lookups: &Lookups) -> Vec<TableColumn<MEvent>> {
        let societies = lookups.names(ResourceKind::Society);

        vec![
            TableColumn::new("Title", |e: &MEvent| e.title.clone().into()),
            TableColumn::new("Type", |e: &MEvent| e.event_type.clone().into()),
            TableColumn::new("Date", |e: &MEvent| e.date.into()),
            TableColumn::new("Venue", |e: &MEvent| e.venue.clone().into()),
            TableColumn::new("Society", move |e: &MEvent| {
                e.society_id
                    .and_then(|id| societies.get(&id.to_string()).cloned())
                    .into()
            }),
        ]
    }
}
