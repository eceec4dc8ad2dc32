/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::consts::SUBMISSION_STATUSES;
use crate::input::double_option;
use chrono::Utc;
use entity::contact_submission::SubmissionStatus;
use sea_orm::{ActiveValue::Set, ColumnTrait, QueryOrder};
use serde::Deserialize;

pub struct ContactSubmission;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeContactSubmissionRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub program_id: Option<i32>,
    #[serde(default)]
    pub status: SubmissionStatus,
    pub admin_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchContactSubmissionRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub program_id: Option<Option<i32>>,
    pub status: Option<SubmissionStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub admin_notes: Option<Option<String>>,
}

static FIELDS: [FieldSpec; 7] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::optional("phone", "Phone", FieldKind::Text),
    FieldSpec::optional(
        "programId",
        "Program of interest",
        FieldKind::Reference(ResourceKind::Program),
    ),
    FieldSpec::required("message", "Message", FieldKind::LongText),
    FieldSpec::optional("status", "Status", FieldKind::Select(&SUBMISSION_STATUSES))
        .with_default("new"),
    FieldSpec::optional("adminNotes", "Admin notes", FieldKind::LongText),
];

impl Resource for ContactSubmission {
    type Entity = EContactSubmission;
    type Model = MContactSubmission;
    type Active = AContactSubmission;
    type Id = Uuid;
    type Create = MakeContactSubmissionRequest;
    type Patch = PatchContactSubmissionRequest;

    const KIND: ResourceKind = ResourceKind::ContactSubmission;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MContactSubmission) -> Uuid {
        model.id
    }

    fn label(model: &MContactSubmission) -> String {
        format!("{} <{}>", model.name, model.email)
    }

    fn new_active(body: MakeContactSubmissionRequest) -> AContactSubmission {
        let now = Utc::now().naive_utc();

        AContactSubmission {
            id: Set(Uuid::new_v4()),
            name: Set(body.name),
            email: Set(body.email.trim().to_string()),
            phone: Set(body.phone),
            message: Set(body.message),
            program_id: Set(body.program_id),
            status: Set(body.status),
            admin_notes: Set(body.admin_notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut AContactSubmission, patch: PatchContactSubmissionRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email.trim().to_string());
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Some(message) = patch.message {
            active.message = Set(message);
        }
        if let Some(program_id) = patch.program_id {
            active.program_id = Set(program_id);
        }
        if let Some(status) = patch.status {
            active.status = Set(status);
        }
        if let Some(admin_notes) = patch.admin_notes {
            active.admin_notes = Set(admin_notes);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeContactSubmissionRequest) -> Vec<Check<Self>> {
        body.program_id
            .map(|id| Check::Reference(Reference::Program(id)))
            .into_iter()
            .collect()
    }

    fn patch_checks(patch: &PatchContactSubmissionRequest) -> Vec<Check<Self>> {
        patch
            .program_id
            .flatten()
            .map(|id| Check::Reference(Reference::Program(id)))
            .into_iter()
            .collect()
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(status) = param(params, "status") {
            let status: SubmissionStatus = status.parse().map_err(GatewayError::validation)?;
            condition = condition.add(CContactSubmission::Status.eq(status));
        }

        if let Some(program_id) = parse_param::<i32>(params, "programId")? {
            condition = condition.add(CContactSubmission::ProgramId.eq(program_id));
        }

        Ok(condition)
    }

    fn order(select: Select<EContactSubmission>) -> Select<EContactSubmission> {
        select.order_by_desc(CContactSubmission::CreatedAt)
    }

    fn columns(lookups: &Lookups) -> Vec<TableColumn<MContactSubmission>> {
        let programs = lookups.names(ResourceKind::Program);

        vec![
            TableColumn::new("Name", |c: &MContactSubmission| c.name.clone().into()),
            TableColumn::new("Email", |c: &MContactSubmission| c.email.clone().into()),
            TableColumn::new("Program", move |c: &MContactSubmission| {
                c.program_id
                    .and_then(|id| programs.get(&id.to_string()).cloned())
                    .into()
            }),
            TableColumn::new("Status", |c: &MContactSubmission| c.status.as_str().into()),
            TableColumn::new("Received", |c: &MContactSubmission| c.created_at.into()),
        ]
    }
}
