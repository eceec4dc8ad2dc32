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

pub struct Course;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeCourseRequest {
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub credit_hours: i32,
    pub program_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchCourseRequest {
    pub title: Option<String>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub credit_hours: Option<i32>,
    pub program_id: Option<i32>,
}

static FIELDS: [FieldSpec; 5] = [
    FieldSpec::required("code", "Code", FieldKind::Text),
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("creditHours", "Credit hours", FieldKind::Number),
    FieldSpec::required("programId", "Program", FieldKind::Reference(ResourceKind::Program)),
    FieldSpec::optional("description", "Description", FieldKind::LongText),
];

impl Resource for Course {
    type Entity = ECourse;
    type Model = MCourse;
    type Active = ACourse;
    type Id = Uuid;
    type Create = MakeCourseRequest;
    type Patch = PatchCourseRequest;

    const KIND: ResourceKind = ResourceKind::Course;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MCourse) -> Uuid {
        model.id
    }

    fn label(model: &MCourse) -> String {
        format!("{} {}", model.code, model.title)
    }

    fn new_active(body: MakeCourseRequest) -> ACourse {
        let now = Utc::now().naive_utc();

        ACourse {
            id: Set(Uuid::new_v4()),
            title: Set(body.title),
            code: Set(body.code.trim().to_uppercase()),
            description: Set(body.description),
            credit_hours: Set(body.credit_hours),
            program_id: Set(body.program_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut ACourse, patch: PatchCourseRequest) {
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(code) = patch.code {
            active.code = Set(code.trim().to_uppercase());
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(credit_hours) = patch.credit_hours {
            active.credit_hours = Set(credit_hours);
        }
        if let Some(program_id) = patch.program_id {
            active.program_id = Set(program_id);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeCourseRequest) -> Vec<Check<Self>> {
        vec![Check::Reference(Reference::Program(body.program_id))]
    }

    fn patch_checks(patch: &PatchCourseRequest) -> Vec<Check<Self>> {
        patch
            .program_id
            .map(|id| Check::Reference(Reference::Program(id)))
            .into_iter()
            .collect()
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(program_id) = parse_param::<i32>(params, "programId")? {
            condition = condition.add(CCourse::ProgramId.eq(program_id));
        }

        Ok(condition)
    }

    fn order(select: Select<ECourse>) -> Select<ECourse> {
        select.order_by_asc(CCourse::Code)
    }

    fn columns(lookups: &Lookups) -> Vec<TableColumn<MCourse>> {
        let programs = lookups.names(ResourceKind::Program);

        vec![
            TableColumn::new("Code", |c: &MCourse| c.code.clone().into()),
            TableColumn::new("Title", |c: &MCourse| c.title.clone().into()),
            TableColumn::new("Credit hours", |c: &MCourse| c.credit_hours.into()),
            TableColumn::new("Program", move |c: &MCourse| {
                programs.get(&c.program_id.to_string()).cloned().into()
            }),
        ]
    }
}
