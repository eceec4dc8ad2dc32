/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::consts::DEGREE_TYPES;
use crate::input::double_option;
use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, QueryOrder};
use serde::Deserialize;

pub struct Program;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeProgramRequest {
    pub name: String,
    pub degree_type: String,
    pub duration: String,
    pub credit_hours: i32,
    pub eligibility: Option<String>,
    pub description: Option<String>,
    pub department_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchProgramRequest {
    pub name: Option<String>,
    pub degree_type: Option<String>,
    pub duration: Option<String>,
    pub credit_hours: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub eligibility: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub department_id: Option<Uuid>,
}

static FIELDS: [FieldSpec; 7] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("degreeType", "Degree", FieldKind::Select(&DEGREE_TYPES)),
    FieldSpec::required("duration", "Duration", FieldKind::Text),
    FieldSpec::required("creditHours", "Credit hours", FieldKind::Number),
    FieldSpec::optional("eligibility", "Eligibility", FieldKind::LongText),
    FieldSpec::optional("description", "Description", FieldKind::LongText),
    FieldSpec::required(
        "departmentId",
        "Department",
        FieldKind::Reference(ResourceKind::Department),
    ),
];

impl Resource for Program {
    type Entity = EProgram;
    type Model = MProgram;
    type Active = AProgram;
    type Id = i32;
    type Create = MakeProgramRequest;
    type Patch = PatchProgramRequest;

    const KIND: ResourceKind = ResourceKind::Program;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MProgram) -> i32 {
        model.id
    }

    fn label(model: &MProgram) -> String {
        format!("{} {}", model.degree_type, model.name)
    }

    fn new_active(body: MakeProgramRequest) -> AProgram {
        let now = Utc::now().naive_utc();

        AProgram {
            id: NotSet,
            name: Set(body.name),
            degree_type: Set(body.degree_type),
            duration: Set(body.duration),
            credit_hours: Set(body.credit_hours),
            eligibility: Set(body.eligibility),
            description: Set(body.description),
            department_id: Set(body.department_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut AProgram, patch: PatchProgramRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(degree_type) = patch.degree_type {
            active.degree_type = Set(degree_type);
        }
        if let Some(duration) = patch.duration {
            active.duration = Set(duration);
        }
        if let Some(credit_hours) = patch.credit_hours {
            active.credit_hours = Set(credit_hours);
        }
        if let Some(eligibility) = patch.eligibility {
            active.eligibility = Set(eligibility);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(department_id) = patch.department_id {
            active.department_id = Set(department_id);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeProgramRequest) -> Vec<Check<Self>> {
        vec![Check::Reference(Reference::Department(body.department_id))]
    }

    fn patch_checks(patch: &PatchProgramRequest) -> Vec<Check<Self>> {
        patch
            .department_id
            .map(|id| Check::Reference(Reference::Department(id)))
            .into_iter()
            .collect()
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(department_id) = parse_param::<Uuid>(params, "departmentId")? {
            condition = condition.add(CProgram::DepartmentId.eq(department_id));
        }

        if let Some(degree_type) = param(params, "degreeType") {
            condition = condition.add(CProgram::DegreeType.eq(degree_type));
        }

        Ok(condition)
    }

    fn order(select: Select<EProgram>) -> Select<EProgram> {
        select
            .order_by_asc(CProgram::DegreeType)
            .order_by_asc(CProgram::Name)
    }

    fn columns(lookups: &Lookups) -> Vec<TableColumn<MProgram>> {
        let departments = lookups.names(ResourceKind::Department);

        vec![
            TableColumn::new("Name", |p: &MProgram| p.name.clone().into()),
            TableColumn::new("Degree", |p: &MProgram| p.degree_type.clone().into()),
            TableColumn::new("Duration", |p: &MProgram| p.duration.clone().into()),
            TableColumn::new("Credit hours", |p: &MProgram| p.credit_hours.into()),
            TableColumn::new("Department", move |p: &MProgram| {
                departments.get(&p.department_id.to_string()).cloned().into()
            }),
        ]
    }
}
