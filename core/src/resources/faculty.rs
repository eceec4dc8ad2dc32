/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::double_option;
use crate::table::CellValue;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, ColumnTrait, QueryOrder};
use serde::Deserialize;

pub struct Faculty;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeFacultyRequest {
    pub name: String,
    pub designation: String,
    pub expertise: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub cv_url: Option<String>,
    pub department_id: Uuid,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchFacultyRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub expertise: Option<Option<String>>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cv_url: Option<Option<String>>,
    pub department_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

static FIELDS: [FieldSpec; 10] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("designation", "Designation", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::optional("phone", "Phone", FieldKind::Text),
    FieldSpec::optional("expertise", "Expertise", FieldKind::LongText),
    FieldSpec::optional("bio", "Biography", FieldKind::LongText),
    FieldSpec::optional("imageUrl", "Photo", FieldKind::Image),
    FieldSpec::optional("cvUrl", "CV link", FieldKind::Url),
    FieldSpec::required(
        "departmentId",
        "Department",
        FieldKind::Reference(ResourceKind::Department),
    ),
    FieldSpec::optional("isActive", "Active", FieldKind::Checkbox).with_default("true"),
];

impl Resource for Faculty {
    type Entity = EFaculty;
    type Model = MFaculty;
    type Active = AFaculty;
    type Id = Uuid;
    type Create = MakeFacultyRequest;
    type Patch = PatchFacultyRequest;

    const KIND: ResourceKind = ResourceKind::Faculty;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MFaculty) -> Uuid {
        model.id
    }

    fn label(model: &MFaculty) -> String {
        model.name.clone()
    }

    fn new_active(body: MakeFacultyRequest) -> AFaculty {
        let now = Utc::now().naive_utc();

        AFaculty {
            id: Set(Uuid::new_v4()),
            name: Set(body.name),
            designation: Set(body.designation),
            expertise: Set(body.expertise),
            email: Set(body.email.trim().to_string()),
            phone: Set(body.phone),
            bio: Set(body.bio),
            image_url: Set(body.image_url),
            cv_url: Set(body.cv_url),
            department_id: Set(body.department_id),
            is_active: Set(body.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut AFaculty, patch: PatchFacultyRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(designation) = patch.designation {
            active.designation = Set(designation);
        }
        if let Some(expertise) = patch.expertise {
            active.expertise = Set(expertise);
        }
        if let Some(email) = patch.email {
            active.email = Set(email.trim().to_string());
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Some(bio) = patch.bio {
            active.bio = Set(bio);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(cv_url) = patch.cv_url {
            active.cv_url = Set(cv_url);
        }
        if let Some(department_id) = patch.department_id {
            active.department_id = Set(department_id);
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeFacultyRequest) -> Vec<Check<Self>> {
        vec![
            Check::Reference(Reference::Department(body.department_id)),
            Check::Unique {
                column: CFaculty::Email,
                value: body.email.trim().to_string(),
                label: "email",
            },
        ]
    }

    fn patch_checks(patch: &PatchFacultyRequest) -> Vec<Check<Self>> {
        let mut checks = Vec::new();

        if let Some(department_id) = patch.department_id {
            checks.push(Check::Reference(Reference::Department(department_id)));
        }

        if let Some(email) = &patch.email {
            checks.push(Check::Unique {
                column: CFaculty::Email,
                value: email.trim().to_string(),
                label: "email",
            });
        }

        checks
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(department_id) = parse_param::<Uuid>(params, "departmentId")? {
            condition = condition.add(CFaculty::DepartmentId.eq(department_id));
        }

        if let Some(active) = parse_param::<bool>(params, "active")? {
            condition = condition.add(CFaculty::IsActive.eq(active));
        }

        Ok(condition)
    }

    fn order(select: Select<EFaculty>) -> Select<EFaculty> {
        select.order_by_asc(CFaculty::Name)
    }

    fn image_patch(url: String) -> Option<PatchFacultyRequest> {
        Some(PatchFacultyRequest {
            image_url: Some(Some(url)),
            ..Default::default()
        })
    }

    fn columns(lookups: &Lookups) -> Vec<TableColumn<MFaculty>> {
        let departments = lookups.names(ResourceKind::Department);

        vec![
            TableColumn::new("Name", |f: &MFaculty| f.name.clone().into()),
            TableColumn::new("Designation", |f: &MFaculty| f.designation.clone().into()),
            TableColumn::new("Email", |f: &MFaculty| f.email.clone().into()),
            TableColumn::new("Department", move |f: &MFaculty| {
                departments.get(&f.department_id.to_string()).cloned().into()
            }),
            TableColumn::new("Active", |f: &MFaculty| CellValue::Bool(f.is_active)),
        ]
    }
}
