/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::consts::ROLES;
use chrono::Utc;
use entity::user::Role;
use password_auth::generate_hash;
use sea_orm::{ActiveValue::Set, ColumnTrait, QueryOrder};
use serde::Deserialize;

pub struct User;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

static FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("password", "Password", FieldKind::Password),
    FieldSpec::optional("role", "Role", FieldKind::Select(&ROLES)).with_default("editor"),
];

impl Resource for User {
    type Entity = EUser;
    type Model = MUser;
    type Active = AUser;
    type Id = Uuid;
    type Create = MakeUserRequest;
    type Patch = PatchUserRequest;

    const KIND: ResourceKind = ResourceKind::User;

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn id(model: &MUser) -> Uuid {
        model.id
    }

    fn label(model: &MUser) -> String {
        model.name.clone()
    }

    fn new_active(body: MakeUserRequest) -> AUser {
        let now = Utc::now().naive_utc();

        AUser {
            id: Set(Uuid::new_v4()),
            name: Set(body.name),
            email: Set(body.email.trim().to_lowercase()),
            password: Set(generate_hash(body.password)),
            role: Set(body.role),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_patch(active: &mut AUser, patch: PatchUserRequest) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email.trim().to_lowercase());
        }
        if let Some(password) = patch.password {
            active.password = Set(generate_hash(password));
        }
        if let Some(role) = patch.role {
            active.role = Set(role);
        }

        active.updated_at = Set(Utc::now().naive_utc());
    }

    fn create_checks(body: &MakeUserRequest) -> Vec<Check<Self>> {
        vec![Check::Unique {
            column: CUser::Email,
            value: body.email.trim().to_lowercase(),
            label: "email",
        }]
    }

    fn patch_checks(patch: &PatchUserRequest) -> Vec<Check<Self>> {
        patch
            .email
            .as_ref()
            .map(|email| Check::Unique {
                column: CUser::Email,
                value: email.trim().to_lowercase(),
                label: "email",
            })
            .into_iter()
            .collect()
    }

    fn filter(params: &HashMap<String, String>) -> Result<Condition, GatewayError> {
        let mut condition = Condition::all();

        if let Some(role) = param(params, "role") {
            let role: Role = role.parse().map_err(GatewayError::validation)?;
            condition = condition.add(CUser::Role.eq(role));
        }

        Ok(condition)
    }

    fn order(select: Select<EUser>) -> Select<EUser> {
        select.order_by_asc(CUser::Name)
    }

    fn columns(_lookups: &Lookups) -> Vec<TableColumn<MUser>> {
        vec![
            TableColumn::new("Name", |u: &MUser| u.name.clone().into()),
            TableColumn::new("Email", |u: &MUser| u.email.clone().into()),
            TableColumn::new("Role", |u: &MUser| u.role.as_str().into()),
            TableColumn::new("Created", |u: &MUser| u.created_at.into()),
        ]
    }
}
