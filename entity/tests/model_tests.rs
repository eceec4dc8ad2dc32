/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity models against a mock connection

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

fn timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_faculty_entity_basic() -> Result<(), DbErr> {
    let faculty_id = Uuid::new_v4();
    let department_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![faculty::Model {
            id: faculty_id,
            name: "Dr. Ada Lovelace".to_owned(),
            designation: "Professor".to_owned(),
            expertise: Some("Analytical engines".to_owned()),
            email: "ada@example.edu".to_owned(),
            phone: None,
            bio: None,
            image_url: None,
            cv_url: None,
            department_id,
            is_active: true,
            created_at: timestamp(),
            updated_at: timestamp(),
        }]])
        .into_connection();

    let result = faculty::Entity::find_by_id(faculty_id).one(&db).await?;

    let faculty = result.expect("faculty should be found");
    assert_eq!(faculty.email, "ada@example.edu");
    assert_eq!(faculty.department_id, department_id);

    Ok(())
}

#[test]
fn test_faculty_serializes_camel_case() {
    let faculty = faculty::Model {
        id: Uuid::nil(),
        name: "Grace Hopper".to_owned(),
        designation: "Lecturer".to_owned(),
        expertise: None,
        email: "grace@example.edu".to_owned(),
        phone: None,
        bio: None,
        image_url: Some("/uploads/faculty/grace.png".to_owned()),
        cv_url: None,
        department_id: Uuid::nil(),
        is_active: false,
        created_at: timestamp(),
        updated_at: timestamp(),
    };

    let json = serde_json::to_value(&faculty).unwrap();
    assert_eq!(json["imageUrl"], "/uploads/faculty/grace.png");
    assert_eq!(json["isActive"], false);
    assert!(json.get("department_id").is_none());
    assert!(json.get("departmentId").is_some());
}

#[test]
fn test_user_password_is_never_serialized() {
    let user = user::Model {
        id: Uuid::nil(),
        name: "Admin".to_owned(),
        email: "admin@example.edu".to_owned(),
        password: "$argon2id$hash".to_owned(),
        role: user::Role::Admin,
        created_at: timestamp(),
        updated_at: timestamp(),
    };

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["role"], "admin");
}

#[tokio::test]
async fn test_program_numeric_id() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![program::Model {
            id: 7,
            name: "BS Computer Science".to_owned(),
            degree_type: "BS".to_owned(),
            duration: "4 years".to_owned(),
            credit_hours: 133,
            eligibility: None,
            description: None,
            department_id: Uuid::new_v4(),
            created_at: timestamp(),
            updated_at: timestamp(),
        }]])
        .into_connection();

    let program = program::Entity::find_by_id(7).one(&db).await?;
    assert_eq!(program.map(|p| p.credit_hours), Some(133));

    Ok(())
}
