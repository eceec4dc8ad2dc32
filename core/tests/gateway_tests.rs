/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use common::*;
use dept_core::consts::DEFAULT_DEPARTMENT_ID;
use dept_core::gateway::{self, GatewayError};
use dept_core::resources::*;
use entity::contact_submission::SubmissionStatus;
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_create_and_find_faculty() {
    let db = test_db().await;

    let created = gateway::create_from_json::<Faculty, _>(&db, faculty_body("ayesha@uni.edu"))
        .await
        .unwrap();

    assert!(created.is_active);
    assert_eq!(created.department_id, DEFAULT_DEPARTMENT_ID);
    assert_eq!(created.created_at, created.updated_at);

    let all = gateway::find::<Faculty, _>(&db, &HashMap::new()).await.unwrap();
    assert_eq!(all.len(), 1);

    let found = gateway::get::<Faculty, _>(&db, created.id).await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, "ayesha@uni.edu");
}

#[tokio::test]
async fn test_missing_required_fields_are_reported() {
    let db = test_db().await;

    let err = gateway::create_from_json::<Faculty, _>(&db, json!({ "name": "Only a name" }))
        .await
        .unwrap_err();

    match err {
        GatewayError::Validation { fields, .. } => {
            assert!(fields.contains_key("designation"));
            assert!(fields.contains_key("email"));
            assert!(fields.contains_key("departmentId"));
            assert!(!fields.contains_key("name"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let all = gateway::find::<Faculty, _>(&db, &HashMap::new()).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_unknown_department_is_a_constraint_error() {
    let db = test_db().await;
    let mut body = faculty_body("ghost@uni.edu");
    body["departmentId"] = json!(Uuid::new_v4());

    let err = gateway::create_from_json::<Faculty, _>(&db, body)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Constraint(_)));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let db = test_db().await;

    gateway::create_from_json::<Faculty, _>(&db, faculty_body("dup@uni.edu"))
        .await
        .unwrap();

    let err = gateway::create_from_json::<Faculty, _>(&db, faculty_body("dup@uni.edu"))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Constraint(_)));
}

#[tokio::test]
async fn test_update_only_touches_given_fields() {
    let db = test_db().await;
    let mut body = faculty_body("patch@uni.edu");
    body["phone"] = json!("+92 300 0000000");

    let created = gateway::create_from_json::<Faculty, _>(&db, body)
        .await
        .unwrap();

    let updated = gateway::update_from_json::<Faculty, _>(
        &db,
        created.id,
        json!({ "designation": "Professor", "email": "patch@uni.edu" }),
    )
    .await
    .unwrap();

    assert_eq!(updated.designation, "Professor");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.phone, created.phone);
    assert!(updated.updated_at >= created.updated_at);

    let cleared = gateway::update_from_json::<Faculty, _>(&db, created.id, json!({ "phone": null }))
        .await
        .unwrap();
    assert_eq!(cleared.phone, None);
}

#[tokio::test]
async fn test_update_rejects_blank_required_field() {
    let db = test_db().await;
    let created = gateway::create_from_json::<Faculty, _>(&db, faculty_body("blank@uni.edu"))
        .await
        .unwrap();

    let err = gateway::update_from_json::<Faculty, _>(&db, created.id, json!({ "name": "  " }))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Validation { .. }));
}

#[tokio::test]
async fn test_delete_and_missing_ids() {
    let db = test_db().await;
    let created = gateway::create_from_json::<Faculty, _>(&db, faculty_body("gone@uni.edu"))
        .await
        .unwrap();

    gateway::delete::<Faculty, _>(&db, created.id).await.unwrap();

    let err = gateway::delete::<Faculty, _>(&db, created.id).await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));

    let err = gateway::get::<Faculty, _>(&db, created.id).await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));

    assert!(matches!(
        gateway::parse_id::<Faculty>("not-a-uuid"),
        Err(GatewayError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_department_in_use_cannot_be_deleted() {
    let db = test_db().await;
    gateway::create_from_json::<Faculty, _>(&db, faculty_body("busy@uni.edu"))
        .await
        .unwrap();

    let err = gateway::delete::<Department, _>(&db, DEFAULT_DEPARTMENT_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Constraint(_)));
}

#[tokio::test]
async fn test_faculty_filters() {
    let db = test_db().await;
    gateway::create_from_json::<Faculty, _>(&db, faculty_body("one@uni.edu"))
        .await
        .unwrap();

    let mut retired = faculty_body("two@uni.edu");
    retired["isActive"] = json!(false);
    gateway::create_from_json::<Faculty, _>(&db, retired).await.unwrap();

    let active = gateway::find::<Faculty, _>(&db, &params(&[("active", "true")]))
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email, "one@uni.edu");

    let department_id = DEFAULT_DEPARTMENT_ID.to_string();
    let by_department = gateway::find::<Faculty, _>(
        &db,
        &params(&[("departmentId", department_id.as_str())]),
    )
    .await
    .unwrap();
    assert_eq!(by_department.len(), 2);

    let err = gateway::find::<Faculty, _>(&db, &params(&[("active", "maybe")]))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Validation { .. }));
}

#[tokio::test]
async fn test_programs_have_numeric_ids_and_own_courses() {
    let db = test_db().await;

    let bs = gateway::create_from_json::<Program, _>(&db, program_body("Computer Science"))
        .await
        .unwrap();
    let ms = gateway::create_from_json::<Program, _>(&db, program_body("Data Science"))
        .await
        .unwrap();
    assert_ne!(bs.id, ms.id);

    let course = gateway::create_from_json::<Course, _>(
        &db,
        json!({ "title": "Compilers", "code": "cs-401", "creditHours": 3, "programId": bs.id }),
    )
    .await
    .unwrap();
    assert_eq!(course.code, "CS-401");

    let program_id = bs.id.to_string();
    let courses = gateway::find::<Course, _>(&db, &params(&[("programId", program_id.as_str())]))
        .await
        .unwrap();
    assert_eq!(courses.len(), 1);

    let err = gateway::create_from_json::<Course, _>(
        &db,
        json!({ "title": "Orphan", "code": "X-1", "creditHours": 3, "programId": 9999 }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GatewayError::Constraint(_)));

    let err = gateway::create_from_json::<Program, _>(
        &db,
        json!({ "name": "Bad", "degreeType": "BA", "duration": "4 years", "creditHours": 1, "departmentId": DEFAULT_DEPARTMENT_ID }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GatewayError::Validation { .. }));
}

#[tokio::test]
async fn test_contact_submission_defaults_and_status_filter() {
    let db = test_db().await;

    let submission = gateway::create_from_json::<ContactSubmission, _>(
        &db,
        json!({ "name": "Hamza", "email": "hamza@mail.com", "message": "Admission dates?" }),
    )
    .await
    .unwrap();
    assert_eq!(submission.status, SubmissionStatus::New);

    gateway::update_from_json::<ContactSubmission, _>(
        &db,
        submission.id,
        json!({ "status": "in_progress", "adminNotes": "Called back" }),
    )
    .await
    .unwrap();

    let open = gateway::find::<ContactSubmission, _>(&db, &params(&[("status", "new")]))
        .await
        .unwrap();
    assert!(open.is_empty());

    let in_progress =
        gateway::find::<ContactSubmission, _>(&db, &params(&[("status", "in_progress")]))
            .await
            .unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].admin_notes.as_deref(), Some("Called back"));
}

#[tokio::test]
async fn test_events_accept_plain_dates() {
    let db = test_db().await;

    let event = gateway::create_from_json::<Event, _>(
        &db,
        json!({
            "title": "Open House",
            "description": "Campus tour",
            "eventType": "seminar",
            "date": "2025-05-20",
            "departmentId": DEFAULT_DEPARTMENT_ID,
        }),
    )
    .await
    .unwrap();

    assert_eq!(event.date.format("%Y-%m-%d").to_string(), "2025-05-20");

    let seminars = gateway::find::<Event, _>(&db, &params(&[("type", "seminar")]))
        .await
        .unwrap();
    assert_eq!(seminars.len(), 1);

    let wire = serde_json::to_value(&event).unwrap();
    assert_eq!(wire["eventType"], "seminar");
    assert!(wire.get("type").is_none());

    let updated = gateway::update_from_json::<Event, _>(&db, event.id, json!({ "eventType": "workshop" }))
        .await
        .unwrap();
    assert_eq!(updated.event_type, "workshop");

    let err = gateway::create_from_json::<Event, _>(
        &db,
        json!({ "title": "T", "description": "D", "date": "2025-01-01" }),
    )
    .await
    .unwrap_err();
    match err {
        GatewayError::Validation { fields, .. } => assert!(fields.contains_key("eventType")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_news_patch_with_null_publish_date_keeps_it() {
    let db = test_db().await;

    let news = gateway::create_from_json::<News, _>(
        &db,
        json!({ "title": "T", "content": "C", "publishedAt": "2025-01-01" }),
    )
    .await
    .unwrap();

    let updated = gateway::update_from_json::<News, _>(
        &db,
        news.id,
        json!({ "title": "T2", "publishedAt": null }),
    )
    .await
    .unwrap();

    assert_eq!(updated.title, "T2");
    assert_eq!(updated.published_at, news.published_at);
}

#[tokio::test]
async fn test_users_store_hashed_passwords() {
    let db = test_db().await;

    let user = gateway::create_from_json::<User, _>(
        &db,
        json!({ "name": "Editor", "email": "Editor@Uni.edu", "password": "hunter22" }),
    )
    .await
    .unwrap();

    assert_eq!(user.email, "editor@uni.edu");
    assert_ne!(user.password, "hunter22");

    let err = gateway::create_from_json::<User, _>(
        &db,
        json!({ "name": "Again", "email": "editor@uni.edu", "password": "x" }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GatewayError::Constraint(_)));
}

#[tokio::test]
async fn test_lookups_and_image_attach() {
    let db = test_db().await;
    let created = gateway::create_from_json::<Faculty, _>(&db, faculty_body("img@uni.edu"))
        .await
        .unwrap();

    ResourceKind::Faculty
        .attach_image(&db, &created.id.to_string(), "/uploads/faculty/a.png".to_string())
        .await
        .unwrap();

    let found = gateway::get::<Faculty, _>(&db, created.id).await.unwrap();
    assert_eq!(found.image_url.as_deref(), Some("/uploads/faculty/a.png"));

    let err = ResourceKind::Course
        .attach_image(&db, &Uuid::new_v4().to_string(), "/x.png".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Validation { .. }));

    let lookups = Lookups::load(&db, &ResourceKind::Faculty.references())
        .await
        .unwrap();
    let departments = lookups.names(ResourceKind::Department);
    assert!(departments.contains_key(&DEFAULT_DEPARTMENT_ID.to_string()));
}
