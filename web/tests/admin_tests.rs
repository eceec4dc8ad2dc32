/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use axum::http::header::{LOCATION, SET_COOKIE};
use dept_core::consts::DEFAULT_DEPARTMENT_ID;
use dept_core::gateway;
use dept_core::resources::{Faculty, Program};
use serde_json::json;

#[tokio::test]
async fn test_anonymous_admin_requests_redirect_to_login() {
    let app = common::test_app().await;

    for path in ["/admin", "/admin/faculty", "/admin/news/add", "/admin/messages"] {
        let res = app.server.get(path).await;
        assert_eq!(res.status_code(), StatusCode::SEE_OTHER, "{}", path);
        assert_eq!(res.header(LOCATION), "/admin/login", "{}", path);
    }

    let res = app.server.get("/admin/login").await;
    res.assert_status_ok();
    assert!(res.text().contains(r#"name="password""#));
}

#[tokio::test]
async fn test_login_form_sets_cookie_and_redirects() {
    let app = common::test_app().await;

    let res = app
        .server
        .post("/admin/login")
        .form(&[("email", common::ADMIN_EMAIL), ("password", common::ADMIN_PASSWORD)])
        .await;

    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header(LOCATION), "/admin");
    assert!(res.header(SET_COOKIE).to_str().unwrap_or_default().starts_with("portal_session="));

    let res = app
        .server
        .post("/admin/login")
        .form(&[("email", common::ADMIN_EMAIL), ("password", "nope")])
        .await;

    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);
    assert!(res.text().contains("Invalid email or password"));
}

#[tokio::test]
async fn test_dashboard_and_lists() {
    let app = common::test_app().await;
    let token = app.token().await;

    let res = app.server.get("/admin").authorization_bearer(&token).await;
    res.assert_status_ok();
    assert!(res.text().contains("Departments"));

    let res = app.server.get("/admin/faculty").authorization_bearer(&token).await;
    res.assert_status_ok();
    assert!(res.text().contains("No faculty found."));

    let res = app.server.get("/admin/nothing").authorization_bearer(&token).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_form_creates_and_redirects() {
    let app = common::test_app().await;
    let token = app.token().await;

    let res = app
        .server
        .get("/admin/faculty/add")
        .authorization_bearer(&token)
        .await;
    res.assert_status_ok();
    assert!(res.text().contains("Department of Computer Science"));

    let department = DEFAULT_DEPARTMENT_ID.to_string();
    let res = app
        .server
        .post("/admin/faculty/add")
        .authorization_bearer(&token)
        .form(&[
            ("name", "Dr. Imran"),
            ("designation", "Professor"),
            ("email", "imran@dept.edu"),
            ("departmentId", department.as_str()),
            ("isActive", "true"),
        ])
        .await;

    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header(LOCATION), "/admin/faculty");

    let res = app.server.get("/admin/faculty").authorization_bearer(&token).await;
    assert!(res.text().contains("Dr. Imran"));
}

#[tokio::test]
async fn test_add_form_shows_errors_inline() {
    let app = common::test_app().await;
    let token = app.token().await;

    let res = app
        .server
        .post("/admin/faculty/add")
        .authorization_bearer(&token)
        .form(&[("name", "Dr. Imran"), ("email", "")])
        .await;

    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let html = res.text();
    assert!(html.contains("Email is required"));
    assert!(html.contains(r#"value="Dr. Imran""#));
}

#[tokio::test]
async fn test_edit_form_updates() {
    let app = common::test_app().await;
    let token = app.token().await;

    let faculty = gateway::create_from_json::<Faculty, _>(
        &app.state.db,
        json!({
            "name": "Dr. Old",
            "designation": "Lecturer",
            "email": "old@dept.edu",
            "departmentId": DEFAULT_DEPARTMENT_ID,
        }),
    )
    .await
    .expect("faculty should be created");

    let edit = format!("/admin/faculty/edit/{}", faculty.id);
    let res = app.server.get(&edit).authorization_bearer(&token).await;
    res.assert_status_ok();
    assert!(res.text().contains(r#"value="Dr. Old""#));

    let department = DEFAULT_DEPARTMENT_ID.to_string();
    let res = app
        .server
        .post(&edit)
        .authorization_bearer(&token)
        .form(&[
            ("name", "Dr. New"),
            ("designation", "Lecturer"),
            ("email", "old@dept.edu"),
            ("departmentId", department.as_str()),
        ])
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);

    let stored = gateway::get::<Faculty, _>(&app.state.db, faculty.id)
        .await
        .expect("faculty should still exist");
    assert_eq!(stored.name, "Dr. New");
    assert!(!stored.is_active);
}

#[tokio::test]
async fn test_delete_removes_row_and_failure_keeps_it() {
    let app = common::test_app().await;
    let token = app.token().await;

    let program = gateway::create_from_json::<Program, _>(
        &app.state.db,
        json!({
            "name": "Computer Science",
            "degreeType": "BS",
            "duration": "4 years",
            "creditHours": 132,
            "departmentId": DEFAULT_DEPARTMENT_ID,
        }),
    )
    .await
    .expect("program should be created");

    let res = app
        .server
        .post(&format!("/admin/departments/delete/{}", DEFAULT_DEPARTMENT_ID))
        .authorization_bearer(&token)
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let html = res.text();
    assert!(html.contains("Failed to delete department"));
    assert!(html.contains("Department of Computer Science"));

    let res = app
        .server
        .post(&format!("/admin/programs/delete/{}", program.id))
        .authorization_bearer(&token)
        .await;
    res.assert_status_ok();
    let html = res.text();
    assert!(html.contains("Program deleted."));
    assert!(html.contains("No programs found."));
}

#[tokio::test]
async fn test_messages_page() {
    let app = common::test_app().await;
    let token = app.token().await;

    app.server
        .post("/api/messages")
        .authorization_bearer(&token)
        .json(&json!({
            "type": "chairperson",
            "name": "Prof. Rana",
            "title": "Chairperson",
            "message": "Welcome",
            "departmentId": DEFAULT_DEPARTMENT_ID,
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let res = app.server.get("/admin/messages").authorization_bearer(&token).await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("Prof. Rana"));
    assert!(html.contains("Department of Computer Science"));
    assert!(html.contains("No vice chancellor messages found."));
}
