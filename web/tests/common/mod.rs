/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use clap::Parser;
use dept_core::database::connect_db;
use dept_core::gateway;
use dept_core::resources::User;
use dept_core::storage::ObjectStore;
use dept_core::types::*;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@dept.edu";
pub const ADMIN_PASSWORD: &str = "correct horse battery";

pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<ServerState>,
    pub upload_dir: PathBuf,
}

pub fn test_cli(upload_dir: &PathBuf) -> Cli {
    let upload_dir = upload_dir.to_string_lossy().to_string();

    Cli::parse_from([
        "dept-portal",
        "--database-url",
        "sqlite::memory:",
        "--session-secret",
        "test-secret",
        "--upload-dir",
        upload_dir.as_str(),
        "--max-upload-bytes",
        "1024",
        "--upload-timeout",
        "1",
    ])
}

pub async fn test_app() -> TestApp {
    test_app_with_store(None).await
}

pub async fn test_app_with_store(store: Option<Arc<dyn ObjectStore>>) -> TestApp {
    let upload_dir = std::env::temp_dir().join(format!("portal-web-{}", Uuid::new_v4()));
    let cli = test_cli(&upload_dir);
    let db = connect_db(&cli).await.expect("in-memory database should migrate");

    gateway::create_from_json::<User, _>(
        &db,
        json!({
            "name": "Site Admin",
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD,
            "role": "admin",
        }),
    )
    .await
    .expect("admin user should be created");

    let state = Arc::new(ServerState {
        db,
        cli,
        session_secret: "test-secret".to_string(),
        store,
    });

    let server = TestServer::new(web::app(Arc::clone(&state))).expect("test server should start");

    TestApp {
        server,
        state,
        upload_dir,
    }
}

impl TestApp {
    /// Signs in the seeded admin and returns the session token.
    pub async fn token(&self) -> String {
        let res = self
            .server
            .post("/api/auth/login")
            .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
            .await;

        res.assert_status_ok();
        res.json::<BaseResponse<String>>().message
    }
}
