/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use clap::Parser;
use dept_core::consts::DEFAULT_DEPARTMENT_ID;
use dept_core::database::connect_db;
use dept_core::types::Cli;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

pub fn test_cli() -> Cli {
    Cli::parse_from([
        "dept-portal",
        "--database-url",
        "sqlite::memory:",
        "--session-secret",
        "test-secret",
    ])
}

pub async fn test_db() -> DatabaseConnection {
    connect_db(&test_cli())
        .await
        .expect("in-memory database should migrate")
}

pub fn faculty_body(email: &str) -> Value {
    json!({
        "name": "Dr. Ayesha Khan",
        "designation": "Associate Professor",
        "email": email,
        "departmentId": DEFAULT_DEPARTMENT_ID,
    })
}

pub fn program_body(name: &str) -> Value {
    json!({
        "name": name,
        "degreeType": "BS",
        "duration": "4 years",
        "creditHours": 132,
        "departmentId": DEFAULT_DEPARTMENT_ID,
    })
}
