/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use entity::user::Role;
use migration::{Migrator, MigratorTrait};
use password_auth::generate_hash;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter,
};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use super::consts::{DEFAULT_DEPARTMENT_ID, DEFAULT_DEPARTMENT_NAME};
use super::input::load_secret;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = cli
        .database_url()
        .context("No database url provided, set DATABASE_URL or DATABASE_URL_FILE")?;

    let mut opt = ConnectOptions::new(db_url.clone());
    opt.sqlx_logging(cli.log_level == "debug");

    if db_url.starts_with("sqlite:") && db_url.contains(":memory:") {
        // every pooled connection would otherwise open its own empty database
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(20)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .max_lifetime(Duration::from_secs(1800));
    }

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_db(&db, cli).await.context("Failed to seed database")?;
    Ok(db)
}

/// Makes sure the default department exists and, when configured, an admin account.
pub async fn seed_db(db: &DatabaseConnection, cli: &Cli) -> Result<(), DbErr> {
    let now = Utc::now().naive_utc();

    if EDepartment::find_by_id(DEFAULT_DEPARTMENT_ID)
        .one(db)
        .await?
        .is_none()
    {
        ADepartment {
            id: Set(DEFAULT_DEPARTMENT_ID),
            name: Set(DEFAULT_DEPARTMENT_NAME.to_string()),
            description: Set(String::new()),
            vision: Set(None),
            mission: Set(None),
            history: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("created default department");
    }

    let (Some(email), Some(password_file)) = (&cli.admin_email, &cli.admin_password_file) else {
        return Ok(());
    };

    let email = email.trim().to_lowercase();
    let password = load_secret(password_file);

    if password.is_empty() {
        tracing::warn!("PORTAL_ADMIN_PASSWORD_FILE is empty, skipping admin account");
        return Ok(());
    }

    if EUser::find()
        .filter(CUser::Email.eq(email.clone()))
        .one(db)
        .await?
        .is_some()
    {
        return Ok(());
    }

    AUser {
        id: Set(Uuid::new_v4()),
        name: Set("Administrator".to_string()),
        email: Set(email.clone()),
        password: Set(generate_hash(password)),
        role: Set(Role::Admin),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    info!(email = %email, "created admin account");
    Ok(())
}
