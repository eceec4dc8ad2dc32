/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Generic persistence operations shared by every [`Resource`].

use crate::resources::{Check, Resource, validate_payload};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, SqlErr,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, String>,
    },
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Constraint(String),
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        GatewayError::Validation {
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    fn from_json(err: serde_json::Error) -> Self {
        GatewayError::validation(format!("Invalid request body: {}", err))
    }
}

impl From<DbErr> for GatewayError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                GatewayError::Constraint("A record with the same unique value already exists".to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => GatewayError::Constraint(
                "Operation violates a reference to another record".to_string(),
            ),
            _ => GatewayError::Database(err),
        }
    }
}

pub fn parse_id<R: Resource>(id: &str) -> Result<R::Id, GatewayError> {
    id.trim()
        .parse()
        .map_err(|_| GatewayError::NotFound(R::KIND.singular()))
}

pub async fn find<R: Resource, C: ConnectionTrait>(
    db: &C,
    params: &HashMap<String, String>,
) -> Result<Vec<R::Model>, GatewayError> {
    let condition = R::filter(params)?;
    let models = R::order(R::Entity::find().filter(condition)).all(db).await?;
    Ok(models)
}

pub async fn find_one<R: Resource, C: ConnectionTrait>(
    db: &C,
    id: R::Id,
) -> Result<Option<R::Model>, GatewayError> {
    Ok(R::Entity::find_by_id(id).one(db).await?)
}

pub async fn get<R: Resource, C: ConnectionTrait>(
    db: &C,
    id: R::Id,
) -> Result<R::Model, GatewayError> {
    find_one::<R, C>(db, id)
        .await?
        .ok_or(GatewayError::NotFound(R::KIND.singular()))
}

pub async fn count<R: Resource, C: ConnectionTrait>(db: &C) -> Result<u64, GatewayError> {
    Ok(R::Entity::find().count(db).await?)
}

pub async fn create<R: Resource, C: ConnectionTrait>(
    db: &C,
    body: R::Create,
) -> Result<R::Model, GatewayError> {
    run_checks::<R, C>(db, R::create_checks(&body), None).await?;

    let record = R::new_active(body);
    Ok(record.insert(db).await?)
}

pub async fn update<R: Resource, C: ConnectionTrait>(
    db: &C,
    id: R::Id,
    patch: R::Patch,
) -> Result<R::Model, GatewayError> {
    let model = get::<R, C>(db, id.clone()).await?;
    run_checks::<R, C>(db, R::patch_checks(&patch), Some(&id)).await?;

    let mut record: R::Active = model.into_active_model();
    R::apply_patch(&mut record, patch);
    Ok(record.update(db).await?)
}

pub async fn delete<R: Resource, C: ConnectionTrait>(
    db: &C,
    id: R::Id,
) -> Result<(), GatewayError> {
    let result = R::Entity::delete_by_id(id).exec(db).await?;

    if result.rows_affected == 0 {
        return Err(GatewayError::NotFound(R::KIND.singular()));
    }

    Ok(())
}

pub async fn create_from_json<R: Resource, C: ConnectionTrait>(
    db: &C,
    body: Value,
) -> Result<R::Model, GatewayError> {
    validate_payload(R::fields(), &body, false)?;
    let body: R::Create = serde_json::from_value(body).map_err(GatewayError::from_json)?;
    create::<R, C>(db, body).await
}

pub async fn update_from_json<R: Resource, C: ConnectionTrait>(
    db: &C,
    id: R::Id,
    body: Value,
) -> Result<R::Model, GatewayError> {
    validate_payload(R::fields(), &body, true)?;
    let patch: R::Patch = serde_json::from_value(body).map_err(GatewayError::from_json)?;
    update::<R, C>(db, id, patch).await
}

async fn run_checks<R: Resource, C: ConnectionTrait>(
    db: &C,
    checks: Vec<Check<R>>,
    exclude: Option<&R::Id>,
) -> Result<(), GatewayError> {
    for check in checks {
        match check {
            Check::Reference(reference) => reference.ensure_exists(db).await?,
            Check::Unique {
                column,
                value,
                label,
            } => {
                let existing = R::Entity::find()
                    .filter(column.eq(value.clone()))
                    .all(db)
                    .await?;

                if existing
                    .iter()
                    .any(|model| exclude != Some(&R::id(model)))
                {
                    return Err(GatewayError::Constraint(format!(
                        "{} with {} {} already exists",
                        R::KIND.singular(),
                        label,
                        value
                    )));
                }
            }
        }
    }

    Ok(())
}
