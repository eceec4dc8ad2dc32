/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::gateway::{self, GatewayError};
use crate::resources::{ChairpersonMessage, Lookups, ResourceKind, ViceChancellorMessage};
use crate::types::*;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Chairperson,
    ViceChancellor,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Chairperson => "chairperson",
            MessageKind::ViceChancellor => "vice_chancellor",
        }
    }

    pub fn resource(&self) -> ResourceKind {
        match self {
            MessageKind::Chairperson => ResourceKind::ChairpersonMessage,
            MessageKind::ViceChancellor => ResourceKind::ViceChancellorMessage,
        }
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chairperson" => Ok(MessageKind::Chairperson),
            "vice_chancellor" | "vice-chancellor" | "viceChancellor" => {
                Ok(MessageKind::ViceChancellor)
            }
            _ => Err(format!("Unknown message type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageListing {
    pub chairperson: Vec<MChairpersonMessage>,
    pub vice_chancellor: Vec<MViceChancellorMessage>,
}

/// Reads both message collections inside one transaction.
pub async fn list_messages(db: &DatabaseConnection) -> Result<MessageListing, GatewayError> {
    let txn = db.begin().await?;
    let params = HashMap::new();

    let chairperson = gateway::find::<ChairpersonMessage, _>(&txn, &params).await?;
    let vice_chancellor = gateway::find::<ViceChancellorMessage, _>(&txn, &params).await?;

    txn.commit().await?;

    Ok(MessageListing {
        chairperson,
        vice_chancellor,
    })
}

impl MessageListing {
    /// Chairperson rows as JSON with the department nested under `department`.
    pub fn chairperson_rows(&self, lookups: &Lookups) -> Vec<Value> {
        let departments = lookups.names(ResourceKind::Department);

        self.chairperson
            .iter()
            .filter_map(|message| {
                let mut row = serde_json::to_value(message).ok()?;
                let department = departments
                    .get(&message.department_id.to_string())
                    .map(|name| json!({ "id": message.department_id, "name": name }))
                    .unwrap_or(Value::Null);

                row["department"] = department;
                Some(row)
            })
            .collect()
    }

    pub fn vice_chancellor_rows(&self) -> Vec<Value> {
        self.vice_chancellor
            .iter()
            .filter_map(|message| serde_json::to_value(message).ok())
            .collect()
    }
}
