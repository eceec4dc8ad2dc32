/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod form;
pub mod gateway;
pub mod input;
pub mod messages;
pub mod resources;
pub mod session;
pub mod storage;
pub mod table;
pub mod types;

use anyhow::{Context, Result};
use database::connect_db;
use std::sync::Arc;
use storage::{HttpObjectStore, ObjectStore};
use tracing::info;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    info!("Starting Department Portal on {}:{}", cli.ip, cli.port);

    let session_secret = cli
        .session_secret()
        .context("No session secret provided, set NEXTAUTH_SECRET or NEXTAUTH_SECRET_FILE")?;

    let db = connect_db(&cli).await?;

    let store = HttpObjectStore::from_cli(&cli).map(|store| Arc::new(store) as Arc<dyn ObjectStore>);

    if store.is_none() {
        info!(dir = %cli.upload_dir, "object storage not configured, uploads go to local disk");
    }

    Ok(Arc::new(ServerState {
        db,
        cli,
        session_secret,
        store,
    }))
}
