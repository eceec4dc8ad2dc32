/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, load_secret, port_in_range};
use super::storage::{LocalStore, ObjectStore};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "Department Portal", display_name = "Department Portal", bin_name = "dept-portal", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "PORTAL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "PORTAL_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "PORTAL_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "PORTAL_SERVE_URL", default_value = "http://127.0.0.1:3000")]
    pub serve_url: String,
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "NEXTAUTH_SECRET")]
    pub session_secret: Option<String>,
    #[arg(long, env = "NEXTAUTH_SECRET_FILE")]
    pub session_secret_file: Option<String>,
    #[arg(long, env = "PORTAL_SESSION_TTL_HOURS", value_parser = greater_than_zero::<i64>, default_value = "24")]
    pub session_ttl_hours: i64,
    #[arg(long, env = "PORTAL_SECURE_COOKIES", default_value = "false")]
    pub secure_cookies: bool,
    #[arg(long, env = "PORTAL_UPLOAD_DIR", default_value = "./public/uploads")]
    pub upload_dir: String,
    #[arg(long, env = "PORTAL_UPLOAD_URL_PREFIX", default_value = "/uploads")]
    pub upload_url_prefix: String,
    #[arg(long, env = "PORTAL_MAX_UPLOAD_BYTES", value_parser = greater_than_zero::<usize>, default_value = "10485760")]
    pub max_upload_bytes: usize,
    #[arg(long, env = "PORTAL_UPLOAD_TIMEOUT", value_parser = greater_than_zero::<u64>, default_value = "30")]
    pub upload_timeout: u64,
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,
    #[arg(long, env = "S3_BUCKET")]
    pub s3_bucket: Option<String>,
    #[arg(long, env = "S3_ACCESS_KEY_ID")]
    pub s3_access_key_id: Option<String>,
    #[arg(long, env = "S3_SECRET_ACCESS_KEY_FILE")]
    pub s3_secret_access_key_file: Option<String>,
    #[arg(long, env = "S3_PUBLIC_URL")]
    pub s3_public_url: Option<String>,
    #[arg(long, env = "PORTAL_ADMIN_EMAIL")]
    pub admin_email: Option<String>,
    #[arg(long, env = "PORTAL_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
}

impl Cli {
    pub fn database_url(&self) -> Option<String> {
        self.database_url_file
            .as_deref()
            .map(load_secret)
            .filter(|url| !url.is_empty())
            .or_else(|| self.database_url.clone())
    }

    pub fn session_secret(&self) -> Option<String> {
        self.session_secret_file
            .as_deref()
            .map(load_secret)
            .filter(|secret| !secret.is_empty())
            .or_else(|| self.session_secret.clone())
            .filter(|secret| !secret.is_empty())
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout)
    }

    pub fn local_store(&self) -> LocalStore {
        LocalStore::new(&self.upload_dir, &self.upload_url_prefix)
    }
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub session_secret: String,
    pub store: Option<Arc<dyn ObjectStore>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub name: String,
}

pub type EChairpersonMessage = chairperson_message::Entity;
pub type EContactSubmission = contact_submission::Entity;
pub type ECourse = course::Entity;
pub type EDepartment = department::Entity;
pub type EEvent = event::Entity;
pub type EFaculty = faculty::Entity;
pub type ENews = news::Entity;
pub type EProgram = program::Entity;
pub type ESociety = society::Entity;
pub type EUser = user::Entity;
pub type EViceChancellorMessage = vice_chancellor_message::Entity;

pub type MChairpersonMessage = chairperson_message::Model;
pub type MContactSubmission = contact_submission::Model;
pub type MCourse = course::Model;
pub type MDepartment = department::Model;
pub type MEvent = event::Model;
pub type MFaculty = faculty::Model;
pub type MNews = news::Model;
pub type MProgram = program::Model;
pub type MSociety = society::Model;
pub type MUser = user::Model;
pub type MViceChancellorMessage = vice_chancellor_message::Model;

pub type AChairpersonMessage = chairperson_message::ActiveModel;
pub type AContactSubmission = contact_submission::ActiveModel;
pub type ACourse = course::ActiveModel;
pub type ADepartment = department::ActiveModel;
pub type AEvent = event::ActiveModel;
pub type AFaculty = faculty::ActiveModel;
pub type ANews = news::ActiveModel;
pub type AProgram = program::ActiveModel;
pub type ASociety = society::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AViceChancellorMessage = vice_chancellor_message::ActiveModel;

pub type CChairpersonMessage = chairperson_message::Column;
pub type CContactSubmission = contact_submission::Column;
pub type CCourse = course::Column;
pub type CDepartment = department::Column;
pub type CEvent = event::Column;
pub type CFaculty = faculty::Column;
pub type CNews = news::Column;
pub type CProgram = program::Column;
pub type CSociety = society::Column;
pub type CUser = user::Column;
pub type CViceChancellorMessage = vice_chancellor_message::Column;
