/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::net::{SocketAddr, ToSocketAddrs};

use super::consts::*;

pub fn url_to_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let uri = format!("{}:{}", host, port);
    uri.to_socket_addrs()
        .map_err(|e| e.to_string())?
        .next()
        .ok_or(format!("{} is not a valid address", uri))
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn check_email(s: &str) -> bool {
    EmailAddress::is_valid(s.trim())
}

/// Accepts `2025-03-01`, `2025-03-01T10:30`, `2025-03-01T10:30:00` and RFC 3339.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(format!("`{}` is not a valid date", s))
}

pub fn flexible_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).map_err(serde::de::Error::custom)
}

pub fn flexible_datetime_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    s.map(|s| parse_datetime(&s).map_err(serde::de::Error::custom))
        .transpose()
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
/// Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Reduces an uploaded file name to `[A-Za-z0-9._-]` and caps its length.
pub fn sanitize_file_name(name: &str) -> String {
    let name = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '-').to_string();

    if cleaned.is_empty() {
        return "file".to_string();
    }

    cleaned.chars().take(FILE_NAME_MAX_LEN).collect()
}

/// Upload folders are single lowercase path segments.
pub fn check_folder_name(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Folder cannot be empty".to_string());
    }

    if !s
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err("Folder can only contain lowercase letters, digits, '-' and '_'".to_string());
    }

    Ok(())
}
