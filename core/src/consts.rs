/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;
use uuid::{Uuid, uuid};

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const SESSION_COOKIE: &str = "portal_session";
pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
pub const API_PREFIX: &str = "/api";

pub const DEFAULT_DEPARTMENT_ID: Uuid = uuid!("00000000-0000-0000-0000-000000000001");
pub const DEFAULT_DEPARTMENT_NAME: &str = "Department of Computer Science";

pub const DEGREE_TYPES: [&str; 5] = ["BS", "MS", "MPhil", "PhD", "Diploma"];

pub const EVENT_TYPES: [&str; 7] = [
    "seminar",
    "workshop",
    "conference",
    "competition",
    "ceremony",
    "society",
    "other",
];

pub const SUBMISSION_STATUSES: [&str; 5] = ["new", "contacted", "in_progress", "resolved", "closed"];

pub const ROLES: [&str; 2] = ["admin", "editor"];

pub const FILE_NAME_MAX_LEN: usize = 96;
