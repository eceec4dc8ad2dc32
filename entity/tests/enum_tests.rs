/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::contact_submission::SubmissionStatus;
use entity::user::Role;
use std::str::FromStr;

#[test]
fn test_submission_status_from_str() {
    assert_eq!(
        SubmissionStatus::from_str("new").unwrap(),
        SubmissionStatus::New
    );
    assert_eq!(
        SubmissionStatus::from_str("in_progress").unwrap(),
        SubmissionStatus::InProgress
    );
    assert_eq!(
        SubmissionStatus::from_str("closed").unwrap(),
        SubmissionStatus::Closed
    );

    assert!(SubmissionStatus::from_str("archived").is_err());
}

#[test]
fn test_submission_status_round_trips_through_as_str() {
    for status in [
        SubmissionStatus::New,
        SubmissionStatus::Contacted,
        SubmissionStatus::InProgress,
        SubmissionStatus::Resolved,
        SubmissionStatus::Closed,
    ] {
        assert_eq!(SubmissionStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_submission_status_serializes_snake_case() {
    let json = serde_json::to_string(&SubmissionStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
}

#[test]
fn test_role_defaults_to_editor() {
    assert_eq!(Role::default(), Role::Editor);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("root").is_err());
}
