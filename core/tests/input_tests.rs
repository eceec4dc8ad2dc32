/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use dept_core::input::*;

#[test]
fn test_port_in_range() {
    assert_eq!(port_in_range("8080"), Ok(8080));
    assert!(port_in_range("0").is_err());
    assert!(port_in_range("65536").is_err());
    assert!(port_in_range("http").is_err());
}

#[test]
fn test_url_to_addr() {
    let addr = url_to_addr("127.0.0.1", 3000).unwrap();
    assert_eq!(addr.port(), 3000);
    assert!(addr.ip().is_loopback());
}

#[test]
fn test_greater_than_zero() {
    assert_eq!(greater_than_zero::<usize>("10"), Ok(10));
    assert!(greater_than_zero::<i64>("0").is_err());
    assert!(greater_than_zero::<i64>("-3").is_err());
}

#[test]
fn test_parse_datetime_formats() {
    let midnight = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let half_past = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();

    assert_eq!(parse_datetime("2025-03-01"), Ok(midnight));
    assert_eq!(parse_datetime("2025-03-01T10:30"), Ok(half_past));
    assert_eq!(parse_datetime("2025-03-01T10:30:00"), Ok(half_past));
    assert_eq!(parse_datetime("2025-03-01T12:30:00+02:00"), Ok(half_past));
    assert!(parse_datetime("yesterday").is_err());
}

#[test]
fn test_sanitize_file_name() {
    assert_eq!(sanitize_file_name("photo.jpg"), "photo.jpg");
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name("C:\\Users\\me\\CV 2025.pdf"), "CV-2025.pdf");
    assert_eq!(sanitize_file_name("..."), "file");
    assert_eq!(sanitize_file_name(&"a".repeat(200)).len(), 96);
}

#[test]
fn test_check_folder_name() {
    assert!(check_folder_name("faculty").is_ok());
    assert!(check_folder_name("chairperson-messages").is_ok());
    assert!(check_folder_name("").is_err());
    assert!(check_folder_name("../secret").is_err());
    assert!(check_folder_name("News").is_err());
}

#[test]
fn test_check_email() {
    assert!(check_email("dean@uni.edu.pk"));
    assert!(!check_email("not-an-email"));
}
