/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod chairperson_message;
pub mod contact_submission;
pub mod course;
pub mod department;
pub mod event;
pub mod faculty;
pub mod news;
pub mod program;
pub mod society;
pub mod user;
pub mod vice_chancellor_message;
