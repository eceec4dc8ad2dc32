/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250301_100000_create_table_department;
mod m20250301_100100_create_table_user;
mod m20250301_100200_create_table_faculty;
mod m20250301_100300_create_table_program;
mod m20250301_100400_create_table_course;
mod m20250301_100500_create_table_news;
mod m20250301_100600_create_table_society;
mod m20250301_100700_create_table_event;
mod m20250301_100800_create_table_chairperson_message;
mod m20250301_100900_create_table_vice_chancellor_message;
mod m20250301_101000_create_table_contact_submission;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_100000_create_table_department::Migration),
            Box::new(m20250301_100100_create_table_user::Migration),
            Box::new(m20250301_100200_create_table_faculty::Migration),
            Box::new(m20250301_100300_create_table_program::Migration),
            Box::new(m20250301_100400_create_table_course::Migration),
            Box::new(m20250301_100500_create_table_news::Migration),
            Box::new(m20250301_100600_create_table_society::Migration),
            Box::new(m20250301_100700_create_table_event::Migration),
            Box::new(m20250301_100800_create_table_chairperson_message::Migration),
            Box::new(m20250301_100900_create_table_vice_chancellor_message::Migration),
            Box::new(m20250301_101000_create_table_contact_submission::Migration),
        ]
    }
}
