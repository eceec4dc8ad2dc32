/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactSubmission::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactSubmission::Name).string().not_null())
                    .col(ColumnDef::new(ContactSubmission::Email).string().not_null())
                    .col(ColumnDef::new(ContactSubmission::Phone).string())
                    .col(ColumnDef::new(ContactSubmission::Message).text().not_null())
                    .col(ColumnDef::new(ContactSubmission::ProgramId).integer())
                    .col(
                        ColumnDef::new(ContactSubmission::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ContactSubmission::AdminNotes).text())
                    .col(
                        ColumnDef::new(ContactSubmission::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmission::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-contact_submission-program_id")
                            .from(ContactSubmission::Table, ContactSubmission::ProgramId)
                            .to(Program::Table, Program::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactSubmission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactSubmission {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
    ProgramId,
    Status,
    AdminNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Program {
    Table,
    Id,
}
