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
                    .table(Course::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Course::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Course::Title).string().not_null())
                    .col(ColumnDef::new(Course::Code).string().not_null())
                    .col(ColumnDef::new(Course::Description).text())
                    .col(ColumnDef::new(Course::CreditHours).integer().not_null())
                    .col(ColumnDef::new(Course::ProgramId).integer().not_null())
                    .col(ColumnDef::new(Course::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Course::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course-program_id")
                            .from(Course::Table, Course::ProgramId)
                            .to(Program::Table, Program::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
    Title,
    Code,
    Description,
    CreditHours,
    ProgramId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Program {
    Table,
    Id,
}
