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
                    .table(Program::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Program::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Program::Name).string().not_null())
                    .col(ColumnDef::new(Program::DegreeType).string().not_null())
                    .col(ColumnDef::new(Program::Duration).string().not_null())
                    .col(ColumnDef::new(Program::CreditHours).integer().not_null())
                    .col(ColumnDef::new(Program::Eligibility).text())
                    .col(ColumnDef::new(Program::Description).text())
                    .col(ColumnDef::new(Program::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(Program::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Program::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-program-department_id")
                            .from(Program::Table, Program::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Program {
    Table,
    Id,
    Name,
    DegreeType,
    Duration,
    CreditHours,
    Eligibility,
    Description,
    DepartmentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
