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
                    .table(Faculty::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Faculty::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Faculty::Name).string().not_null())
                    .col(ColumnDef::new(Faculty::Designation).string().not_null())
                    .col(ColumnDef::new(Faculty::Expertise).text())
                    .col(
                        ColumnDef::new(Faculty::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Faculty::Phone).string())
                    .col(ColumnDef::new(Faculty::Bio).text())
                    .col(ColumnDef::new(Faculty::ImageUrl).string())
                    .col(ColumnDef::new(Faculty::CvUrl).string())
                    .col(ColumnDef::new(Faculty::DepartmentId).uuid().not_null())
                    .col(
                        ColumnDef::new(Faculty::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Faculty::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Faculty::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-faculty-department_id")
                            .from(Faculty::Table, Faculty::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faculty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Faculty {
    Table,
    Id,
    Name,
    Designation,
    Expertise,
    Email,
    Phone,
    Bio,
    ImageUrl,
    CvUrl,
    DepartmentId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
