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
                    .table(Society::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Society::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Society::Name).string().not_null())
                    .col(ColumnDef::new(Society::Description).text())
                    .col(ColumnDef::new(Society::ImageUrl).string())
                    .col(ColumnDef::new(Society::DepartmentId).uuid())
                    .col(ColumnDef::new(Society::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Society::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-society-department_id")
                            .from(Society::Table, Society::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Society::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Society {
    Table,
    Id,
    Name,
    Description,
    ImageUrl,
    DepartmentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
