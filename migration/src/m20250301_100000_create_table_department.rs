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
                    .table(Department::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Department::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Department::Name).string().not_null())
                    .col(ColumnDef::new(Department::Description).text().not_null())
                    .col(ColumnDef::new(Department::Vision).text())
                    .col(ColumnDef::new(Department::Mission).text())
                    .col(ColumnDef::new(Department::History).text())
                    .col(ColumnDef::new(Department::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Department::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
    Name,
    Description,
    Vision,
    Mission,
    History,
    CreatedAt,
    UpdatedAt,
}
