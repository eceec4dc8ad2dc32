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
                    .table(ViceChancellorMessage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ViceChancellorMessage::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ViceChancellorMessage::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ViceChancellorMessage::Title)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ViceChancellorMessage::Message)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ViceChancellorMessage::ImageUrl).string())
                    .col(
                        ColumnDef::new(ViceChancellorMessage::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ViceChancellorMessage::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ViceChancellorMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ViceChancellorMessage {
    Table,
    Id,
    Name,
    Title,
    Message,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
