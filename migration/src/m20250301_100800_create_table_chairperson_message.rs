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
                    .table(ChairpersonMessage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChairpersonMessage::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChairpersonMessage::Name).string().not_null())
                    .col(ColumnDef::new(ChairpersonMessage::Title).string().not_null())
                    .col(ColumnDef::new(ChairpersonMessage::Message).text().not_null())
                    .col(ColumnDef::new(ChairpersonMessage::ImageUrl).string())
                    .col(
                        ColumnDef::new(ChairpersonMessage::DepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChairpersonMessage::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChairpersonMessage::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-chairperson_message-department_id")
                            .from(ChairpersonMessage::Table, ChairpersonMessage::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChairpersonMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ChairpersonMessage {
    Table,
    Id,
    Name,
    Title,
    Message,
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
