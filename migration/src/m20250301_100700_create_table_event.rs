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
                    .table(Event::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Event::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Event::Title).string().not_null())
                    .col(ColumnDef::new(Event::Description).text().not_null())
                    .col(ColumnDef::new(Event::EventType).string().not_null())
                    .col(ColumnDef::new(Event::Date).date_time().not_null())
                    .col(ColumnDef::new(Event::Venue).string())
                    .col(ColumnDef::new(Event::ImageUrl).string())
                    .col(ColumnDef::new(Event::DepartmentId).uuid())
                    .col(ColumnDef::new(Event::SocietyId).uuid())
                    .col(ColumnDef::new(Event::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Event::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event-department_id")
                            .from(Event::Table, Event::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event-society_id")
                            .from(Event::Table, Event::SocietyId)
                            .to(Society::Table, Society::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    Title,
    Description,
    EventType,
    Date,
    Venue,
    ImageUrl,
    DepartmentId,
    SocietyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Society {
    Table,
    Id,
}
