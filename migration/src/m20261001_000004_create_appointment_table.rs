use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User, m20261001_000002_create_barber_table::Barber,
    m20261001_000003_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::ClientId))
                    .col(integer(Appointment::BarberId))
                    .col(integer(Appointment::ServiceId))
                    .col(date(Appointment::Date))
                    .col(integer(Appointment::StartMinute))
                    .col(integer(Appointment::EndMinute))
                    .col(string(Appointment::Status).default("pending"))
                    .col(text_null(Appointment::Notes))
                    .col(double(Appointment::Price))
                    .col(
                        timestamp_with_time_zone(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_client_id")
                            .from(Appointment::Table, Appointment::ClientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_barber_id")
                            .from(Appointment::Table, Appointment::BarberId)
                            .to(Barber::Table, Barber::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_id")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap checks always scope to one barber's day.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_appointment_barber_date")
                    .table(Appointment::Table)
                    .col(Appointment::BarberId)
                    .col(Appointment::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    ClientId,
    BarberId,
    ServiceId,
    Date,
    StartMinute,
    EndMinute,
    Status,
    Notes,
    Price,
    CreatedAt,
}
