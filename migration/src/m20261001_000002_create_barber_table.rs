use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Barber::Table)
                    .if_not_exists()
                    .col(pk_auto(Barber::Id))
                    .col(integer_uniq(Barber::UserId))
                    .col(string(Barber::Specialty).default("both"))
                    .col(integer(Barber::Experience).default(0))
                    .col(text_null(Barber::Description))
                    .col(boolean(Barber::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Barber::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_barber_user_id")
                            .from(Barber::Table, Barber::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Barber::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Barber {
    Table,
    Id,
    UserId,
    Specialty,
    Experience,
    Description,
    Active,
    CreatedAt,
}
