use crate::{
    model::barber::Specialty,
    server::{data::barber::BarberRepository, model::barber::CreateBarberParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_id;
mod get_active;
