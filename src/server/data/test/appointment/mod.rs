use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::appointment::AppointmentFactory};

use crate::{
    model::appointment::AppointmentStatus,
    server::{
        data::appointment::AppointmentRepository,
        model::{
            appointment::{AppointmentFilter, CreateAppointmentParams},
            schedule::{TimeOfDay, TimeRange},
        },
    },
};

mod create;
mod find_overlapping;
mod get_by_client;
mod get_filtered;
mod update_status;

/// A Tuesday.
fn booking_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
}

fn range(start: (u16, u16), end: (u16, u16)) -> TimeRange {
    TimeRange::new(
        TimeOfDay::from_hm(start.0, start.1).unwrap(),
        TimeOfDay::from_hm(end.0, end.1).unwrap(),
    )
    .unwrap()
}
