use test_utils::{builder::TestBuilder, factory::appointment::AppointmentFactory};

use super::*;
use crate::{
    model::appointment::{AppointmentListQuery, AppointmentStatus},
    server::{
        model::{appointment::BookAppointmentParams, schedule::TimeOfDay},
        service::appointment::AppointmentService,
    },
};

mod available_slots;
mod list;
mod update_status;

fn at(hour: u16, minute: u16) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

fn booking(barber_id: i32, service_id: i32, date: NaiveDate, start: TimeOfDay) -> BookAppointmentParams {
    BookAppointmentParams {
        barber_id,
        service_id,
        date,
        start,
        notes: None,
    }
}
