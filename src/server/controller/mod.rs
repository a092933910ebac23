//! HTTP request handlers.
//!
//! Controllers authenticate through `AuthGuard`, convert DTOs into parameter models, call a
//! service and convert the result back into a DTO. They hold no business rules.

pub mod appointment;
pub mod auth;
pub mod barber;
pub mod catalog;
pub mod meta;

use chrono::NaiveDate;

/// The shop's current calendar day, used to reject bookings in the past.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod test;
