//! SeaORM entity models for the barbershop booking database.

pub mod appointment;
pub mod barber;
pub mod prelude;
pub mod service;
pub mod user;
