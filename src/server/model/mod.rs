//! Domain models and operation parameters for the server.
//!
//! Repositories convert entity rows into these types at the data boundary; services and
//! controllers never see SeaORM models directly. Each model offers `into_dto` for the
//! response conversion and each parameter type a `from_dto` for the request conversion.

pub mod appointment;
pub mod barber;
pub mod catalog;
pub mod schedule;
pub mod user;
