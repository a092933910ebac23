//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Booking rules, capability scoping, credential checks
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running conflict checks and writes atomically

pub mod appointment;
pub mod auth;
pub mod availability;
pub mod barber;
pub mod catalog;
pub mod seed;
pub mod token;
