//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the pool
//! or inside a transaction.

pub mod appointment;
pub mod barber;
pub mod catalog;
pub mod user;

#[cfg(test)]
mod test;
