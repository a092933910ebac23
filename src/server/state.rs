//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token keys for signing and verifying access tokens
//! - The shop's opening hours and slot granularity
//! - The startup instant for uptime reporting
//! - Whether 500 responses expose their underlying error

use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::server::{model::schedule::SchedulePolicy, service::token::TokenKeys};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool (clones share
/// the pool) and `TokenKeys` holds its key material behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keys and lifetime for access tokens.
    pub tokens: TokenKeys,

    /// Opening hours used for slot generation and booking validation.
    pub schedule: SchedulePolicy,

    /// When the server started; reported by the health endpoint.
    pub started_at: Instant,

    /// Whether 500 responses include the underlying error message in `detail`.
    ///
    /// Off unless enabled with [`AppState::with_internal_details`]; `main` enables it outside
    /// production.
    pub expose_internal_details: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Access token keys
    /// - `schedule` - Opening hours and slot granularity
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenKeys, schedule: SchedulePolicy) -> Self {
        Self {
            db,
            tokens,
            schedule,
            started_at: Instant::now(),
            expose_internal_details: false,
        }
    }

    /// Sets whether 500 responses carry diagnostic detail.
    pub fn with_internal_details(mut self, enabled: bool) -> Self {
        self.expose_internal_details = enabled;
        self
    }
}
