//! Request and response bodies exchanged over the REST API.
//!
//! Field names are camelCase on the wire. Request bodies carry `validator` rules that the
//! `ValidatedJson` / `ValidatedQuery` extractors enforce before a handler runs.

pub mod api;
pub mod appointment;
pub mod barber;
pub mod catalog;
pub mod user;
