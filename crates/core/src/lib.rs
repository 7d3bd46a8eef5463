//! # Deskbook Core
//!
//! Domain types and pure booking logic for the deskbook office-presence
//! service: date classification, month grid construction, selection state,
//! the duplicate scan and the retention policy. This crate performs no I/O;
//! persistence and transport live in `deskbook-db` and `deskbook-api`.

pub mod auth;
pub mod calendar;
pub mod errors;
pub mod holidays;
pub mod models;
pub mod retention;
