//! Attendance Engine
//!
//! This crate decides whether and how an attendance mark may be recorded for
//! an identified employee (window classification plus a per-day duplicate
//! guard) and reconstructs a complete day-by-day attendance matrix for any
//! employee and calendar month, backfilling rest days, holidays, and
//! unmarked work days.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
