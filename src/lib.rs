//! Monthly timesheet engine.
//!
//! This crate turns raw `HHmm` clock entries (up to three shifts per day)
//! into worked, normal, overtime and nocturnal minutes per day, and totals
//! them per month. Times live on a circular 0-1440 minute clock so shifts may
//! cross midnight. A malformed entry flags and zeroes its own day without
//! affecting the rest of the month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
