//! Roster reconciliation for care-facility shift schedules.
//!
//! This crate maps the free-text person labels found on facility rosters to
//! canonical employee records, and consolidates each employee's evening,
//! night and morning cells into logical overnight shifts.

#![warn(missing_docs)]

pub mod config;
pub mod consolidation;
pub mod error;
pub mod matching;
pub mod models;
pub mod roster;
