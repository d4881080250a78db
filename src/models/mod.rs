//! Core data models for roster reconciliation.
//!
//! This module contains the directory rows, roster entries, consolidated
//! shifts and match outcomes shared by the rest of the crate.

mod employee;
mod match_result;
mod shift;

pub use employee::{EMPLOYEE_NO_WIDTH, EmployeeRecord, EmployeeStatus, pad_employee_no};
pub use match_result::{MatchAnnotation, MatchResult, MatchStrategy};
pub use shift::{
    LogicalShift, ROSTER_DATE_FORMAT, RawShiftEntry, format_roster_date, parse_roster_date,
    roster_date,
};
