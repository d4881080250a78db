//! Roster import: cell cleaning and batch reconciliation.

mod clean;
mod reconcile;

pub use clean::clean_roster_name;
pub use reconcile::{
    AnnotatedRecord, EmployeeShifts, ReconciliationReport, UnmatchedLabel, reconcile,
};
