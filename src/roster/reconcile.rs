//! Batch reconciliation of one roster period.
//!
//! Ties the matcher and the consolidator together the way a roster import
//! uses them: clean every cell, match it, retry ambiguous surnames against
//! who already works at each facility, then consolidate each employee's
//! shifts. Unmatched labels are collected for review, never dropped.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::consolidation::{consolidate, normalize_time_slot};
use crate::matching::{FacilityHistory, IdentityMatcher};
use crate::models::{LogicalShift, MatchAnnotation, RawShiftEntry};

use super::clean::clean_roster_name;

/// A roster entry together with the employee it was attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedRecord {
    /// The entry as read, with its time slot normalized.
    pub entry: RawShiftEntry,
    /// The cleaned name that was matched.
    pub label: String,
    /// The match outcome; all fields null when unmatched.
    pub annotation: MatchAnnotation,
}

/// A label no strategy could resolve, for manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedLabel {
    /// The cleaned label.
    pub label: String,
    /// Facilities the label was rostered at.
    pub facilities: BTreeSet<String>,
    /// Number of entries carrying the label.
    pub occurrences: usize,
}

/// One employee's consolidated shifts for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShifts {
    /// The employee number.
    pub employee_no: String,
    /// The canonical name.
    pub canonical_name: String,
    /// Shifts ordered by date and slot.
    pub shifts: Vec<LogicalShift>,
}

/// Everything a roster import produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    /// Identifies this run in logs.
    pub run_id: Uuid,
    /// Every non-placeholder entry, in input order, with its annotation.
    pub records: Vec<AnnotatedRecord>,
    /// Placeholder or empty cells that were not matched.
    pub skipped: usize,
    /// Unresolved labels sorted by label.
    pub unmatched: Vec<UnmatchedLabel>,
    /// Consolidated shifts per matched employee, ordered by employee number.
    pub employees: Vec<EmployeeShifts>,
}

impl ReconciliationReport {
    /// Number of entries attributed to an employee.
    pub fn matched_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.annotation.is_match())
            .count()
    }

    /// Number of entries left for review.
    pub fn unmatched_count(&self) -> usize {
        self.records.len() - self.matched_count()
    }

    /// Consolidated shifts for one employee.
    pub fn shifts_for(&self, employee_no: &str) -> Option<&EmployeeShifts> {
        self.employees.iter().find(|e| e.employee_no == employee_no)
    }
}

/// Reconciles one period's roster entries against the directory.
///
/// # Example
///
/// ```
/// use roster_reconcile::config::MatcherConfig;
/// use roster_reconcile::matching::IdentityMatcher;
/// use roster_reconcile::models::{EmployeeRecord, RawShiftEntry};
/// use roster_reconcile::roster::reconcile;
/// use chrono::NaiveDate;
///
/// let matcher = IdentityMatcher::new(
///     vec![EmployeeRecord::active("1", "柳 幸子")],
///     MatcherConfig::default(),
/// )
/// .unwrap();
/// let day = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
///
/// let report = reconcile(
///     &matcher,
///     vec![
///         RawShiftEntry::new(day, "A", "17時～", "柳-8"),
///         RawShiftEntry::new(day, "A", "22時～", "空き"),
///         RawShiftEntry::new(day, "A", "6時～9時", "山田"),
///     ],
/// );
///
/// assert_eq!(report.matched_count(), 1);
/// assert_eq!(report.skipped, 1);
/// assert_eq!(report.unmatched[0].label, "山田");
/// ```
pub fn reconcile(matcher: &IdentityMatcher, entries: Vec<RawShiftEntry>) -> ReconciliationReport {
    let run_id = Uuid::new_v4();
    let total = entries.len();

    let mut skipped = 0;
    let mut records = Vec::with_capacity(total);
    for entry in entries {
        let Some(label) = clean_roster_name(&entry.person_label) else {
            skipped += 1;
            continue;
        };
        let entry = RawShiftEntry {
            time_slot: normalize_time_slot(&entry.time_slot),
            ..entry
        };
        let annotation = matcher.match_name(&label, Some(&entry.facility)).into();
        records.push(AnnotatedRecord {
            entry,
            label,
            annotation,
        });
    }

    let history = facility_history(&records);
    let mut resolved_by_history = 0;
    for record in records.iter_mut().filter(|r| !r.annotation.is_match()) {
        let result =
            matcher.match_with_facility_history(&record.label, &record.entry.facility, &history);
        if result.is_match() {
            record.annotation = result.into();
            resolved_by_history += 1;
        }
    }

    let unmatched = collect_unmatched(&records);
    for label in &unmatched {
        warn!(
            run_id = %run_id,
            label = %label.label,
            occurrences = label.occurrences,
            facilities = ?label.facilities,
            "Unmatched roster label"
        );
    }

    let employees = consolidate_by_employee(&records);

    let report = ReconciliationReport {
        run_id,
        records,
        skipped,
        unmatched,
        employees,
    };

    info!(
        run_id = %run_id,
        entries = total,
        matched = report.matched_count(),
        unmatched = report.unmatched_count(),
        resolved_by_history,
        skipped,
        employees = report.employees.len(),
        "Roster reconciliation completed"
    );

    report
}

/// Facilities each matched employee appears at.
fn facility_history(records: &[AnnotatedRecord]) -> FacilityHistory {
    let mut history = FacilityHistory::new();
    for record in records {
        if let Some(employee_no) = &record.annotation.employee_no {
            history.record(&record.entry.facility, employee_no);
        }
    }
    history
}

fn collect_unmatched(records: &[AnnotatedRecord]) -> Vec<UnmatchedLabel> {
    let mut by_label: BTreeMap<&str, UnmatchedLabel> = BTreeMap::new();
    for record in records.iter().filter(|r| !r.annotation.is_match()) {
        let entry = by_label
            .entry(record.label.as_str())
            .or_insert_with(|| UnmatchedLabel {
                label: record.label.clone(),
                facilities: BTreeSet::new(),
                occurrences: 0,
            });
        entry.facilities.insert(record.entry.facility.clone());
        entry.occurrences += 1;
    }
    by_label.into_values().collect()
}

fn consolidate_by_employee(records: &[AnnotatedRecord]) -> Vec<EmployeeShifts> {
    let mut groups: BTreeMap<&str, (&str, Vec<RawShiftEntry>)> = BTreeMap::new();
    for record in records {
        let (Some(employee_no), Some(name)) = (
            record.annotation.employee_no.as_deref(),
            record.annotation.canonical_name.as_deref(),
        ) else {
            continue;
        };
        groups
            .entry(employee_no)
            .or_insert_with(|| (name, Vec::new()))
            .1
            .push(record.entry.clone());
    }

    groups
        .into_iter()
        .map(|(employee_no, (name, entries))| EmployeeShifts {
            employee_no: employee_no.to_string(),
            canonical_name: name.to_string(),
            shifts: consolidate(entries),
        })
        .collect()
}
