//! Match outcome models.

use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// Names the rule that resolved a roster label to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The label equals a canonical name verbatim.
    Exact,
    /// The label equals a canonical name after whitespace and kanji normalization.
    Normalized,
    /// The label is a registered alias.
    Alias,
    /// Swapping one interchangeable character makes the label match.
    VariantSubstitution,
    /// The surname identifies a single active employee, possibly after facility filtering.
    UniqueSurname,
    /// The label is a strict prefix of exactly one canonical name.
    UniquePrefix,
    /// Batch second pass: one same-surname candidate already works at the facility.
    FacilityHistory,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::Exact => write!(f, "exact"),
            MatchStrategy::Normalized => write!(f, "normalized"),
            MatchStrategy::Alias => write!(f, "alias"),
            MatchStrategy::VariantSubstitution => write!(f, "variant_substitution"),
            MatchStrategy::UniqueSurname => write!(f, "unique_surname"),
            MatchStrategy::UniquePrefix => write!(f, "unique_prefix"),
            MatchStrategy::FacilityHistory => write!(f, "facility_history"),
        }
    }
}

/// The outcome of matching one label, borrowing from the directory.
///
/// Either both fields are set or neither is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'d> {
    /// The matched employee, if any.
    pub employee: Option<&'d EmployeeRecord>,
    /// The strategy that produced the match, if any.
    pub strategy: Option<MatchStrategy>,
}

impl<'d> MatchResult<'d> {
    /// A successful match.
    pub fn matched(employee: &'d EmployeeRecord, strategy: MatchStrategy) -> Self {
        Self {
            employee: Some(employee),
            strategy: Some(strategy),
        }
    }

    /// The explicit no-match value.
    pub fn no_match() -> Self {
        Self {
            employee: None,
            strategy: None,
        }
    }

    /// Returns true if an employee was found.
    pub fn is_match(&self) -> bool {
        self.employee.is_some()
    }

    /// Returns the matched employee number, if any.
    pub fn employee_no(&self) -> Option<&'d str> {
        self.employee.map(|e| e.employee_no.as_str())
    }
}

/// Owned, serializable form of a [`MatchResult`] attached to a roster record.
///
/// All fields are null when the label could not be matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnnotation {
    /// The matched employee number.
    pub employee_no: Option<String>,
    /// The matched canonical name.
    pub canonical_name: Option<String>,
    /// The strategy that produced the match.
    pub strategy: Option<MatchStrategy>,
}

impl MatchAnnotation {
    /// Returns true if the annotation names an employee.
    pub fn is_match(&self) -> bool {
        self.employee_no.is_some()
    }
}

impl From<MatchResult<'_>> for MatchAnnotation {
    fn from(result: MatchResult<'_>) -> Self {
        Self {
            employee_no: result.employee.map(|e| e.employee_no.clone()),
            canonical_name: result.employee.map(|e| e.canonical_name.clone()),
            strategy: result.strategy,
        }
    }
}
