//! Employee record model and related types.
//!
//! This module defines the EmployeeRecord struct and EmployeeStatus enum
//! for representing rows of the staff directory.

use serde::{Deserialize, Deserializer, Serialize};

/// Width that employee numbers are zero-padded to.
pub const EMPLOYEE_NO_WIDTH: usize = 3;

/// Represents whether an employee is currently on the roster.
///
/// Retired employees stay in the directory for auditability but are never
/// returned by any match strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    /// Currently employed.
    #[default]
    #[serde(alias = "在職", alias = "active")]
    Active,
    /// No longer employed.
    #[serde(alias = "退職", alias = "retired")]
    Retired,
}

/// Represents one row of the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Zero-padded fixed-width identifier, unique across active and retired employees.
    #[serde(deserialize_with = "deserialize_employee_no")]
    pub employee_no: String,
    /// The authoritative display name (surname and given name separated by whitespace).
    pub canonical_name: String,
    /// Whether the employee is active or retired.
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Informal names used for this employee in rosters.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// The facility the employee is usually rostered at, if recorded.
    #[serde(default)]
    pub home_facility: Option<String>,
}

impl EmployeeRecord {
    /// Creates an active employee with no aliases and no home facility.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_reconcile::models::EmployeeRecord;
    ///
    /// let employee = EmployeeRecord::active("7", "柳 幸子");
    /// assert_eq!(employee.employee_no, "007");
    /// assert!(employee.is_active());
    /// ```
    pub fn active(employee_no: &str, canonical_name: &str) -> Self {
        Self {
            employee_no: pad_employee_no(employee_no),
            canonical_name: canonical_name.to_string(),
            status: EmployeeStatus::Active,
            aliases: Vec::new(),
            home_facility: None,
        }
    }

    /// Adds an alias, builder style.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Sets the home facility, builder style.
    pub fn with_home_facility(mut self, facility: &str) -> Self {
        self.home_facility = Some(facility.to_string());
        self
    }

    /// Marks the employee as retired, builder style.
    pub fn retired(mut self) -> Self {
        self.status = EmployeeStatus::Retired;
        self
    }

    /// Returns true if the employee may be matched.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Left-pads a numeric employee number with zeros to [`EMPLOYEE_NO_WIDTH`].
///
/// Surrounding whitespace is trimmed; longer numbers are kept as they are.
///
/// ```
/// use roster_reconcile::models::pad_employee_no;
///
/// assert_eq!(pad_employee_no("11"), "011");
/// assert_eq!(pad_employee_no(" 149 "), "149");
/// assert_eq!(pad_employee_no("1203"), "1203");
/// ```
pub fn pad_employee_no(raw: &str) -> String {
    format!("{:0>width$}", raw.trim(), width = EMPLOYEE_NO_WIDTH)
}

/// Spreadsheet exports deliver employee numbers either as text or as numbers.
fn deserialize_employee_no<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNo {
        Text(String),
        Number(u64),
    }

    Ok(match RawNo::deserialize(deserializer)? {
        RawNo::Text(s) => pad_employee_no(&s),
        RawNo::Number(n) => pad_employee_no(&n.to_string()),
    })
}
