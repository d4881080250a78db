//! The employee directory and its lookup indices.
//!
//! Records live in one vector; every index maps a key to positions in that
//! vector. Only active employees are indexed, so no lookup can return a
//! retired employee.

use std::collections::HashMap;

use crate::error::{ReconcileError, ReconcileResult};
use crate::models::EmployeeRecord;

use super::normalize::{Normalizer, strip_whitespace, surname_token};

/// In-memory employee table with derived lookup indices.
///
/// Immutable after construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    records: Vec<EmployeeRecord>,
    normalizer: Normalizer,
    active: Vec<usize>,
    by_employee_no: HashMap<String, usize>,
    by_canonical_name: HashMap<String, usize>,
    by_normalized_name: HashMap<String, usize>,
    by_compact_name: HashMap<String, usize>,
    by_surname: HashMap<String, Vec<usize>>,
    by_alias: HashMap<String, usize>,
    by_normalized_alias: HashMap<String, usize>,
    /// Canonical names with whitespace removed but no kanji substitution.
    stripped_names: Vec<(usize, String)>,
}

impl EmployeeDirectory {
    /// Builds the directory and its indices.
    ///
    /// Where two active employees collide on a name or alias key, the one
    /// listed first keeps the key.
    ///
    /// # Errors
    ///
    /// - [`ReconcileError::InvalidEmployee`] if an employee number or canonical name is blank
    /// - [`ReconcileError::DuplicateEmployeeNo`] if two rows share an employee number
    pub fn new(records: Vec<EmployeeRecord>, normalizer: Normalizer) -> ReconcileResult<Self> {
        let mut directory = Self {
            records: Vec::with_capacity(records.len()),
            normalizer,
            active: Vec::new(),
            by_employee_no: HashMap::new(),
            by_canonical_name: HashMap::new(),
            by_normalized_name: HashMap::new(),
            by_compact_name: HashMap::new(),
            by_surname: HashMap::new(),
            by_alias: HashMap::new(),
            by_normalized_alias: HashMap::new(),
            stripped_names: Vec::new(),
        };

        for record in records {
            directory.insert(record)?;
        }

        Ok(directory)
    }

    fn insert(&mut self, record: EmployeeRecord) -> ReconcileResult<()> {
        if record.employee_no.trim().is_empty() {
            return Err(ReconcileError::InvalidEmployee {
                employee_no: record.employee_no,
                message: "employee number is blank".to_string(),
            });
        }
        if record.canonical_name.trim().is_empty() {
            return Err(ReconcileError::InvalidEmployee {
                employee_no: record.employee_no,
                message: "canonical name is blank".to_string(),
            });
        }
        if self.by_employee_no.contains_key(&record.employee_no) {
            return Err(ReconcileError::DuplicateEmployeeNo {
                employee_no: record.employee_no,
            });
        }

        let idx = self.records.len();
        self.by_employee_no.insert(record.employee_no.clone(), idx);

        if record.is_active() {
            self.index_active(idx, &record);
        }

        self.records.push(record);
        Ok(())
    }

    fn index_active(&mut self, idx: usize, record: &EmployeeRecord) {
        let name = record.canonical_name.trim();
        self.active.push(idx);

        self.by_canonical_name.entry(name.to_string()).or_insert(idx);
        self.by_normalized_name
            .entry(self.normalizer.normalize(name))
            .or_insert(idx);
        self.by_compact_name
            .entry(self.normalizer.compact(name))
            .or_insert(idx);
        self.stripped_names.push((idx, strip_whitespace(name)));

        if let Some(surname) = surname_token(name) {
            let normalized = self.normalizer.normalize(surname);
            self.by_surname
                .entry(surname.to_string())
                .or_default()
                .push(idx);
            if normalized != surname {
                self.by_surname.entry(normalized).or_default().push(idx);
            }
        }

        for alias in &record.aliases {
            let alias = alias.trim();
            if alias.is_empty() {
                continue;
            }
            self.by_alias.entry(alias.to_string()).or_insert(idx);
            self.by_normalized_alias
                .entry(self.normalizer.normalize(alias))
                .or_insert(idx);
        }
    }

    /// Returns the normalizer the indices were built with.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Returns every record, active and retired, in load order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Iterates over active employees in load order.
    pub fn active(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.active.iter().map(move |&idx| &self.records[idx])
    }

    /// Number of active employees.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Looks up any employee, active or retired, by employee number.
    pub fn get(&self, employee_no: &str) -> Option<&EmployeeRecord> {
        self.by_employee_no
            .get(employee_no)
            .map(|&idx| &self.records[idx])
    }

    /// Active employee whose canonical name equals `name` verbatim.
    pub fn by_exact_name(&self, name: &str) -> Option<&EmployeeRecord> {
        self.lookup(&self.by_canonical_name, name)
    }

    /// Active employee whose normalized name equals the normalized `name`,
    /// compared with single spaces.
    pub fn by_normalized_name(&self, name: &str) -> Option<&EmployeeRecord> {
        self.lookup(&self.by_normalized_name, &self.normalizer.normalize(name))
    }

    /// Active employee whose normalized name equals the normalized `name`,
    /// compared with all whitespace removed.
    pub fn by_compact_name(&self, name: &str) -> Option<&EmployeeRecord> {
        self.lookup(&self.by_compact_name, &self.normalizer.compact(name))
    }

    /// Active employee registered with `alias`, verbatim or normalized.
    pub fn by_alias(&self, alias: &str) -> Option<&EmployeeRecord> {
        self.lookup(&self.by_alias, alias).or_else(|| {
            self.lookup(&self.by_normalized_alias, &self.normalizer.normalize(alias))
        })
    }

    /// Active employees whose surname is `surname`, falling back to its
    /// normalized form. Empty when nobody carries the surname.
    pub fn by_surname(&self, surname: &str) -> Vec<&EmployeeRecord> {
        self.by_surname
            .get(surname)
            .or_else(|| self.by_surname.get(&self.normalizer.normalize(surname)))
            .into_iter()
            .flatten()
            .map(|&idx| &self.records[idx])
            .collect()
    }

    /// Active employees whose whitespace-stripped canonical name starts with
    /// `stripped` and is strictly longer.
    pub fn with_name_prefix(&self, stripped: &str) -> Vec<&EmployeeRecord> {
        let prefix_len = stripped.chars().count();
        self.stripped_names
            .iter()
            .filter(|(_, name)| name.starts_with(stripped) && name.chars().count() > prefix_len)
            .map(|&(idx, _)| &self.records[idx])
            .collect()
    }

    fn lookup(&self, index: &HashMap<String, usize>, key: &str) -> Option<&EmployeeRecord> {
        index.get(key).map(|&idx| &self.records[idx])
    }
}
