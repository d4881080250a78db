//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading matcher tables
//! and the employee directory from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{ReconcileError, ReconcileResult};
use crate::matching::IdentityMatcher;
use crate::models::EmployeeRecord;

use super::types::{DirectoryFile, MatcherConfig};

/// Loads and provides access to reconciliation configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── matcher.yaml    # Normalization, variant pairs, facility hints
/// └── employees.yaml  # Employee directory rows
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_reconcile::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let matcher = loader.build_matcher().unwrap();
/// let result = matcher.match_name("柳幸子", None);
/// println!("Matched: {:?}", result.employee_no());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    matcher: MatcherConfig,
    employees: Vec<EmployeeRecord>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - The matcher tables fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> ReconcileResult<Self> {
        let path = path.as_ref();

        let matcher = Self::load_yaml::<MatcherConfig>(&path.join("matcher.yaml"))?;
        matcher.validate()?;

        let directory = Self::load_yaml::<DirectoryFile>(&path.join("employees.yaml"))?;

        Ok(Self {
            matcher,
            employees: directory.employees,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ReconcileResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReconcileError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ReconcileError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the matcher tables.
    pub fn matcher_config(&self) -> &MatcherConfig {
        &self.matcher
    }

    /// Returns every directory row, active and retired.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Builds an [`IdentityMatcher`] from the loaded tables and directory.
    pub fn build_matcher(&self) -> ReconcileResult<IdentityMatcher> {
        IdentityMatcher::new(self.employees.clone(), self.matcher.clone())
    }
}
