//! Configuration types for roster reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ReconcileError, ReconcileResult};
use crate::models::EmployeeRecord;

/// One-way substitutions from legacy or variant kanji to their standard form.
const DEFAULT_NORMALIZATION: [(char, char); 15] = [
    ('﨑', '崎'),
    ('髙', '高'),
    ('澤', '沢'),
    ('櫻', '桜'),
    ('壽', '寿'),
    ('惠', '恵'),
    ('张', '張'),
    ('单', '単'),
    ('單', '単'),
    ('华', '華'),
    ('云', '雲'),
    ('艳', '艶'),
    ('邊', '辺'),
    ('邉', '辺'),
    ('濱', '浜'),
];

/// Pairs of characters that stand in for each other in either direction.
const DEFAULT_VARIANT_PAIRS: [(char, char); 4] =
    [('﨑', '崎'), ('髙', '高'), ('澤', '沢'), ('惠', '恵')];

/// Tables that drive name matching.
///
/// The defaults cover the character variants seen in the rosters; a
/// deployment can replace any table from `matcher.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// One-way `(from, to)` substitutions applied by normalization.
    #[serde(default = "default_normalization")]
    pub normalization: Vec<(char, char)>,
    /// Interchangeable `(a, b)` pairs used by variant substitution, in both directions.
    #[serde(default = "default_variant_pairs")]
    pub variant_pairs: Vec<(char, char)>,
    /// Facility → surname → employee number, consulted when a surname is ambiguous.
    #[serde(default)]
    pub facility_surname_hints: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            normalization: default_normalization(),
            variant_pairs: default_variant_pairs(),
            facility_surname_hints: BTreeMap::new(),
        }
    }
}

impl MatcherConfig {
    /// Checks that no table maps a character to itself.
    pub fn validate(&self) -> ReconcileResult<()> {
        for (from, to) in &self.normalization {
            if from == to {
                return Err(ReconcileError::InvalidConfig {
                    message: format!("normalization maps '{}' to itself", from),
                });
            }
        }
        for (a, b) in &self.variant_pairs {
            if a == b {
                return Err(ReconcileError::InvalidConfig {
                    message: format!("variant pair maps '{}' to itself", a),
                });
            }
        }
        Ok(())
    }

    /// Looks up the configured employee number for a surname at a facility.
    pub fn facility_hint(&self, facility: &str, surname: &str) -> Option<&str> {
        self.facility_surname_hints
            .get(facility)
            .and_then(|hints| hints.get(surname))
            .map(String::as_str)
    }
}

fn default_normalization() -> Vec<(char, char)> {
    DEFAULT_NORMALIZATION.to_vec()
}

fn default_variant_pairs() -> Vec<(char, char)> {
    DEFAULT_VARIANT_PAIRS.to_vec()
}

/// Employee directory file structure (`employees.yaml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryFile {
    /// Every directory row, active and retired.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = MatcherConfig::default();
        assert_eq!(config.normalization.len(), 15);
        assert!(config.normalization.contains(&('髙', '高')));
        assert!(config.variant_pairs.contains(&('澤', '沢')));
        assert!(config.facility_surname_hints.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config_keeps_default_tables() {
        let yaml = r#"
facility_surname_hints:
  グリーンビレッジＢ:
    青木: "011"
"#;
        let config: MatcherConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.normalization, MatcherConfig::default().normalization);
        assert_eq!(config.facility_hint("グリーンビレッジＢ", "青木"), Some("011"));
        assert_eq!(config.facility_hint("グリーンビレッジＢ", "沼田"), None);
        assert_eq!(config.facility_hint("芦花公園2", "青木"), None);
    }

    #[test]
    fn test_deserialize_char_pairs() {
        let yaml = r#"
normalization:
  - ["櫻", "桜"]
variant_pairs:
  - ["邊", "辺"]
"#;
        let config: MatcherConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.normalization, vec![('櫻', '桜')]);
        assert_eq!(config.variant_pairs, vec![('邊', '辺')]);
    }

    #[test]
    fn test_validate_rejects_self_mapping() {
        let config = MatcherConfig {
            variant_pairs: vec![('崎', '崎')],
            ..MatcherConfig::default()
        };
        match config.validate() {
            Err(ReconcileError::InvalidConfig { message }) => {
                assert!(message.contains("崎"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_file_deserialization() {
        let yaml = r#"
employees:
  - employeeNo: "1"
    canonicalName: 柳 幸子
    aliases: [柳幸子]
  - employeeNo: 2
    canonicalName: 沼田 健
    status: 退職
"#;
        let file: DirectoryFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.employees.len(), 2);
        assert_eq!(file.employees[0].employee_no, "001");
        assert!(!file.employees[1].is_active());
    }
}
