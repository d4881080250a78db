//! Configuration loading and management for roster reconciliation.
//!
//! This module provides the matcher tables (kanji normalization, variant
//! pairs, facility surname hints) and loads them together with the employee
//! directory from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roster_reconcile::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} employees", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DirectoryFile, MatcherConfig};
