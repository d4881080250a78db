//! Name normalization.
//!
//! Normalized names are comparison keys only. They are never displayed and
//! cannot be mapped back to the original spelling.

use std::collections::HashMap;

/// Produces comparison keys for names.
///
/// # Example
///
/// ```
/// use roster_reconcile::matching::Normalizer;
///
/// let normalizer = Normalizer::default();
/// assert_eq!(normalizer.normalize("　髙橋　 一郎 "), "高橋 一郎");
/// assert_eq!(normalizer.compact("　髙橋　 一郎 "), "高橋一郎");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    table: HashMap<char, char>,
}

impl Normalizer {
    /// Creates a normalizer from one-way `(from, to)` substitutions.
    ///
    /// When the same source character appears twice, the first entry wins.
    pub fn new(pairs: &[(char, char)]) -> Self {
        let mut table = HashMap::with_capacity(pairs.len());
        for &(from, to) in pairs {
            table.entry(from).or_insert(to);
        }
        Self { table }
    }

    /// Collapses whitespace runs (full-width included) to one space, trims,
    /// then substitutes variant kanji with their standard form.
    pub fn normalize(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        for token in name.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.extend(token.chars().map(|c| self.substitute(c)));
        }
        out
    }

    /// Normalizes and then removes all whitespace.
    pub fn compact(&self, name: &str) -> String {
        strip_whitespace(&self.normalize(name))
    }

    fn substitute(&self, c: char) -> char {
        self.table.get(&c).copied().unwrap_or(c)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&crate::config::MatcherConfig::default().normalization)
    }
}

/// Removes every whitespace character, full-width included.
pub fn strip_whitespace(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns the token before the first whitespace, ignoring leading whitespace.
///
/// ```
/// use roster_reconcile::matching::surname_token;
///
/// assert_eq!(surname_token("青木 康陽"), Some("青木"));
/// assert_eq!(surname_token("　青木　康陽"), Some("青木"));
/// assert_eq!(surname_token("青木"), Some("青木"));
/// assert_eq!(surname_token("   "), None);
/// ```
pub fn surname_token(name: &str) -> Option<&str> {
    name.split_whitespace().next()
}
