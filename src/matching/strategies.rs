//! The six name-matching strategies.
//!
//! Each strategy is an independent object with the same contract: given a
//! trimmed roster label (and optionally the facility it appeared at), return
//! the one active employee it identifies, or nothing. [`default_cascade`]
//! arranges them in priority order; [`IdentityMatcher`](super::IdentityMatcher)
//! stops at the first strategy that answers.

use std::collections::HashMap;

use crate::config::MatcherConfig;
use crate::models::{EmployeeRecord, MatchStrategy};

use super::directory::EmployeeDirectory;
use super::normalize::{strip_whitespace, surname_token};

/// Minimum length, in characters, of a label used for prefix inference.
pub const MIN_PREFIX_CHARS: usize = 2;

/// A roster label to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameQuery<'a> {
    /// The label, already trimmed and non-empty.
    pub name: &'a str,
    /// The facility the label was rostered at, if known.
    pub facility_hint: Option<&'a str>,
}

/// One step of the matching cascade.
pub trait NameStrategy: Send + Sync + std::fmt::Debug {
    /// The tag reported when this strategy produces a match.
    fn kind(&self) -> MatchStrategy;

    /// Returns the employee this strategy identifies, if exactly one.
    fn find<'d>(
        &self,
        query: &NameQuery<'_>,
        directory: &'d EmployeeDirectory,
    ) -> Option<&'d EmployeeRecord>;
}

/// Builds the standard cascade in priority order.
pub fn default_cascade(config: &MatcherConfig) -> Vec<Box<dyn NameStrategy>> {
    vec![
        Box::new(ExactName),
        Box::new(NormalizedName),
        Box::new(AliasName),
        Box::new(VariantSubstitution::new(&config.variant_pairs)),
        Box::new(UniqueSurname::new(config.clone())),
        Box::new(UniquePrefix),
    ]
}

/// The label equals a canonical name verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactName;

impl NameStrategy for ExactName {
    fn kind(&self) -> MatchStrategy {
        MatchStrategy::Exact
    }

    fn find<'d>(
        &self,
        query: &NameQuery<'_>,
        directory: &'d EmployeeDirectory,
    ) -> Option<&'d EmployeeRecord> {
        directory.by_exact_name(query.name)
    }
}

/// The label equals a canonical name once both are normalized.
///
/// Compares with single-space collapsing first, then with all whitespace
/// removed. The whitespace-free comparison yields to a registered alias
/// spelled like the label only when that alias names the same employee.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedName;

impl NameStrategy for NormalizedName {
    fn kind(&self) -> MatchStrategy {
        MatchStrategy::Normalized
    }

    fn find<'d>(
        &self,
        query: &NameQuery<'_>,
        directory: &'d EmployeeDirectory,
    ) -> Option<&'d EmployeeRecord> {
        directory.by_normalized_name(query.name).or_else(|| {
            let compact = directory.by_compact_name(query.name)?;
            let own_alias = directory
                .by_alias(query.name)
                .is_some_and(|owner| owner.employee_no == compact.employee_no);
            (!own_alias).then_some(compact)
        })
    }
}

/// The label is a registered alias, verbatim or normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasName;

impl NameStrategy for AliasName {
    fn kind(&self) -> MatchStrategy {
        MatchStrategy::Alias
    }

    fn find<'d>(
        &self,
        query: &NameQuery<'_>,
        directory: &'d EmployeeDirectory,
    ) -> Option<&'d EmployeeRecord> {
        directory.by_alias(query.name)
    }
}

/// Swaps one interchangeable character at a time and retries the exact and
/// normalized comparisons.
#[derive(Debug, Clone, Default)]
pub struct VariantSubstitution {
    swaps: HashMap<char, char>,
}

impl VariantSubstitution {
    /// Builds the symmetric swap table from `(a, b)` pairs.
    ///
    /// When a character appears in more than one pair, its first pairing wins.
    pub fn new(pairs: &[(char, char)]) -> Self {
        let mut swaps = HashMap::with_capacity(pairs.len() * 2);
        for &(a, b) in pairs {
            swaps.entry(a).or_insert(b);
            swaps.entry(b).or_insert(a);
        }
        Self { swaps }
    }

    /// Generates one candidate per swappable position, in position order.
    ///
    /// Each candidate differs from `name` in exactly that one position.
    ///
    /// ```
    /// use roster_reconcile::matching::VariantSubstitution;
    ///
    /// let variants = VariantSubstitution::new(&[('崎', '﨑'), ('高', '髙')]);
    /// assert_eq!(variants.candidates("高崎"), vec!["髙崎", "高﨑"]);
    /// assert!(variants.candidates("柳").is_empty());
    /// ```
    pub fn candidates(&self, name: &str) -> Vec<String> {
        name.char_indices()
            .filter_map(|(pos, c)| {
                self.swaps.get(&c).map(|&swap| {
                    let mut candidate = String::with_capacity(name.len() + 4);
                    candidate.push_str(&name[..pos]);
                    candidate.push(swap);
                    candidate.push_str(&name[pos + c.len_utf8()..]);
                    candidate
                })
            })
            .collect()
    }
}

impl NameStrategy for VariantSubstitution {
    fn kind(&self) -> MatchStrategy {
        MatchStrategy::VariantSubstitution
    }

    fn find<'d>(
        &self,
        query: &NameQuery<'_>,
        directory: &'d EmployeeDirectory,
    ) -> Option<&'d EmployeeRecord> {
        self.candidates(query.name).iter().find_map(|candidate| {
            let probe = NameQuery {
                name: candidate,
                facility_hint: query.facility_hint,
            };
            ExactName
                .find(&probe, directory)
                .or_else(|| NormalizedName.find(&probe, directory))
        })
    }
}

/// The surname token identifies one active employee.
///
/// When several employees share the surname, a facility hint may narrow
/// them: first through the configured facility surname hints, then by
/// home facility. Anything still ambiguous is a no-match.
#[derive(Debug, Clone, Default)]
pub struct UniqueSurname {
    config: MatcherConfig,
}

impl UniqueSurname {
    /// Creates the strategy using the facility surname hints in `config`.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Hint for the surname as written, then for its normalized spelling.
    fn hinted_employee_no(
        &self,
        facility: &str,
        surname: &str,
        directory: &EmployeeDirectory,
    ) -> Option<&str> {
        self.config.facility_hint(facility, surname).or_else(|| {
            let normalized = directory.normalizer().normalize(surname);
            self.config.facility_hint(facility, &normalized)
        })
    }
}

impl NameStrategy for UniqueSurname {
    fn kind(&self) -> MatchStrategy {
        MatchStrategy::UniqueSurname
    }

    fn find<'d>(
        &self,
        query: &NameQuery<'_>,
        directory: &'d EmployeeDirectory,
    ) -> Option<&'d EmployeeRecord> {
        let surname = surname_token(query.name)?;
        let candidates = directory.by_surname(surname);

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => {
                let facility = query.facility_hint?;

                if let Some(hinted) = self.hinted_employee_no(facility, surname, directory) {
                    if let Some(employee) = candidates.iter().find(|e| e.employee_no == hinted) {
                        return Some(*employee);
                    }
                }

                let mut at_facility = candidates
                    .iter()
                    .filter(|e| e.home_facility.as_deref() == Some(facility));
                match (at_facility.next(), at_facility.next()) {
                    (Some(employee), None) => Some(*employee),
                    _ => None,
                }
            }
        }
    }
}

/// The whitespace-free label is a strict prefix of exactly one
/// whitespace-free canonical name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniquePrefix;

impl NameStrategy for UniquePrefix {
    fn kind(&self) -> MatchStrategy {
        MatchStrategy::UniquePrefix
    }

    fn find<'d>(
        &self,
        query: &NameQuery<'_>,
        directory: &'d EmployeeDirectory,
    ) -> Option<&'d EmployeeRecord> {
        let stripped = strip_whitespace(query.name);
        if stripped.chars().count() < MIN_PREFIX_CHARS {
            return None;
        }

        match directory.with_name_prefix(&stripped).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
