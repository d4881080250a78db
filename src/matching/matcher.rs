//! The identity matcher: runs the strategy cascade over a directory.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::MatcherConfig;
use crate::error::ReconcileResult;
use crate::models::{EmployeeRecord, MatchResult, MatchStrategy};

use super::directory::EmployeeDirectory;
use super::normalize::{Normalizer, surname_token};
use super::strategies::{NameQuery, NameStrategy, default_cascade};

/// Resolves free-text roster labels to employees.
///
/// Built once per run; matching is read-only, so one matcher can serve
/// many threads.
///
/// # Example
///
/// ```
/// use roster_reconcile::config::MatcherConfig;
/// use roster_reconcile::matching::IdentityMatcher;
/// use roster_reconcile::models::{EmployeeRecord, MatchStrategy};
///
/// let matcher = IdentityMatcher::new(
///     vec![EmployeeRecord::active("1", "柳 幸子").with_alias("柳幸子")],
///     MatcherConfig::default(),
/// )
/// .unwrap();
///
/// let result = matcher.match_name("柳幸子", None);
/// assert_eq!(result.employee_no(), Some("001"));
/// assert_eq!(result.strategy, Some(MatchStrategy::Alias));
/// ```
#[derive(Debug)]
pub struct IdentityMatcher {
    directory: EmployeeDirectory,
    strategies: Vec<Box<dyn NameStrategy>>,
}

impl IdentityMatcher {
    /// Builds the directory indices and the standard cascade.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables fail validation or the directory
    /// contains blank or duplicate employee numbers.
    pub fn new(employees: Vec<EmployeeRecord>, config: MatcherConfig) -> ReconcileResult<Self> {
        config.validate()?;
        let normalizer = Normalizer::new(&config.normalization);
        let directory = EmployeeDirectory::new(employees, normalizer)?;
        let strategies = default_cascade(&config);
        Ok(Self::with_strategies(directory, strategies))
    }

    /// Uses a caller-supplied cascade, evaluated in the given order.
    pub fn with_strategies(
        directory: EmployeeDirectory,
        strategies: Vec<Box<dyn NameStrategy>>,
    ) -> Self {
        Self {
            directory,
            strategies,
        }
    }

    /// Returns the directory being matched against.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Returns the strategy tags in evaluation order.
    pub fn strategy_order(&self) -> Vec<MatchStrategy> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Resolves one label, optionally using the facility it appeared at.
    ///
    /// Returns [`MatchResult::no_match`] for blank, unknown or ambiguous labels.
    pub fn match_name(&self, raw_name: &str, facility_hint: Option<&str>) -> MatchResult<'_> {
        let name = raw_name.trim();
        if name.is_empty() {
            return MatchResult::no_match();
        }

        let query = NameQuery {
            name,
            facility_hint,
        };

        for strategy in &self.strategies {
            if let Some(employee) = strategy.find(&query, &self.directory) {
                debug!(
                    label = name,
                    employee_no = %employee.employee_no,
                    strategy = %strategy.kind(),
                    "Matched roster label"
                );
                return MatchResult::matched(employee, strategy.kind());
            }
        }

        MatchResult::no_match()
    }

    /// Resolves an ambiguous surname using who has already been matched at
    /// the facility.
    ///
    /// Succeeds only when the surname is shared by several active employees
    /// and exactly one of them appears in `history` for `facility`. Labels
    /// with a single (or no) surname candidate are left to [`match_name`](Self::match_name).
    pub fn match_with_facility_history(
        &self,
        raw_name: &str,
        facility: &str,
        history: &FacilityHistory,
    ) -> MatchResult<'_> {
        let Some(surname) = surname_token(raw_name) else {
            return MatchResult::no_match();
        };

        let candidates = self.directory.by_surname(surname);
        if candidates.len() <= 1 {
            return MatchResult::no_match();
        }

        let mut seen_here = candidates
            .into_iter()
            .filter(|e| history.has_worked_at(facility, &e.employee_no));
        match (seen_here.next(), seen_here.next()) {
            (Some(employee), None) => {
                debug!(
                    label = raw_name.trim(),
                    facility,
                    employee_no = %employee.employee_no,
                    "Resolved surname from facility history"
                );
                MatchResult::matched(employee, MatchStrategy::FacilityHistory)
            }
            _ => MatchResult::no_match(),
        }
    }
}

/// Which employees have been matched at which facility during a batch.
#[derive(Debug, Clone, Default)]
pub struct FacilityHistory {
    by_facility: HashMap<String, HashSet<String>>,
}

impl FacilityHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `employee_no` was rostered at `facility`.
    pub fn record(&mut self, facility: &str, employee_no: &str) {
        self.by_facility
            .entry(facility.to_string())
            .or_default()
            .insert(employee_no.to_string());
    }

    /// Returns true if `employee_no` has been recorded at `facility`.
    pub fn has_worked_at(&self, facility: &str, employee_no: &str) -> bool {
        self.by_facility
            .get(facility)
            .is_some_and(|employees| employees.contains(employee_no))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconcileError;
    use crate::matching::strategies::{ExactName, UniquePrefix};

    fn matcher() -> IdentityMatcher {
        IdentityMatcher::new(
            vec![
                EmployeeRecord::active("1", "柳 幸子").with_alias("柳幸子"),
                EmployeeRecord::active("11", "青木 康陽").with_home_facility("グリーンビレッジＢ"),
                EmployeeRecord::active("149", "青木 弓恵").with_home_facility("芦花公園2"),
                EmployeeRecord::active("20", "髙橋 一郎"),
                EmployeeRecord::active("30", "沼田 健").with_alias("ぬまっち"),
                EmployeeRecord::active("99", "小川 直子").retired(),
            ],
            MatcherConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_blank_input_is_no_match() {
        let matcher = matcher();
        assert!(!matcher.match_name("", None).is_match());
        assert!(!matcher.match_name(" 　 ", None).is_match());
    }

    #[test]
    fn test_exact_match_after_trim() {
        let matcher = matcher();
        let result = matcher.match_name("  沼田 健 ", None);
        assert_eq!(result.employee_no(), Some("030"));
        assert_eq!(result.strategy, Some(MatchStrategy::Exact));
    }

    #[test]
    fn test_normalized_match() {
        let matcher = matcher();
        let result = matcher.match_name("高橋　一郎", None);
        assert_eq!(result.employee_no(), Some("020"));
        assert_eq!(result.strategy, Some(MatchStrategy::Normalized));
    }

    #[test]
    fn test_alias_match() {
        let matcher = matcher();
        let result = matcher.match_name("柳幸子", None);
        assert_eq!(result.employee_no(), Some("001"));
        assert_eq!(result.strategy, Some(MatchStrategy::Alias));

        let result = matcher.match_name("ぬまっち", None);
        assert_eq!(result.employee_no(), Some("030"));
        assert_eq!(result.strategy, Some(MatchStrategy::Alias));
    }

    #[test]
    fn test_surname_match_and_ambiguity() {
        let matcher = matcher();

        let result = matcher.match_name("沼田", None);
        assert_eq!(result.strategy, Some(MatchStrategy::UniqueSurname));

        assert!(!matcher.match_name("青木", None).is_match());
        let result = matcher.match_name("青木", Some("芦花公園2"));
        assert_eq!(result.employee_no(), Some("149"));
        assert_eq!(result.strategy, Some(MatchStrategy::UniqueSurname));
    }

    #[test]
    fn test_retired_employee_never_matches() {
        let matcher = matcher();
        assert!(!matcher.match_name("小川 直子", None).is_match());
        assert!(!matcher.match_name("小川", None).is_match());
    }

    #[test]
    fn test_prefix_match() {
        let matcher = matcher();
        let result = matcher.match_name("髙橋一", None);
        assert_eq!(result.employee_no(), Some("020"));
        assert_eq!(result.strategy, Some(MatchStrategy::UniquePrefix));
    }

    #[test]
    fn test_unknown_name_is_no_match() {
        assert!(!matcher().match_name("山田 太郎", None).is_match());
    }

    #[test]
    fn test_strategy_order_is_inspectable() {
        assert_eq!(
            matcher().strategy_order(),
            vec![
                MatchStrategy::Exact,
                MatchStrategy::Normalized,
                MatchStrategy::Alias,
                MatchStrategy::VariantSubstitution,
                MatchStrategy::UniqueSurname,
                MatchStrategy::UniquePrefix,
            ]
        );
    }

    #[test]
    fn test_custom_cascade() {
        let directory = EmployeeDirectory::new(
            vec![EmployeeRecord::active("1", "柳 幸子")],
            Normalizer::default(),
        )
        .unwrap();
        let matcher = IdentityMatcher::with_strategies(
            directory,
            vec![Box::new(ExactName), Box::new(UniquePrefix)],
        );

        assert_eq!(
            matcher.strategy_order(),
            vec![MatchStrategy::Exact, MatchStrategy::UniquePrefix]
        );
        assert_eq!(
            matcher.match_name("柳幸", None).strategy,
            Some(MatchStrategy::UniquePrefix)
        );
        assert!(!matcher.match_name("柳　幸子", None).is_match());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MatcherConfig {
            normalization: vec![('髙', '髙')],
            ..MatcherConfig::default()
        };
        let result = IdentityMatcher::new(vec![], config);
        assert!(matches!(result, Err(ReconcileError::InvalidConfig { .. })));
    }

    #[test]
    fn test_facility_history_resolves_shared_surname() {
        let matcher = IdentityMatcher::new(
            vec![
                EmployeeRecord::active("11", "青木 康陽"),
                EmployeeRecord::active("149", "青木 弓恵"),
            ],
            MatcherConfig::default(),
        )
        .unwrap();
        let mut history = FacilityHistory::new();
        history.record("芦花公園2", "149");

        let result = matcher.match_with_facility_history("青木", "芦花公園2", &history);
        assert_eq!(result.employee_no(), Some("149"));
        assert_eq!(result.strategy, Some(MatchStrategy::FacilityHistory));

        assert!(
            !matcher
                .match_with_facility_history("青木", "南大泉", &history)
                .is_match()
        );
    }

    #[test]
    fn test_facility_history_needs_single_candidate_at_facility() {
        let matcher = IdentityMatcher::new(
            vec![
                EmployeeRecord::active("11", "青木 康陽"),
                EmployeeRecord::active("149", "青木 弓恵"),
            ],
            MatcherConfig::default(),
        )
        .unwrap();
        let mut history = FacilityHistory::new();
        history.record("A", "011");
        history.record("A", "149");

        assert!(
            !matcher
                .match_with_facility_history("青木", "A", &history)
                .is_match()
        );
    }

    #[test]
    fn test_matcher_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IdentityMatcher>();
    }
}
