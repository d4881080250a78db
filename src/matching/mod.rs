//! Identity reconciliation: mapping roster labels to employees.
//!
//! The [`IdentityMatcher`] evaluates an ordered cascade of independent
//! strategies against an [`EmployeeDirectory`]:
//!
//! 1. exact canonical name
//! 2. normalized name (whitespace and kanji variants)
//! 3. alias
//! 4. single-position variant substitution
//! 5. unique surname, optionally narrowed by facility
//! 6. unique strict prefix
//!
//! Ambiguity always resolves to no-match; a misattributed shift is worse
//! than one flagged for review.

mod directory;
mod matcher;
mod normalize;
mod strategies;

pub use directory::EmployeeDirectory;
pub use matcher::{FacilityHistory, IdentityMatcher};
pub use normalize::{Normalizer, strip_whitespace, surname_token};
pub use strategies::{
    AliasName, ExactName, MIN_PREFIX_CHARS, NameQuery, NameStrategy, NormalizedName,
    UniquePrefix, UniqueSurname, VariantSubstitution, default_cascade,
};
