//! Shift entry models.
//!
//! A [`RawShiftEntry`] is one filled roster cell. A [`LogicalShift`] is what
//! consolidation emits: either a raw entry passed through, or several raw
//! entries stitched into one overnight duty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReconcileError, ReconcileResult};

/// The date format used by roster records.
pub const ROSTER_DATE_FORMAT: &str = "%Y/%m/%d";

/// Parses a `YYYY/MM/DD` roster date.
///
/// ```
/// use roster_reconcile::models::parse_roster_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_roster_date("2025/10/05").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
/// );
/// assert!(parse_roster_date("2025/02/30").is_err());
/// ```
pub fn parse_roster_date(value: &str) -> ReconcileResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ROSTER_DATE_FORMAT).map_err(|_| {
        ReconcileError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Formats a date as `YYYY/MM/DD`.
pub fn format_roster_date(date: NaiveDate) -> String {
    date.format(ROSTER_DATE_FORMAT).to_string()
}

/// Serde adapter for `YYYY/MM/DD` dates.
pub mod roster_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a date as `YYYY/MM/DD`.
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_roster_date(*date))
    }

    /// Deserializes a `YYYY/MM/DD` date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_roster_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// One roster cell: a person assigned to a time slot at a facility on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShiftEntry {
    /// The calendar day of the cell.
    #[serde(with = "roster_date")]
    pub date: NaiveDate,
    /// The work site label.
    pub facility: String,
    /// The duty window label (e.g. `17時～22時`).
    pub time_slot: String,
    /// The name exactly as typed in the roster.
    pub person_label: String,
}

impl RawShiftEntry {
    /// Creates a raw entry.
    pub fn new(date: NaiveDate, facility: &str, time_slot: &str, person_label: &str) -> Self {
        Self {
            date,
            facility: facility.to_string(),
            time_slot: time_slot.to_string(),
            person_label: person_label.to_string(),
        }
    }
}

/// A shift after overnight consolidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalShift {
    /// The day the shift starts on.
    #[serde(with = "roster_date")]
    pub date: NaiveDate,
    /// The work site label.
    pub facility: String,
    /// The duty window label; merged shifts carry a combined label such as `17時～翌9時`.
    pub time_slot: String,
    /// The name as typed on the first consumed entry.
    pub person_label: String,
    /// True when this shift combines more than one raw entry.
    pub merged: bool,
    /// The slot labels of every raw entry consumed into this shift, in consumption order.
    #[serde(default)]
    pub components: Vec<String>,
}

impl From<RawShiftEntry> for LogicalShift {
    fn from(entry: RawShiftEntry) -> Self {
        Self {
            components: vec![entry.time_slot.clone()],
            date: entry.date,
            facility: entry.facility,
            time_slot: entry.time_slot,
            person_label: entry.person_label,
            merged: false,
        }
    }
}
