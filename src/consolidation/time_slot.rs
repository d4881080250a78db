//! Time-slot vocabulary.
//!
//! Roster columns use a small set of duty-window labels. Four of them take
//! part in overnight merging; every label gets a sort rank from its leading
//! hour so that merged labels still sort next to the slot they start in.

/// Early-morning slot, the tail of an overnight duty.
pub const EARLY_MORNING: &str = "6時～9時";
/// Evening slot that starts an overnight duty.
pub const EVENING_START: &str = "17時～22時";
/// Alternate late-evening start.
pub const LATE_EVENING_ALT: &str = "21時～";
/// Late-night slot.
pub const LATE_NIGHT: &str = "22時～";
/// Evening start, through the night, through the next morning.
pub const FULL_OVERNIGHT: &str = "17時～翌9時";
/// Evening start through the night, with no following morning record.
pub const OPEN_OVERNIGHT: &str = "17時～翌朝";

/// Bare evening label used by some roster sheets.
const EVENING_START_SHORT: &str = "17時～";

/// Merge-relevant classification of a slot label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// [`EARLY_MORNING`]
    EarlyMorning,
    /// [`EVENING_START`]
    EveningStart,
    /// [`LATE_EVENING_ALT`]
    LateEveningAlt,
    /// [`LATE_NIGHT`]
    LateNight,
    /// Anything else, merged labels included.
    Other,
}

impl SlotKind {
    /// Classifies a label by exact comparison with the vocabulary.
    pub fn of(label: &str) -> Self {
        match label {
            EARLY_MORNING => SlotKind::EarlyMorning,
            EVENING_START => SlotKind::EveningStart,
            LATE_EVENING_ALT => SlotKind::LateEveningAlt,
            LATE_NIGHT => SlotKind::LateNight,
            _ => SlotKind::Other,
        }
    }

    /// True for the two slots that run past midnight.
    pub fn is_night(self) -> bool {
        matches!(self, SlotKind::LateNight | SlotKind::LateEveningAlt)
    }
}

/// Returns the hour a label starts at, read from its leading digits.
///
/// ```
/// use roster_reconcile::consolidation::start_hour;
///
/// assert_eq!(start_hour("22時～"), Some(22));
/// assert_eq!(start_hour("6時～9時"), Some(6));
/// assert_eq!(start_hour("夜勤"), None);
/// ```
pub fn start_hour(label: &str) -> Option<u32> {
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Sort rank: early morning < evening start < late-evening alt < late night < other.
pub fn slot_rank(label: &str) -> u8 {
    match start_hour(label) {
        Some(6) => 1,
        Some(17) => 3,
        Some(21) => 4,
        Some(22) => 5,
        _ => 9,
    }
}

/// Trims a label and expands the bare evening label to its full window.
///
/// ```
/// use roster_reconcile::consolidation::normalize_time_slot;
///
/// assert_eq!(normalize_time_slot(" 17時～ "), "17時～22時");
/// assert_eq!(normalize_time_slot("22時～"), "22時～");
/// ```
pub fn normalize_time_slot(label: &str) -> String {
    let label = label.trim();
    if label == EVENING_START_SHORT {
        EVENING_START.to_string()
    } else {
        label.to_string()
    }
}

/// Label for a night slot continuing into the next morning (e.g. `22時～翌9時`).
pub fn through_morning_label(night_label: &str) -> String {
    match start_hour(night_label) {
        Some(hour) => format!("{}時～翌9時", hour),
        None => format!("{}翌9時", night_label),
    }
}
