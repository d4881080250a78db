//! Shift interval consolidation.
//!
//! This module provides the time-slot vocabulary and the overnight merge
//! that turns one person's roster cells into logical shifts.

mod merge;
mod time_slot;

pub use merge::{consolidate, next_day};
pub use time_slot::{
    EARLY_MORNING, EVENING_START, FULL_OVERNIGHT, LATE_EVENING_ALT, LATE_NIGHT, OPEN_OVERNIGHT,
    SlotKind, normalize_time_slot, slot_rank, start_hour, through_morning_label,
};
