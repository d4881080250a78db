//! Overnight shift merging.
//!
//! An overnight duty is rostered as up to three cells: the evening slot, a
//! night slot on the same day, and the early-morning slot of the next day.
//! [`consolidate`] stitches them into one [`LogicalShift`].

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::models::LogicalShift;

use super::time_slot::{
    FULL_OVERNIGHT, OPEN_OVERNIGHT, SlotKind, slot_rank, through_morning_label,
};

/// Returns the following calendar day, rolling over months and years.
///
/// `None` only at the last representable date.
///
/// ```
/// use roster_reconcile::consolidation::next_day;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
/// assert_eq!(next_day(new_year), NaiveDate::from_ymd_opt(2026, 1, 1));
/// ```
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}

/// Merges one person's overnight slots.
///
/// Entries are sorted by (date, slot rank) and walked once. Consumed entries
/// are marked rather than removed so lookahead indices stay stable. Each
/// partner search looks strictly forward from the current entry and takes
/// the first unconsumed entry that fits, which is what decides pairing when
/// a day carries duplicate slots.
///
/// - Evening + night (same day, same facility) + next-day morning becomes
///   [`FULL_OVERNIGHT`]; without the morning it becomes [`OPEN_OVERNIGHT`].
/// - A night slot with no evening partner + next-day morning becomes
///   `{hour}時～翌9時`.
/// - Everything else passes through unchanged.
///
/// Merged labels never satisfy a merge trigger, so consolidating the output
/// again returns it unchanged.
///
/// # Examples
///
/// ```
/// use roster_reconcile::consolidation::consolidate;
/// use roster_reconcile::models::RawShiftEntry;
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 10, d).unwrap();
/// let shifts = consolidate(vec![
///     RawShiftEntry::new(day(5), "A", "17時～22時", "柳"),
///     RawShiftEntry::new(day(5), "A", "22時～", "柳"),
///     RawShiftEntry::new(day(6), "A", "6時～9時", "柳"),
/// ]);
///
/// assert_eq!(shifts.len(), 1);
/// assert_eq!(shifts[0].time_slot, "17時～翌9時");
/// assert!(shifts[0].merged);
/// ```
pub fn consolidate<I, S>(entries: I) -> Vec<LogicalShift>
where
    I: IntoIterator<Item = S>,
    S: Into<LogicalShift>,
{
    let mut shifts: Vec<LogicalShift> = entries.into_iter().map(Into::into).collect();
    sort_shifts(&mut shifts);

    let mut consumed = vec![false; shifts.len()];
    let mut output = Vec::with_capacity(shifts.len());

    for i in 0..shifts.len() {
        if consumed[i] {
            continue;
        }
        let current = &shifts[i];
        let kind = SlotKind::of(&current.time_slot);

        if kind == SlotKind::EveningStart {
            let night = find_forward(&shifts, &consumed, i, |s| {
                s.date == current.date
                    && s.facility == current.facility
                    && SlotKind::of(&s.time_slot).is_night()
            });

            if let Some(night) = night {
                consumed[i] = true;
                consumed[night] = true;

                let morning = find_morning(&shifts, &consumed, i);
                let mut components = vec![
                    current.time_slot.clone(),
                    shifts[night].time_slot.clone(),
                ];
                let label = match morning {
                    Some(morning) => {
                        consumed[morning] = true;
                        components.push(shifts[morning].time_slot.clone());
                        FULL_OVERNIGHT
                    }
                    None => OPEN_OVERNIGHT,
                };

                output.push(merged_from(current, label.to_string(), components));
                continue;
            }
        }

        if kind.is_night() {
            if let Some(morning) = find_morning(&shifts, &consumed, i) {
                consumed[i] = true;
                consumed[morning] = true;

                let components = vec![
                    current.time_slot.clone(),
                    shifts[morning].time_slot.clone(),
                ];
                output.push(merged_from(
                    current,
                    through_morning_label(&current.time_slot),
                    components,
                ));
                continue;
            }
        }

        output.push(current.clone());
    }

    sort_shifts(&mut output);
    output
}

/// Stable sort by (date, slot rank).
fn sort_shifts(shifts: &mut [LogicalShift]) {
    shifts.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| slot_rank(&a.time_slot).cmp(&slot_rank(&b.time_slot)))
    });
}

/// First unconsumed entry after `from` satisfying `accept`.
fn find_forward<F>(shifts: &[LogicalShift], consumed: &[bool], from: usize, accept: F) -> Option<usize>
where
    F: Fn(&LogicalShift) -> bool,
{
    (from + 1..shifts.len()).find(|&j| !consumed[j] && accept(&shifts[j]))
}

/// First unconsumed early-morning entry on the next day at the same facility.
fn find_morning(shifts: &[LogicalShift], consumed: &[bool], from: usize) -> Option<usize> {
    let start = &shifts[from];
    let next = next_day(start.date)?;
    find_forward(shifts, consumed, from, |s| {
        s.date == next
            && s.facility == start.facility
            && SlotKind::of(&s.time_slot) == SlotKind::EarlyMorning
    })
}

fn merged_from(start: &LogicalShift, time_slot: String, components: Vec<String>) -> LogicalShift {
    debug!(
        date = %start.date,
        facility = %start.facility,
        time_slot = %time_slot,
        parts = components.len(),
        "Merged overnight shift"
    );
    LogicalShift {
        date: start.date,
        facility: start.facility.clone(),
        time_slot,
        person_label: start.person_label.clone(),
        merged: true,
        components,
    }
}
