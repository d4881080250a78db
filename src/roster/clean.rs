//! Roster cell cleaning.
//!
//! Schedulers annotate cells with partial hours (`沼田-8`, `青木19-`,
//! `マイ16半`) and markers (`★`), and fill gaps with placeholder words.
//! Cleaning recovers the bare name, or nothing for placeholder cells.

/// Words marking a cell as unfilled rather than naming a person.
const PLACEHOLDERS: [&str; 5] = ["空き", "職員配置不要", "配置不要", "欠員", "募集中"];

/// Characters schedulers use as a dash in hour annotations.
const DASHES: [char; 3] = ['⁻', '-', 'ー'];

/// Returns the name in a roster cell, or `None` for placeholder or empty cells.
///
/// ```
/// use roster_reconcile::roster::clean_roster_name;
///
/// assert_eq!(clean_roster_name("沼田-8").as_deref(), Some("沼田"));
/// assert_eq!(clean_roster_name("★マイ16半").as_deref(), Some("マイ"));
/// assert_eq!(clean_roster_name("空き"), None);
/// ```
pub fn clean_roster_name(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if PLACEHOLDERS.iter().any(|p| cell.contains(p)) {
        return None;
    }

    let mut chars: Vec<char> = cell.chars().collect();
    strip_trailing_dash_hour(&mut chars);
    strip_leading_hour_dash(&mut chars);
    strip_trailing_hour_dash(&mut chars);
    strip_inner_hour_dash(&mut chars);
    strip_trailing_half_hour(&mut chars);

    let name: String = chars.into_iter().filter(|&c| c != '★').collect();
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Parses `digits [半]` starting at `at`; returns the index just past it.
fn hour_end(chars: &[char], at: usize) -> Option<usize> {
    let digits = chars[at..].iter().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let mut end = at + digits;
    if chars.get(end) == Some(&'半') {
        end += 1;
    }
    Some(end)
}

/// Start index of a `digits [半]` run that ends exactly at `end`.
fn hour_start(chars: &[char], end: usize) -> Option<usize> {
    let mut digits_end = end;
    if digits_end > 0 && chars[digits_end - 1] == '半' {
        digits_end -= 1;
    }
    let digits = chars[..digits_end]
        .iter()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    (digits > 0).then_some(digits_end - digits)
}

/// `沼田-8`, `星野⁻8半`
fn strip_trailing_dash_hour(chars: &mut Vec<char>) {
    if let Some(start) = hour_start(chars, chars.len()) {
        if start > 0 && DASHES.contains(&chars[start - 1]) {
            chars.truncate(start - 1);
        }
    }
}

/// `19-青木`
fn strip_leading_hour_dash(chars: &mut Vec<char>) {
    if let Some(end) = hour_end(chars, 0) {
        if chars.get(end).is_some_and(|c| DASHES.contains(c)) {
            chars.drain(..=end);
        }
    }
}

/// `青木19-`, `小川20半-`
fn strip_trailing_hour_dash(chars: &mut Vec<char>) {
    let Some(&last) = chars.last() else {
        return;
    };
    if !DASHES.contains(&last) {
        return;
    }
    if let Some(start) = hour_start(chars, chars.len() - 1) {
        chars.truncate(start);
    }
}

/// `田代18-恵`: the first `digits [半] dash` run anywhere.
fn strip_inner_hour_dash(chars: &mut Vec<char>) {
    for at in 0..chars.len() {
        if at > 0 && chars[at - 1].is_ascii_digit() {
            continue;
        }
        if let Some(end) = hour_end(chars, at) {
            if chars.get(end).is_some_and(|c| DASHES.contains(c)) {
                chars.drain(at..=end);
                return;
            }
        }
    }
}

/// `武田16半`
fn strip_trailing_half_hour(chars: &mut Vec<char>) {
    if chars.last() != Some(&'半') {
        return;
    }
    if let Some(start) = hour_start(chars, chars.len()) {
        chars.truncate(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(cell: &str) -> Option<String> {
        clean_roster_name(cell)
    }

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(clean("柳 幸子").as_deref(), Some("柳 幸子"));
        assert_eq!(clean("  青木 ").as_deref(), Some("青木"));
    }

    #[test]
    fn test_placeholders_are_dropped() {
        assert_eq!(clean("空き"), None);
        assert_eq!(clean("職員配置不要"), None);
        assert_eq!(clean("欠員（募集中）"), None);
        assert_eq!(clean(""), None);
        assert_eq!(clean("★"), None);
    }

    #[test]
    fn test_trailing_dash_hour() {
        assert_eq!(clean("沼田-8").as_deref(), Some("沼田"));
        assert_eq!(clean("田代-20").as_deref(), Some("田代"));
        assert_eq!(clean("星野⁻8半").as_deref(), Some("星野"));
    }

    #[test]
    fn test_leading_hour_dash() {
        assert_eq!(clean("19-青木").as_deref(), Some("青木"));
        assert_eq!(clean("7半ー向井").as_deref(), Some("向井"));
    }

    #[test]
    fn test_trailing_hour_dash() {
        assert_eq!(clean("青木19-").as_deref(), Some("青木"));
        assert_eq!(clean("細谷18-").as_deref(), Some("細谷"));
        assert_eq!(clean("小川20半-").as_deref(), Some("小川"));
        assert_eq!(clean("伊藤園19-").as_deref(), Some("伊藤園"));
    }

    #[test]
    fn test_trailing_half_hour() {
        assert_eq!(clean("武田16半").as_deref(), Some("武田"));
        assert_eq!(clean("マイ16半").as_deref(), Some("マイ"));
        assert_eq!(clean("向井7半").as_deref(), Some("向井"));
    }

    #[test]
    fn test_star_marker_removed() {
        assert_eq!(clean("★金井").as_deref(), Some("金井"));
        assert_eq!(clean("金井★").as_deref(), Some("金井"));
    }

    #[test]
    fn test_star_after_hour_shields_annotation() {
        // Markers are dropped last, so an annotation followed by one survives.
        assert_eq!(clean("沼田-8★").as_deref(), Some("沼田-8"));
    }

    #[test]
    fn test_bare_number_without_half_is_kept() {
        // Only `半` marks a trailing hour without a dash.
        assert_eq!(clean("金井16").as_deref(), Some("金井16"));
    }

    #[test]
    fn test_katakana_long_vowel_is_not_stripped_without_digits() {
        assert_eq!(clean("マリー").as_deref(), Some("マリー"));
    }
}
