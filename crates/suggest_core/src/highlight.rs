//! Highlight navigation over the filtered sequence
//!
//! Cyclic scans that skip non-selectable items, and the range guard that
//! keeps a highlight valid after the sequence shrinks.

use crate::filter::FilteredItems;

/// Scan forward from `current + 1` (no highlight scans from the start),
/// wrapping, for the next selectable item
///
/// Returns `None` when the sequence is empty or nothing is selectable.
pub fn next_selectable<T>(
    items: &FilteredItems<'_, T>,
    current: Option<usize>,
    is_selectable: impl Fn(&T) -> bool,
) -> Option<usize> {
    let len = items.len();
    if len == 0 {
        return None;
    }
    // First candidate
    let start = match current {
        Some(index) if index < len => index + 1,
        _ => 0,
    };
    (0..len)
        .map(|step| (start + step) % len)
        .find(|&index| items.get(index).map_or(false, &is_selectable))
}

/// Scan backward from `current - 1` (no highlight scans from the end),
/// wrapping, for the previous selectable item
pub fn prev_selectable<T>(
    items: &FilteredItems<'_, T>,
    current: Option<usize>,
    is_selectable: impl Fn(&T) -> bool,
) -> Option<usize> {
    let len = items.len();
    if len == 0 {
        return None;
    }
    let origin = match current {
        Some(index) if index < len => index,
        _ => len,
    };
    (1..=len)
        .map(|step| (origin + len - step) % len)
        .find(|&index| items.get(index).map_or(false, &is_selectable))
}

/// Drop a highlight that no longer points into a sequence of `len` items
pub fn clamp_highlight(highlight: Option<usize>, len: usize) -> Option<usize> {
    highlight.filter(|&index| index < len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filtered_items;

    const STATES: [&str; 5] = ["Alabama", "Alaska", "Arizona", "Arkansas", "California"];

    fn not_arizona(item: &&str) -> bool {
        *item != "Arizona"
    }

    #[test]
    fn test_next_skips_unselectable() {
        let items = filtered_items(&STATES, "", None, None);
        // Index 2 is not selectable: 1 -> 3
        assert_eq!(next_selectable(&items, Some(1), not_arizona), Some(3));
        assert_eq!(next_selectable(&items, None, not_arizona), Some(0));
    }

    #[test]
    fn test_next_wraps() {
        let items = filtered_items(&STATES, "", None, None);
        assert_eq!(next_selectable(&items, Some(4), not_arizona), Some(0));
    }

    #[test]
    fn test_prev_skips_and_wraps() {
        let items = filtered_items(&STATES, "", None, None);
        assert_eq!(prev_selectable(&items, Some(3), not_arizona), Some(1));
        assert_eq!(prev_selectable(&items, Some(0), not_arizona), Some(4));
        assert_eq!(prev_selectable(&items, None, not_arizona), Some(4));
    }

    #[test]
    fn test_nothing_selectable() {
        let items = filtered_items(&STATES, "", None, None);
        assert_eq!(next_selectable(&items, Some(1), |_| false), None);
        assert_eq!(prev_selectable(&items, None, |_| false), None);
    }

    #[test]
    fn test_single_selectable_returns_itself() {
        let items = filtered_items(&STATES, "", None, None);
        let only_alaska = |item: &&str| *item == "Alaska";
        assert_eq!(next_selectable(&items, Some(1), only_alaska), Some(1));
        assert_eq!(prev_selectable(&items, Some(1), only_alaska), Some(1));
    }

    #[test]
    fn test_empty_sequence() {
        let empty: [&str; 0] = [];
        let items = filtered_items(&empty, "", None, None);
        assert_eq!(next_selectable(&items, None, |_| true), None);
        assert_eq!(prev_selectable(&items, Some(3), |_| true), None);
    }

    #[test]
    fn test_stale_current_is_treated_as_none() {
        let items = filtered_items(&STATES, "", None, None);
        assert_eq!(next_selectable(&items, Some(17), |_| true), Some(0));
        assert_eq!(prev_selectable(&items, Some(17), |_| true), Some(4));
    }

    #[test]
    fn test_clamp_highlight() {
        assert_eq!(clamp_highlight(Some(2), 3), Some(2));
        assert_eq!(clamp_highlight(Some(3), 3), None);
        assert_eq!(clamp_highlight(Some(0), 0), None);
        assert_eq!(clamp_highlight(None, 3), None);
    }
}
