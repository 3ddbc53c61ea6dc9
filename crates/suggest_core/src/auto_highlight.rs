//! Auto-highlight heuristic
//!
//! When the query or item set changes, highlight the first selectable item
//! (starting from the current highlight) if its display value begins with
//! the query, ignoring case. Prefix match only.

use crate::filter::FilteredItems;
use crate::item::ItemAdapter;

/// Compute the highlight after a query/item change
///
/// Returns `None` (clear the highlight) when the query is empty, nothing is
/// selectable, or the candidate does not start with the query.
pub fn maybe_highlight<T>(
    items: &FilteredItems<'_, T>,
    query: &str,
    previous: Option<usize>,
    adapter: &ItemAdapter<T>,
) -> Option<usize> {
    let len = items.len();
    if len == 0 || query.is_empty() {
        return None;
    }

    let start = previous.filter(|&index| index < len).unwrap_or(0);
    let index = (0..len)
        .map(|step| (start + step) % len)
        .find(|&index| items.get(index).map_or(false, |item| adapter.is_selectable(item)))?;

    let item = items.get(index)?;
    let display = adapter.display_value(item).to_lowercase();
    if display.starts_with(&query.to_lowercase()) {
        Some(index)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> ItemAdapter<&'static str> {
        ItemAdapter::new(|s: &&'static str| s.to_string())
    }

    const STATES: [&str; 3] = ["Massachusetts", "Maryland", "Maine"];

    #[test]
    fn test_prefix_match() {
        let adapter = adapter();
        let items = adapter.filter(&STATES, "Ma");
        assert_eq!(maybe_highlight(&items, "Ma", None, &adapter), Some(0));
        assert_eq!(maybe_highlight(&items, "Mas", None, &adapter), Some(0));
        assert_eq!(maybe_highlight(&items, "mAs", None, &adapter), Some(0));
        assert_eq!(maybe_highlight(&items, "Z", None, &adapter), None);
    }

    #[test]
    fn test_empty_query_clears() {
        let adapter = adapter();
        let items = adapter.filter(&STATES, "");
        assert_eq!(maybe_highlight(&items, "", Some(1), &adapter), None);
    }

    #[test]
    fn test_substring_is_not_enough() {
        let adapter = adapter();
        let items = adapter.filter(&STATES, "land");
        assert_eq!(maybe_highlight(&items, "land", None, &adapter), None);
    }

    #[test]
    fn test_starts_from_previous_highlight() {
        let adapter = adapter();
        let items = adapter.filter(&STATES, "Mar");
        assert_eq!(maybe_highlight(&items, "Mar", Some(1), &adapter), Some(1));
        // Candidate is the item at the previous highlight, not a search
        assert_eq!(maybe_highlight(&items, "Mai", Some(1), &adapter), None);
    }

    #[test]
    fn test_skips_unselectable() {
        let adapter = adapter().selectable(|s: &&'static str| *s != "Massachusetts");
        let items = adapter.filter(&STATES, "Ma");
        assert_eq!(maybe_highlight(&items, "Mar", None, &adapter), Some(1));

        let none = self::adapter().selectable(|_: &&'static str| false);
        assert_eq!(maybe_highlight(&items, "Ma", None, &none), None);
    }

    #[test]
    fn test_out_of_range_previous_restarts() {
        let adapter = adapter();
        let items = adapter.filter(&STATES, "Ma");
        assert_eq!(maybe_highlight(&items, "Mass", Some(9), &adapter), Some(0));
    }
}
