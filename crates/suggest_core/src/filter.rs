//! Filter/sort pipeline
//!
//! Derives the displayed sequence from the raw items. The result borrows
//! the caller's items and remembers each one's position in the source
//! collection; the source is never reordered. Recompute whenever the items,
//! the query, or either function changes - nothing here is cached.

use crate::item::{Compare, ShouldRender};

/// The ordered sequence of items currently eligible for display
#[derive(Debug)]
pub struct FilteredItems<'a, T> {
    /// `(source index, item)` in display order
    entries: Vec<(usize, &'a T)>,
}

impl<'a, T> Clone for FilteredItems<'a, T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<'a, T> FilteredItems<'a, T> {
    /// Number of displayed items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is displayed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Item at a display index
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.entries.get(index).map(|(_, item)| *item)
    }

    /// Position of the item at `index` in the caller's collection
    pub fn source_index(&self, index: usize) -> Option<usize> {
        self.entries.get(index).map(|(source, _)| *source)
    }

    /// Items in display order
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.entries.iter().map(|(_, item)| *item)
    }

    /// `(display index, source index, item)` in display order
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, usize, &'a T)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (source, item))| (index, *source, *item))
    }
}

/// Filter `items` by `should_render`, then stably sort by `compare`
///
/// - No `should_render`: every item passes.
/// - No `compare`: filtered items keep input order.
/// - Equal items keep their original relative order.
pub fn filtered_items<'a, T>(
    items: &'a [T],
    query: &str,
    should_render: Option<&ShouldRender<T>>,
    compare: Option<&Compare<T>>,
) -> FilteredItems<'a, T> {
    let mut entries: Vec<(usize, &'a T)> = match should_render {
        Some(keep) => items
            .iter()
            .enumerate()
            .filter(|(_, item)| keep(item, query))
            .collect(),
        None => items.iter().enumerate().collect(),
    };

    if let Some(compare) = compare {
        // `sort_by` is stable
        entries.sort_by(|(_, a), (_, b)| compare(a, b, query));
    }

    FilteredItems { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn names<'a>(filtered: &FilteredItems<'a, &'static str>) -> Vec<&'static str> {
        filtered.iter().copied().collect()
    }

    fn contains_query(item: &&'static str, query: &str) -> bool {
        item.to_lowercase().contains(&query.to_lowercase())
    }

    #[test]
    fn test_identity_without_functions() {
        let items = ["Ohio", "Maine", "Iowa"];
        let filtered = filtered_items(&items, "x", None, None);
        assert_eq!(names(&filtered), vec!["Ohio", "Maine", "Iowa"]);
        assert_eq!(filtered.source_index(1), Some(1));
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = ["Maine", "Ohio", "Maryland", "Iowa", "Massachusetts"];
        let filtered = filtered_items(&items, "ma", Some(&contains_query), None);
        assert_eq!(names(&filtered), vec!["Maine", "Maryland", "Massachusetts"]);
        assert_eq!(filtered.source_index(2), Some(4));
        for item in filtered.iter() {
            assert!(contains_query(item, "ma"));
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let items = ["bb", "a", "cc", "d", "ee"];
        // Order by length only; equal lengths keep input order
        let by_len = |a: &&'static str, b: &&'static str, _: &str| a.len().cmp(&b.len());
        let filtered = filtered_items(&items, "", None, Some(&by_len));
        assert_eq!(names(&filtered), vec!["a", "d", "bb", "cc", "ee"]);
    }

    #[test]
    fn test_filter_then_sort_uses_query() {
        let items = ["Maryland", "Alabama", "Maine", "Montana"];
        let keep = |item: &&'static str, query: &str| item.starts_with(query);
        let reverse = |a: &&'static str, b: &&'static str, _: &str| -> Ordering { b.cmp(a) };
        let filtered = filtered_items(&items, "Ma", Some(&keep), Some(&reverse));
        assert_eq!(names(&filtered), vec!["Maryland", "Maine"]);
        // The caller's slice is untouched
        assert_eq!(items, ["Maryland", "Alabama", "Maine", "Montana"]);
    }

    #[test]
    fn test_empty_input() {
        let items: [&'static str; 0] = [];
        let filtered = filtered_items(&items, "a", Some(&contains_query), None);
        assert!(filtered.is_empty());
        assert_eq!(filtered.get(0), None);
    }
}
