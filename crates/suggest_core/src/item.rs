//! Item adapter - the only window the engine has into caller items
//!
//! Items are opaque. Everything the engine needs to know about one goes
//! through the functions held here: its display value, whether it can be
//! highlighted/selected, whether it matches the current query, and how it
//! orders against another item.
//!
//! The filter and comparator run on every recompute. If they panic the
//! panic propagates to the host; the engine does not catch it.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::filter::{filtered_items, FilteredItems};

/// Resolves the text an item contributes to the input when selected
pub type DisplayValueFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Decides whether an item can be highlighted and selected
pub type SelectableFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Query predicate: `(item, query) -> keep`
pub type ShouldRender<T> = dyn Fn(&T, &str) -> bool + Send + Sync;

/// Query-aware ordering: `(a, b, query) -> ordering`
pub type Compare<T> = dyn Fn(&T, &T, &str) -> Ordering + Send + Sync;

/// The injected item functions
pub struct ItemAdapter<T> {
    display_value: DisplayValueFn<T>,
    is_selectable: Option<SelectableFn<T>>,
    should_render: Option<Arc<ShouldRender<T>>>,
    compare: Option<Arc<Compare<T>>>,
}

impl<T> Clone for ItemAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            display_value: Arc::clone(&self.display_value),
            is_selectable: self.is_selectable.clone(),
            should_render: self.should_render.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T> fmt::Debug for ItemAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemAdapter")
            .field("is_selectable", &self.is_selectable.is_some())
            .field("should_render", &self.should_render.is_some())
            .field("compare", &self.compare.is_some())
            .finish()
    }
}

impl<T> ItemAdapter<T> {
    /// Create an adapter from a display-value resolver
    ///
    /// Every item is selectable, nothing is filtered, input order is kept.
    pub fn new<F>(display_value: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::from_display_fn(Arc::new(display_value))
    }

    /// Create an adapter from an already shared resolver
    pub fn from_display_fn(display_value: DisplayValueFn<T>) -> Self {
        Self {
            display_value,
            is_selectable: None,
            should_render: None,
            compare: None,
        }
    }

    /// Set the selectability predicate
    pub fn selectable<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.is_selectable = Some(Arc::new(f));
        self
    }

    /// Set the query filter
    pub fn should_render<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        self.should_render = Some(Arc::new(f));
        self
    }

    /// Set the query-aware sort
    pub fn compare<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T, &str) -> Ordering + Send + Sync + 'static,
    {
        self.compare = Some(Arc::new(f));
        self
    }

    /// Display value of an item
    pub fn display_value(&self, item: &T) -> String {
        (self.display_value)(item)
    }

    /// Whether an item can be highlighted/selected (default: always)
    pub fn is_selectable(&self, item: &T) -> bool {
        self.is_selectable.as_ref().map_or(true, |f| f(item))
    }

    /// Derive the displayed sequence for `query`
    pub fn filter<'a>(&self, items: &'a [T], query: &str) -> FilteredItems<'a, T> {
        filtered_items(
            items,
            query,
            self.should_render.as_deref(),
            self.compare.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_defaults() {
        let adapter = ItemAdapter::new(|s: &&str| s.to_string());
        assert_eq!(adapter.display_value(&"Maine"), "Maine");
        assert!(adapter.is_selectable(&"Maine"));

        let items = ["b", "a", "c"];
        let filtered = adapter.filter(&items, "zzz");
        assert_eq!(filtered.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_adapter_selectable() {
        let adapter =
            ItemAdapter::new(|s: &&str| s.to_string()).selectable(|s: &&str| !s.starts_with('#'));
        assert!(!adapter.is_selectable(&"# header"));
        assert!(adapter.is_selectable(&"Texas"));
    }
}
