//! Viewport capability - page scroll and focus queries

use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// Page scroll position in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    /// Create a new scroll offset
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The window/page the input lives in
///
/// Replaces direct access to global window scroll and focus APIs so the
/// engine can run against a recording fake in tests.
pub trait Viewport {
    /// Current page scroll offset
    fn scroll_offset(&self) -> ScrollOffset;

    /// Scroll the page to an absolute offset
    fn scroll_to(&mut self, offset: ScrollOffset);

    /// The element that currently holds keyboard focus, if any
    fn active_element(&self) -> Option<ElementId>;

    /// Scroll the menu so the item at `index` is visible, only if needed
    ///
    /// Hosts without a scrollable menu can ignore this.
    fn reveal_menu_item(&mut self, index: usize) {
        let _ = index;
    }
}
