//! Suggest Platform Abstraction Layer
//!
//! This crate provides the host-facing types and capability traits the
//! autocomplete engine is driven by. The engine never talks to a real
//! windowing system or DOM; it only sees these abstractions.
//!
//! # Architecture
//!
//! The abstraction is built around two capability traits:
//!
//! - [`Viewport`] - Page scroll offset, scrolling, and active element lookup
//! - [`InputElement`] - The text input the menu is anchored to (focus,
//!   selection, measurement)
//!
//! plus plain input event types ([`KeyboardEvent`], [`Key`], [`Modifiers`]).
//!
//! # Example
//!
//! ```ignore
//! use suggest_platform::*;
//!
//! struct BrowserViewport { /* ... */ }
//!
//! impl Viewport for BrowserViewport {
//!     fn scroll_offset(&self) -> ScrollOffset {
//!         ScrollOffset::new(window_scroll_x(), window_scroll_y())
//!     }
//!
//!     fn scroll_to(&mut self, offset: ScrollOffset) {
//!         window_scroll_to(offset.x, offset.y);
//!     }
//!
//!     fn active_element(&self) -> Option<ElementId> {
//!         document_active_element_id()
//!     }
//! }
//! ```

mod element;
mod error;
mod input;
mod viewport;

// Re-export all public types
pub use element::{ElementId, InputElement, LayoutBox, Margins};
pub use error::{PlatformError, Result};
pub use input::{Key, KeyboardEvent, Modifiers};
pub use viewport::{ScrollOffset, Viewport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::{ElementId, InputElement, LayoutBox, Margins};
    pub use crate::error::{PlatformError, Result};
    pub use crate::input::{Key, KeyboardEvent, Modifiers};
    pub use crate::viewport::{ScrollOffset, Viewport};
}
