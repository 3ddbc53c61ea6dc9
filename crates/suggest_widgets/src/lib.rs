//! Suggest Widgets
//!
//! The compose layer between the headless engine in `suggest_core` and a
//! host's element tree.
//!
//! - [`InputProps`] - role/ARIA/autocomplete attributes for the input
//! - [`ItemBinding`] / [`MenuBinding`] - which pointer events on which node
//!   become which [`AutocompleteEvent`](suggest_core::AutocompleteEvent)
//! - [`Renderer`] - invokes the caller's render functions for the current
//!   state
//!
//! # Example
//!
//! ```ignore
//! use suggest_widgets::prelude::*;
//!
//! let renderer = Renderer::new(
//!     |props: &InputProps| format!("<input value={:?}>", props.value),
//!     |item: &String, props: &ItemProps| {
//!         let marker = if props.highlighted { ">" } else { " " };
//!         format!("{} {}", marker, item)
//!     },
//!     |items, _query, _placement| {
//!         items.into_iter().map(|i| i.node).collect::<Vec<_>>().join("\n")
//!     },
//! );
//!
//! let rendered = renderer.render(&autocomplete)?;
//! if let Some(menu) = rendered.menu {
//!     println!("{}", menu.node);
//! }
//! ```

pub mod bindings;
pub mod props;
pub mod render;
pub mod style;

pub use bindings::{InputEvent, ItemBinding, MenuBinding, PointerEvent};
pub use props::{InputProps, ItemProps};
pub use render::{
    RenderInputFn, RenderItemFn, RenderMenuFn, Rendered, RenderedItem, RenderedMenu, Renderer,
};
pub use style::{Cursor, ItemStyle, MenuPlacement, MenuStyle};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bindings::{InputEvent, ItemBinding, MenuBinding, PointerEvent};
    pub use crate::props::{InputProps, ItemProps};
    pub use crate::render::{Rendered, RenderedItem, RenderedMenu, Renderer};
    pub use crate::style::{ItemStyle, MenuPlacement, MenuStyle};
    pub use suggest_core::prelude::*;
}
