//! Suggest Core Engine
//!
//! The headless part of an autocomplete input: everything between "the host
//! delivered an event" and "the host should now do X".
//!
//! - **Filter/Sort Pipeline**: derive the displayed items from the caller's
//!   collection with injected predicates
//! - **Highlight State Machine**: keyboard, pointer and prop-change
//!   transitions as a pure `(state, event) -> (state, effects)` function
//! - **Focus/Blur Arbitration**: survive the blur that precedes a menu
//!   click, and put the page scroll back afterwards
//! - **Menu Geometry**: anchor the menu under the input
//! - **Auto-highlight**: prefix-match the query against the first candidate
//!
//! [`Autocomplete`] ties these together against the host capabilities from
//! `suggest_platform`.
//!
//! # Example
//!
//! ```ignore
//! use suggest_core::prelude::*;
//!
//! let states = vec!["Maine", "Maryland", "Massachusetts"];
//! let mut autocomplete = Autocomplete::builder()
//!     .items(states)
//!     .display_value(|s: &&str| s.to_string())
//!     .should_render(|s: &&str, query: &str| {
//!         s.to_lowercase().contains(&query.to_lowercase())
//!     })
//!     .on_select(|value, _| println!("selected {}", value))
//!     .build(input, viewport)?;
//!
//! autocomplete.handle_event(AutocompleteEvent::Focus);
//! autocomplete.handle_event(AutocompleteEvent::Change("Mar".into()));
//! assert_eq!(autocomplete.highlighted_index(), Some(0));
//! ```

pub mod auto_highlight;
pub mod autocomplete;
pub mod config;
pub mod debug;
pub mod error;
pub mod event;
pub mod filter;
pub mod focus;
pub mod geometry;
pub mod highlight;
pub mod item;
pub mod machine;
pub mod state;

pub use auto_highlight::maybe_highlight;
pub use autocomplete::{
    Autocomplete, AutocompleteBuilder, ChangeCallback, EventOutcome, KeyDownCallback,
    NotifyCallback, SelectCallback, VisibilityCallback,
};
pub use config::{AutocompleteConfig, DEFAULT_DEBUG_HISTORY};
pub use debug::{DebugHistory, DebugSnapshot};
pub use error::{AutocompleteError, Result};
pub use event::{AutocompleteEvent, Effect, Effects, NavKey, Transition};
pub use filter::{filtered_items, FilteredItems};
pub use focus::{RestoreToken, ScrollRestoreTimer};
pub use geometry::{compute_menu_rect, try_compute_menu_rect, MenuRect};
pub use highlight::{clamp_highlight, next_selectable, prev_selectable};
pub use item::{Compare, DisplayValueFn, ItemAdapter, SelectableFn, ShouldRender};
pub use machine::{transition, TransitionEnv};
pub use state::{InteractionState, MenuState};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::autocomplete::{Autocomplete, AutocompleteBuilder, EventOutcome};
    pub use crate::config::AutocompleteConfig;
    pub use crate::error::{AutocompleteError, Result};
    pub use crate::event::{AutocompleteEvent, Effect};
    pub use crate::geometry::MenuRect;
    pub use crate::item::ItemAdapter;
    pub use crate::state::{InteractionState, MenuState};
    pub use suggest_platform::prelude::*;
}
