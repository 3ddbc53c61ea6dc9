//! Interaction state owned by an autocomplete instance

use serde::{Deserialize, Serialize};
use suggest_platform::ScrollOffset;

use crate::geometry::MenuRect;

/// Coarse menu state derived from [`InteractionState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    Closed,
    OpenNoHighlight,
    OpenHighlighted(usize),
}

/// Everything the autocomplete remembers between events
///
/// Created closed with no highlight. Mutated only by
/// [`transition`](crate::machine::transition) and by the controller when it
/// applies a geometry effect.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    /// Mirror of the input text
    pub query_text: String,
    /// Visibility the widget itself decided on
    pub is_open_internal: bool,
    /// Host-managed visibility, wins over `is_open_internal` when set
    pub open_override: Option<bool>,
    /// Index into the current filtered sequence
    pub highlighted_index: Option<usize>,
    /// Pointer is over the menu; blur must not close it
    pub suppress_blur: bool,
    /// A refocus after a suppressed blur is in flight
    pub defer_focus_restore: bool,
    /// Page scroll captured at the suppressed blur
    pub saved_scroll_offset: Option<ScrollOffset>,
    /// Last measured menu placement
    pub menu_rect: Option<MenuRect>,
}

impl InteractionState {
    /// Initial state for a freshly mounted widget
    pub fn new(query_text: impl Into<String>, open_override: Option<bool>) -> Self {
        Self {
            query_text: query_text.into(),
            open_override,
            ..Default::default()
        }
    }

    /// Effective visibility: the override if present, else the internal flag
    pub fn is_open(&self) -> bool {
        self.open_override.unwrap_or(self.is_open_internal)
    }

    /// Coarse menu state
    pub fn menu_state(&self) -> MenuState {
        match (self.is_open(), self.highlighted_index) {
            (false, _) => MenuState::Closed,
            (true, None) => MenuState::OpenNoHighlight,
            (true, Some(index)) => MenuState::OpenHighlighted(index),
        }
    }

    /// Close the menu and drop the highlight
    pub(crate) fn close_menu(&mut self) {
        self.is_open_internal = false;
        self.highlighted_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = InteractionState::new("Ma", None);
        assert_eq!(state.query_text, "Ma");
        assert!(!state.is_open());
        assert_eq!(state.highlighted_index, None);
        assert_eq!(state.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_override_wins() {
        let mut state = InteractionState::new("", Some(true));
        assert!(state.is_open());
        state.is_open_internal = true;
        state.open_override = Some(false);
        assert!(!state.is_open());
        state.open_override = None;
        assert!(state.is_open());
    }

    #[test]
    fn test_menu_state() {
        let mut state = InteractionState::new("", None);
        state.is_open_internal = true;
        assert_eq!(state.menu_state(), MenuState::OpenNoHighlight);
        state.highlighted_index = Some(2);
        assert_eq!(state.menu_state(), MenuState::OpenHighlighted(2));
        state.close_menu();
        assert_eq!(state.menu_state(), MenuState::Closed);
        assert_eq!(state.highlighted_index, None);
    }
}
