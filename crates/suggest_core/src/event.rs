//! Events fed into the state machine and the effects it asks for

use smallvec::SmallVec;
use suggest_platform::{Key, KeyboardEvent, ScrollOffset};

use crate::state::InteractionState;

/// Everything that can drive an autocomplete transition
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteEvent {
    /// Key pressed while the input has focus
    KeyDown(KeyboardEvent),
    /// The user edited the input text
    Change(String),
    /// The input received focus
    Focus,
    /// The input lost focus
    Blur,
    /// The input was clicked
    InputClick,
    /// Pointer moved over the rendered item at a display index
    ItemHover(usize),
    /// Rendered item at a display index was clicked
    ItemClick(usize),
    /// Pointer entered the menu container
    MenuPointerEnter,
    /// Touch started on the menu container
    MenuTouchStart,
    /// Pointer left the menu container
    MenuPointerLeave,
    /// Host replaced the controlled text
    ValueChanged(String),
    /// Host replaced the item collection
    ItemsChanged,
    /// Host changed (or removed) the visibility override
    OpenOverrideChanged(Option<bool>),
}

/// Keys with dedicated transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Tab,
}

impl NavKey {
    /// Map a key to its navigation role, if it has one
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowDown => Some(NavKey::ArrowDown),
            Key::ArrowUp => Some(NavKey::ArrowUp),
            Key::Enter => Some(NavKey::Enter),
            Key::Escape => Some(NavKey::Escape),
            Key::Tab => Some(NavKey::Tab),
            _ => None,
        }
    }
}

/// Side effect requested by a transition, applied by the controller in order
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Suppress the host's default action for the current event
    PreventDefault,
    /// Report new input text (`onChange`)
    TextChanged(String),
    /// Commit an item (`onSelect`)
    Select {
        /// Position of the item in the caller's collection
        source_index: usize,
        /// Its resolved display value
        value: String,
    },
    /// Select the whole input text
    SelectAllText,
    /// Set the input selection/caret
    SetSelectionRange { start: usize, end: usize },
    /// Give focus back to the input
    FocusInput,
    /// Scroll the page now
    ScrollTo(ScrollOffset),
    /// Scroll the page again on the next tick, replacing any pending restore
    ScheduleScrollRestore(ScrollOffset),
    /// Re-measure the menu placement
    RecomputeMenuRect,
    /// Internal visibility flipped (`onMenuVisibilityChange`)
    MenuVisibilityChanged(bool),
    /// Make the highlighted item visible inside the menu
    RevealItem(usize),
    /// Pass a genuine focus to the caller's handler
    ForwardFocus,
    /// Pass a genuine blur to the caller's handler
    ForwardBlur,
    /// Pass a key-down to the caller's handler, after internal handling
    ForwardKeyDown(KeyboardEvent),
    /// Pass an input click to the caller's handler, after internal handling
    ForwardClick,
}

impl Effect {
    /// Whether this hands the event on to a caller-supplied handler
    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            Effect::ForwardFocus
                | Effect::ForwardBlur
                | Effect::ForwardKeyDown(_)
                | Effect::ForwardClick
        )
    }
}

/// Effects of a single transition; most produce at most a handful
pub type Effects = SmallVec<[Effect; 4]>;

/// Result of [`transition`](crate::machine::transition)
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: InteractionState,
    pub effects: Effects,
}

impl Transition {
    /// Whether the transition asked to prevent the default action
    pub fn prevents_default(&self) -> bool {
        self.effects.contains(&Effect::PreventDefault)
    }

    /// Display value of the committed item, if any
    pub fn selected_value(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Select { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }
}
