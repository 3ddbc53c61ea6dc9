//! Selection/highlight state machine
//!
//! A pure function from `(state, event)` to `(state, effects)`. It never
//! touches the host: focus changes, scrolling, measurement and callbacks are
//! returned as [`Effect`]s and applied by the controller afterwards. This is
//! what lets every interaction be tested without mounting anything.
//!
//! # States
//!
//! ```text
//!            any key / focus / click           ArrowDown / ArrowUp / hover
//!   Closed ─────────────────────────▶ OpenNoHighlight ─────────────▶ OpenHighlighted(i)
//!     ▲                                    │                                │
//!     └──── Escape / Enter / blur / select ┴────────────────────────────────┘
//! ```
//!
//! After every transition the machine reconciles derived effects: re-measure
//! the menu when it opens, report internal visibility changes, and ask the
//! host to reveal the highlighted item.

use suggest_platform::{KeyboardEvent, ScrollOffset};

use crate::auto_highlight::maybe_highlight;
use crate::config::AutocompleteConfig;
use crate::event::{AutocompleteEvent, Effect, Effects, NavKey, Transition};
use crate::filter::FilteredItems;
use crate::focus;
use crate::highlight::{clamp_highlight, next_selectable, prev_selectable};
use crate::item::ItemAdapter;
use crate::state::InteractionState;

/// Read-only inputs a transition may consult
pub struct TransitionEnv<'a, T> {
    /// The caller's full item collection
    pub items: &'a [T],
    /// Item functions
    pub adapter: &'a ItemAdapter<T>,
    /// Behaviour switches
    pub config: &'a AutocompleteConfig,
    /// Page scroll offset at the time of the event
    pub scroll_offset: ScrollOffset,
    /// Whether the input is the active element
    pub input_focused: bool,
}

impl<'a, T> TransitionEnv<'a, T> {
    /// Filtered sequence for a query
    pub fn filtered(&self, query: &str) -> FilteredItems<'a, T> {
        self.adapter.filter(self.items, query)
    }
}

/// Compute the next state and the effects to apply
pub fn transition<T>(
    state: &InteractionState,
    event: &AutocompleteEvent,
    env: &TransitionEnv<'_, T>,
) -> Transition {
    let mut next = state.clone();
    let mut effects = Effects::new();

    match event {
        AutocompleteEvent::KeyDown(key_event) => {
            handle_key_down(state, &mut next, &mut effects, key_event, env);
            effects.push(Effect::ForwardKeyDown(key_event.clone()));
        }
        AutocompleteEvent::Change(text) => {
            let changed = next.query_text != *text;
            next.query_text = text.clone();
            effects.push(Effect::TextChanged(text.clone()));
            refresh_highlight(&mut next, env, changed);
        }
        AutocompleteEvent::ValueChanged(text) => {
            let changed = next.query_text != *text;
            next.query_text = text.clone();
            refresh_highlight(&mut next, env, changed);
        }
        // A surviving index may now point at a different item
        AutocompleteEvent::ItemsChanged => refresh_highlight(&mut next, env, true),
        AutocompleteEvent::OpenOverrideChanged(open) => next.open_override = *open,
        AutocompleteEvent::Focus => focus::on_focus(state, &mut next, &mut effects),
        AutocompleteEvent::Blur => focus::on_blur(state, &mut next, &mut effects, env),
        AutocompleteEvent::InputClick => {
            // A disabled input never becomes active, so it never reopens
            if env.input_focused && !state.is_open() {
                next.is_open_internal = true;
            }
            effects.push(Effect::ForwardClick);
        }
        AutocompleteEvent::ItemHover(index) => {
            let items = env.filtered(&state.query_text);
            if is_selectable_at(&items, *index, env.adapter) {
                next.highlighted_index = Some(*index);
            }
        }
        AutocompleteEvent::ItemClick(index) => {
            let items = env.filtered(&state.query_text);
            if is_selectable_at(&items, *index, env.adapter) {
                // The menu goes away before a pointer-leave can arrive
                next.suppress_blur = false;
                next.close_menu();
                effects.extend(commit(&items, *index, env.adapter));
            }
        }
        AutocompleteEvent::MenuPointerEnter | AutocompleteEvent::MenuTouchStart => {
            next.suppress_blur = true;
        }
        AutocompleteEvent::MenuPointerLeave => next.suppress_blur = false,
    }

    reconcile(state, &mut next, &mut effects, env);

    // Caller handlers run after everything the engine does itself
    let (forwards, mut effects): (Effects, Effects) =
        effects.into_iter().partition(Effect::is_forward);
    effects.extend(forwards);

    Transition {
        state: next,
        effects,
    }
}

// ============================================================================
// Keyboard
// ============================================================================

type KeyHandler<T> =
    fn(&InteractionState, &mut InteractionState, &mut Effects, &KeyboardEvent, &TransitionEnv<'_, T>);

fn key_handler<T>(key: NavKey) -> KeyHandler<T> {
    match key {
        NavKey::ArrowDown => arrow_down::<T>,
        NavKey::ArrowUp => arrow_up::<T>,
        NavKey::Enter => enter::<T>,
        NavKey::Escape => escape::<T>,
        NavKey::Tab => tab::<T>,
    }
}

fn handle_key_down<T>(
    state: &InteractionState,
    next: &mut InteractionState,
    effects: &mut Effects,
    event: &KeyboardEvent,
    env: &TransitionEnv<'_, T>,
) {
    match NavKey::from_key(&event.key) {
        Some(key) => {
            tracing::trace!("autocomplete key: {:?}", key);
            key_handler::<T>(key)(state, next, effects, event, env);
        }
        None => {
            if !state.is_open() {
                next.is_open_internal = true;
            }
        }
    }
}

fn arrow_down<T>(
    state: &InteractionState,
    next: &mut InteractionState,
    effects: &mut Effects,
    _event: &KeyboardEvent,
    env: &TransitionEnv<'_, T>,
) {
    effects.push(Effect::PreventDefault);
    let items = env.filtered(&state.query_text);
    let current = clamp_highlight(state.highlighted_index, items.len());
    if let Some(index) = next_selectable(&items, current, |item| env.adapter.is_selectable(item)) {
        if Some(index) != current {
            next.highlighted_index = Some(index);
            next.is_open_internal = true;
        }
    }
}

fn arrow_up<T>(
    state: &InteractionState,
    next: &mut InteractionState,
    effects: &mut Effects,
    _event: &KeyboardEvent,
    env: &TransitionEnv<'_, T>,
) {
    effects.push(Effect::PreventDefault);
    let items = env.filtered(&state.query_text);
    let current = clamp_highlight(state.highlighted_index, items.len());
    if let Some(index) = prev_selectable(&items, current, |item| env.adapter.is_selectable(item)) {
        if Some(index) != current {
            next.highlighted_index = Some(index);
            next.is_open_internal = true;
        }
    }
}

fn enter<T>(
    state: &InteractionState,
    next: &mut InteractionState,
    effects: &mut Effects,
    event: &KeyboardEvent,
    env: &TransitionEnv<'_, T>,
) {
    // Enter confirms an IME candidate, not a suggestion
    if event.is_composing {
        return;
    }
    next.suppress_blur = false;

    // Closed menu: let the form submit
    if !state.is_open() {
        return;
    }

    let items = env.filtered(&state.query_text);
    match clamp_highlight(state.highlighted_index, items.len()) {
        None => {
            next.is_open_internal = false;
            effects.push(Effect::SelectAllText);
        }
        Some(index) => {
            effects.push(Effect::PreventDefault);
            next.close_menu();
            if let Some(Effect::Select {
                source_index,
                value,
            }) = commit(&items, index, env.adapter)
            {
                let end = value.chars().count();
                effects.push(Effect::SetSelectionRange { start: end, end });
                effects.push(Effect::Select {
                    source_index,
                    value,
                });
            }
        }
    }
}

fn escape<T>(
    _state: &InteractionState,
    next: &mut InteractionState,
    _effects: &mut Effects,
    _event: &KeyboardEvent,
    _env: &TransitionEnv<'_, T>,
) {
    next.suppress_blur = false;
    next.close_menu();
}

fn tab<T>(
    _state: &InteractionState,
    next: &mut InteractionState,
    _effects: &mut Effects,
    _event: &KeyboardEvent,
    _env: &TransitionEnv<'_, T>,
) {
    next.suppress_blur = false;
}

// ============================================================================
// Shared helpers
// ============================================================================

fn is_selectable_at<T>(items: &FilteredItems<'_, T>, index: usize, adapter: &ItemAdapter<T>) -> bool {
    items.get(index).map_or(false, |item| adapter.is_selectable(item))
}

/// Build the select effect for the item at a display index
pub(crate) fn commit<T>(
    items: &FilteredItems<'_, T>,
    index: usize,
    adapter: &ItemAdapter<T>,
) -> Option<Effect> {
    let item = items.get(index)?;
    let source_index = items.source_index(index)?;
    let value = adapter.display_value(item);
    tracing::debug!("autocomplete commit: index {} -> {:?}", index, value);
    Some(Effect::Select {
        source_index,
        value,
    })
}

/// Re-validate the highlight after the query or items changed
fn refresh_highlight<T>(next: &mut InteractionState, env: &TransitionEnv<'_, T>, rescan: bool) {
    let items = env.filtered(&next.query_text);
    next.highlighted_index = clamp_highlight(next.highlighted_index, items.len());
    if env.config.auto_highlight && (rescan || next.highlighted_index.is_none()) {
        next.highlighted_index =
            maybe_highlight(&items, &next.query_text, next.highlighted_index, env.adapter);
    }
}

/// Derived effects common to every transition
fn reconcile<T>(
    prev: &InteractionState,
    next: &mut InteractionState,
    effects: &mut Effects,
    env: &TransitionEnv<'_, T>,
) {
    if let Some(index) = next.highlighted_index {
        let len = env.filtered(&next.query_text).len();
        if index >= len {
            tracing::warn!("highlight {} out of range for {} items, clearing", index, len);
            next.highlighted_index = None;
        }
    }

    let was_open = prev.is_open();
    let is_open = next.is_open();
    if !was_open && is_open {
        effects.push(Effect::RecomputeMenuRect);
    }
    if prev.is_open_internal != next.is_open_internal {
        tracing::debug!("autocomplete menu visibility -> {}", next.is_open_internal);
        effects.push(Effect::MenuVisibilityChanged(next.is_open_internal));
    }
    if let (true, Some(index)) = (is_open, next.highlighted_index) {
        if !was_open || prev.highlighted_index != Some(index) {
            effects.push(Effect::RevealItem(index));
        }
    }
}
