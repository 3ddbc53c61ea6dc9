//! Autocomplete controller
//!
//! Owns the item collection, the [`InteractionState`], and the host
//! capabilities. Every host event goes through [`Autocomplete::handle_event`]:
//! the pure [`transition`] computes the next state, then the controller
//! applies the returned effects (focus, scroll, measurement, callbacks) in
//! order.
//!
//! # Example
//!
//! ```ignore
//! use suggest_core::prelude::*;
//!
//! let mut autocomplete = Autocomplete::builder()
//!     .items(vec!["Maine".to_string(), "Maryland".to_string()])
//!     .display_value(|s: &String| s.clone())
//!     .on_select(|value, _item| println!("picked {}", value))
//!     .build(input, viewport)?;
//!
//! autocomplete.handle_event(AutocompleteEvent::Focus);
//! autocomplete.handle_event(AutocompleteEvent::Change("Ma".into()));
//! let outcome = autocomplete.handle_event(AutocompleteEvent::KeyDown(Key::Enter.into()));
//! assert!(outcome.default_prevented);
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use suggest_platform::{InputElement, KeyboardEvent, Viewport};

use crate::config::AutocompleteConfig;
use crate::debug::{DebugHistory, DebugSnapshot};
use crate::error::{AutocompleteError, Result};
use crate::event::{AutocompleteEvent, Effect, Effects};
use crate::filter::FilteredItems;
use crate::focus::{RestoreToken, ScrollRestoreTimer};
use crate::geometry::{compute_menu_rect, try_compute_menu_rect, MenuRect};
use crate::item::{DisplayValueFn, ItemAdapter};
use crate::machine::{transition, TransitionEnv};
use crate::state::InteractionState;

/// Text changed callback
pub type ChangeCallback = Box<dyn FnMut(&str)>;
/// Item committed callback: `(display value, item)`
pub type SelectCallback<T> = Box<dyn FnMut(&str, &T)>;
/// Internal menu visibility changed callback
pub type VisibilityCallback = Box<dyn FnMut(bool)>;
/// Caller key-down handler, composed after the internal one
pub type KeyDownCallback = Box<dyn FnMut(&KeyboardEvent)>;
/// Caller focus/blur/click handler
pub type NotifyCallback = Box<dyn FnMut()>;

struct Callbacks<T> {
    on_change: Option<ChangeCallback>,
    on_select: Option<SelectCallback<T>>,
    on_menu_visibility_change: Option<VisibilityCallback>,
    on_focus: Option<NotifyCallback>,
    on_blur: Option<NotifyCallback>,
    on_key_down: Option<KeyDownCallback>,
    on_click: Option<NotifyCallback>,
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_select: None,
            on_menu_visibility_change: None,
            on_focus: None,
            on_blur: None,
            on_key_down: None,
            on_click: None,
        }
    }
}

/// What the host should do with the event it just delivered
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventOutcome {
    /// Suppress the platform's default action (caret move, form submit)
    pub default_prevented: bool,
    /// The effects that were applied
    pub effects: Effects,
}

/// A headless autocomplete input
pub struct Autocomplete<T> {
    items: Vec<T>,
    adapter: ItemAdapter<T>,
    config: AutocompleteConfig,
    state: InteractionState,
    input: Box<dyn InputElement>,
    viewport: Box<dyn Viewport>,
    scroll_restore: ScrollRestoreTimer,
    debug: Option<DebugHistory>,
    callbacks: Callbacks<T>,
}

impl<T> std::fmt::Debug for Autocomplete<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

impl<T> Autocomplete<T> {
    /// Start building an autocomplete
    pub fn builder() -> AutocompleteBuilder<T> {
        AutocompleteBuilder::new()
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Run one event through the state machine and apply its effects
    pub fn handle_event(&mut self, event: AutocompleteEvent) -> EventOutcome {
        let env = TransitionEnv {
            items: &self.items,
            adapter: &self.adapter,
            config: &self.config,
            scroll_offset: self.viewport.scroll_offset(),
            input_focused: self.is_input_focused(),
        };
        let next = transition(&self.state, &event, &env);
        self.state = next.state;
        self.config.open = self.state.open_override;

        let outcome = self.apply(next.effects);
        self.record_debug();
        outcome
    }

    fn apply(&mut self, effects: Effects) -> EventOutcome {
        let mut outcome = EventOutcome::default();

        for effect in &effects {
            match effect {
                Effect::PreventDefault => outcome.default_prevented = true,
                Effect::TextChanged(text) => {
                    if let Some(callback) = self.callbacks.on_change.as_mut() {
                        callback(text.as_str());
                    }
                }
                Effect::Select {
                    source_index,
                    value,
                } => match self.items.get(*source_index) {
                    Some(item) => {
                        if let Some(callback) = self.callbacks.on_select.as_mut() {
                            callback(value.as_str(), item);
                        }
                    }
                    None => tracing::warn!("selected item {} no longer exists", source_index),
                },
                Effect::SelectAllText => self.input.select(),
                Effect::SetSelectionRange { start, end } => {
                    self.input.set_selection_range(*start, *end)
                }
                Effect::FocusInput => self.input.focus(),
                Effect::ScrollTo(offset) => self.viewport.scroll_to(*offset),
                Effect::ScheduleScrollRestore(offset) => {
                    self.scroll_restore.schedule(*offset);
                }
                Effect::RecomputeMenuRect => self.update_menu_rect(),
                Effect::MenuVisibilityChanged(open) => {
                    if let Some(callback) = self.callbacks.on_menu_visibility_change.as_mut() {
                        callback(*open);
                    }
                }
                Effect::RevealItem(index) => self.viewport.reveal_menu_item(*index),
                Effect::ForwardFocus => {
                    if let Some(callback) = self.callbacks.on_focus.as_mut() {
                        callback();
                    }
                }
                Effect::ForwardBlur => {
                    if let Some(callback) = self.callbacks.on_blur.as_mut() {
                        callback();
                    }
                }
                Effect::ForwardKeyDown(event) => {
                    if let Some(callback) = self.callbacks.on_key_down.as_mut() {
                        callback(event);
                    }
                }
                Effect::ForwardClick => {
                    if let Some(callback) = self.callbacks.on_click.as_mut() {
                        callback();
                    }
                }
            }
        }

        outcome.effects = effects;
        outcome
    }

    fn update_menu_rect(&mut self) {
        // Keep the previous placement when the input cannot be measured
        if let Some(rect) = compute_menu_rect(self.input.as_ref()) {
            self.state.menu_rect = Some(rect);
        }
    }

    fn record_debug(&mut self) {
        if let Some(history) = self.debug.as_mut() {
            history.record(&self.state);
        }
    }

    // =========================================================================
    // Host updates
    // =========================================================================

    /// Replace the item collection
    pub fn set_items(&mut self, items: Vec<T>) -> EventOutcome {
        self.items = items;
        self.handle_event(AutocompleteEvent::ItemsChanged)
    }

    /// Replace the controlled text
    pub fn set_value(&mut self, value: impl Into<String>) -> EventOutcome {
        self.handle_event(AutocompleteEvent::ValueChanged(value.into()))
    }

    /// Set or clear the host-managed visibility
    pub fn set_open(&mut self, open: Option<bool>) -> EventOutcome {
        self.handle_event(AutocompleteEvent::OpenOverrideChanged(open))
    }

    /// Run the deferred scroll restoration, if one is pending
    ///
    /// Call on the tick after delivering a focus event.
    pub fn tick(&mut self) -> bool {
        match self.scroll_restore.take() {
            Some(offset) => {
                tracing::trace!("deferred scroll restore: {:?}", offset);
                self.viewport.scroll_to(offset);
                true
            }
            None => false,
        }
    }

    /// Token of the pending scroll restoration, for hosts with real timers
    pub fn pending_scroll_restore(&self) -> Option<RestoreToken> {
        self.scroll_restore.pending_token()
    }

    /// Fire a scroll restoration by token; stale tokens do nothing
    pub fn fire_scroll_restore(&mut self, token: RestoreToken) -> bool {
        match self.scroll_restore.fire(token) {
            Some(offset) => {
                self.viewport.scroll_to(offset);
                true
            }
            None => false,
        }
    }

    /// Tear down: cancels the pending scroll restoration and hands the
    /// items back
    pub fn unmount(mut self) -> Vec<T> {
        if self.scroll_restore.cancel() {
            tracing::debug!("unmount cancelled pending scroll restore");
        }
        std::mem::take(&mut self.items)
    }

    // =========================================================================
    // Imperative input API
    // =========================================================================

    /// Focus the input
    pub fn focus(&mut self) {
        self.input.focus();
    }

    /// Blur the input
    pub fn blur(&mut self) {
        self.input.blur();
    }

    /// Select all input text
    pub fn select(&mut self) {
        self.input.select();
    }

    /// Set the input selection range
    pub fn set_selection_range(&mut self, start: usize, end: usize) {
        self.input.set_selection_range(start, end);
    }

    /// Whether the input is the viewport's active element
    pub fn is_input_focused(&self) -> bool {
        self.viewport.active_element() == Some(self.input.id())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current interaction state
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Effective menu visibility
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.state.highlighted_index
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.state.query_text
    }

    /// The caller's items, in their original order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn adapter(&self) -> &ItemAdapter<T> {
        &self.adapter
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// Items currently eligible for display
    pub fn filtered_items(&self) -> FilteredItems<'_, T> {
        self.adapter.filter(&self.items, &self.state.query_text)
    }

    /// Last measured menu placement
    pub fn menu_rect(&self) -> Option<MenuRect> {
        self.state.menu_rect
    }

    /// Measure the menu placement now, reporting why it failed
    pub fn measure_menu_rect(&self) -> Result<MenuRect> {
        Ok(try_compute_menu_rect(self.input.as_ref())?)
    }

    /// Retained snapshots (empty unless `debug` is on)
    pub fn debug_snapshots(&self) -> Vec<DebugSnapshot> {
        self.debug
            .as_ref()
            .map(|history| history.snapshots().cloned().collect())
            .unwrap_or_default()
    }

    /// Retained snapshots as pretty JSON, `None` unless `debug` is on
    pub fn debug_json(&self) -> Result<Option<String>> {
        self.debug.as_ref().map(DebugHistory::to_json).transpose()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Autocomplete`]
pub struct AutocompleteBuilder<T> {
    items: Vec<T>,
    value: String,
    display_value: Option<DisplayValueFn<T>>,
    adapter_ops: Vec<Box<dyn FnOnce(ItemAdapter<T>) -> ItemAdapter<T>>>,
    config: AutocompleteConfig,
    callbacks: Callbacks<T>,
}

impl<T> Default for AutocompleteBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AutocompleteBuilder<T> {
    /// Create a builder with default configuration and no items
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            value: String::new(),
            display_value: None,
            adapter_ops: Vec::new(),
            config: AutocompleteConfig::default(),
            callbacks: Callbacks::default(),
        }
    }

    /// Initial items
    pub fn items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Initial text
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Display-value resolver (required)
    pub fn display_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.display_value = Some(Arc::new(f));
        self
    }

    /// Selectability predicate (default: every item)
    pub fn selectable<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
        T: 'static,
    {
        self.adapter_ops.push(Box::new(move |adapter| adapter.selectable(f)));
        self
    }

    /// Query filter (default: no filtering)
    pub fn should_render<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
        T: 'static,
    {
        self.adapter_ops.push(Box::new(move |adapter| adapter.should_render(f)));
        self
    }

    /// Query-aware sort (default: input order)
    pub fn sort<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T, &str) -> Ordering + Send + Sync + 'static,
        T: 'static,
    {
        self.adapter_ops.push(Box::new(move |adapter| adapter.compare(f)));
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: AutocompleteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn auto_highlight(mut self, enabled: bool) -> Self {
        self.config.auto_highlight = enabled;
        self
    }

    pub fn select_on_blur(mut self, enabled: bool) -> Self {
        self.config.select_on_blur = enabled;
        self
    }

    /// Host-managed menu visibility
    pub fn open(mut self, open: Option<bool>) -> Self {
        self.config.open = open;
        self
    }

    /// Retain state snapshots
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    pub fn on_change<F: FnMut(&str) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_select<F: FnMut(&str, &T) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.on_select = Some(Box::new(callback));
        self
    }

    pub fn on_menu_visibility_change<F: FnMut(bool) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.on_menu_visibility_change = Some(Box::new(callback));
        self
    }

    /// Caller focus handler; only genuine focus events reach it
    pub fn on_focus<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.callbacks.on_focus = Some(Box::new(callback));
        self
    }

    /// Caller blur handler; only genuine blur events reach it
    pub fn on_blur<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.callbacks.on_blur = Some(Box::new(callback));
        self
    }

    pub fn on_key_down<F: FnMut(&KeyboardEvent) + 'static>(mut self, callback: F) -> Self {
        self.callbacks.on_key_down = Some(Box::new(callback));
        self
    }

    pub fn on_click<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.callbacks.on_click = Some(Box::new(callback));
        self
    }

    /// Mount the autocomplete on an input
    ///
    /// Fails if no display-value resolver was supplied or the configuration
    /// is invalid.
    pub fn build<I, V>(self, input: I, viewport: V) -> Result<Autocomplete<T>>
    where
        I: InputElement + 'static,
        V: Viewport + 'static,
    {
        self.config.validate()?;
        let display_value = self
            .display_value
            .ok_or(AutocompleteError::MissingDisplayValue)?;
        let adapter = self
            .adapter_ops
            .into_iter()
            .fold(ItemAdapter::from_display_fn(display_value), |adapter, op| {
                op(adapter)
            });

        let debug = self
            .config
            .debug
            .then(|| DebugHistory::new(self.config.debug_history));

        let mut autocomplete = Autocomplete {
            items: self.items,
            adapter,
            state: InteractionState::new(self.value, self.config.open),
            config: self.config,
            input: Box::new(input),
            viewport: Box::new(viewport),
            scroll_restore: ScrollRestoreTimer::new(),
            debug,
            callbacks: self.callbacks,
        };

        if autocomplete.state.is_open() {
            autocomplete.update_menu_rect();
        }
        autocomplete.record_debug();
        tracing::debug!(
            "autocomplete mounted with {} items",
            autocomplete.items.len()
        );
        Ok(autocomplete)
    }
}
