//! Focus/blur arbitration
//!
//! Pressing a menu item moves focus off the input before the item's click
//! arrives. While the pointer is over the menu (`suppress_blur`), a blur is
//! treated as false: the page scroll is recorded, focus is handed straight
//! back to the input, and the menu stays as it is so the click can commit.
//!
//! The refocus that follows is not a real focus either. It restores the
//! recorded scroll immediately and once more on the next tick, because some
//! hosts scroll the input into view only after all focus handlers ran.

use suggest_platform::ScrollOffset;

use crate::event::{Effect, Effects};
use crate::highlight::clamp_highlight;
use crate::machine::{commit, TransitionEnv};
use crate::state::InteractionState;

pub(crate) fn on_blur<T>(
    state: &InteractionState,
    next: &mut InteractionState,
    effects: &mut Effects,
    env: &TransitionEnv<'_, T>,
) {
    if state.suppress_blur {
        tracing::debug!(
            "false blur while over menu, refocusing (scroll {:?})",
            env.scroll_offset
        );
        next.defer_focus_restore = true;
        next.saved_scroll_offset = Some(env.scroll_offset);
        effects.push(Effect::FocusInput);
        return;
    }

    // Index 0 is a valid highlight
    if env.config.select_on_blur {
        let items = env.filtered(&state.query_text);
        if let Some(index) = clamp_highlight(state.highlighted_index, items.len()) {
            effects.extend(commit(&items, index, env.adapter));
        }
    }
    next.close_menu();
    effects.push(Effect::ForwardBlur);
}

pub(crate) fn on_focus(state: &InteractionState, next: &mut InteractionState, effects: &mut Effects) {
    if state.defer_focus_restore {
        next.defer_focus_restore = false;
        if let Some(offset) = next.saved_scroll_offset.take() {
            tracing::trace!("restoring scroll after refocus: {:?}", offset);
            effects.push(Effect::ScrollTo(offset));
            effects.push(Effect::ScheduleScrollRestore(offset));
        }
        return;
    }

    next.is_open_internal = true;
    effects.push(Effect::ForwardFocus);
}

/// Identifies one scheduled restore; stale tokens are ignored
pub type RestoreToken = u64;

/// The deferred second scroll restoration
///
/// At most one restore is pending. Scheduling replaces (cancels) the
/// previous one, and [`cancel`](Self::cancel) is called on unmount so a
/// restore never fires for a widget that is gone.
#[derive(Debug, Default)]
pub struct ScrollRestoreTimer {
    pending: Option<(RestoreToken, ScrollOffset)>,
    generation: RestoreToken,
}

impl ScrollRestoreTimer {
    /// Create an idle timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a restore, cancelling any pending one
    pub fn schedule(&mut self, offset: ScrollOffset) -> RestoreToken {
        if let Some((token, _)) = self.pending {
            tracing::trace!("cancelling stale scroll restore {}", token);
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some((self.generation, offset));
        self.generation
    }

    /// Drop the pending restore; returns whether one was pending
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a restore is waiting for the next tick
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the pending restore
    pub fn pending_token(&self) -> Option<RestoreToken> {
        self.pending.map(|(token, _)| token)
    }

    /// Take the pending restore regardless of token
    pub fn take(&mut self) -> Option<ScrollOffset> {
        self.pending.take().map(|(_, offset)| offset)
    }

    /// Fire the restore identified by `token`
    ///
    /// Returns `None` if that restore was cancelled or superseded.
    pub fn fire(&mut self, token: RestoreToken) -> Option<ScrollOffset> {
        match self.pending {
            Some((pending, offset)) if pending == token => {
                self.pending = None;
                Some(offset)
            }
            _ => None,
        }
    }
}
