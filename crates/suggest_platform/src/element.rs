//! Input element capability
//!
//! The imperative surface of the text input: focus management, text
//! selection and layout measurement. Implementations delegate to whatever
//! the host uses for an input (DOM node, native text field, TUI line).

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Opaque identity of a host element, used for active-element comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Border box of an element in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutBox {
    /// Create a new layout box
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bottom edge (`top + height`)
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Right edge (`left + width`)
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Computed margins of an element
///
/// Unparseable or missing margins are reported as zero by hosts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// The text input the suggestion menu is attached to
pub trait InputElement {
    /// Identity used to check whether this input is the active element
    fn id(&self) -> ElementId;

    /// Move keyboard focus to the input
    fn focus(&mut self);

    /// Remove keyboard focus from the input
    fn blur(&mut self);

    /// Select the entire text content
    fn select(&mut self);

    /// Set the text selection (a collapsed range places the caret)
    fn set_selection_range(&mut self, start: usize, end: usize);

    /// Border box in viewport coordinates
    ///
    /// Fails with [`PlatformError::Detached`](crate::PlatformError::Detached)
    /// when the element is not mounted.
    fn bounding_box(&self) -> Result<LayoutBox>;

    /// Computed margins
    fn margins(&self) -> Result<Margins>;
}

impl<E: InputElement + ?Sized> InputElement for Box<E> {
    fn id(&self) -> ElementId {
        (**self).id()
    }

    fn focus(&mut self) {
        (**self).focus()
    }

    fn blur(&mut self) {
        (**self).blur()
    }

    fn select(&mut self) {
        (**self).select()
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        (**self).set_selection_range(start, end)
    }

    fn bounding_box(&self) -> Result<LayoutBox> {
        (**self).bounding_box()
    }

    fn margins(&self) -> Result<Margins> {
        (**self).margins()
    }
}
