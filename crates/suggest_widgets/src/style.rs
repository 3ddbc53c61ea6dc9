//! Style suggestions handed to caller render functions
//!
//! These are hints. A renderer may ignore them entirely; the engine never
//! reads them back.

use serde::{Deserialize, Serialize};
use suggest_core::MenuRect;

/// Pointer cursor hint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    /// Arrow cursor; menu items are not text
    #[default]
    Default,
    Pointer,
}

/// Suggested style for one rendered item
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    pub cursor: Cursor,
}

/// Suggested menu container style
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuStyle {
    /// Corner radius in pixels
    pub radius: f32,
    /// Vertical and horizontal padding in pixels
    pub padding: (f32, f32),
    /// Background as RGBA in 0.0..=1.0
    pub background: [f32; 4],
    /// Font size relative to the input's
    pub font_scale: f32,
    /// Maximum height as a fraction of the viewport
    pub max_height_fraction: f32,
    /// Position relative to the viewport rather than the page
    pub fixed: bool,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            padding: (2.0, 0.0),
            background: [1.0, 1.0, 1.0, 0.9],
            font_scale: 0.9,
            max_height_fraction: 0.5,
            fixed: true,
        }
    }
}

/// Where the menu goes and how it should look
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuPlacement {
    /// `None` until the input has been measured; renderers fall back to
    /// their default position
    pub rect: Option<MenuRect>,
    pub style: MenuStyle,
}

impl MenuPlacement {
    pub fn new(rect: Option<MenuRect>) -> Self {
        Self {
            rect,
            style: MenuStyle::default(),
        }
    }

    pub fn top(&self) -> Option<f32> {
        self.rect.map(|r| r.top)
    }

    pub fn left(&self) -> Option<f32> {
        self.rect.map(|r| r.left)
    }

    pub fn min_width(&self) -> Option<f32> {
        self.rect.map(|r| r.min_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_placement() {
        let placement = MenuPlacement::new(None);
        assert_eq!(placement.top(), None);
        assert_eq!(placement.style.radius, 3.0);
    }

    #[test]
    fn test_measured_placement() {
        let placement = MenuPlacement::new(Some(MenuRect {
            top: 66.0,
            left: 11.0,
            min_width: 182.0,
        }));
        assert_eq!(placement.top(), Some(66.0));
        assert_eq!(placement.left(), Some(11.0));
        assert_eq!(placement.min_width(), Some(182.0));
    }
}
