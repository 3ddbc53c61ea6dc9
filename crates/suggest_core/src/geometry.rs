//! Menu geometry
//!
//! Anchors the menu directly under the input, including its margins.
//! Only recomputed when the menu opens; tracking resize/scroll while open
//! is left to the host.

use serde::{Deserialize, Serialize};
use suggest_platform::{InputElement, Margins, Result};

/// Where the menu should be placed, in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuRect {
    pub top: f32,
    pub left: f32,
    pub min_width: f32,
}

/// Measure the input and derive the menu rectangle
///
/// Fails when the input cannot be measured. Missing margins count as zero.
pub fn try_compute_menu_rect<E: InputElement + ?Sized>(input: &E) -> Result<MenuRect> {
    let bounds = input.bounding_box()?;
    let margins = input.margins().unwrap_or_else(|err| {
        tracing::trace!("menu geometry: margins unavailable ({}), using zero", err);
        Margins::default()
    });

    Ok(MenuRect {
        top: bounds.bottom() + margins.bottom,
        left: bounds.left + margins.left,
        min_width: bounds.width + margins.left + margins.right,
    })
}

/// Like [`try_compute_menu_rect`], but a detached input yields `None`
pub fn compute_menu_rect<E: InputElement + ?Sized>(input: &E) -> Option<MenuRect> {
    match try_compute_menu_rect(input) {
        Ok(rect) => Some(rect),
        Err(err) => {
            tracing::debug!("menu geometry skipped: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suggest_platform::{ElementId, LayoutBox, PlatformError};

    struct FixedInput {
        bounds: Option<LayoutBox>,
        margins: Option<Margins>,
    }

    impl InputElement for FixedInput {
        fn id(&self) -> ElementId {
            ElementId(1)
        }
        fn focus(&mut self) {}
        fn blur(&mut self) {}
        fn select(&mut self) {}
        fn set_selection_range(&mut self, _start: usize, _end: usize) {}
        fn bounding_box(&self) -> Result<LayoutBox> {
            self.bounds.ok_or(PlatformError::Detached)
        }
        fn margins(&self) -> Result<Margins> {
            self.margins
                .ok_or_else(|| PlatformError::MeasurementUnavailable("no style".into()))
        }
    }

    #[test]
    fn test_rect_includes_margins() {
        let input = FixedInput {
            bounds: Some(LayoutBox::new(10.0, 20.0, 200.0, 30.0)),
            margins: Some(Margins {
                top: 1.0,
                right: 4.0,
                bottom: 2.0,
                left: 3.0,
            }),
        };
        let rect = compute_menu_rect(&input).expect("measurable");
        assert_eq!(rect.top, 52.0);
        assert_eq!(rect.left, 13.0);
        assert_eq!(rect.min_width, 207.0);
    }

    #[test]
    fn test_missing_margins_are_zero() {
        let input = FixedInput {
            bounds: Some(LayoutBox::new(0.0, 0.0, 120.0, 24.0)),
            margins: None,
        };
        assert_eq!(
            compute_menu_rect(&input),
            Some(MenuRect {
                top: 24.0,
                left: 0.0,
                min_width: 120.0,
            })
        );
    }

    #[test]
    fn test_detached_input_is_skipped() {
        let input = FixedInput {
            bounds: None,
            margins: None,
        };
        assert_eq!(compute_menu_rect(&input), None);
        assert_eq!(try_compute_menu_rect(&input), Err(PlatformError::Detached));
    }
}
