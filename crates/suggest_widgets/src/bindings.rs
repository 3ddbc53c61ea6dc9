//! Which host events attach to which rendered node
//!
//! The render pass never installs handlers itself. Instead each rendered
//! node carries a binding that translates the host's raw events on that node
//! into [`AutocompleteEvent`]s for [`Autocomplete::handle_event`].
//!
//! [`Autocomplete::handle_event`]: suggest_core::Autocomplete::handle_event

use suggest_core::AutocompleteEvent;
use suggest_platform::KeyboardEvent;

/// Raw events a host delivers on the input node
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyboardEvent),
    /// The text changed (new full value)
    Change(String),
    Focus,
    Blur,
    Click,
}

impl From<InputEvent> for AutocompleteEvent {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::KeyDown(key) => AutocompleteEvent::KeyDown(key),
            InputEvent::Change(text) => AutocompleteEvent::Change(text),
            InputEvent::Focus => AutocompleteEvent::Focus,
            InputEvent::Blur => AutocompleteEvent::Blur,
            InputEvent::Click => AutocompleteEvent::InputClick,
        }
    }
}

/// Raw pointer events a host delivers on menu and item nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
    TouchStart,
}

/// Bindings for one rendered item
///
/// Unselectable items get no bindings at all: hovering or clicking them
/// does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemBinding {
    /// Index into the filtered sequence
    pub index: usize,
    pub selectable: bool,
}

impl ItemBinding {
    pub fn new(index: usize, selectable: bool) -> Self {
        Self { index, selectable }
    }

    /// Whether the host needs to listen to `event` on this item at all
    pub fn listens_to(&self, event: PointerEvent) -> bool {
        self.selectable && matches!(event, PointerEvent::Enter | PointerEvent::Click)
    }

    /// Translate a pointer event on this item
    pub fn event(&self, event: PointerEvent) -> Option<AutocompleteEvent> {
        if !self.selectable {
            return None;
        }
        match event {
            PointerEvent::Enter => Some(AutocompleteEvent::ItemHover(self.index)),
            PointerEvent::Click => Some(AutocompleteEvent::ItemClick(self.index)),
            PointerEvent::Leave | PointerEvent::TouchStart => None,
        }
    }
}

/// Bindings for the menu container
///
/// Entering or touching the menu arms blur suppression so the click that
/// follows can land; leaving disarms it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuBinding;

impl MenuBinding {
    pub fn listens_to(&self, event: PointerEvent) -> bool {
        !matches!(event, PointerEvent::Click)
    }

    pub fn event(&self, event: PointerEvent) -> Option<AutocompleteEvent> {
        match event {
            PointerEvent::Enter => Some(AutocompleteEvent::MenuPointerEnter),
            PointerEvent::TouchStart => Some(AutocompleteEvent::MenuTouchStart),
            PointerEvent::Leave => Some(AutocompleteEvent::MenuPointerLeave),
            PointerEvent::Click => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suggest_platform::Key;

    #[test]
    fn test_input_events() {
        assert_eq!(
            AutocompleteEvent::from(InputEvent::Click),
            AutocompleteEvent::InputClick
        );
        assert_eq!(
            AutocompleteEvent::from(InputEvent::KeyDown(Key::Escape.into())),
            AutocompleteEvent::KeyDown(KeyboardEvent::new(Key::Escape))
        );
    }

    #[test]
    fn test_selectable_item() {
        let binding = ItemBinding::new(3, true);
        assert_eq!(
            binding.event(PointerEvent::Enter),
            Some(AutocompleteEvent::ItemHover(3))
        );
        assert_eq!(
            binding.event(PointerEvent::Click),
            Some(AutocompleteEvent::ItemClick(3))
        );
        assert!(binding.listens_to(PointerEvent::Click));
        assert!(!binding.listens_to(PointerEvent::Leave));
    }

    #[test]
    fn test_unselectable_item_has_no_bindings() {
        let binding = ItemBinding::new(2, false);
        assert_eq!(binding.event(PointerEvent::Enter), None);
        assert_eq!(binding.event(PointerEvent::Click), None);
        assert!(!binding.listens_to(PointerEvent::Click));
    }

    #[test]
    fn test_menu_arms_blur_suppression() {
        let menu = MenuBinding;
        assert_eq!(
            menu.event(PointerEvent::TouchStart),
            Some(AutocompleteEvent::MenuTouchStart)
        );
        assert_eq!(
            menu.event(PointerEvent::Leave),
            Some(AutocompleteEvent::MenuPointerLeave)
        );
        assert_eq!(menu.event(PointerEvent::Click), None);
    }
}
