//! Props passed to caller render functions

use crate::bindings::ItemBinding;
use crate::style::ItemStyle;

/// Attributes the rendered input must carry
///
/// Hosts attach these verbatim to whatever input node the render function
/// returns, together with the [`InputEvent`](crate::InputEvent) handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputProps {
    /// Controlled text
    pub value: String,
    /// Effective menu visibility
    pub expanded: bool,
}

impl InputProps {
    pub const ROLE: &'static str = "combobox";
    pub const ARIA_AUTOCOMPLETE: &'static str = "list";
    /// Native browser suggestions would fight with the menu
    pub const AUTOCOMPLETE: &'static str = "off";

    pub fn new(value: impl Into<String>, expanded: bool) -> Self {
        Self {
            value: value.into(),
            expanded,
        }
    }

    /// All attributes as `(name, value)` pairs
    pub fn attributes(&self) -> [(&'static str, String); 5] {
        [
            ("role", Self::ROLE.to_string()),
            ("aria-autocomplete", Self::ARIA_AUTOCOMPLETE.to_string()),
            ("aria-expanded", self.expanded.to_string()),
            ("autocomplete", Self::AUTOCOMPLETE.to_string()),
            ("value", self.value.clone()),
        ]
    }

    /// Look up a single attribute
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value)
    }
}

/// Per-item props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemProps {
    pub highlighted: bool,
    pub style: ItemStyle,
    pub binding: ItemBinding,
}

impl ItemProps {
    pub fn index(&self) -> usize {
        self.binding.index
    }

    pub fn selectable(&self) -> bool {
        self.binding.selectable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_attributes() {
        let props = InputProps::new("Ma", true);
        assert_eq!(props.attribute("role").as_deref(), Some("combobox"));
        assert_eq!(props.attribute("aria-autocomplete").as_deref(), Some("list"));
        assert_eq!(props.attribute("aria-expanded").as_deref(), Some("true"));
        assert_eq!(props.attribute("autocomplete").as_deref(), Some("off"));
        assert_eq!(props.attribute("value").as_deref(), Some("Ma"));
        assert_eq!(props.attribute("placeholder"), None);
    }

    #[test]
    fn test_collapsed_input() {
        let props = InputProps::new("", false);
        assert_eq!(props.attribute("aria-expanded").as_deref(), Some("false"));
    }
}
