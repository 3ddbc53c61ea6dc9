//! Render pass
//!
//! [`Renderer`] holds the caller's three render functions and invokes them
//! against the current state of an [`Autocomplete`]:
//!
//! 1. the input, with [`InputProps`]
//! 2. each filtered item, with `(item, ItemProps)`, only while the menu is open
//! 3. the menu container, with `(rendered items, query text, placement)`
//!
//! The node type `N` is whatever the host's element tree uses. The render
//! pass only decides what gets rendered and which bindings go on which node.

use suggest_core::{Autocomplete, Result};

use crate::bindings::{ItemBinding, MenuBinding};
use crate::props::{InputProps, ItemProps};
use crate::style::{ItemStyle, MenuPlacement};

/// Renders the input node
pub type RenderInputFn<N> = Box<dyn Fn(&InputProps) -> N>;
/// Renders one item node
pub type RenderItemFn<T, N> = Box<dyn Fn(&T, &ItemProps) -> N>;
/// Renders the menu container around the rendered items
pub type RenderMenuFn<N> = Box<dyn Fn(Vec<RenderedItem<N>>, &str, &MenuPlacement) -> N>;

/// An item node plus the bindings the host must wire onto it
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<N> {
    pub node: N,
    pub binding: ItemBinding,
}

/// The menu node plus its bindings
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedMenu<N> {
    pub node: N,
    pub binding: MenuBinding,
}

/// Output of one render pass
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered<N> {
    pub input: N,
    /// Present only while the menu is open
    pub menu: Option<RenderedMenu<N>>,
    /// Recent state snapshots as JSON when debugging is on
    pub debug: Option<String>,
}

/// The caller's render functions
pub struct Renderer<T, N> {
    input: RenderInputFn<N>,
    item: RenderItemFn<T, N>,
    menu: RenderMenuFn<N>,
}

impl<T, N> Renderer<T, N> {
    pub fn new<I, It, M>(input: I, item: It, menu: M) -> Self
    where
        I: Fn(&InputProps) -> N + 'static,
        It: Fn(&T, &ItemProps) -> N + 'static,
        M: Fn(Vec<RenderedItem<N>>, &str, &MenuPlacement) -> N + 'static,
    {
        Self {
            input: Box::new(input),
            item: Box::new(item),
            menu: Box::new(menu),
        }
    }

    /// Render the current state
    pub fn render(&self, autocomplete: &Autocomplete<T>) -> Result<Rendered<N>> {
        let input = (self.input)(&InputProps::new(
            autocomplete.value(),
            autocomplete.is_open(),
        ));

        let menu = if autocomplete.is_open() {
            Some(self.render_menu(autocomplete))
        } else {
            None
        };

        Ok(Rendered {
            input,
            menu,
            debug: autocomplete.debug_json()?,
        })
    }

    fn render_menu(&self, autocomplete: &Autocomplete<T>) -> RenderedMenu<N> {
        let adapter = autocomplete.adapter();
        let highlighted = autocomplete.highlighted_index();
        let filtered = autocomplete.filtered_items();

        let items: Vec<RenderedItem<N>> = filtered
            .enumerate()
            .map(|(index, _, item)| {
                let props = ItemProps {
                    highlighted: highlighted == Some(index),
                    style: ItemStyle::default(),
                    binding: ItemBinding::new(index, adapter.is_selectable(item)),
                };
                RenderedItem {
                    node: (self.item)(item, &props),
                    binding: props.binding,
                }
            })
            .collect();

        tracing::trace!("rendering menu with {} items", items.len());
        let placement = MenuPlacement::new(autocomplete.menu_rect());
        RenderedMenu {
            node: (self.menu)(items, autocomplete.value(), &placement),
            binding: MenuBinding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::PointerEvent;
    use suggest_core::AutocompleteEvent;
    use suggest_platform::prelude::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Node {
        Input(String, bool),
        Item(String, bool),
        Menu(Vec<Node>, String, Option<f32>),
    }

    struct FixedInput;

    impl InputElement for FixedInput {
        fn id(&self) -> ElementId {
            ElementId(1)
        }
        fn focus(&mut self) {}
        fn blur(&mut self) {}
        fn select(&mut self) {}
        fn set_selection_range(&mut self, _start: usize, _end: usize) {}
        fn bounding_box(&self) -> suggest_platform::Result<LayoutBox> {
            Ok(LayoutBox::new(0.0, 0.0, 100.0, 20.0))
        }
        fn margins(&self) -> suggest_platform::Result<Margins> {
            Ok(Margins::default())
        }
    }

    #[derive(Default)]
    struct StaticViewport;

    impl Viewport for StaticViewport {
        fn scroll_offset(&self) -> ScrollOffset {
            ScrollOffset::default()
        }
        fn scroll_to(&mut self, _offset: ScrollOffset) {}
        fn active_element(&self) -> Option<ElementId> {
            Some(ElementId(1))
        }
    }

    fn renderer() -> Renderer<&'static str, Node> {
        Renderer::new(
            |props: &InputProps| Node::Input(props.value.clone(), props.expanded),
            |item: &&'static str, props: &ItemProps| Node::Item(item.to_string(), props.highlighted),
            |items: Vec<RenderedItem<Node>>, query: &str, placement: &MenuPlacement| {
                Node::Menu(
                    items.into_iter().map(|i| i.node).collect(),
                    query.to_string(),
                    placement.top(),
                )
            },
        )
    }

    fn autocomplete(debug: bool) -> Autocomplete<&'static str> {
        Autocomplete::builder()
            .items(vec!["Maine", "Maryland", "Ohio"])
            .display_value(|s: &&'static str| s.to_string())
            .should_render(|s: &&'static str, query: &str| {
                s.to_lowercase().starts_with(&query.to_lowercase())
            })
            .selectable(|s: &&'static str| *s != "Maine")
            .debug(debug)
            .build(FixedInput, StaticViewport)
            .expect("valid autocomplete")
    }

    #[test]
    fn test_closed_menu_not_rendered() {
        let rendered = renderer().render(&autocomplete(false)).expect("render");
        assert_eq!(rendered.input, Node::Input(String::new(), false));
        assert_eq!(rendered.menu, None);
        assert_eq!(rendered.debug, None);
    }

    #[test]
    fn test_open_menu_renders_filtered_items() {
        let mut autocomplete = autocomplete(false);
        autocomplete.handle_event(AutocompleteEvent::Focus);
        autocomplete.handle_event(AutocompleteEvent::Change("Ma".into()));
        autocomplete.handle_event(AutocompleteEvent::ItemHover(1));

        let rendered = renderer().render(&autocomplete).expect("render");
        assert_eq!(rendered.input, Node::Input("Ma".into(), true));

        let menu = rendered.menu.expect("menu is open");
        assert_eq!(
            menu.node,
            Node::Menu(
                vec![
                    Node::Item("Maine".into(), false),
                    Node::Item("Maryland".into(), true),
                ],
                "Ma".into(),
                Some(20.0),
            )
        );
        assert_eq!(
            menu.binding.event(PointerEvent::Enter),
            Some(AutocompleteEvent::MenuPointerEnter)
        );
    }

    #[test]
    fn test_unselectable_items_carry_no_bindings() {
        let mut autocomplete = autocomplete(false);
        autocomplete.handle_event(AutocompleteEvent::Focus);

        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let seen_menu = std::rc::Rc::clone(&seen);
        let renderer: Renderer<&'static str, ()> = Renderer::new(
            |_: &InputProps| (),
            |_: &&'static str, _: &ItemProps| (),
            move |items: Vec<RenderedItem<()>>, _: &str, _: &MenuPlacement| {
                seen_menu
                    .borrow_mut()
                    .extend(items.iter().map(|i| i.binding.event(PointerEvent::Click)));
            },
        );
        renderer.render(&autocomplete).expect("render");
        assert_eq!(
            *seen.borrow(),
            vec![
                None,
                Some(AutocompleteEvent::ItemClick(1)),
                Some(AutocompleteEvent::ItemClick(2)),
            ]
        );
    }

    #[test]
    fn test_debug_output() {
        let mut autocomplete = autocomplete(true);
        autocomplete.handle_event(AutocompleteEvent::Focus);
        let rendered = renderer().render(&autocomplete).expect("render");
        let debug = rendered.debug.expect("debug enabled");
        assert!(debug.contains("is_open_internal"));
    }
}
