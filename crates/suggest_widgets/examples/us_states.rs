//! US States Autocomplete Demo
//!
//! Drives an autocomplete over the 50 US states with a scripted session and
//! prints the rendered input and menu after every step.
//!
//! Features demonstrated:
//! - Filtering by name or abbreviation, sorting prefix matches first
//! - Keyboard navigation and auto-highlight
//! - Clicking a menu item after the input blurs
//! - Configuration loaded from TOML
//!
//! Run with: RUST_LOG=suggest_core=debug cargo run -p suggest_widgets --example us_states

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use anyhow::Result;
use suggest_widgets::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
auto_highlight = true
select_on_blur = false
debug = false
"#;

#[derive(Clone, Debug)]
struct UsState {
    abbr: &'static str,
    name: &'static str,
}

fn us_states() -> Vec<UsState> {
    [
        ("AL", "Alabama"),
        ("AK", "Alaska"),
        ("AZ", "Arizona"),
        ("AR", "Arkansas"),
        ("CA", "California"),
        ("CO", "Colorado"),
        ("CT", "Connecticut"),
        ("DE", "Delaware"),
        ("FL", "Florida"),
        ("GA", "Georgia"),
        ("HI", "Hawaii"),
        ("ID", "Idaho"),
        ("IL", "Illinois"),
        ("IN", "Indiana"),
        ("IA", "Iowa"),
        ("KS", "Kansas"),
        ("KY", "Kentucky"),
        ("LA", "Louisiana"),
        ("ME", "Maine"),
        ("MD", "Maryland"),
        ("MA", "Massachusetts"),
        ("MI", "Michigan"),
        ("MN", "Minnesota"),
        ("MS", "Mississippi"),
        ("MO", "Missouri"),
        ("MT", "Montana"),
        ("NE", "Nebraska"),
        ("NV", "Nevada"),
        ("NH", "New Hampshire"),
        ("NJ", "New Jersey"),
        ("NM", "New Mexico"),
        ("NY", "New York"),
        ("NC", "North Carolina"),
        ("ND", "North Dakota"),
        ("OH", "Ohio"),
        ("OK", "Oklahoma"),
        ("OR", "Oregon"),
        ("PA", "Pennsylvania"),
        ("RI", "Rhode Island"),
        ("SC", "South Carolina"),
        ("SD", "South Dakota"),
        ("TN", "Tennessee"),
        ("TX", "Texas"),
        ("UT", "Utah"),
        ("VT", "Vermont"),
        ("VA", "Virginia"),
        ("WA", "Washington"),
        ("WV", "West Virginia"),
        ("WI", "Wisconsin"),
        ("WY", "Wyoming"),
    ]
    .into_iter()
    .map(|(abbr, name)| UsState { abbr, name })
    .collect()
}

fn matches_state(state: &UsState, query: &str) -> bool {
    let query = query.to_lowercase();
    state.name.to_lowercase().contains(&query) || state.abbr.to_lowercase().contains(&query)
}

fn sort_states(a: &UsState, b: &UsState, query: &str) -> Ordering {
    let query = query.to_lowercase();
    let a_name = a.name.to_lowercase();
    let b_name = b.name.to_lowercase();
    match (a_name.find(&query), b_name.find(&query)) {
        (Some(a_pos), Some(b_pos)) if a_pos != b_pos => a_pos.cmp(&b_pos),
        _ => a_name.cmp(&b_name),
    }
}

// ============================================================================
// Terminal host
// ============================================================================

const INPUT_ID: ElementId = ElementId(1);

#[derive(Default)]
struct Page {
    focused: bool,
    scroll: ScrollOffset,
}

struct TerminalInput(Rc<RefCell<Page>>);

impl InputElement for TerminalInput {
    fn id(&self) -> ElementId {
        INPUT_ID
    }

    fn focus(&mut self) {
        self.0.borrow_mut().focused = true;
    }

    fn blur(&mut self) {
        self.0.borrow_mut().focused = false;
    }

    fn select(&mut self) {
        tracing::info!("input text selected");
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        tracing::info!("caret moved to {}..{}", start, end);
    }

    fn bounding_box(&self) -> suggest_platform::Result<LayoutBox> {
        Ok(LayoutBox::new(16.0, 120.0, 240.0, 28.0))
    }

    fn margins(&self) -> suggest_platform::Result<Margins> {
        Ok(Margins {
            bottom: 4.0,
            ..Default::default()
        })
    }
}

struct TerminalViewport(Rc<RefCell<Page>>);

impl Viewport for TerminalViewport {
    fn scroll_offset(&self) -> ScrollOffset {
        self.0.borrow().scroll
    }

    fn scroll_to(&mut self, offset: ScrollOffset) {
        self.0.borrow_mut().scroll = offset;
    }

    fn active_element(&self) -> Option<ElementId> {
        self.0.borrow().focused.then_some(INPUT_ID)
    }
}

fn renderer() -> Renderer<UsState, String> {
    Renderer::new(
        |props: &InputProps| {
            let caret = if props.expanded { "▾" } else { "▸" };
            format!("[{:<24}] {}", props.value, caret)
        },
        |state: &UsState, props: &ItemProps| {
            let marker = if props.highlighted { ">" } else { " " };
            format!("  {} {} ({})", marker, state.name, state.abbr)
        },
        |items: Vec<RenderedItem<String>>, query: &str, placement: &MenuPlacement| {
            let mut menu = format!(
                "  menu for {:?} at top={:?} left={:?}\n",
                query,
                placement.top(),
                placement.left()
            );
            if items.is_empty() {
                menu.push_str("    (no matches)\n");
            }
            for item in items {
                menu.push_str(&item.node);
                menu.push('\n');
            }
            menu
        },
    )
}

fn show(
    step: &str,
    renderer: &Renderer<UsState, String>,
    autocomplete: &Autocomplete<UsState>,
) -> Result<()> {
    let rendered = renderer.render(autocomplete)?;
    println!("-- {}", step);
    println!("{}", rendered.input);
    if let Some(menu) = rendered.menu {
        print!("{}", menu.node);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let page = Rc::new(RefCell::new(Page::default()));
    let config = AutocompleteConfig::from_toml_str(CONFIG)?;

    let mut autocomplete = Autocomplete::builder()
        .items(us_states())
        .display_value(|state: &UsState| state.name.to_string())
        .should_render(matches_state)
        .sort(sort_states)
        .config(config)
        .on_select(|value, state: &UsState| println!("** selected {} ({})", value, state.abbr))
        .on_menu_visibility_change(|open| tracing::info!("menu visibility: {}", open))
        .build(
            TerminalInput(Rc::clone(&page)),
            TerminalViewport(Rc::clone(&page)),
        )?;
    let renderer = renderer();

    // Keyboard: type, navigate, commit
    page.borrow_mut().focused = true;
    autocomplete.handle_event(InputEvent::Focus.into());
    for text in ["n", "ne", "new"] {
        autocomplete.handle_event(InputEvent::Change(text.to_string()).into());
    }
    show("typed \"new\"", &renderer, &autocomplete)?;

    autocomplete.handle_event(InputEvent::KeyDown(Key::ArrowDown.into()).into());
    autocomplete.handle_event(InputEvent::KeyDown(Key::ArrowDown.into()).into());
    show("arrow down twice", &renderer, &autocomplete)?;

    let outcome = autocomplete.handle_event(InputEvent::KeyDown(Key::Enter.into()).into());
    tracing::info!("enter default prevented: {}", outcome.default_prevented);
    autocomplete.set_value("New Jersey");
    show("after enter", &renderer, &autocomplete)?;

    // Pointer: the blur caused by pressing an item must not close the menu
    autocomplete.handle_event(InputEvent::Change("mi".to_string()).into());
    page.borrow_mut().scroll = ScrollOffset::new(0.0, 180.0);
    let menu = MenuBinding;
    let item = ItemBinding::new(1, true);
    for event in [
        menu.event(PointerEvent::Enter),
        item.event(PointerEvent::Enter),
        Some(InputEvent::Blur.into()),
        Some(InputEvent::Focus.into()),
    ]
    .into_iter()
    .flatten()
    {
        autocomplete.handle_event(event);
    }
    autocomplete.tick();
    show("pressed item 1 of \"mi\"", &renderer, &autocomplete)?;

    if let Some(click) = item.event(PointerEvent::Click) {
        autocomplete.handle_event(click);
    }
    tracing::info!("scroll after refocus: {:?}", page.borrow().scroll);
    show("after click", &renderer, &autocomplete)?;

    autocomplete.unmount();
    Ok(())
}
