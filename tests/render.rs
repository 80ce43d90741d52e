//! Rendering against ratatui's `TestBackend`.

mod common;

use common::*;
use ratatui::buffer::Buffer;
use ratatui::style::Modifier;
use textsheet::ui::app::App;
use textsheet::ui::root::RootIntent;

/// Find the cell holding the `A` of the " Add " button.
fn add_button_modifier(buffer: &Buffer) -> Option<Modifier> {
    let width = buffer.area.width as usize;
    buffer.content().chunks(width).find_map(|row| {
        row.windows(3)
            .find(|w| w[0].symbol() == "A" && w[1].symbol() == "d" && w[2].symbol() == "d")
            .map(|w| w[0].modifier)
    })
}

#[test]
fn root_screen_shows_text_and_button() {
    let app = App::new("hello");
    let screen = screen_text(&render(&app, 80, 24));

    assert!(screen.contains("hello"));
    assert!(screen.contains("Edit text"));
    assert!(screen.contains("Viewing"));
    assert!(!screen.contains("Cancel"));
}

#[test]
fn empty_text_shows_marker() {
    let app = App::new("");
    let screen = screen_text(&render(&app, 80, 24));
    assert!(screen.contains("(empty)"));
}

#[test]
fn modal_is_drawn_only_while_presented() {
    let mut app = App::new("hello");
    app.dispatch(RootIntent::BeginEditing);

    let screen = screen_text(&render(&app, 80, 24));
    assert!(screen.contains("Edit Text"));
    assert!(screen.contains("Add"));
    assert!(screen.contains("Cancel"));
    assert!(screen.contains("> hello"));
    assert!(screen.contains("Editing"));

    app.confirm_editor();
    let screen = screen_text(&render(&app, 80, 24));
    assert!(!screen.contains("Cancel"));
}

#[test]
fn placeholder_and_title_come_from_editor_state() {
    let app = App::from_state(required_editor("", ""));
    let screen = screen_text(&render(&app, 80, 24));
    assert!(screen.contains(" Name "));
    assert!(screen.contains("type a name"));
}

#[test]
fn add_button_is_disabled_while_incomplete() {
    let app = App::from_state(required_editor("", ""));
    let modifier = add_button_modifier(&render(&app, 80, 24)).expect("Add button drawn");
    assert!(modifier.contains(Modifier::CROSSED_OUT));

    let app = App::from_state(required_editor("", "Ada"));
    let modifier = add_button_modifier(&render(&app, 80, 24)).expect("Add button drawn");
    assert!(!modifier.contains(Modifier::CROSSED_OUT));
    assert!(modifier.contains(Modifier::BOLD));
}

#[test]
fn cursor_stays_visible_with_wide_text() {
    let mut app = App::new("世".repeat(30));
    app.dispatch(RootIntent::BeginEditing);
    let screen = screen_text(&render(&app, 80, 24));
    assert!(screen.contains("█"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::new("hello");
    app.dispatch(RootIntent::BeginEditing);
    let _ = render(&app, 10, 3);
    let _ = render(&app, 1, 1);
}
