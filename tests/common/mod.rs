//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use textsheet::ui::app::App;
use textsheet::ui::editor::EditorState;
use textsheet::ui::input::handle_key;
use textsheet::ui::render::draw;
use textsheet::ui::root::RootState;

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Feed each char of `text` as a key press.
pub fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press_key(KeyCode::Char(ch)));
    }
}

/// Root state with an open editor that requires text.
pub fn required_editor(display: &str, text: &str) -> RootState {
    RootState {
        display_text: display.into(),
        editor: Some(EditorState::new("Name", Some("type a name".into()), true, text)),
    }
}

/// Draw `app` into an in-memory terminal and return the buffer.
pub fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn screen_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}
