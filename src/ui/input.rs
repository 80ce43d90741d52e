use crate::ui::app::App;
use crate::ui::editor::EditorIntent;
use crate::ui::root::RootIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.is_presented() {
        handle_editor_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('e') | KeyCode::Char('E') => {
            app.dispatch(RootIntent::BeginEditing);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_text();
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.confirm_editor();
        }
        KeyCode::Esc => app.dispatch_editor(EditorIntent::Dismiss),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !is_command_chord(key) => app.type_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
}

/// Ctrl+char or Alt+char. Both together is AltGr on Windows and types text.
fn is_command_chord(key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    ctrl != alt
}
