//! Dialog rendering for the editor modal.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, HEADER_TEXT, PLACEHOLDER_TEXT, POPUP_BORDER,
};

use super::state::EditorState;

/// Width of the editor dialog.
const DIALOG_WIDTH: u16 = 50;

/// Height of the editor dialog, borders included.
const DIALOG_HEIGHT: u16 = 8;

/// Title shown when the editor was opened without one.
const FALLBACK_TITLE: &str = "Edit Text";

/// Columns used by the field prefix and the trailing cursor.
const FIELD_CHROME: usize = 5;

const CURSOR: &str = "█";

/// Render the editor modal centered in `area`.
pub fn render_editor_dialog(frame: &mut Frame, area: Rect, state: &EditorState) {
    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    frame.render_widget(Clear, area);

    let title = if state.title().is_empty() {
        FALLBACK_TITLE
    } else {
        state.title()
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_width = (inner.width as usize).saturating_sub(FIELD_CHROME);
    let lines = vec![
        Line::from(""),
        field_line(state, field_width),
        Line::from(""),
        button_line(state.is_complete()),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: Add  Esc: Cancel  Ctrl+U: Clear",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(state: &EditorState, width: usize) -> Line<'static> {
    let prefix = Span::styled("  > ", Style::default().fg(ACCENT));
    let cursor = Span::styled(CURSOR, Style::default().fg(HEADER_TEXT));

    match state.placeholder() {
        Some(hint) if state.text.is_empty() => Line::from(vec![
            prefix,
            cursor,
            Span::styled(
                visible_tail(hint, width.saturating_sub(1)),
                Style::default().fg(PLACEHOLDER_TEXT),
            ),
        ]),
        _ => Line::from(vec![
            prefix,
            Span::styled(visible_tail(&state.text, width), Style::default().fg(HEADER_TEXT)),
            cursor,
        ]),
    }
}

/// Render the Add/Cancel buttons. Add is dimmed while it cannot be pressed.
fn button_line(enabled: bool) -> Line<'static> {
    let add_style = if enabled {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DISABLED_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    };

    Line::from(vec![
        Span::raw("          "),
        Span::styled(" Add ", add_style),
        Span::raw("    "),
        Span::styled(" Cancel ", Style::default().fg(HEADER_TEXT)),
    ])
}

/// Keep the end of `text` that fits in `width` terminal columns, so the
/// cursor stays visible. Wide chars count as two columns.
fn visible_tail(text: &str, width: usize) -> String {
    if Span::raw(text).width() <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let mut buf = [0u8; 4];
        let ch_width = Span::raw(&*ch.encode_utf8(&mut buf)).width();
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        tail.push(ch);
    }
    tail.into_iter().rev().collect()
}
