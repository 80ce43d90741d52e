use crate::ui::app::App;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const EMPTY_TEXT: &str = "(empty)";
const EDIT_BUTTON: &str = " Edit text ";

/// Height of the root panel: text, gap, button, plus borders.
const PANEL_HEIGHT: u16 = 7;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let editing = app.is_presented();

    frame.render_widget(Header::new().widget(editing), header);
    frame.render_widget(Clear, body);
    render_root_panel(frame, body, app);
    frame.render_widget(Footer::new().widget(footer, editing), footer);

    if let Some(editor) = app.editor() {
        render_editor_dialog(frame, body, editor);
    }
}

fn render_root_panel(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let text = &app.root().display_text;
    let text_span = if text.is_empty() {
        Span::styled(EMPTY_TEXT, Style::default().fg(PLACEHOLDER_TEXT))
    } else {
        Span::styled(text.clone(), Style::default().fg(HEADER_TEXT))
    };

    let button_style = if app.is_presented() {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(""),
        Line::from(text_span),
        Line::from(""),
        Line::from(Span::styled(EDIT_BUTTON, button_style)),
    ];

    let width = body.width.saturating_sub(4).max(1);
    let area = centered_rect_by_size(body, width, PANEL_HEIGHT);
    let panel = Block::default()
        .title(Span::styled(" Text ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(panel),
        area,
    );
}
