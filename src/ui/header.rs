use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_EDITING, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, editing: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (mode, mode_style) = if editing {
            ("Editing", Style::default().fg(STATUS_EDITING))
        } else {
            ("Viewing", Style::default().fg(STATUS_OK))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", mode_style),
            Span::styled("  ", text_style),
            Span::styled("textsheet", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(mode, mode_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
