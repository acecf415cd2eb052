use crate::ui::fact::FactState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Your daily cat fact";

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

    pub fn widget(&self, state: &FactState, transport: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = match state {
            FactState::Loading { .. } => STATUS_PENDING,
            FactState::Success { .. } => STATUS_OK,
            FactState::Failure { .. } => STATUS_ERROR,
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled(TITLE, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(transport.to_string(), text_style.add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
