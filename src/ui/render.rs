use crate::ui::app::App;
use crate::ui::fact::{button_enabled, FactState, FactView};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{button_rect, layout_regions};
use crate::ui::theme::{
    BUTTON_ACTIVE, BUTTON_DISABLED, ERROR_BACKGROUND, FACT_TEXT, HEADER_TEXT, LOADING_TEXT,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

pub const BUTTON_LABEL: &str = "Get me a new one";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    draw_screen(frame, app.state(), app.transport_name());
}

/// Render the whole screen from state alone.
pub fn draw_screen(frame: &mut Frame<'_>, state: &FactState, transport: &str) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(Header::new().widget(state, transport), regions.header);
    frame.render_widget(Clear, regions.body);
    frame.render_widget(body_widget(&FactView::from_state(state)), regions.body);
    frame.render_widget(button_widget(button_enabled(state)), button_rect(area));
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

fn body_widget(view: &FactView) -> Paragraph<'static> {
    let style = match view {
        FactView::Loading => Style::default().fg(LOADING_TEXT),
        FactView::Error => Style::default().fg(HEADER_TEXT).bg(ERROR_BACKGROUND),
        FactView::Fact(_) => Style::default().fg(FACT_TEXT),
    };

    Paragraph::new(view.text().to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::new(2, 2, 1, 1)))
}

fn button_widget(enabled: bool) -> Paragraph<'static> {
    let (border, text) = if enabled {
        (
            Style::default().fg(BUTTON_ACTIVE),
            Style::default()
                .fg(BUTTON_ACTIVE)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(BUTTON_DISABLED),
            Style::default()
                .fg(BUTTON_DISABLED)
                .add_modifier(Modifier::DIM),
        )
    };

    Paragraph::new(BUTTON_LABEL)
        .style(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::{Fact, FetchError, GENERIC_ERROR_MESSAGE};
    use crate::ui::fact::LOADING_MESSAGE;
    use crate::ui::header::TITLE;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn render(state: &FactState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw_screen(frame, state, "mock"))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn visible_count(text: &str, fact: &str) -> usize {
        [LOADING_MESSAGE, GENERIC_ERROR_MESSAGE, fact]
            .iter()
            .filter(|needle| text.contains(**needle))
            .count()
    }

    fn button_style(buffer: &Buffer) -> Style {
        let button = button_rect(buffer.area);
        // First label cell: inside the border, after centering
        let label_x = button.x + 2;
        buffer[(label_x, button.y + 1)].style()
    }

    #[test]
    fn loading_shows_only_loading_text() {
        let buffer = render(&FactState::default());
        let text = screen_text(&buffer);
        assert!(text.contains(TITLE));
        assert!(text.contains(LOADING_MESSAGE));
        assert!(text.contains(BUTTON_LABEL));
        assert_eq!(visible_count(&text, "Cats sleep"), 1);
        assert_eq!(button_style(&buffer).fg, Some(BUTTON_DISABLED));
    }

    #[test]
    fn success_shows_fact_and_enabled_button() {
        let fact = "Cats sleep 70% of their lives.";
        let buffer = render(&FactState::Success {
            fact: Fact::new(fact),
        });
        let text = screen_text(&buffer);
        assert!(text.contains(fact));
        assert_eq!(visible_count(&text, fact), 1);
        assert_eq!(button_style(&buffer).fg, Some(BUTTON_ACTIVE));
    }

    #[test]
    fn failure_shows_generic_error_without_previous_fact() {
        let previous = "Cats have 32 muscles in each ear.";
        let buffer = render(&FactState::Failure {
            error: FetchError::Status { code: 500 },
            previous: Some(Fact::new(previous)),
        });
        let text = screen_text(&buffer);
        assert!(text.contains(GENERIC_ERROR_MESSAGE));
        assert!(!text.contains(previous));
        assert!(!text.contains("500"));
        assert_eq!(visible_count(&text, previous), 1);
        assert_eq!(button_style(&buffer).fg, Some(BUTTON_ACTIVE));
    }
}
