// Team search box on the home screen.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (text, style) = if state.search_mode {
        (format!("{}_", state.search_text), Style::default().fg(Color::Yellow))
    } else if state.search_text.is_empty() {
        (
            "Press / to search for a team".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (state.search_text.clone(), Style::default().fg(Color::White))
    };

    let border = if state.search_mode { Color::Yellow } else { Color::Gray };
    let paragraph = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Search team"),
    );
    frame.render_widget(paragraph, area);
}
