// Help bar widget: key hints for the active screen and input mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{Screen, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        hint_text(state),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn hint_text(state: &ViewState) -> &'static str {
    match state.screen {
        Screen::Home if state.search_mode => " Enter:Search | Esc:Cancel | Backspace:Delete",
        Screen::Home => " /:Search | Arrows/hjkl:Move | Enter:Open team | Esc:Clear | q:Quit",
        Screen::Team if state.squad_search_mode => " Enter:Filter squad | Esc:Clear filter",
        Screen::Team => {
            " g:Grouping | m:Mode | +/-:Adjust | Tab/1-9:Position | /:Find player | b:Back | q:Quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_mode() {
        let mut state = ViewState::default();
        assert!(hint_text(&state).contains("/:Search"));
        state.search_mode = true;
        assert!(hint_text(&state).contains("Esc:Cancel"));
        state.screen = Screen::Team;
        assert!(hint_text(&state).contains("g:Grouping"));
        state.squad_search_mode = true;
        assert!(hint_text(&state).contains("Filter squad"));
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
