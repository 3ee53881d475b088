// Status bar widget: screen indicator plus the current advisory notice.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::Severity;
use crate::tui::{Screen, ViewState};

/// Render the status bar into the given area.
///
/// Layout: [app name] [screen] | [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            " Pitchside ",
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(screen_label(state), Style::default().fg(Color::White)),
    ];

    if let Some(notice) = &state.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        let (marker, style) = notice_style(notice.severity);
        spans.push(Span::styled(format!("{} {}", marker, notice.message), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn screen_label(state: &ViewState) -> String {
    match (state.screen, state.team.as_deref()) {
        (Screen::Team, Some(team)) => format!("Team: {}", team.team_name),
        _ => "Home".to_string(),
    }
}

/// Marker and colour for a notice severity.
pub fn notice_style(severity: Severity) -> (&'static str, Style) {
    match severity {
        Severity::Warning => ("!", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Severity::Info => ("i", Style::default().fg(Color::Cyan)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Notice, UiUpdate};
    use crate::tui::apply_ui_update;
    use crate::tui::test_support::team;

    #[test]
    fn notice_colours() {
        assert_eq!(notice_style(Severity::Warning).1.fg, Some(Color::Yellow));
        assert_eq!(notice_style(Severity::Info).1.fg, Some(Color::Cyan));
    }

    #[test]
    fn label_names_the_open_team() {
        let mut state = ViewState::default();
        assert_eq!(screen_label(&state), "Home");
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Fulham"))));
        assert_eq!(screen_label(&state), "Team: Fulham");
    }

    #[test]
    fn render_shows_notice_text() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.notice = Some(Notice::warning("data unavailable"));
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let line: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(line.contains("data unavailable"));
    }
}
