// Squad panel: one tab per position section and the roster of the
// selected tab.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs};
use ratatui::Frame;

use pitchside_core::views::squad::SquadPlayer;

use crate::tui::ViewState;

pub fn render_tabs(frame: &mut Frame, area: Rect, state: &ViewState) {
    let sections = state.squad_sections();
    let titles: Vec<Line> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("{}:{} ({})", i + 1, s.label, s.players.len())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.squad_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Positions"));
    frame.render_widget(tabs, area);
}

fn title(state: &ViewState) -> String {
    let text = state.squad_search_text.trim();
    if state.squad_search_mode {
        format!("Squad - find player: {}_", state.squad_search_text)
    } else if text.is_empty() {
        "Squad".to_string()
    } else {
        format!("Squad - \"{text}\"")
    }
}

pub fn render_table(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title(title(state));

    if let Some(Err(e)) = state.team.as_deref().map(|t| &t.squad) {
        frame.render_widget(
            Paragraph::new(e.to_string()).style(Style::default().fg(Color::Cyan)).block(block),
            area,
        );
        return;
    }
    let Some(section) = state.squad_sections().get(state.squad_tab) else {
        frame.render_widget(block, area);
        return;
    };

    let header = Row::new(["Player", "Nationality", "Age", "Apps", "Goals", "Assists"])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = section.players.iter().map(player_row).collect();
    let widths = [
        Constraint::Min(18),
        Constraint::Length(14),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(8),
    ];
    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Age column text; a birth date that could not be read shows as "unknown".
fn age_cell(age: Option<i32>) -> String {
    age.map_or_else(|| "unknown".to_string(), |a| a.to_string())
}

fn player_row(player: &SquadPlayer) -> Row<'static> {
    Row::new(vec![
        Cell::from(player.name.clone()),
        Cell::from(player.nationality.clone().unwrap_or_else(|| "-".to_string())),
        Cell::from(age_cell(player.age)),
        Cell::from(player.appearances.to_string()),
        Cell::from(optional(player.goals)),
        Cell::from(optional(player.assists)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::UiUpdate;
    use crate::tui::apply_ui_update;
    use crate::tui::test_support::team;
    use pitchside_core::views::ViewError;

    fn screen_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn title_reflects_search() {
        let mut state = ViewState::default();
        assert_eq!(title(&state), "Squad");
        state.squad_search_text = "mes".into();
        assert_eq!(title(&state), "Squad - \"mes\"");
        state.squad_search_mode = true;
        assert_eq!(title(&state), "Squad - find player: mes_");
    }

    #[test]
    fn selected_tab_drives_table() {
        let backend = ratatui::backend::TestBackend::new(80, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Liverpool"))));

        terminal.draw(|f| render_table(f, f.area(), &state)).unwrap();
        assert!(screen_text(&terminal).contains("Alisson Becker"));

        state.squad_tab = 1;
        terminal.draw(|f| render_table(f, f.area(), &state)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Virgil Dijk"));
        assert!(!text.contains("Alisson Becker"));
    }

    #[test]
    fn missing_age_reads_unknown() {
        assert_eq!(age_cell(Some(31)), "31");
        assert_eq!(age_cell(None), "unknown");

        let mut snapshot = team("Liverpool");
        if let Ok(sections) = snapshot.squad.as_mut() {
            sections[0].players[0].age = None;
        }
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(snapshot)));
        let backend = ratatui::backend::TestBackend::new(80, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| render_table(f, f.area(), &state)).unwrap();
        assert!(screen_text(&terminal).contains("unknown"));
    }

    #[test]
    fn render_tabs_and_advisory() {
        let backend = ratatui::backend::TestBackend::new(80, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        terminal.draw(|f| render_tabs(f, f.area(), &state)).unwrap();
        terminal.draw(|f| render_table(f, f.area(), &state)).unwrap();

        let mut snapshot = team("Liverpool");
        snapshot.squad = Err(ViewError::NoSearchMatch("zz".into()));
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(snapshot)));
        terminal.draw(|f| render_tabs(f, f.area(), &state)).unwrap();
        terminal.draw(|f| render_table(f, f.area(), &state)).unwrap();
        assert!(screen_text(&terminal).contains("no player matches"));
    }
}
