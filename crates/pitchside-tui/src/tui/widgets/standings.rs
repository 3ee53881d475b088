// League table on the home screen.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use pitchside_core::views::standings::StandingsEntry;

use crate::tui::ViewState;

const HEADERS: [&str; 11] = ["#", "Team", "Pts", "GP", "W", "L", "D", "GF", "GA", "GD", "Badge"];

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let title = match &state.home {
        Some(home) => format!("Standings {}", home.season_label),
        None => "Standings".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let entries = state.home.as_ref().map(|h| h.standings.as_slice()).unwrap_or(&[]);
    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new("No standings available").style(Style::default().fg(Color::DarkGray)).block(block),
            area,
        );
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = entries.iter().map(standings_row).collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(18),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(12),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

fn standings_row(entry: &StandingsEntry) -> Row<'static> {
    Row::new(vec![
        Cell::from(entry.position.to_string()),
        Cell::from(entry.team_name.clone()),
        Cell::from(number(entry.points)),
        Cell::from(number(entry.games_played)),
        Cell::from(number(entry.games_won)),
        Cell::from(number(entry.games_lost)),
        Cell::from(number(entry.games_drawn)),
        Cell::from(number(entry.goals_for)),
        Cell::from(number(entry.goals_against)),
        Cell::from(signed(entry.goal_difference)),
        Cell::from(badge_label(&entry.badge_url).to_string()),
    ])
}

/// A missing number renders as a dash.
pub fn number(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn signed(value: Option<i64>) -> String {
    match value {
        Some(v) if v > 0 => format!("+{v}"),
        other => number(other),
    }
}

/// Last path segment of a badge URL; terminals cannot show the image.
pub fn badge_label(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}
