// Team page header: title with rank badge, and the club's season line(s).

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use pitchside_core::views::team::TeamDetail;

use super::standings::number;
use crate::protocol::TeamSnapshot;
use crate::tui::ViewState;

/// Page title, e.g. "Statistics 24/25 Arsenal 🥈".
pub fn page_title(team: &TeamSnapshot) -> String {
    let badge = match &team.detail {
        Ok(TeamDetail { badge: Some(badge), .. }) => format!(" {badge}"),
        _ => String::new(),
    };
    format!("Statistics {} {}{}", team.season_label, team.team_name, badge)
}

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(team) = state.team.as_deref() else {
        frame.render_widget(Block::default().borders(Borders::ALL).title("Statistics"), area);
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(page_title(team))
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let detail = match &team.detail {
        Ok(detail) => detail,
        Err(e) => {
            frame.render_widget(
                Paragraph::new(e.to_string()).style(Style::default().fg(Color::Yellow)).block(block),
                area,
            );
            return;
        }
    };

    let header = Row::new(["Pos", "Pts", "W", "D", "L", "GF", "GA"])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = detail
        .lines
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(line.position.map_or_else(|| "-".to_string(), |p| p.to_string())),
                Cell::from(number(line.points)),
                Cell::from(number(line.games_won)),
                Cell::from(number(line.games_drawn)),
                Cell::from(number(line.games_lost)),
                Cell::from(number(line.goals_for)),
                Cell::from(number(line.goals_against)),
            ])
        })
        .collect();

    let widths = [Constraint::Length(5); 7];
    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
