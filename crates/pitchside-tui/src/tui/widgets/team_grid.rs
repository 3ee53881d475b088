// Team picker grid: one cell per selectable team, `team_columns` wide,
// narrowed by the search text as it is typed.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::tui::ViewState;

/// Grid rows needed for `len` teams in `cols` columns.
pub fn row_count(len: usize, cols: usize) -> usize {
    len.div_ceil(cols.max(1))
}

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let teams = state.visible_teams();
    let cols = state.team_columns();
    let title = if state.search_text.trim().is_empty() {
        format!("Teams ({})", teams.len())
    } else {
        format!("Teams matching \"{}\" ({})", state.search_text.trim(), teams.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if teams.is_empty() {
        let text = if state.home.is_some() {
            "No team matches the search"
        } else {
            "Loading teams..."
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)).block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = teams
        .chunks(cols)
        .enumerate()
        .map(|(r, chunk)| {
            Row::new(chunk.iter().enumerate().map(|(c, name)| {
                let style = if r * cols + c == state.grid_cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Cell::from(format!(" {name} ")).style(style)
            }))
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, cols as u32); cols];
    let table = Table::new(rows, widths).column_spacing(1).block(block);
    frame.render_widget(table, area);
}
