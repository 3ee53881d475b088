// Nationality panel: bar chart of player counts and the matching table.

use ratatui::layout::{Constraint, Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use pitchside_core::views::nationality::{GroupingMode, NationalityCount, NationalityOptions, OTHER_LABEL};

use crate::tui::ViewState;

/// Short description of the active grouping policy.
pub fn grouping_label(options: &NationalityOptions) -> String {
    if !options.group_small {
        return "all".to_string();
    }
    match options.mode {
        GroupingMode::TopN => format!("top {}", options.top_n),
        GroupingMode::Threshold => format!(">= {}%", options.min_pct),
    }
}

fn block(state: &ViewState, what: &str) -> Block<'static> {
    let label = state
        .team
        .as_deref()
        .map(|t| format!("{what} ({})", grouping_label(&t.nationality_options)))
        .unwrap_or_else(|| what.to_string());
    Block::default().borders(Borders::ALL).title(label)
}

/// Rows to draw, or the advisory text to show instead.
fn counts(state: &ViewState) -> Result<&[NationalityCount], String> {
    match state.team.as_deref().map(|t| &t.nationality) {
        Some(Ok(rows)) => Ok(rows),
        Some(Err(e)) => Err(e.to_string()),
        None => Err(String::new()),
    }
}

fn bar_colour(label: &str) -> Color {
    if label == OTHER_LABEL {
        Color::DarkGray
    } else {
        Color::Green
    }
}

pub fn render_chart(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = block(state, "Nationalities");
    let rows = match counts(state) {
        Ok(rows) => rows,
        Err(msg) => {
            frame.render_widget(Paragraph::new(msg).style(Style::default().fg(Color::Cyan)).block(block), area);
            return;
        }
    };

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            Bar::default()
                .value(row.player_count as u64)
                .label(Line::from(row.nationality.clone()))
                .text_value(row.player_count.to_string())
                .style(Style::default().fg(bar_colour(&row.nationality)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0);
    frame.render_widget(chart, area);
}

pub fn render_table(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = block(state, "Breakdown");
    let rows = match counts(state) {
        Ok(rows) => rows,
        Err(msg) => {
            frame.render_widget(Paragraph::new(msg).style(Style::default().fg(Color::Cyan)).block(block), area);
            return;
        }
    };

    let header = Row::new(["Nationality", "Players", "%"])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.nationality.clone()),
                Cell::from(row.player_count.to_string()),
                Cell::from(format!("{:.1}", row.percentage)),
            ])
        })
        .collect();

    let widths = [Constraint::Min(14), Constraint::Length(8), Constraint::Length(6)];
    frame.render_widget(Table::new(body, widths).header(header).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::UiUpdate;
    use crate::tui::apply_ui_update;
    use crate::tui::test_support::team;
    use pitchside_core::views::ViewError;

    #[test]
    fn grouping_labels() {
        let mut options = NationalityOptions::default();
        assert_eq!(grouping_label(&options), "top 8");
        options.mode = GroupingMode::Threshold;
        assert_eq!(grouping_label(&options), ">= 5%");
        options.group_small = false;
        assert_eq!(grouping_label(&options), "all");
    }

    #[test]
    fn other_bar_is_dimmed() {
        assert_eq!(bar_colour(OTHER_LABEL), Color::DarkGray);
        assert_eq!(bar_colour("England"), Color::Green);
    }

    #[test]
    fn render_with_rows_and_with_advisory() {
        let backend = ratatui::backend::TestBackend::new(60, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        terminal
            .draw(|f| {
                render_chart(f, f.area(), &state);
                render_table(f, f.area(), &state);
            })
            .unwrap();

        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Liverpool"))));
        terminal.draw(|f| render_chart(f, f.area(), &state)).unwrap();
        terminal.draw(|f| render_table(f, f.area(), &state)).unwrap();

        let mut empty = team("Leeds");
        empty.nationality = Err(ViewError::NoPlayers("Leeds".into()));
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(empty)));
        terminal.draw(|f| render_table(f, f.area(), &state)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("no players found for Leeds"));
    }
}
