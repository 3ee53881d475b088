// Screen layouts for the home and team screens.
//
// Home:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Search (3 rows)                                   |
// +--------------------------------------------------+
// | Team grid (rows + borders, at most 12)            |
// +--------------------------------------------------+
// | Standings (fill)                                  |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// Team:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Club stats (6 rows)                               |
// +-------------------------+------------------------+
// | Nationality (45%)        | Squad (55%)            |
// | +- chart (50%) --------+ | +- tabs (3) ----------+|
// | +- table (50%) --------+ | +- table (fill) ------+|
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Tallest the team grid may grow, borders included.
const MAX_GRID_HEIGHT: u16 = 12;

#[derive(Debug, Clone)]
pub struct HomeLayout {
    pub status_bar: Rect,
    pub search: Rect,
    pub teams: Rect,
    pub standings: Rect,
    pub help_bar: Rect,
}

#[derive(Debug, Clone)]
pub struct TeamLayout {
    pub status_bar: Rect,
    /// Page title, rank badge and the club's season line(s).
    pub club_stats: Rect,
    pub nationality_chart: Rect,
    pub nationality_table: Rect,
    pub squad_tabs: Rect,
    pub squad: Rect,
    pub help_bar: Rect,
}

/// Build the home screen layout. `grid_rows` is the number of team rows
/// the picker needs; the grid is sized to fit them, up to a cap.
pub fn build_home_layout(area: Rect, grid_rows: usize) -> HomeLayout {
    let grid_height = (grid_rows.max(1) as u16).saturating_add(2).min(MAX_GRID_HEIGHT);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // status bar
            Constraint::Length(3),           // search box
            Constraint::Length(grid_height), // team grid
            Constraint::Min(5),              // standings
            Constraint::Length(1),           // help bar
        ])
        .split(area);

    HomeLayout {
        status_bar: vertical[0],
        search: vertical[1],
        teams: vertical[2],
        standings: vertical[3],
        help_bar: vertical[4],
    }
}

/// Build the team screen layout.
pub fn build_team_layout(area: Rect) -> TeamLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // status bar
            Constraint::Length(6),  // club stats
            Constraint::Min(10),    // nationality + squad
            Constraint::Length(1),  // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(vertical[2]);

    let nationality = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(horizontal[0]);

    let squad = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(horizontal[1]);

    TeamLayout {
        status_bar: vertical[0],
        club_stats: vertical[1],
        nationality_chart: nationality[0],
        nationality_table: nationality[1],
        squad_tabs: squad[0],
        squad: squad[1],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
