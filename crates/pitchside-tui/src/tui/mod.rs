// Terminal front end: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the latest snapshots pushed by the
// session task. `UiUpdate`s arrive over an mpsc channel, key presses become
// `UserCommand`s, and the screen is redrawn on a ~30 fps tick.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use pitchside_core::resolver::filter_names;
use pitchside_core::views::squad::SquadSection;

use crate::protocol::{HomeSnapshot, Notice, TeamSnapshot, UiUpdate, UserCommand};

use layout::{build_home_layout, build_team_layout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Team,
}

/// TUI-local state: the latest snapshots plus purely visual state such as
/// cursors and half-typed search text.
#[derive(Debug)]
pub struct ViewState {
    pub screen: Screen,
    pub home: Option<HomeSnapshot>,
    pub team: Option<Box<TeamSnapshot>>,
    /// Advisory shown in the status line.
    pub notice: Option<Notice>,
    /// Home search box has focus.
    pub search_mode: bool,
    /// Team search text; also narrows the team grid as it is typed.
    pub search_text: String,
    /// Index into `visible_teams()`.
    pub grid_cursor: usize,
    /// Squad search box has focus.
    pub squad_search_mode: bool,
    pub squad_search_text: String,
    /// Selected position tab on the team screen.
    pub squad_tab: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            screen: Screen::Home,
            home: None,
            team: None,
            notice: None,
            search_mode: false,
            search_text: String::new(),
            grid_cursor: 0,
            squad_search_mode: false,
            squad_search_text: String::new(),
            squad_tab: 0,
        }
    }
}

impl ViewState {
    /// Team names in the picker grid, narrowed by the search text.
    pub fn visible_teams(&self) -> Vec<String> {
        match &self.home {
            Some(home) => filter_names(&self.search_text, &home.teams),
            None => Vec::new(),
        }
    }

    /// Columns of the picker grid (never zero).
    pub fn team_columns(&self) -> usize {
        self.home.as_ref().map_or(1, |h| h.team_columns.max(1))
    }

    /// Position sections of the current squad, empty when unavailable.
    pub fn squad_sections(&self) -> &[SquadSection] {
        match self.team.as_deref().map(|t| &t.squad) {
            Some(Ok(sections)) => sections,
            _ => &[],
        }
    }

    /// Keep the grid cursor on a visible team.
    pub fn clamp_grid_cursor(&mut self) {
        let len = self.visible_teams().len();
        if self.grid_cursor >= len {
            self.grid_cursor = len.saturating_sub(1);
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Home(home) => {
            state.screen = Screen::Home;
            state.home = Some(home);
            state.team = None;
            state.squad_search_mode = false;
            state.squad_search_text.clear();
            state.squad_tab = 0;
            state.clamp_grid_cursor();
        }
        UiUpdate::Team(team) => {
            let same_team = state
                .team
                .as_ref()
                .is_some_and(|t| t.team_name == team.team_name);
            if !same_team {
                state.squad_tab = 0;
                state.squad_search_mode = false;
            }
            state.squad_search_text = team.squad_filter.clone();
            state.screen = Screen::Team;
            state.search_mode = false;
            state.team = Some(team);
            let tabs = state.squad_sections().len();
            if state.squad_tab >= tabs {
                state.squad_tab = tabs.saturating_sub(1);
            }
        }
        UiUpdate::Notice(notice) => {
            state.notice = Some(notice);
        }
        UiUpdate::ClearNotice => {
            state.notice = None;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the current screen.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    match state.screen {
        Screen::Home => {
            let rows = widgets::team_grid::row_count(state.visible_teams().len(), state.team_columns());
            let layout = build_home_layout(frame.area(), rows);
            widgets::status_bar::render(frame, layout.status_bar, state);
            widgets::search::render(frame, layout.search, state);
            widgets::team_grid::render(frame, layout.teams, state);
            widgets::standings::render(frame, layout.standings, state);
            widgets::help_bar::render(frame, layout.help_bar, state);
        }
        Screen::Team => {
            let layout = build_team_layout(frame.area());
            widgets::status_bar::render(frame, layout.status_bar, state);
            widgets::club_stats::render(frame, layout.club_stats, state);
            widgets::nationality::render_chart(frame, layout.nationality_chart, state);
            widgets::nationality::render_table(frame, layout.nationality_table, state);
            widgets::squad::render_tabs(frame, layout.squad_tabs, state);
            widgets::squad::render_table(frame, layout.squad, state);
            widgets::help_bar::render(frame, layout.help_bar, state);
        }
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// Initializes the terminal, installs a panic hook that restores it, then
/// selects over session updates, keyboard input and the render tick until
/// the user quits or the session hangs up.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Session is gone.
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state) {
                            Some(UserCommand::Quit) => {
                                let _ = cmd_tx.send(UserCommand::Quit).await;
                                break;
                            }
                            Some(cmd) => {
                                let _ = cmd_tx.send(cmd).await;
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    ratatui::restore();
                    return Err(e.into());
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support {
    //! Snapshot builders shared by the widget tests.

    use pitchside_core::views::nationality::{NationalityCount, NationalityOptions};
    use pitchside_core::views::squad::{SquadPlayer, SquadSection};
    use pitchside_core::views::standings::StandingsEntry;
    use pitchside_core::views::team::{ClubStatsLine, RankBadge, TeamDetail};

    use crate::protocol::{HomeSnapshot, TeamSnapshot};

    pub fn home(teams: &[&str]) -> HomeSnapshot {
        HomeSnapshot {
            season_label: "24/25".into(),
            team_columns: 4,
            teams: teams.iter().map(|t| t.to_string()).collect(),
            standings: teams
                .iter()
                .enumerate()
                .map(|(i, t)| StandingsEntry {
                    position: i as u32 + 1,
                    badge_url: format!("https://img.example/{}.png", i),
                    team_name: t.to_string(),
                    points: Some(80 - i as i64),
                    games_played: Some(38),
                    games_won: Some(20),
                    games_lost: Some(8),
                    games_drawn: Some(10),
                    goals_for: Some(60),
                    goals_against: Some(40),
                    goal_difference: Some(20),
                })
                .collect(),
        }
    }

    pub fn squad_player(name: &str, apps: u32) -> SquadPlayer {
        SquadPlayer {
            name: name.into(),
            nationality: Some("England".into()),
            position: "Defender".into(),
            age: Some(25),
            appearances: apps,
            goals: Some(1),
            assists: None,
        }
    }

    pub fn team(name: &str) -> TeamSnapshot {
        TeamSnapshot {
            season_label: "24/25".into(),
            team_name: name.into(),
            detail: Ok(TeamDetail {
                team_name: name.into(),
                position: Some(1),
                badge: Some(RankBadge::Gold),
                lines: vec![ClubStatsLine {
                    position: Some(1),
                    points: Some(84),
                    games_won: Some(25),
                    games_drawn: Some(9),
                    games_lost: Some(4),
                    goals_for: Some(86),
                    goals_against: Some(41),
                }],
            }),
            nationality_options: NationalityOptions::default(),
            nationality: Ok(vec![
                NationalityCount {
                    nationality: "England".into(),
                    player_count: 6,
                    percentage: 60.0,
                },
                NationalityCount {
                    nationality: "Other".into(),
                    player_count: 4,
                    percentage: 40.0,
                },
            ]),
            squad_filter: String::new(),
            squad: Ok(vec![
                SquadSection {
                    label: "Goalkeeper".into(),
                    group: None,
                    players: vec![squad_player("Alisson Becker", 36)],
                },
                SquadSection {
                    label: "Defender".into(),
                    group: None,
                    players: vec![squad_player("Virgil Dijk", 37), squad_player("Joe Gomez", 8)],
                },
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{home, team};
    use super::*;
    use crate::protocol::Notice;

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert_eq!(state.screen, Screen::Home);
        assert!(state.home.is_none());
        assert!(state.team.is_none());
        assert!(state.notice.is_none());
        assert!(!state.search_mode);
        assert!(state.search_text.is_empty());
        assert_eq!(state.grid_cursor, 0);
        assert!(state.visible_teams().is_empty());
        assert_eq!(state.team_columns(), 1);
    }

    #[test]
    fn home_update_switches_screen_and_clamps_cursor() {
        let mut state = ViewState::default();
        state.screen = Screen::Team;
        state.grid_cursor = 9;
        apply_ui_update(&mut state, UiUpdate::Home(home(&["Arsenal", "Chelsea"])));
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.grid_cursor, 1);
        assert!(state.team.is_none());
    }

    #[test]
    fn visible_teams_follow_search_text() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::Home(home(&["Arsenal", "Manchester City", "Manchester United"])),
        );
        state.search_text = "MAN".into();
        assert_eq!(
            state.visible_teams(),
            vec!["Manchester City".to_string(), "Manchester United".to_string()]
        );
    }

    #[test]
    fn team_update_resets_tab_for_new_team_only() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Liverpool"))));
        assert_eq!(state.screen, Screen::Team);
        state.squad_tab = 1;

        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Liverpool"))));
        assert_eq!(state.squad_tab, 1);

        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Everton"))));
        assert_eq!(state.squad_tab, 0);
    }

    #[test]
    fn team_update_clamps_tab_when_sections_shrink() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Liverpool"))));
        state.squad_tab = 1;
        let mut narrowed = team("Liverpool");
        if let Ok(sections) = narrowed.squad.as_mut() {
            sections.truncate(1);
        }
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(narrowed)));
        assert_eq!(state.squad_tab, 0);
    }

    #[test]
    fn notices_set_and_clear() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Notice(Notice::warning("careful")));
        assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some("careful"));
        apply_ui_update(&mut state, UiUpdate::ClearNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn render_frame_both_screens() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();

        apply_ui_update(&mut state, UiUpdate::Home(home(&["Arsenal", "Chelsea", "Everton"])));
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();

        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Liverpool"))));
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }
}
