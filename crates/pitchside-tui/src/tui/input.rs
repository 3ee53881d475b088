// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the session,
// or into local ViewState mutations (cursor moves, typing into a search box,
// switching position tabs).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use pitchside_core::views::nationality::NationalityOptions;

use super::{Screen, ViewState};
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press needs the session (search,
/// navigation, option changes, quit). Returns `None` when it was handled
/// locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports both press and release.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    match view_state.screen {
        Screen::Home if view_state.search_mode => handle_search_mode(key_event, view_state),
        Screen::Home => handle_home(key_event, view_state),
        Screen::Team if view_state.squad_search_mode => handle_squad_search_mode(key_event, view_state),
        Screen::Team => handle_team(key_event, view_state),
    }
}

// ---------------------------------------------------------------------------
// Home screen
// ---------------------------------------------------------------------------

fn handle_home(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('/') => {
            view_state.search_mode = true;
            None
        }
        KeyCode::Esc => {
            view_state.search_text.clear();
            view_state.clamp_grid_cursor();
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            move_cursor(view_state, Move::Left);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            move_cursor(view_state, Move::Right);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_cursor(view_state, Move::Up);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_cursor(view_state, Move::Down);
            None
        }
        KeyCode::Enter => view_state
            .visible_teams()
            .get(view_state.grid_cursor)
            .map(|name| UserCommand::SelectTeam(name.clone())),
        KeyCode::Char('q') => Some(UserCommand::Quit),
        _ => None,
    }
}

/// Typing into the team search box. The grid narrows as text changes;
/// Enter hands the query to the resolver, Esc abandons it.
fn handle_search_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.search_mode = false;
            view_state.search_text.clear();
            view_state.clamp_grid_cursor();
            None
        }
        KeyCode::Enter => {
            view_state.search_mode = false;
            let query = view_state.search_text.trim();
            if query.is_empty() {
                None
            } else {
                Some(UserCommand::SubmitSearch(query.to_string()))
            }
        }
        KeyCode::Backspace => {
            view_state.search_text.pop();
            view_state.clamp_grid_cursor();
            None
        }
        KeyCode::Char(c) => {
            view_state.search_text.push(c);
            view_state.grid_cursor = 0;
            None
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// Move the grid cursor, staying on a visible team.
fn move_cursor(view_state: &mut ViewState, dir: Move) {
    let len = view_state.visible_teams().len();
    if len == 0 {
        view_state.grid_cursor = 0;
        return;
    }
    let cols = view_state.team_columns();
    let cur = view_state.grid_cursor.min(len - 1);
    view_state.grid_cursor = match dir {
        Move::Left if cur % cols > 0 => cur - 1,
        Move::Right if cur % cols + 1 < cols && cur + 1 < len => cur + 1,
        Move::Up if cur >= cols => cur - cols,
        Move::Down if cur + cols < len => cur + cols,
        _ => cur,
    };
}

// ---------------------------------------------------------------------------
// Team screen
// ---------------------------------------------------------------------------

fn handle_team(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('g') => nationality_command(view_state, |o| NationalityOptions {
            group_small: !o.group_small,
            ..o
        }),
        KeyCode::Char('m') => nationality_command(view_state, |o| NationalityOptions {
            mode: o.mode.toggled(),
            ..o
        }),
        KeyCode::Char('+') | KeyCode::Char('=') => nationality_command(view_state, |o| o.stepped(1)),
        KeyCode::Char('-') => nationality_command(view_state, |o| o.stepped(-1)),
        KeyCode::Tab => {
            cycle_tab(view_state, true);
            None
        }
        KeyCode::BackTab => {
            cycle_tab(view_state, false);
            None
        }
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            if idx < view_state.squad_sections().len() {
                view_state.squad_tab = idx;
            }
            None
        }
        KeyCode::Char('/') => {
            view_state.squad_search_mode = true;
            None
        }
        KeyCode::Char('b') | KeyCode::Esc => Some(UserCommand::BackToHome),
        KeyCode::Char('q') => Some(UserCommand::Quit),
        _ => None,
    }
}

/// Typing into the squad search box. Enter applies the filter, Esc clears it.
fn handle_squad_search_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.squad_search_mode = false;
            view_state.squad_search_text.clear();
            Some(UserCommand::SetSquadFilter(String::new()))
        }
        KeyCode::Enter => {
            view_state.squad_search_mode = false;
            Some(UserCommand::SetSquadFilter(view_state.squad_search_text.trim().to_string()))
        }
        KeyCode::Backspace => {
            view_state.squad_search_text.pop();
            None
        }
        KeyCode::Char(c) => {
            view_state.squad_search_text.push(c);
            None
        }
        _ => None,
    }
}

/// Build a `SetNationality` from the options currently on screen.
fn nationality_command(
    view_state: &ViewState,
    change: impl FnOnce(NationalityOptions) -> NationalityOptions,
) -> Option<UserCommand> {
    let current = view_state.team.as_ref()?.nationality_options;
    let next = change(current).clamped();
    (next != current).then_some(UserCommand::SetNationality(next))
}

fn cycle_tab(view_state: &mut ViewState, forward: bool) {
    let count = view_state.squad_sections().len();
    if count == 0 {
        return;
    }
    view_state.squad_tab = if forward {
        (view_state.squad_tab + 1) % count
    } else {
        (view_state.squad_tab + count - 1) % count
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::UiUpdate;
    use crate::tui::apply_ui_update;
    use crate::tui::test_support::{home, team};
    use crossterm::event::KeyEventState;
    use pitchside_core::views::nationality::GroupingMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(state: &mut ViewState, text: &str) {
        for c in text.chars() {
            handle_key(key(KeyCode::Char(c)), state);
        }
    }

    fn home_state() -> ViewState {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::Home(home(&[
                "Arsenal",
                "Aston Villa",
                "Bournemouth",
                "Brentford",
                "Brighton",
                "Chelsea",
            ])),
        );
        state
    }

    fn team_state() -> ViewState {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Team(Box::new(team("Liverpool"))));
        state
    }

    // -- Global --

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut state = home_state();
        state.search_mode = true;
        assert_eq!(handle_key(ctrl_key(KeyCode::Char('c')), &mut state), Some(UserCommand::Quit));

        let mut state = team_state();
        state.squad_search_mode = true;
        assert_eq!(handle_key(ctrl_key(KeyCode::Char('c')), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = home_state();
        let mut ev = key(KeyCode::Char('q'));
        ev.kind = KeyEventKind::Release;
        assert_eq!(handle_key(ev, &mut state), None);
    }

    // -- Home search --

    #[test]
    fn search_submits_trimmed_query() {
        let mut state = home_state();
        handle_key(key(KeyCode::Char('/')), &mut state);
        assert!(state.search_mode);
        type_text(&mut state, " villa ");
        assert_eq!(state.visible_teams(), vec!["Aston Villa".to_string()]);
        let cmd = handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(cmd, Some(UserCommand::SubmitSearch("villa".into())));
        assert!(!state.search_mode);
    }

    #[test]
    fn q_is_text_while_searching() {
        let mut state = home_state();
        handle_key(key(KeyCode::Char('/')), &mut state);
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), None);
        assert_eq!(state.search_text, "q");
    }

    #[test]
    fn empty_search_submits_nothing() {
        let mut state = home_state();
        handle_key(key(KeyCode::Char('/')), &mut state);
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);
    }

    #[test]
    fn esc_abandons_search() {
        let mut state = home_state();
        handle_key(key(KeyCode::Char('/')), &mut state);
        type_text(&mut state, "br");
        assert_eq!(state.visible_teams().len(), 2);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.search_mode);
        assert!(state.search_text.is_empty());
        assert_eq!(state.visible_teams().len(), 6);
    }

    // -- Home grid --

    #[test]
    fn grid_navigation_respects_columns() {
        // 6 teams in 4 columns: row 0 = 0..4, row 1 = 4..6
        let mut state = home_state();
        handle_key(key(KeyCode::Right), &mut state);
        handle_key(key(KeyCode::Char('l')), &mut state);
        handle_key(key(KeyCode::Right), &mut state);
        handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.grid_cursor, 3);

        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.grid_cursor, 3, "no team below the last column");

        handle_key(key(KeyCode::Left), &mut state);
        handle_key(key(KeyCode::Left), &mut state);
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.grid_cursor, 5);

        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.grid_cursor, 1);
        handle_key(key(KeyCode::Char('h')), &mut state);
        handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.grid_cursor, 0);
    }

    #[test]
    fn enter_on_grid_selects_team_directly() {
        let mut state = home_state();
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut state),
            Some(UserCommand::SelectTeam("Brighton".into()))
        );
    }

    #[test]
    fn enter_on_filtered_grid_uses_visible_list() {
        let mut state = home_state();
        state.search_text = "ch".into();
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut state),
            Some(UserCommand::SelectTeam("Chelsea".into()))
        );
    }

    #[test]
    fn enter_without_teams_does_nothing() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);
    }

    #[test]
    fn q_quits_from_home() {
        let mut state = home_state();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), Some(UserCommand::Quit));
    }

    // -- Team screen --

    #[test]
    fn g_toggles_grouping() {
        let mut state = team_state();
        match handle_key(key(KeyCode::Char('g')), &mut state) {
            Some(UserCommand::SetNationality(o)) => assert!(!o.group_small),
            other => panic!("expected SetNationality, got {other:?}"),
        }
    }

    #[test]
    fn m_switches_mode() {
        let mut state = team_state();
        match handle_key(key(KeyCode::Char('m')), &mut state) {
            Some(UserCommand::SetNationality(o)) => assert_eq!(o.mode, GroupingMode::Threshold),
            other => panic!("expected SetNationality, got {other:?}"),
        }
    }

    #[test]
    fn plus_and_minus_step_within_range() {
        let mut state = team_state();
        match handle_key(key(KeyCode::Char('+')), &mut state) {
            Some(UserCommand::SetNationality(o)) => assert_eq!(o.top_n, 9),
            other => panic!("expected SetNationality, got {other:?}"),
        }
        if let Some(t) = state.team.as_mut() {
            t.nationality_options.top_n = 3;
        }
        assert_eq!(handle_key(key(KeyCode::Char('-')), &mut state), None);
    }

    #[test]
    fn tabs_cycle_and_jump() {
        let mut state = team_state();
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.squad_tab, 1);
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.squad_tab, 0);
        handle_key(key(KeyCode::BackTab), &mut state);
        assert_eq!(state.squad_tab, 1);
        handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(state.squad_tab, 0);
        handle_key(key(KeyCode::Char('9')), &mut state);
        assert_eq!(state.squad_tab, 0, "out of range tab ignored");
    }

    #[test]
    fn squad_search_round_trip() {
        let mut state = team_state();
        handle_key(key(KeyCode::Char('/')), &mut state);
        type_text(&mut state, "mes");
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut state),
            Some(UserCommand::SetSquadFilter("mes".into()))
        );
        handle_key(key(KeyCode::Char('/')), &mut state);
        assert_eq!(
            handle_key(key(KeyCode::Esc), &mut state),
            Some(UserCommand::SetSquadFilter(String::new()))
        );
        assert!(state.squad_search_text.is_empty());
    }

    #[test]
    fn back_keys_return_home() {
        let mut state = team_state();
        assert_eq!(handle_key(key(KeyCode::Char('b')), &mut state), Some(UserCommand::BackToHome));
        assert_eq!(handle_key(key(KeyCode::Esc), &mut state), Some(UserCommand::BackToHome));
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), Some(UserCommand::Quit));
    }
}
