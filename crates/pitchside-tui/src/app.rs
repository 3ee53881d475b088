// Session state and command handling.
//
// A `Session` owns everything one user interaction sequence needs: the
// config, the lazily loaded season tables, the selected team and the
// current page options. Each `UserCommand` is answered with the `UiUpdate`s
// the front end should apply; all view computation happens here.

use chrono::Datelike;
use tokio::sync::mpsc;
use tracing::{info, warn};

use pitchside_core::config::Config;
use pitchside_core::data::cache::Datasets;
use pitchside_core::resolver::{self, Resolution};
use pitchside_core::views::nationality::{nationality_distribution, NationalityOptions};
use pitchside_core::views::squad::squad_by_position;
use pitchside_core::views::standings::standings_view;
use pitchside_core::views::team::team_detail;
use pitchside_core::views::{ViewContext, ViewError};

use crate::protocol::{HomeSnapshot, Notice, TeamSnapshot, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct Session {
    config: Config,
    datasets: Datasets,
    selected_team: Option<String>,
    nationality: NationalityOptions,
    squad_filter: String,
    current_year: i32,
}

impl Session {
    /// New session anchored to the local calendar year.
    pub fn new(config: Config) -> Self {
        let year = chrono::Local::now().year();
        Self::with_year(config, year)
    }

    /// New session with an explicit current year (used for age derivation).
    pub fn with_year(config: Config, current_year: i32) -> Self {
        let datasets = Datasets::new(config.data_paths.clone());
        let nationality = config.nationality.clamped();
        Session {
            config,
            datasets,
            selected_team: None,
            nationality,
            squad_filter: String::new(),
            current_year,
        }
    }

    pub fn selected_team(&self) -> Option<&str> {
        self.selected_team.as_deref()
    }

    pub fn nationality(&self) -> NationalityOptions {
        self.nationality
    }

    pub fn squad_filter(&self) -> &str {
        &self.squad_filter
    }

    /// Updates for the initial home screen.
    pub fn start(&mut self) -> Vec<UiUpdate> {
        self.home_updates()
    }

    /// Apply one command and return the updates to push to the front end.
    pub fn handle(&mut self, cmd: UserCommand) -> Vec<UiUpdate> {
        match cmd {
            UserCommand::SubmitSearch(query) => self.submit_search(&query),
            UserCommand::SelectTeam(name) => self.open_team(name),
            UserCommand::BackToHome => {
                self.selected_team = None;
                self.squad_filter.clear();
                self.home_updates()
            }
            UserCommand::SetNationality(options) => {
                self.nationality = options.clamped();
                self.refresh_team()
            }
            UserCommand::SetSquadFilter(query) => {
                self.squad_filter = query;
                self.refresh_team()
            }
            UserCommand::Quit => Vec::new(),
        }
    }

    fn submit_search(&mut self, query: &str) -> Vec<UiUpdate> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let standings = match self.datasets.standings() {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Search unavailable: {}", e);
                return vec![notice(&ViewError::from(&e))];
            }
        };
        let names = resolver::team_names(&standings);

        match resolver::resolve(query, &names) {
            Resolution::Exact(name) | Resolution::Partial(name) => self.open_team(name),
            Resolution::NoMatch => vec![notice(&ViewError::NoTeamMatch(query.to_string()))],
            Resolution::Ambiguous(candidates) => vec![notice(&ViewError::AmbiguousSearch {
                query: query.to_string(),
                candidates,
            })],
        }
    }

    fn open_team(&mut self, name: String) -> Vec<UiUpdate> {
        info!("Opening team page for '{}'", name);
        self.selected_team = Some(name);
        self.squad_filter.clear();
        self.team_updates()
    }

    fn refresh_team(&mut self) -> Vec<UiUpdate> {
        if self.selected_team.is_none() {
            return Vec::new();
        }
        self.team_updates()
    }

    fn home_updates(&mut self) -> Vec<UiUpdate> {
        let mut updates = Vec::new();
        let (teams, standings) = match self.datasets.standings() {
            Ok(rows) => (resolver::team_names(&rows), standings_view(&rows)),
            Err(e) => {
                warn!("Standings unavailable: {}", e);
                updates.push(notice(&ViewError::from(&e)));
                (Vec::new(), Vec::new())
            }
        };
        if updates.is_empty() {
            updates.push(UiUpdate::ClearNotice);
        }
        updates.push(UiUpdate::Home(HomeSnapshot {
            season_label: self.config.display.season_label.clone(),
            team_columns: self.config.display.team_columns,
            teams,
            standings,
        }));
        updates
    }

    fn team_updates(&mut self) -> Vec<UiUpdate> {
        let snapshot = self.team_snapshot();
        let status = match (&snapshot.detail, &snapshot.squad) {
            (Err(e), _) => notice(e),
            (Ok(_), Err(e @ ViewError::NoSearchMatch(_))) => notice(e),
            _ => UiUpdate::ClearNotice,
        };
        vec![status, UiUpdate::Team(Box::new(snapshot))]
    }

    fn team_snapshot(&mut self) -> TeamSnapshot {
        let club_stats = self.datasets.club_stats();
        let players = self.datasets.players();
        let ctx = ViewContext {
            selected_team: self.selected_team.as_deref(),
            current_year: self.current_year,
            club_stats: club_stats.as_ref().map(|rows| rows.as_slice()),
            players: players.as_ref().map(|rows| rows.as_slice()),
        };

        TeamSnapshot {
            season_label: self.config.display.season_label.clone(),
            team_name: ctx.team().unwrap_or_default().to_string(),
            detail: team_detail(&ctx),
            nationality_options: self.nationality,
            nationality: nationality_distribution(&ctx, &self.nationality),
            squad_filter: self.squad_filter.clone(),
            squad: squad_by_position(&ctx, &self.squad_filter),
        }
    }
}

fn notice(err: &ViewError) -> UiUpdate {
    UiUpdate::Notice(Notice::from(err))
}

// ---------------------------------------------------------------------------
// Session event loop
// ---------------------------------------------------------------------------

/// Run the session loop: answer each command from the front end until it
/// asks to quit or hangs up.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut session: Session,
) -> anyhow::Result<()> {
    info!("Session loop started");

    for update in session.start() {
        let _ = ui_tx.send(update).await;
    }

    while let Some(cmd) = cmd_rx.recv().await {
        if cmd == UserCommand::Quit {
            info!("Quit command received, shutting down");
            break;
        }
        for update in session.handle(cmd) {
            let _ = ui_tx.send(update).await;
        }
    }

    info!("Session loop exiting");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
