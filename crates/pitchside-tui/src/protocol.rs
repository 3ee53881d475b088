// Messages between the session task and the terminal front end.
//
// The front end sends `UserCommand`s; the session answers with `UiUpdate`s
// carrying fully computed snapshots, so rendering never touches the data
// layer.

use pitchside_core::views::nationality::{NationalityCount, NationalityOptions};
use pitchside_core::views::squad::SquadSection;
use pitchside_core::views::standings::StandingsEntry;
use pitchside_core::views::team::TeamDetail;
use pitchside_core::views::ViewError;

// ---------------------------------------------------------------------------
// Commands (TUI -> session)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Free-text team search from the home screen.
    SubmitSearch(String),
    /// Direct pick from the team grid; bypasses the resolver.
    SelectTeam(String),
    BackToHome,
    SetNationality(NationalityOptions),
    SetSquadFilter(String),
    Quit,
}

// ---------------------------------------------------------------------------
// Updates (session -> TUI)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum UiUpdate {
    Home(HomeSnapshot),
    Team(Box<TeamSnapshot>),
    Notice(Notice),
    ClearNotice,
}

/// Everything the home screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSnapshot {
    pub season_label: String,
    pub team_columns: usize,
    /// Selectable team names, sorted.
    pub teams: Vec<String>,
    pub standings: Vec<StandingsEntry>,
}

/// Everything the team screen shows. Each panel carries its own outcome so
/// one missing table does not blank the whole page.
#[derive(Debug, Clone)]
pub struct TeamSnapshot {
    pub season_label: String,
    pub team_name: String,
    pub detail: Result<TeamDetail, ViewError>,
    pub nationality_options: NationalityOptions,
    pub nationality: Result<Vec<NationalityCount>, ViewError>,
    pub squad_filter: String,
    pub squad: Result<Vec<SquadSection>, ViewError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Advisory message for the status line. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl From<&ViewError> for Notice {
    fn from(err: &ViewError) -> Self {
        let severity = if err.is_warning() {
            Severity::Warning
        } else {
            Severity::Info
        };
        Notice {
            severity,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_severity_follows_view_error() {
        let warn = Notice::from(&ViewError::TeamNotFound("Leeds".into()));
        assert_eq!(warn.severity, Severity::Warning);
        assert!(warn.message.contains("Leeds"));

        let info = Notice::from(&ViewError::NoSearchMatch("zz".into()));
        assert_eq!(info.severity, Severity::Info);
    }
}
