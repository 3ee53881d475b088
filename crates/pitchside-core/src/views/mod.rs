// View aggregation: standings table, team detail, nationality breakdown and
// position-grouped squad, each computed fresh from the loaded snapshots.

pub mod nationality;
pub mod squad;
pub mod standings;
pub mod team;

use thiserror::Error;

use crate::data::loader::LoadError;
use crate::data::records::{ClubStatsRow, PlayerRow};

// ---------------------------------------------------------------------------
// Advisory outcomes
// ---------------------------------------------------------------------------

/// Why a view could not be produced. Every variant is advisory: the caller
/// shows the message and the user navigates on; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    #[error("no team selected; go back to the home page")]
    NoTeamSelected,

    #[error("team '{0}' not found in the data; go back to the home page")]
    TeamNotFound(String),

    #[error("no players found for {0}")]
    NoPlayers(String),

    #[error("no player matches \"{0}\"")]
    NoSearchMatch(String),

    #[error("no team matches \"{0}\"; refine the search")]
    NoTeamMatch(String),

    #[error("several teams match \"{query}\"; refine the search or pick one from the list")]
    AmbiguousSearch {
        query: String,
        candidates: Vec<String>,
    },
}

impl ViewError {
    /// Warnings point at missing data or a dead end; the rest are hints.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            ViewError::DataUnavailable(_)
                | ViewError::NoTeamSelected
                | ViewError::TeamNotFound(_)
                | ViewError::NoTeamMatch(_)
        )
    }
}

impl From<&LoadError> for ViewError {
    fn from(err: &LoadError) -> Self {
        ViewError::DataUnavailable(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Per-request context
// ---------------------------------------------------------------------------

/// Everything a team-page view needs for one request.
///
/// Built fresh for each user interaction from the session's snapshots. A
/// table that failed to load is carried as its error so only the views that
/// need it report "data unavailable".
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub selected_team: Option<&'a str>,
    pub current_year: i32,
    pub club_stats: Result<&'a [ClubStatsRow], &'a LoadError>,
    pub players: Result<&'a [PlayerRow], &'a LoadError>,
}

impl<'a> ViewContext<'a> {
    /// The selected team, trimmed. Blank selections count as none.
    pub fn team(&self) -> Result<&'a str, ViewError> {
        self.selected_team
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ViewError::NoTeamSelected)
    }

    pub fn club_stats(&self) -> Result<&'a [ClubStatsRow], ViewError> {
        self.club_stats.map_err(ViewError::from)
    }

    pub fn players(&self) -> Result<&'a [PlayerRow], ViewError> {
        self.players.map_err(ViewError::from)
    }

    /// Players whose club matches the selected team, ignoring case.
    pub fn team_players(&self) -> Result<Vec<&'a PlayerRow>, ViewError> {
        let team = self.team()?;
        Ok(self
            .players()?
            .iter()
            .filter(|p| p.plays_for(team))
            .collect())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_team_counts_as_unselected() {
        let ctx = ViewContext {
            selected_team: Some("   "),
            current_year: 2025,
            club_stats: Ok(&[]),
            players: Ok(&[]),
        };
        assert_eq!(ctx.team(), Err(ViewError::NoTeamSelected));
    }

    #[test]
    fn load_failure_becomes_data_unavailable() {
        let err = LoadError::MissingColumns {
            path: "players.csv".into(),
            columns: vec!["club".into()],
        };
        let ctx = ViewContext {
            selected_team: Some("Arsenal"),
            current_year: 2025,
            club_stats: Ok(&[]),
            players: Err(&err),
        };
        match ctx.players() {
            Err(ViewError::DataUnavailable(msg)) => assert!(msg.contains("club")),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
        assert!(ctx.club_stats().is_ok());
    }

    #[test]
    fn warning_classification() {
        assert!(ViewError::NoTeamSelected.is_warning());
        assert!(ViewError::NoTeamMatch("x".into()).is_warning());
        assert!(!ViewError::NoSearchMatch("x".into()).is_warning());
        assert!(!ViewError::AmbiguousSearch {
            query: "united".into(),
            candidates: vec![]
        }
        .is_warning());
    }
}
