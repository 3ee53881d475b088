// Typed records for the three season tables.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Date format used by the player table's `date_of_birth` column.
pub const DOB_FORMAT: &str = "%d/%m/%Y";

/// One row of the league standings table.
///
/// Text fields are trimmed at load time; an empty cell becomes `None`.
/// Numeric cells that do not hold a whole number are also `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub team_name: Option<String>,
    pub position: Option<u32>,
    pub points: Option<i64>,
    pub games_played: Option<i64>,
    pub games_won: Option<i64>,
    pub games_lost: Option<i64>,
    pub games_drawn: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub goal_difference: Option<i64>,
    pub badge_url: Option<String>,
}

/// One row of the club season stats table. A team may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClubStatsRow {
    pub team_name: String,
    pub position: Option<u32>,
    pub points: Option<i64>,
    pub games_won: Option<i64>,
    pub games_drawn: Option<i64>,
    pub games_lost: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
}

/// One row of the player stats table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub player_name: String,
    pub club_name: String,
    pub nationality: Option<String>,
    /// Raw position label. Usually one of the four `PositionGroup`s, but
    /// anything the source contains is kept.
    pub position_group: Option<String>,
    pub date_of_birth: Option<String>,
    pub appearances: Option<u32>,
    pub appearances_fallback: Option<u32>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
}

impl PlayerRow {
    /// Age in whole years as `current_year - birth_year`.
    ///
    /// `None` when the date of birth is missing or not `DD/MM/YYYY`.
    pub fn age(&self, current_year: i32) -> Option<i32> {
        let dob = self.date_of_birth.as_deref()?;
        let date = NaiveDate::parse_from_str(dob.trim(), DOB_FORMAT).ok()?;
        Some(current_year - date.year())
    }

    /// Primary appearance count, or the fallback column when the primary is
    /// zero or missing.
    pub fn effective_appearances(&self) -> u32 {
        match self.appearances {
            Some(n) if n != 0 => n,
            _ => self.appearances_fallback.unwrap_or(0),
        }
    }

    /// Case-insensitive comparison of the club column against a team name.
    pub fn plays_for(&self, team: &str) -> bool {
        self.club_name.trim().to_lowercase() == team.trim().to_lowercase()
    }
}

/// The four canonical squad position groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 4] = [
        PositionGroup::Goalkeeper,
        PositionGroup::Defender,
        PositionGroup::Midfielder,
        PositionGroup::Forward,
    ];

    /// Parse an exact position label. Labels outside the canonical four
    /// return `None`.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Goalkeeper" => Some(PositionGroup::Goalkeeper),
            "Defender" => Some(PositionGroup::Defender),
            "Midfielder" => Some(PositionGroup::Midfielder),
            "Forward" => Some(PositionGroup::Forward),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "Goalkeeper",
            PositionGroup::Defender => "Defender",
            PositionGroup::Midfielder => "Midfielder",
            PositionGroup::Forward => "Forward",
        }
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
