// Team detail header: rank badge plus the club's season line(s).

use std::fmt;

use crate::data::records::ClubStatsRow;

use super::{ViewContext, ViewError};

/// Medal shown next to a top-three team's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
}

impl RankBadge {
    pub fn for_position(position: u32) -> Option<Self> {
        match position {
            1 => Some(RankBadge::Gold),
            2 => Some(RankBadge::Silver),
            3 => Some(RankBadge::Bronze),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RankBadge::Gold => "🏆🥇",
            RankBadge::Silver => "🥈",
            RankBadge::Bronze => "🥉",
        }
    }
}

impl fmt::Display for RankBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The club stats columns shown on the team page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClubStatsLine {
    pub position: Option<u32>,
    pub points: Option<i64>,
    pub games_won: Option<i64>,
    pub games_drawn: Option<i64>,
    pub games_lost: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
}

impl From<&ClubStatsRow> for ClubStatsLine {
    fn from(row: &ClubStatsRow) -> Self {
        ClubStatsLine {
            position: row.position,
            points: row.points,
            games_won: row.games_won,
            games_drawn: row.games_drawn,
            games_lost: row.games_lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDetail {
    pub team_name: String,
    /// Position from the first matching row.
    pub position: Option<u32>,
    pub badge: Option<RankBadge>,
    /// Distinct season lines, in source order.
    pub lines: Vec<ClubStatsLine>,
}

/// Look up the selected team in the club stats table.
///
/// Matching is exact on the trimmed name (case-sensitive); the picker and
/// the resolver always hand over the stored spelling.
pub fn team_detail(ctx: &ViewContext<'_>) -> Result<TeamDetail, ViewError> {
    let team = ctx.team()?;
    let rows: Vec<&ClubStatsRow> = ctx
        .club_stats()?
        .iter()
        .filter(|row| row.team_name.trim() == team)
        .collect();

    let Some(first) = rows.first() else {
        return Err(ViewError::TeamNotFound(team.to_string()));
    };
    let position = first.position;

    let mut lines: Vec<ClubStatsLine> = Vec::new();
    for row in rows {
        let line = ClubStatsLine::from(row);
        if !lines.contains(&line) {
            lines.push(line);
        }
    }

    Ok(TeamDetail {
        team_name: team.to_string(),
        position,
        badge: position.and_then(RankBadge::for_position),
        lines,
    })
}
