// Squad roster grouped into position tabs.

use std::collections::BTreeSet;

use crate::data::records::{PlayerRow, PositionGroup};

use super::{ViewContext, ViewError};

/// One roster line with its derived columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadPlayer {
    pub name: String,
    pub nationality: Option<String>,
    pub position: String,
    pub age: Option<i32>,
    /// Primary appearance count, or the fallback column when that is zero.
    pub appearances: u32,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
}

/// Players sharing a position label, most appearances first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadSection {
    pub label: String,
    /// `None` for labels outside the canonical four.
    pub group: Option<PositionGroup>,
    pub players: Vec<SquadPlayer>,
}

impl SquadPlayer {
    fn from_row(row: &PlayerRow, position: &str, current_year: i32) -> Self {
        SquadPlayer {
            name: row.player_name.clone(),
            nationality: row.nationality.clone(),
            position: position.to_string(),
            age: row.age(current_year),
            appearances: row.effective_appearances(),
            goals: row.goals,
            assists: row.assists,
        }
    }
}

/// Order in which the present position labels are shown.
///
/// Canonical order when every label is one of the four groups, plain
/// alphabetical order as soon as an unknown label shows up.
pub fn section_order<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let present: BTreeSet<&str> = labels.into_iter().collect();
    if present.iter().all(|l| PositionGroup::from_label(l).is_some()) {
        PositionGroup::ALL
            .iter()
            .map(PositionGroup::label)
            .filter(|l| present.contains(l))
            .map(str::to_string)
            .collect()
    } else {
        present.into_iter().map(str::to_string).collect()
    }
}

/// The selected team's squad, optionally narrowed by a player name query,
/// split into position sections.
///
/// Players without a position label belong to no section. When that leaves
/// nothing to show, the result is `NoSearchMatch` for a name query and
/// `NoPlayers` otherwise.
pub fn squad_by_position(ctx: &ViewContext<'_>, query: &str) -> Result<Vec<SquadSection>, ViewError> {
    let team = ctx.team()?;
    let mut players = ctx.team_players()?;
    let needle = query.trim().to_lowercase();
    let empty = || {
        if needle.is_empty() {
            ViewError::NoPlayers(team.to_string())
        } else {
            ViewError::NoSearchMatch(query.trim().to_string())
        }
    };

    if !needle.is_empty() {
        players.retain(|p| p.player_name.to_lowercase().contains(&needle));
    }
    players.retain(|p| p.position_group.is_some());
    if players.is_empty() {
        return Err(empty());
    }

    let order = section_order(players.iter().filter_map(|p| p.position_group.as_deref()));
    Ok(order
        .into_iter()
        .map(|label| {
            let mut members: Vec<SquadPlayer> = players
                .iter()
                .filter(|p| p.position_group.as_deref() == Some(label.as_str()))
                .map(|p| SquadPlayer::from_row(p, &label, ctx.current_year))
                .collect();
            members.sort_by(|a, b| b.appearances.cmp(&a.appearances));
            SquadSection {
                group: PositionGroup::from_label(&label),
                label,
                players: members,
            }
        })
        .collect())
}
