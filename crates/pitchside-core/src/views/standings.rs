// League table for the home page.

use std::collections::HashSet;

use crate::data::records::StandingsRow;

/// One displayed row of the league table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsEntry {
    pub position: u32,
    pub badge_url: String,
    pub team_name: String,
    pub points: Option<i64>,
    pub games_played: Option<i64>,
    pub games_won: Option<i64>,
    pub games_lost: Option<i64>,
    pub games_drawn: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub goal_difference: Option<i64>,
}

/// Build the league table.
///
/// Rows without a team name, a numeric position or a badge are dropped, the
/// first row per team name wins, and the result is sorted by position.
pub fn standings_view(rows: &[StandingsRow]) -> Vec<StandingsEntry> {
    let mut seen = HashSet::new();
    let mut entries: Vec<StandingsEntry> = rows
        .iter()
        .filter_map(|row| {
            let team_name = row.team_name.as_deref()?.trim();
            let position = row.position?;
            let badge_url = row.badge_url.as_deref()?;
            if team_name.is_empty() {
                return None;
            }
            Some(StandingsEntry {
                position,
                badge_url: badge_url.to_string(),
                team_name: team_name.to_string(),
                points: row.points,
                games_played: row.games_played,
                games_won: row.games_won,
                games_lost: row.games_lost,
                games_drawn: row.games_drawn,
                goals_for: row.goals_for,
                goals_against: row.goals_against,
                goal_difference: row.goal_difference,
            })
        })
        .filter(|entry| seen.insert(entry.team_name.clone()))
        .collect();

    entries.sort_by_key(|entry| entry.position);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: Option<&str>, position: Option<u32>, badge: Option<&str>, points: i64) -> StandingsRow {
        StandingsRow {
            team_name: name.map(str::to_string),
            position,
            points: Some(points),
            games_played: Some(38),
            games_won: None,
            games_lost: None,
            games_drawn: None,
            goals_for: None,
            goals_against: None,
            goal_difference: None,
            badge_url: badge.map(str::to_string),
        }
    }

    #[test]
    fn sorted_by_position() {
        let rows = vec![
            row(Some("Chelsea"), Some(4), Some("c.png"), 69),
            row(Some("Liverpool"), Some(1), Some("l.png"), 84),
            row(Some("Arsenal"), Some(2), Some("a.png"), 74),
        ];
        let view = standings_view(&rows);
        let names: Vec<_> = view.iter().map(|e| e.team_name.as_str()).collect();
        assert_eq!(names, vec!["Liverpool", "Arsenal", "Chelsea"]);
        assert!(view.windows(2).all(|w| w[0].position <= w[1].position));
    }

    #[test]
    fn incomplete_rows_dropped() {
        let rows = vec![
            row(Some("Liverpool"), Some(1), Some("l.png"), 84),
            row(None, Some(2), Some("x.png"), 74),
            row(Some("Everton"), None, Some("e.png"), 48),
            row(Some("Fulham"), Some(11), None, 54),
            row(Some("   "), Some(3), Some("b.png"), 70),
        ];
        let view = standings_view(&rows);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].team_name, "Liverpool");
    }

    #[test]
    fn first_occurrence_per_team_kept() {
        let rows = vec![
            row(Some("Arsenal "), Some(2), Some("a.png"), 74),
            row(Some("Liverpool"), Some(1), Some("l.png"), 84),
            row(Some("Arsenal"), Some(5), Some("a2.png"), 1),
        ];
        let view = standings_view(&rows);
        assert_eq!(view.len(), 2);
        let arsenal = view.iter().find(|e| e.team_name == "Arsenal").unwrap();
        assert_eq!(arsenal.points, Some(74));
        assert_eq!(arsenal.badge_url, "a.png");
    }

    #[test]
    fn incomplete_duplicate_does_not_hide_complete_row() {
        let rows = vec![
            row(Some("Brentford"), Some(10), Some("b.png"), 56),
            row(Some("Brentford"), Some(10), None, 0),
        ];
        let view = standings_view(&rows);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].points, Some(56));
    }

    #[test]
    fn empty_input() {
        assert!(standings_view(&[]).is_empty());
    }
}
