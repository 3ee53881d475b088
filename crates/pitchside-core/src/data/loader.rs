// Season table loading and schema validation.
//
// Reads the standings, club stats and player stats CSVs into typed records.
// Headers and cells are trimmed; empty cells become `None`. A file missing
// any required column is rejected before a single row is read.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use super::records::{ClubStatsRow, PlayerRow, StandingsRow};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required columns: {}", columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

/// A required header plus the alternative spellings accepted for it.
type Column = (&'static str, &'static [&'static str]);

const STANDINGS_COLUMNS: &[Column] = &[
    ("name", &[]),
    ("position", &[]),
    ("points", &[]),
    ("games_played", &[]),
    ("games_won", &[]),
    ("games_lost", &[]),
    ("games_drawn", &[]),
    ("goals_for", &[]),
    ("goals_against", &[]),
    ("goal_difference", &[]),
    ("badge_url", &[]),
];

const CLUB_STATS_COLUMNS: &[Column] = &[
    ("name", &[]),
    ("position", &[]),
    ("points", &[]),
    ("games_won", &[]),
    ("games_drawn", &[]),
    ("games_lost", &[]),
    ("goals_for", &[]),
    ("goals_against", &[]),
];

const PLAYER_COLUMNS: &[Column] = &[
    ("player_name", &[]),
    ("club", &["player_club"]),
    ("nationality", &["player_nationality"]),
    ("position", &["player_position"]),
    ("date_of_birth", &["dob"]),
    ("appearances", &[]),
    ("games_played", &[]),
    ("goals", &[]),
    ("assists", &[]),
];

/// Which table a reader holds. Used for schema lookup and log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    Standings,
    ClubStats,
    Players,
}

impl Table {
    fn columns(self) -> &'static [Column] {
        match self {
            Table::Standings => STANDINGS_COLUMNS,
            Table::ClubStats => CLUB_STATS_COLUMNS,
            Table::Players => PLAYER_COLUMNS,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Table::Standings => "standings",
            Table::ClubStats => "club stats",
            Table::Players => "player",
        }
    }
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStandings {
    name: Option<String>,
    position: Option<String>,
    points: Option<String>,
    games_played: Option<String>,
    games_won: Option<String>,
    games_lost: Option<String>,
    games_drawn: Option<String>,
    goals_for: Option<String>,
    goals_against: Option<String>,
    goal_difference: Option<String>,
    badge_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawClubStats {
    name: Option<String>,
    position: Option<String>,
    points: Option<String>,
    games_won: Option<String>,
    games_drawn: Option<String>,
    games_lost: Option<String>,
    goals_for: Option<String>,
    goals_against: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    player_name: Option<String>,
    #[serde(alias = "player_club")]
    club: Option<String>,
    #[serde(alias = "player_nationality")]
    nationality: Option<String>,
    #[serde(alias = "player_position")]
    position: Option<String>,
    #[serde(alias = "dob")]
    date_of_birth: Option<String>,
    appearances: Option<String>,
    games_played: Option<String>,
    goals: Option<String>,
    assists: Option<String>,
}

// ---------------------------------------------------------------------------
// Cell helpers
// ---------------------------------------------------------------------------

/// Parse a whole number, accepting integer-valued floats such as `"12.0"`.
fn parse_whole(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_count(raw: Option<&str>) -> Option<u32> {
    parse_whole(raw).and_then(|n| u32::try_from(n).ok())
}

/// Trimmed text, with blank cells mapped to `None`.
fn text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

/// Names of required columns absent from `headers`, in schema order.
fn missing_columns(headers: &csv::StringRecord, table: Table) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter(|(name, aliases)| {
            !headers
                .iter()
                .any(|h| h == *name || aliases.iter().any(|a| *a == h))
        })
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Error produced by the reader-based loaders before the path is known.
#[derive(Debug)]
enum ReadError {
    Csv(csv::Error),
    MissingColumns(Vec<String>),
}

impl ReadError {
    fn at(self, path: &Path) -> LoadError {
        let path = path.display().to_string();
        match self {
            ReadError::Csv(source) => LoadError::Csv { path, source },
            ReadError::MissingColumns(columns) => LoadError::MissingColumns { path, columns },
        }
    }
}

/// Check the header row, then deserialize every well-formed row into `T`.
/// Malformed rows (ragged, bad UTF-8) are skipped with a warning.
fn read_rows<R: Read, T: serde::de::DeserializeOwned>(
    rdr: R,
    table: Table,
) -> Result<Vec<T>, ReadError> {
    let mut reader = csv_reader(rdr);
    let headers = reader.headers().map_err(ReadError::Csv)?.clone();
    let missing = missing_columns(&headers, table);
    if !missing.is_empty() {
        return Err(ReadError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        match result {
            Ok(raw) => rows.push(raw),
            Err(e) => warn!("skipping malformed {} row: {}", table.label(), e),
        }
    }
    Ok(rows)
}

fn load_standings_from_reader<R: Read>(rdr: R) -> Result<Vec<StandingsRow>, ReadError> {
    let raw_rows: Vec<RawStandings> = read_rows(rdr, Table::Standings)?;
    Ok(raw_rows
        .into_iter()
        .map(|raw| StandingsRow {
            team_name: text(raw.name),
            position: parse_count(raw.position.as_deref()),
            points: parse_whole(raw.points.as_deref()),
            games_played: parse_whole(raw.games_played.as_deref()),
            games_won: parse_whole(raw.games_won.as_deref()),
            games_lost: parse_whole(raw.games_lost.as_deref()),
            games_drawn: parse_whole(raw.games_drawn.as_deref()),
            goals_for: parse_whole(raw.goals_for.as_deref()),
            goals_against: parse_whole(raw.goals_against.as_deref()),
            goal_difference: parse_whole(raw.goal_difference.as_deref()),
            badge_url: text(raw.badge_url),
        })
        .collect())
}

fn load_club_stats_from_reader<R: Read>(rdr: R) -> Result<Vec<ClubStatsRow>, ReadError> {
    let raw_rows: Vec<RawClubStats> = read_rows(rdr, Table::ClubStats)?;
    Ok(raw_rows
        .into_iter()
        .map(|raw| ClubStatsRow {
            team_name: text(raw.name).unwrap_or_default(),
            position: parse_count(raw.position.as_deref()),
            points: parse_whole(raw.points.as_deref()),
            games_won: parse_whole(raw.games_won.as_deref()),
            games_drawn: parse_whole(raw.games_drawn.as_deref()),
            games_lost: parse_whole(raw.games_lost.as_deref()),
            goals_for: parse_whole(raw.goals_for.as_deref()),
            goals_against: parse_whole(raw.goals_against.as_deref()),
        })
        .collect())
}

fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRow>, ReadError> {
    let raw_rows: Vec<RawPlayer> = read_rows(rdr, Table::Players)?;
    let mut players = Vec::with_capacity(raw_rows.len());
    for raw in raw_rows {
        let Some(player_name) = text(raw.player_name) else {
            warn!("skipping player row without a name");
            continue;
        };
        players.push(PlayerRow {
            club_name: text(raw.club).unwrap_or_default(),
            nationality: text(raw.nationality),
            position_group: text(raw.position),
            date_of_birth: text(raw.date_of_birth),
            appearances: parse_count(raw.appearances.as_deref()),
            appearances_fallback: parse_count(raw.games_played.as_deref()),
            goals: parse_count(raw.goals.as_deref()),
            assists: parse_count(raw.assists.as_deref()),
            player_name,
        });
    }
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load the league standings table from a CSV file.
pub fn load_standings(path: &Path) -> Result<Vec<StandingsRow>, LoadError> {
    let rows = load_standings_from_reader(open(path)?).map_err(|e| e.at(path))?;
    info!("Loaded {} standings rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the club season stats table from a CSV file.
pub fn load_club_stats(path: &Path) -> Result<Vec<ClubStatsRow>, LoadError> {
    let rows = load_club_stats_from_reader(open(path)?).map_err(|e| e.at(path))?;
    info!("Loaded {} club stats rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the player stats table from a CSV file.
pub fn load_players(path: &Path) -> Result<Vec<PlayerRow>, LoadError> {
    let rows = load_players_from_reader(open(path)?).map_err(|e| e.at(path))?;
    info!("Loaded {} player rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
