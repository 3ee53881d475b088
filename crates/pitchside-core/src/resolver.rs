// Free-text team search.
//
// Exact case-insensitive match wins outright; otherwise a unique substring
// match resolves, and zero or several candidates are reported back so the
// caller can ask the user to refine.

use std::collections::BTreeSet;

use tracing::info;

use crate::data::records::StandingsRow;

/// Outcome of resolving a search query against the known team names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Query equals a team name, ignoring case and surrounding whitespace.
    Exact(String),
    /// Query is a substring of exactly one team name.
    Partial(String),
    NoMatch,
    /// Query is a substring of several team names (listed in input order).
    Ambiguous(Vec<String>),
}

impl Resolution {
    /// The resolved display name, if the query picked out a single team.
    pub fn team(&self) -> Option<&str> {
        match self {
            Resolution::Exact(name) | Resolution::Partial(name) => Some(name),
            Resolution::NoMatch | Resolution::Ambiguous(_) => None,
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Distinct, trimmed, non-empty team names from the standings, sorted.
pub fn team_names(standings: &[StandingsRow]) -> Vec<String> {
    standings
        .iter()
        .filter_map(|row| row.team_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Resolve a free-text query to a team name.
///
/// Display names come back with their original casing.
pub fn resolve<S: AsRef<str>>(query: &str, names: &[S]) -> Resolution {
    let q = normalize(query);

    if let Some(exact) = names.iter().find(|name| normalize(name.as_ref()) == q) {
        let name = exact.as_ref().trim().to_string();
        info!("search '{}' matched team '{}' exactly", query.trim(), name);
        return Resolution::Exact(name);
    }

    let mut partial = filter_names(query, names);
    let resolution = match partial.len() {
        0 => Resolution::NoMatch,
        1 => Resolution::Partial(partial.remove(0)),
        _ => Resolution::Ambiguous(partial),
    };
    info!("search '{}' resolved to {:?}", query.trim(), resolution);
    resolution
}

/// Names whose normalized form contains the normalized query.
///
/// An empty query keeps every name, matching the unfiltered team picker.
pub fn filter_names<S: AsRef<str>>(query: &str, names: &[S]) -> Vec<String> {
    let q = normalize(query);
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| name.to_lowercase().contains(&q))
        .map(str::to_string)
        .collect()
}
