// Nationality breakdown of a squad, with optional folding of the long tail
// into a single "Other" bucket.

use std::ops::RangeInclusive;

use serde::Deserialize;

use super::{ViewContext, ViewError};

/// Label of the synthetic bucket holding merged nationalities.
pub const OTHER_LABEL: &str = "Other";

/// How small nationalities are picked for merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum GroupingMode {
    /// Keep the N largest nationalities.
    #[default]
    #[serde(alias = "top_n")]
    TopN,
    /// Keep nationalities at or above a share of the squad.
    #[serde(alias = "threshold")]
    Threshold,
}

impl GroupingMode {
    pub fn toggled(self) -> Self {
        match self {
            GroupingMode::TopN => GroupingMode::Threshold,
            GroupingMode::Threshold => GroupingMode::TopN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NationalityOptions {
    /// When false every nationality is listed on its own.
    pub group_small: bool,
    pub mode: GroupingMode,
    pub top_n: u32,
    /// Minimum share, in whole percent, to stay out of "Other".
    pub min_pct: u32,
}

impl Default for NationalityOptions {
    fn default() -> Self {
        NationalityOptions {
            group_small: true,
            mode: GroupingMode::TopN,
            top_n: 8,
            min_pct: 5,
        }
    }
}

impl NationalityOptions {
    pub const TOP_N_RANGE: RangeInclusive<u32> = 3..=15;
    pub const MIN_PCT_RANGE: RangeInclusive<u32> = 1..=20;

    /// Copy with `top_n` and `min_pct` forced into their allowed ranges.
    pub fn clamped(self) -> Self {
        NationalityOptions {
            top_n: self
                .top_n
                .clamp(*Self::TOP_N_RANGE.start(), *Self::TOP_N_RANGE.end()),
            min_pct: self
                .min_pct
                .clamp(*Self::MIN_PCT_RANGE.start(), *Self::MIN_PCT_RANGE.end()),
            ..self
        }
    }

    /// Step the parameter of the active mode by `delta`, staying in range.
    pub fn stepped(self, delta: i32) -> Self {
        let step = |value: u32| value.saturating_add_signed(delta);
        let next = match self.mode {
            GroupingMode::TopN => NationalityOptions {
                top_n: step(self.top_n),
                ..self
            },
            GroupingMode::Threshold => NationalityOptions {
                min_pct: step(self.min_pct),
                ..self
            },
        };
        next.clamped()
    }
}

/// One row of the nationality table.
#[derive(Debug, Clone, PartialEq)]
pub struct NationalityCount {
    pub nationality: String,
    pub player_count: usize,
    /// Share of the team's players, rounded to one decimal place.
    pub percentage: f64,
}

/// Count occurrences, ordered by descending count. Equal counts keep the
/// order in which each nationality first appeared.
pub fn count_nationalities<'a, I>(nationalities: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for nat in nationalities {
        match counts.iter_mut().find(|(name, _)| name == nat) {
            Some((_, n)) => *n += 1,
            None => counts.push((nat.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Apply the grouping policy to descending counts. Merging only moves
/// players into "Other"; the total is unchanged. A nationality literally
/// named "Other" absorbs the merged players instead of getting a twin row.
pub fn group_counts(counts: Vec<(String, usize)>, options: &NationalityOptions) -> Vec<(String, usize)> {
    if !options.group_small {
        return counts;
    }
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    let (kept, rest) = match options.mode {
        GroupingMode::TopN => {
            let mut kept = counts;
            let rest = kept.split_off((options.top_n as usize).min(kept.len()));
            (kept, rest)
        }
        GroupingMode::Threshold => {
            let min_pct = options.min_pct as usize;
            counts
                .into_iter()
                .partition(|(_, n)| n * 100 >= min_pct * total)
        }
    };
    if rest.is_empty() {
        return kept;
    }

    let merged: usize = rest.iter().map(|(_, n)| n).sum();
    let mut grouped = kept;
    let resort = match grouped.iter_mut().find(|(name, _)| name == OTHER_LABEL) {
        Some((_, n)) => {
            *n += merged;
            true
        }
        None => {
            grouped.push((OTHER_LABEL.to_string(), merged));
            options.mode == GroupingMode::Threshold
        }
    };
    if resort {
        grouped.sort_by(|a, b| b.1.cmp(&a.1));
    }
    grouped
}

/// Shares of `total` in tenths of a percent, summing to exactly 1000.
///
/// Each share is floored, then the leftover tenths go to the rows with the
/// largest remainders. Equal remainders favour the earlier row.
fn tenths_of_percent(counts: &[usize], total: usize) -> Vec<u64> {
    if total == 0 {
        return vec![0; counts.len()];
    }
    let total = total as u64;
    let mut tenths: Vec<u64> = counts.iter().map(|&n| n as u64 * 1000 / total).collect();
    let assigned: u64 = tenths.iter().sum();
    let mut by_remainder: Vec<usize> = (0..counts.len()).collect();
    by_remainder.sort_by_key(|&i| std::cmp::Reverse(counts[i] as u64 * 1000 % total));
    for &i in by_remainder.iter().take(1000u64.saturating_sub(assigned) as usize) {
        tenths[i] += 1;
    }
    tenths
}

/// Nationality breakdown for the selected team.
///
/// Players without a nationality are left out of both the counts and the
/// total. An empty result is reported as `NoPlayers`.
pub fn nationality_distribution(
    ctx: &ViewContext<'_>,
    options: &NationalityOptions,
) -> Result<Vec<NationalityCount>, ViewError> {
    let team = ctx.team()?;
    let players = ctx.team_players()?;
    let nationalities: Vec<&str> = players
        .iter()
        .filter_map(|p| p.nationality.as_deref())
        .filter(|n| !n.is_empty())
        .collect();
    if nationalities.is_empty() {
        return Err(ViewError::NoPlayers(team.to_string()));
    }

    let total = nationalities.len();
    let grouped = group_counts(count_nationalities(nationalities), options);
    let sizes: Vec<usize> = grouped.iter().map(|(_, n)| *n).collect();
    Ok(grouped
        .into_iter()
        .zip(tenths_of_percent(&sizes, total))
        .map(|((nationality, player_count), tenths)| NationalityCount {
            percentage: tenths as f64 / 10.0,
            nationality,
            player_count,
        })
        .collect())
}
