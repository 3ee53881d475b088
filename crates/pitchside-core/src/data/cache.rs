// Path-keyed snapshot cache for the season tables.
//
// Each table is read at most once per path for the lifetime of the cache.
// Repeated requests hand back the same `Arc`, so every view in a session
// works off one immutable snapshot. Failed loads are not cached.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::loader::{self, LoadError};
use super::records::{ClubStatsRow, PlayerRow, StandingsRow};
use crate::config::DataPaths;

/// Immutable rows shared between every view that reads a table.
pub type Snapshot<T> = Arc<Vec<T>>;

/// Loaded tables for one row type, keyed by source path.
#[derive(Debug)]
pub struct SnapshotCache<T> {
    entries: HashMap<PathBuf, Snapshot<T>>,
}

impl<T> Default for SnapshotCache<T> {
    fn default() -> Self {
        SnapshotCache {
            entries: HashMap::new(),
        }
    }
}

impl<T> SnapshotCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot for `path`, loading it with `load` on the
    /// first request.
    pub fn get_or_load<F>(&mut self, path: &Path, load: F) -> Result<Snapshot<T>, LoadError>
    where
        F: FnOnce(&Path) -> Result<Vec<T>, LoadError>,
    {
        if let Some(snapshot) = self.entries.get(path) {
            debug!("cache hit for {}", path.display());
            return Ok(Arc::clone(snapshot));
        }
        let snapshot = Arc::new(load(path)?);
        self.entries.insert(path.to_path_buf(), Arc::clone(&snapshot));
        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three season tables for one session, loaded lazily from the
/// configured paths.
#[derive(Debug)]
pub struct Datasets {
    paths: DataPaths,
    standings: SnapshotCache<StandingsRow>,
    club_stats: SnapshotCache<ClubStatsRow>,
    players: SnapshotCache<PlayerRow>,
}

impl Datasets {
    pub fn new(paths: DataPaths) -> Self {
        Datasets {
            paths,
            standings: SnapshotCache::new(),
            club_stats: SnapshotCache::new(),
            players: SnapshotCache::new(),
        }
    }

    pub fn standings(&mut self) -> Result<Snapshot<StandingsRow>, LoadError> {
        self.standings
            .get_or_load(&self.paths.standings, loader::load_standings)
    }

    pub fn club_stats(&mut self) -> Result<Snapshot<ClubStatsRow>, LoadError> {
        self.club_stats
            .get_or_load(&self.paths.club_stats, loader::load_club_stats)
    }

    pub fn players(&mut self) -> Result<Snapshot<PlayerRow>, LoadError> {
        self.players
            .get_or_load(&self.paths.players, loader::load_players)
    }
}
