// Configuration loading and parsing (config/pitchside.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::views::nationality::{GroupingMode, NationalityOptions};

/// Name of the single config file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "pitchside.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub data_paths: DataPaths,
    pub nationality: NationalityOptions,
    pub display: DisplayConfig,
}

/// Resolved locations of the three season tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub standings: PathBuf,
    pub club_stats: PathBuf,
    pub players: PathBuf,
}

/// Keys left out of `[display]` keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub season_label: String,
    pub team_columns: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            season_label: "24/25".to_string(),
            team_columns: 4,
        }
    }
}

// ---------------------------------------------------------------------------
// pitchside.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire pitchside.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    data: DataSection,
    #[serde(default)]
    nationality: NationalitySection,
    #[serde(default)]
    display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct DataSection {
    standings: String,
    club_stats: String,
    players: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct NationalitySection {
    group_small: bool,
    mode: GroupingMode,
    top_n: u32,
    min_pct: u32,
}

impl Default for NationalitySection {
    fn default() -> Self {
        let defaults = NationalityOptions::default();
        NationalitySection {
            group_small: defaults.group_small,
            mode: defaults.mode,
            top_n: defaults.top_n,
            min_pct: defaults.min_pct,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/pitchside.toml` relative to `base_dir`.
///
/// Relative data paths are resolved against `base_dir`. Does not copy
/// defaults; `load_config()` does that first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate_file(&file)?;

    let data_paths = DataPaths {
        standings: resolve_path(base_dir, &file.data.standings),
        club_stats: resolve_path(base_dir, &file.data.club_stats),
        players: resolve_path(base_dir, &file.data.players),
    };

    Ok(Config {
        data_paths,
        nationality: NationalityOptions {
            group_small: file.nationality.group_small,
            mode: file.nationality.mode,
            top_n: file.nationality.top_n,
            min_pct: file.nationality.min_pct,
        },
        display: file.display,
    })
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn resolve_path(base_dir: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw.trim());
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_file(file: &ConfigFile) -> Result<(), ConfigError> {
    let data_fields: &[(&str, &str)] = &[
        ("data.standings", &file.data.standings),
        ("data.club_stats", &file.data.club_stats),
        ("data.players", &file.data.players),
    ];
    for (name, value) in data_fields {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    let top_n = file.nationality.top_n;
    if !NationalityOptions::TOP_N_RANGE.contains(&top_n) {
        return Err(ConfigError::ValidationError {
            field: "nationality.top_n".into(),
            message: format!("must be between 3 and 15 inclusive, got {top_n}"),
        });
    }

    let min_pct = file.nationality.min_pct;
    if !NationalityOptions::MIN_PCT_RANGE.contains(&min_pct) {
        return Err(ConfigError::ValidationError {
            field: "nationality.min_pct".into(),
            message: format!("must be between 1 and 20 inclusive, got {min_pct}"),
        });
    }

    if file.display.team_columns == 0 {
        return Err(ConfigError::ValidationError {
            field: "display.team_columns".into(),
            message: "must be > 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
