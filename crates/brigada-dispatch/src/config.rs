//! Configuration loading and typed config structures for the dispatch
//! engine.
//!
//! The canonical configuration lives in `brigada-config.yaml` at the
//! project root. Every section is optional; missing values fall back to
//! the built-in roster, map and logging defaults.

use std::path::Path;

use brigada_types::{Team, TeamId, TeamStatus};
use brigada_world::{DEFAULT_LOCATIONS, EdgeSpec, default_edge_specs};
use serde::Deserialize;

use crate::team_registry::DEFAULT_ROSTER;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level dispatch configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DispatchConfig {
    /// Seed roster of field teams.
    #[serde(default = "default_teams")]
    pub teams: Vec<TeamConfig>,

    /// Locations and links of the dispatch map.
    #[serde(default)]
    pub map: MapConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            teams: default_teams(),
            map: MapConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DispatchConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `BRIGADA_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // Treat an empty document as all defaults.
        if yaml.trim().is_empty() {
            let mut config = Self::default();
            config.logging.apply_env_overrides();
            return Ok(config);
        }
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Build the team records of the seed roster.
    pub fn roster(&self) -> Vec<Team> {
        self.teams.iter().map(TeamConfig::to_team).collect()
    }
}

/// One team of the seed roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamConfig {
    /// Roster identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Map location the team departs from.
    pub home_base: String,
    /// Starting availability.
    #[serde(default = "default_team_status")]
    pub status: TeamStatus,
}

impl TeamConfig {
    /// Convert into a roster record.
    pub fn to_team(&self) -> Team {
        Team {
            id: self.id,
            name: self.name.clone(),
            home_base: self.home_base.clone(),
            status: self.status,
        }
    }
}

/// Dispatch map configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Location names. Order sets the route tie-break.
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,

    /// Undirected weighted links between locations.
    #[serde(default = "default_edge_specs")]
    pub edges: Vec<EdgeSpec>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            locations: default_locations(),
            edges: default_edge_specs(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Override the log level with `BRIGADA_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BRIGADA_LOG_LEVEL") {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_teams() -> Vec<TeamConfig> {
    DEFAULT_ROSTER
        .iter()
        .map(|&(id, name, home_base)| TeamConfig {
            id: TeamId(id),
            name: name.to_owned(),
            home_base: home_base.to_owned(),
            status: TeamStatus::Available,
        })
        .collect()
}

const fn default_team_status() -> TeamStatus {
    TeamStatus::Available
}

fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|&s| s.to_owned()).collect()
}

fn default_log_level() -> String {
    "info".to_owned()
}
