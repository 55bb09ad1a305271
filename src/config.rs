use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::table::Offsets;

/// Matches `stack_admin_1` and captures `admin`.
pub const DEFAULT_NAME_PATTERN: &str = r"^[^_]+_(.+)_\d+$";

const LOCAL_FILE: &str = ".docker-bar.toml";

/// Global + plugin-local configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Directory holding the `docker` and `docker-compose` binaries.
    pub docker_path: Option<PathBuf>,
    /// Working directory of every CLI call (where docker-compose.yml lives).
    pub compose_dir: Option<PathBuf>,
    /// List stopped containers as well (`docker ps -a`).
    pub all_containers: bool,
    /// Upper bound for a menu column.
    pub max_column_width: usize,
    /// Regex deriving the app from a container name, capture group 1.
    pub name_pattern: String,
    /// How table columns are located in the header line.
    pub column_offsets: Offsets,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docker_path: None,
            compose_dir: None,
            all_containers: false,
            max_column_width: 50,
            name_pattern: DEFAULT_NAME_PATTERN.into(),
            column_offsets: Offsets::Substring,
        }
    }
}

/// Validated configuration, ready to hand to the tools.
#[derive(Debug, Clone)]
pub struct Settings {
    pub docker_path: PathBuf,
    pub compose_dir: PathBuf,
    pub all_containers: bool,
    pub max_column_width: usize,
    pub name_pattern: Regex,
    pub column_offsets: Offsets,
}

impl Config {
    /// Load config with priority: --config > .docker-bar.toml (next to the plugin)
    /// > ~/.config/docker-bar/config.toml > defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // 1. Global config
        if let Some(path) = global_config_path()
            && let Some(global) = load_file(&path)?
        {
            config = merge(config, global);
        }

        // 2. Plugin-local config (overrides global)
        if let Some(path) = local_config_path()
            && let Some(local) = load_file(&path)?
        {
            config = merge(config, local);
        }

        // 3. Explicit file, which has to exist
        if let Some(path) = explicit {
            config = merge(config, read_file(path)?);
        }

        Ok(config)
    }

    /// Check required keys and build the settings the tools run with.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let docker_path = require_dir("docker_path", self.docker_path.as_deref())?;
        let compose_dir = require_dir("compose_dir", self.compose_dir.as_deref())?;
        let name_pattern = Regex::new(&self.name_pattern)?;

        Ok(Settings {
            docker_path,
            compose_dir,
            all_containers: self.all_containers,
            max_column_width: self.max_column_width,
            name_pattern,
            column_offsets: self.column_offsets,
        })
    }

    /// Generate a default config file content.
    pub fn default_toml() -> &'static str {
        r#"# docker-bar configuration
# Place in ~/.config/docker-bar/config.toml (global) or .docker-bar.toml
# next to the plugin executable.

# Required: directory containing the docker and docker-compose binaries
# docker_path = "/usr/local/bin"

# Required: directory holding docker-compose.yml, used as working directory
# compose_dir = "/Users/me/stack"

# Also list stopped containers
all_containers = false

# Widest a menu column may get
max_column_width = 50

# Container name -> app, capture group 1 ("stack_admin_1" -> "admin")
name_pattern = '^[^_]+_(.+)_\d+$'

# Column lookup in table headers: "substring" (first occurrence of the title)
# or "sequential" (search after the previous title)
column_offsets = "substring"
"#
    }
}

/// Partial config for TOML deserialization (all fields optional).
#[derive(Debug, Deserialize)]
struct PartialConfig {
    docker_path: Option<PathBuf>,
    compose_dir: Option<PathBuf>,
    all_containers: Option<bool>,
    max_column_width: Option<usize>,
    name_pattern: Option<String>,
    column_offsets: Option<Offsets>,
}

pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("docker-bar").join("config.toml"))
}

pub fn local_config_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(LOCAL_FILE))
}

fn load_file(path: &Path) -> Result<Option<PartialConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    read_file(path).map(Some)
}

fn read_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn merge(base: Config, partial: PartialConfig) -> Config {
    Config {
        docker_path: partial.docker_path.or(base.docker_path),
        compose_dir: partial.compose_dir.or(base.compose_dir),
        all_containers: partial.all_containers.unwrap_or(base.all_containers),
        max_column_width: partial.max_column_width.unwrap_or(base.max_column_width),
        name_pattern: partial.name_pattern.unwrap_or(base.name_pattern),
        column_offsets: partial.column_offsets.unwrap_or(base.column_offsets),
    }
}

fn require_dir(key: &'static str, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = path.ok_or(ConfigError::Missing { key })?;
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory {
            key,
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}
