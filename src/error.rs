use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single `docker` / `docker-compose` invocation.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with status {code}\n{output}")]
    Exit {
        program: String,
        code: i32,
        output: String,
    },
}

/// Configuration that cannot be turned into usable settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{key}` is not configured")]
    Missing { key: &'static str },

    #[error("`{key}` = {} is not a directory", path.display())]
    NotADirectory { key: &'static str, path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid name_pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("could not serialize menu: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
