//! Error types.
//!
//! One enum per subsystem, folded into [`Error`] for the CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by every envgate operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Secrets(#[from] SecretsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reading the source `.env` file.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("env file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read env file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors reading or writing the secrets document.
#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("secrets document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("secrets document has no parent directory: {}", .0.display())]
    NoParent(PathBuf),

    #[error("failed to write secrets document {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read secrets document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading or validating `envgate.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors raised while running the launch sequence.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to create config directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list config directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("launch step '{step}' requires stage {expected}, found {actual}")]
    OutOfOrder {
        step: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("server program not found: {program}")]
    ProgramNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to start server {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
