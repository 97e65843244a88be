//! Configuration file management.
//!
//! Handles reading and validating the optional `envgate.toml`, and resolving
//! its paths against an explicit base directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Launcher configuration stored in `envgate.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub server: Server,
}

/// Input and output file locations, relative to the base directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Paths {
    /// Source `KEY=VALUE` file
    pub env_file: PathBuf,
    /// Generated secrets document
    pub secrets_file: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(constants::ENV_FILE),
            secrets_file: PathBuf::from(constants::SECRETS_FILE),
        }
    }
}

/// Web server invocation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Server {
    /// Program looked up on `PATH`
    pub program: String,
    /// Script passed to `<program> run`
    pub entry_point: String,
    pub address: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            program: constants::SERVER_PROGRAM.to_string(),
            entry_point: constants::ENTRY_POINT.to_string(),
            address: constants::SERVER_ADDRESS.to_string(),
            port: constants::SERVER_PORT,
        }
    }
}

/// Overrides collected from CLI flags and their environment variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub env_file: Option<PathBuf>,
    pub secrets_file: Option<PathBuf>,
    pub program: Option<String>,
    pub entry_point: Option<String>,
    pub address: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved settings with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the server runs in
    pub base: PathBuf,
    pub env_file: PathBuf,
    pub secrets_file: PathBuf,
    pub server: Server,
}

impl Config {
    /// Load configuration for `base`.
    ///
    /// An explicit `path` must exist. Without one, `envgate.toml` in `base`
    /// is used when present and defaults apply otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit file, or
    /// `ConfigError::Parse` if the TOML is malformed.
    pub fn load(base: &Path, path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (base.join(p), true),
            None => (base.join(constants::CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::NotFound(path).into());
            }
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides and resolve paths against `base`.
    pub fn resolve(mut self, base: &Path, overrides: Overrides) -> Result<Settings> {
        if let Some(v) = overrides.env_file {
            self.paths.env_file = v;
        }
        if let Some(v) = overrides.secrets_file {
            self.paths.secrets_file = v;
        }
        if let Some(v) = overrides.program {
            self.server.program = v;
        }
        if let Some(v) = overrides.entry_point {
            self.server.entry_point = v;
        }
        if let Some(v) = overrides.address {
            self.server.address = v;
        }
        if let Some(v) = overrides.port {
            self.server.port = v;
        }

        self.validate()?;

        let settings = Settings {
            base: base.to_path_buf(),
            env_file: base.join(&self.paths.env_file),
            secrets_file: base.join(&self.paths.secrets_file),
            server: self.server,
        };
        debug!(
            env_file = %settings.env_file.display(),
            secrets_file = %settings.secrets_file.display(),
            port = settings.server.port,
            "settings resolved"
        );

        Ok(settings)
    }

    /// Validate field values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field, reason: &str| -> Result<()> {
            Err(ConfigError::InvalidValue {
                field,
                reason: reason.to_string(),
            }
            .into())
        };

        if self.server.port == 0 {
            return invalid("server.port", "must be between 1 and 65535");
        }
        if self.server.program.trim().is_empty() {
            return invalid("server.program", "must not be empty");
        }
        if self.server.entry_point.trim().is_empty() {
            return invalid("server.entry_point", "must not be empty");
        }
        if self.server.address.trim().is_empty() {
            return invalid("server.address", "must not be empty");
        }
        if self.paths.secrets_file.file_name().is_none() {
            return invalid("paths.secrets_file", "must name a file");
        }

        Ok(())
    }
}
