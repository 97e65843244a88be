//! Startup sequence.
//!
//! Runs once at container start, in a fixed order with no retries:
//!
//! ```text
//! Init → DirectoryEnsured → SecretsDisplayed → ServerRunning
//! ```
//!
//! Each step checks the current [`Stage`] so the order cannot be skipped.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::config::{Server, Settings};
use crate::core::redact;
use crate::core::secrets::{self, SecretsDocument};
use crate::error::{LaunchError, Result};

/// Position in the startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    DirectoryEnsured,
    SecretsDisplayed,
    ServerRunning,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Init => "init",
            Stage::DirectoryEnsured => "directory-ensured",
            Stage::SecretsDisplayed => "secrets-displayed",
            Stage::ServerRunning => "server-running",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The web server command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ServerCommand {
    /// `<program> run <entry> --server.port=<port> --server.address=<address>`
    pub fn from_server(server: &Server) -> Self {
        Self {
            program: server.program.clone(),
            args: vec![
                "run".to_string(),
                server.entry_point.clone(),
                format!("--server.port={}", server.port),
                format!("--server.address={}", server.address),
            ],
        }
    }

    /// Locate the program on `PATH`.
    pub fn resolve(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|source| {
            LaunchError::ProgramNotFound {
                program: self.program.clone(),
                source,
            }
            .into()
        })
    }
}

impl fmt::Display for ServerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Drives the startup sequence for one set of resolved settings.
#[derive(Debug)]
pub struct Launcher {
    settings: Settings,
    stage: Stage,
}

impl Launcher {
    /// Start a new sequence at [`Stage::Init`].
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            stage: Stage::Init,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Directory that holds the secrets document
    pub fn config_dir(&self) -> Result<PathBuf> {
        secrets::directory_of(&self.settings.secrets_file)
    }

    pub fn server_command(&self) -> ServerCommand {
        ServerCommand::from_server(&self.settings.server)
    }

    fn require(&self, step: &'static str, expected: Stage) -> Result<()> {
        if self.stage != expected {
            return Err(LaunchError::OutOfOrder {
                step,
                expected: expected.as_str(),
                actual: self.stage.as_str(),
            }
            .into());
        }
        Ok(())
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = %self.stage, to = %next, "launch stage");
        self.stage = next;
    }

    /// Create the config directory if it does not exist.
    pub fn ensure_directory(&mut self) -> Result<()> {
        self.require("ensure_directory", Stage::Init)?;

        let dir = self.config_dir()?;
        std::fs::create_dir_all(&dir).map_err(|source| LaunchError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        self.advance(Stage::DirectoryEnsured);
        Ok(())
    }

    /// Rebuild the secrets document from the env file.
    pub fn generate(&mut self) -> Result<SecretsDocument> {
        self.require("generate", Stage::DirectoryEnsured)?;
        secrets::generate(&self.settings.env_file, &self.settings.secrets_file)
    }

    /// Print the config directory entries, sorted by name.
    pub fn list_directory(&self, out: &mut impl Write) -> Result<()> {
        self.require("list_directory", Stage::DirectoryEnsured)?;

        let dir = self.config_dir()?;
        let names = list_names(&dir).map_err(|source| LaunchError::ListDir {
            path: dir.clone(),
            source,
        })?;

        writeln!(out, "{}:", dir.display())?;
        for name in names {
            writeln!(out, "  {}", name)?;
        }
        Ok(())
    }

    /// Print the stored secrets document with `*_API_KEY` values masked.
    ///
    /// The file on disk is left untouched.
    pub fn display_secrets(&mut self, out: &mut impl Write) -> Result<()> {
        self.require("display_secrets", Stage::DirectoryEnsured)?;

        let contents = Zeroizing::new(secrets::read(&self.settings.secrets_file)?);
        out.write_all(redact::redact_document(&contents).as_bytes())?;
        out.flush()?;

        self.advance(Stage::SecretsDisplayed);
        Ok(())
    }

    /// Hand control to the web server.
    ///
    /// On unix the current process is replaced and this only returns on
    /// failure, leaving the stage at [`Stage::SecretsDisplayed`]. Elsewhere
    /// the server runs as a child and its exit code is returned.
    pub fn exec_server(&mut self) -> Result<i32> {
        self.require("exec_server", Stage::SecretsDisplayed)?;

        let command = self.server_command();
        let program = command.resolve()?;
        info!(
            program = %program.display(),
            address = %self.settings.server.address,
            port = self.settings.server.port,
            "starting server"
        );

        let mut cmd = Command::new(&program);
        cmd.args(&command.args);
        if !self.settings.base.as_os_str().is_empty() {
            cmd.current_dir(&self.settings.base);
        }

        let exit_code = run(cmd, &command.program)?;
        self.advance(Stage::ServerRunning);
        Ok(exit_code)
    }
}

#[cfg(unix)]
fn run(mut cmd: Command, program: &str) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    let source = cmd.exec();
    Err(LaunchError::Exec {
        program: program.to_string(),
        source,
    }
    .into())
}

#[cfg(not(unix))]
fn run(mut cmd: Command, program: &str) -> Result<i32> {
    let status = cmd.status().map_err(|source| LaunchError::Exec {
        program: program.to_string(),
        source,
    })?;
    Ok(status.code().unwrap_or(1))
}

fn list_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}
