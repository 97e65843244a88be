//! Command-line interface.

pub mod completions;
pub mod generate;
pub mod launch;
pub mod output;
pub mod show;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::{Config, Overrides, Settings};
use crate::error::Result;

/// Envgate - turns a .env file into a secrets document and launches the app.
#[derive(Parser)]
#[command(
    name = "envgate",
    about = "Turns a .env file into a secrets document and launches the app server",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base directory that relative paths resolve against
    #[arg(long, global = true, env = "ENVGATE_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (defaults to envgate.toml in the base directory, if present)
    #[arg(long, global = true, env = "ENVGATE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Path overrides shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Source .env file
    #[arg(long = "env", env = "ENVGATE_ENV_FILE", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Secrets document to write
    #[arg(long = "secrets", env = "ENVGATE_SECRETS_FILE", value_name = "PATH")]
    pub secrets_file: Option<PathBuf>,
}

/// Server overrides for `launch`.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Server program to exec
    #[arg(long, env = "ENVGATE_SERVER", value_name = "PROGRAM")]
    pub server: Option<String>,

    /// Entry-point script passed to the server
    #[arg(long, env = "ENVGATE_ENTRY", value_name = "SCRIPT")]
    pub entry: Option<String>,

    /// Bind address
    #[arg(long, env = "ENVGATE_ADDRESS")]
    pub address: Option<String>,

    /// Listen port
    #[arg(long, env = "ENVGATE_PORT")]
    pub port: Option<u16>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert the .env file into the secrets document
    Generate {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Print the secrets document with *_API_KEY values redacted
    Show {
        #[command(flatten)]
        paths: PathArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Regenerate secrets, show them redacted, and exec the server
    Launch {
        #[command(flatten)]
        paths: PathArgs,
        #[command(flatten)]
        server: ServerArgs,
        /// Print the server command instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Global options that locate configuration.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Context {
    /// Load config and resolve it with the given overrides.
    pub fn settings(&self, paths: PathArgs, server: ServerArgs) -> Result<Settings> {
        let base = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let config = Config::load(&base, self.config.as_deref())?;
        config.resolve(
            &base,
            Overrides {
                env_file: paths.env_file,
                secrets_file: paths.secrets_file,
                program: server.server,
                entry_point: server.entry,
                address: server.address,
                port: server.port,
            },
        )
    }
}

/// Execute a command.
pub fn execute(command: Command, ctx: Context) -> Result<()> {
    use Command::*;

    match command {
        Generate { paths } => generate::execute(ctx.settings(paths, ServerArgs::default())?),
        Show { paths, json } => show::execute(&ctx.settings(paths, ServerArgs::default())?, json),
        Launch {
            paths,
            server,
            dry_run,
        } => launch::execute(ctx.settings(paths, server)?, dry_run),
        Completions { shell } => completions::execute(shell),
    }
}
