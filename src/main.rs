//! Envgate - turns a .env file into a secrets document and launches the app.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envgate::cli::output;
use envgate::cli::{execute, Cli, Context};
use envgate::error::{EnvError, Error, LaunchError, SecretsError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVGATE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envgate=debug")
        } else {
            EnvFilter::new("envgate=warn")
        }
    });

    // stdout carries the redacted document, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let ctx = Context {
        dir: cli.dir,
        config: cli.config,
    };

    if let Err(e) = execute(cli.command, ctx) {
        let suggestion = match &e {
            Error::Env(EnvError::NotFound(_)) => Some("create the .env file or pass --env <path>"),
            Error::Secrets(SecretsError::NotFound(_)) => Some("run: envgate generate"),
            Error::Launch(LaunchError::ProgramNotFound { .. }) => {
                Some("install the server or pass --server <program>")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
