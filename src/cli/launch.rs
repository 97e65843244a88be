//! Launch command.
//!
//! Runs the startup sequence and replaces this process with the server.

use std::io::{self, Write};

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::launcher::Launcher;
use crate::error::Result;

/// Regenerate the secrets document, print diagnostics, then exec the server.
///
/// With `dry_run` the server command is printed instead of executed.
pub fn execute(settings: Settings, dry_run: bool) -> Result<()> {
    let mut launcher = Launcher::new(settings);
    launcher.ensure_directory()?;

    launcher.generate()?;

    output::header("Config directory");
    launcher.list_directory(&mut io::stdout().lock())?;

    output::header("Secrets");
    launcher.display_secrets(&mut io::stdout().lock())?;

    let command = launcher.server_command();
    if dry_run {
        output::kv("server:", output::cmd(&command.to_string()));
        return Ok(());
    }

    io::stdout().flush()?;
    let exit_code = launcher.exec_server()?;
    std::process::exit(exit_code);
}
