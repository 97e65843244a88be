//! Generate command.
//!
//! Converts the .env file into the secrets document.

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::launcher::Launcher;
use crate::error::Result;

/// Write the secrets document, creating its directory if needed.
pub fn execute(settings: Settings) -> Result<()> {
    let path = settings.secrets_file.display().to_string();

    let mut launcher = Launcher::new(settings);
    launcher.ensure_directory()?;
    let document = launcher.generate()?;

    output::success(&format!(
        "wrote {} {} to {}",
        document.len(),
        if document.len() == 1 { "entry" } else { "entries" },
        output::path(&path)
    ));
    if document.is_empty() {
        output::warn("no KEY=VALUE entries found in the env file");
    }

    Ok(())
}
