//! Show command.
//!
//! Prints the stored secrets document with `*_API_KEY` values masked.

use std::io::Write;
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::{redact, secrets};
use crate::error::Result;

/// Print the redacted document, as text or as JSON.
pub fn execute(settings: &Settings, json: bool) -> Result<()> {
    let contents = Zeroizing::new(secrets::read(&settings.secrets_file)?);

    let rendered = if json {
        let entries = redact::redacted_entries(&contents);
        format!("{}\n", serde_json::to_string_pretty(&entries)?)
    } else {
        redact::redact_document(&contents)
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
