//! Secrets document generation.
//!
//! Renders env entries as `KEY = "VALUE"` lines for the web framework's
//! secret store. The document is rebuilt from scratch on every run.

#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::env::EnvFile;
use crate::error::{Result, SecretsError};

/// Ordered key/value pairs destined for the secrets file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretsDocument {
    entries: Vec<(String, String)>,
}

impl SecretsDocument {
    /// Build a document from a parsed env file, keeping input order.
    pub fn from_env(env: &EnvFile) -> Self {
        Self {
            entries: env
                .entries()
                .iter()
                .map(|e| (e.key.clone(), e.value.clone()))
                .collect(),
        }
    }

    /// All entries in document order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as one `KEY = "VALUE"` assignment per line.
    ///
    /// Values are wrapped in double quotes verbatim. A value containing `"`
    /// therefore yields an invalid assignment.
    pub fn render(&self) -> String {
        let mut output = String::new();

        for (key, value) in &self.entries {
            output.push_str(&format!("{} = \"{}\"\n", key, value));
        }

        output
    }

    /// Write the rendered document to `path`, replacing any existing file.
    ///
    /// The content goes to a sibling temp file first and is renamed into
    /// place. The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns `SecretsError::NoParent` for a path without a parent, and
    /// `SecretsError::Write` if any file operation fails.
    pub fn write(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| SecretsError::NoParent(path.to_path_buf()))?;
        let file_name = path
            .file_name()
            .ok_or_else(|| SecretsError::NoParent(path.to_path_buf()))?;

        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = parent.join(tmp_name);

        debug!(path = %path.display(), entries = self.len(), "writing secrets document");

        let to_write_err = |source| SecretsError::Write {
            path: path.to_path_buf(),
            source,
        };

        write_private(&tmp_path, self.render().as_bytes()).map_err(to_write_err)?;
        if let Err(source) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(to_write_err(source).into());
        }

        Ok(())
    }
}

#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(content)?;
    file.flush()?;

    // An existing temp file keeps its old mode.
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, content)
}

/// Read a stored secrets document back as text.
///
/// # Errors
///
/// Returns `SecretsError::NotFound` if the file is missing.
pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SecretsError::NotFound(path.to_path_buf()).into()
        } else {
            SecretsError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into()
        }
    })
}

/// Load the env file and write its secrets document.
///
/// Nothing is written if the env file cannot be read.
pub fn generate(env_path: &Path, secrets_path: &Path) -> Result<SecretsDocument> {
    let env = EnvFile::load(env_path)?;
    let document = SecretsDocument::from_env(&env);
    document.write(secrets_path)?;

    info!(
        entries = document.len(),
        path = %secrets_path.display(),
        "secrets document generated"
    );

    Ok(document)
}

/// Destination directory of a secrets file.
pub fn directory_of(path: &Path) -> Result<PathBuf> {
    path.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| SecretsError::NoParent(path.to_path_buf()).into())
}
