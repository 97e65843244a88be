//! Env file parsing.
//!
//! Reads a flat `KEY=VALUE` file. Each line is either an entry or skipped;
//! skipped lines are never an error.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace, warn};

use crate::core::validation::is_identifier;
use crate::error::{EnvError, Result};

/// One `KEY=VALUE` line with its value unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Why a line produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
    Malformed,
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Entry(Entry),
    Skip(SkipReason),
}

/// Classify one line of an env file.
///
/// A line is an entry when it reads `<whitespace>IDENT=<rest>` with no space
/// between the identifier and `=`. Everything else is skipped.
pub fn parse_line(line: &str) -> Line {
    let body = line.trim_start();

    if body.trim_end().is_empty() {
        return Line::Skip(SkipReason::Blank);
    }
    if body.starts_with('#') {
        return Line::Skip(SkipReason::Comment);
    }

    match body.split_once('=') {
        Some((key, raw)) if is_identifier(key) => Line::Entry(Entry {
            key: key.to_string(),
            value: unquote(raw).to_string(),
        }),
        _ => Line::Skip(SkipReason::Malformed),
    }
}

/// Trim whitespace and remove one matching pair of surrounding quotes.
///
/// Inner quotes and backslashes are left as-is.
pub fn unquote(raw: &str) -> &str {
    let value = raw.trim();

    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }

    value
}

/// Classify one raw line, skipping any line that is not valid UTF-8.
pub fn parse_raw_line(raw: &[u8]) -> Line {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

    match std::str::from_utf8(raw) {
        Ok(line) => parse_line(line),
        Err(_) => Line::Skip(SkipReason::Malformed),
    }
}

/// A parsed env file.
#[derive(Debug, Clone)]
pub struct EnvFile {
    entries: Vec<Entry>,
}

impl EnvFile {
    /// Read and parse an env file from disk.
    ///
    /// The whole file is read before anything else happens, so a read failure
    /// leaves no side effects.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::NotFound` if the file does not exist, or
    /// `EnvError::Read` for any other I/O failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading env file");

        let contents = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                EnvError::NotFound(path.to_path_buf())
            } else {
                EnvError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(Self::parse(contents))
    }

    /// Parse env file contents already in memory.
    ///
    /// Lines end at `\n` with an optional trailing `\r`.
    pub fn parse(contents: impl AsRef<[u8]>) -> Self {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (index, raw) in contents.as_ref().split(|&b| b == b'\n').enumerate() {
            match parse_raw_line(raw) {
                Line::Entry(entry) => {
                    if !seen.insert(entry.key.clone()) {
                        warn!(key = %entry.key, line = index + 1, "duplicate key in env file");
                    }
                    entries.push(entry);
                }
                Line::Skip(reason) => {
                    trace!(line = index + 1, ?reason, "skipping line");
                }
            }
        }

        debug!(entries = entries.len(), "env file parsed");

        Self { entries }
    }

    /// Entries in input order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
