//! Display-only masking of secret values.
//!
//! Any assignment whose key ends in `_API_KEY` has its value replaced with
//! `"REDACTED"`. The key and the text around `=` are kept byte-for-byte.

use serde::Serialize;
use std::borrow::Cow;

use crate::core::constants::{REDACTED, REDACTED_SUFFIX};

/// Whether values for this key are masked.
pub fn is_redacted_key(key: &str) -> bool {
    key.ends_with(REDACTED_SUFFIX)
}

/// Redact a single document line.
pub fn redact_line(line: &str) -> Cow<'_, str> {
    let Some((left, right)) = line.split_once('=') else {
        return Cow::Borrowed(line);
    };

    if !is_redacted_key(left.trim()) {
        return Cow::Borrowed(line);
    }

    let spacing = &right[..right.len() - right.trim_start().len()];
    Cow::Owned(format!("{}={}\"{}\"", left, spacing, REDACTED))
}

/// Redact a whole document, keeping its line endings.
pub fn redact_document(contents: &str) -> String {
    let mut output = String::with_capacity(contents.len());

    for chunk in contents.split_inclusive('\n') {
        let (line, ending) = split_ending(chunk);
        output.push_str(&redact_line(line));
        output.push_str(ending);
    }

    output
}

fn split_ending(chunk: &str) -> (&str, &str) {
    if let Some(line) = chunk.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = chunk.strip_suffix('\n') {
        (line, "\n")
    } else {
        (chunk, "")
    }
}

/// A document assignment prepared for JSON display.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RedactedEntry {
    pub key: String,
    pub value: String,
}

/// Extract `KEY = "VALUE"` assignments with masked values.
///
/// Lines that are not assignments are left out.
pub fn redacted_entries(contents: &str) -> Vec<RedactedEntry> {
    contents
        .lines()
        .filter_map(|line| {
            let (left, right) = line.split_once('=')?;
            let key = left.trim();
            if key.is_empty() {
                return None;
            }

            let value = if is_redacted_key(key) {
                REDACTED.to_string()
            } else {
                let raw = right.trim();
                raw.strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .unwrap_or(raw)
                    .to_string()
            };

            Some(RedactedEntry {
                key: key.to_string(),
                value,
            })
        })
        .collect()
}
