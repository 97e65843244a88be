//! Identifier checks used by the env line classifier.

/// Check whether `key` is a valid environment identifier.
///
/// Identifiers match `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
