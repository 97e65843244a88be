//! Constants used throughout envgate.
//!
//! Centralizes default paths and server bindings.

/// Source environment file name (.env).
pub const ENV_FILE: &str = ".env";

/// Secrets document consumed by the web framework.
pub const SECRETS_FILE: &str = ".streamlit/secrets.toml";

/// Optional configuration file looked up in the base directory.
pub const CONFIG_FILE: &str = "envgate.toml";

/// Web server program launched at the end of the sequence.
pub const SERVER_PROGRAM: &str = "streamlit";

/// Entry-point script handed to the server.
pub const ENTRY_POINT: &str = "streamlit_app.py";

/// Bind address (all interfaces).
pub const SERVER_ADDRESS: &str = "0.0.0.0";

/// Fixed server port.
pub const SERVER_PORT: u16 = 8501;

/// Key suffix whose values are masked in diagnostic output.
pub const REDACTED_SUFFIX: &str = "_API_KEY";

/// Replacement text for masked values.
pub const REDACTED: &str = "REDACTED";
