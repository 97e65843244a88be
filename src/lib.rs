//! Envgate - turns a `.env` file into a web app's secrets document and
//! launches the server.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # .env -> secrets.toml
//! │   ├── show          # Redacted display of the secrets document
//! │   ├── launch        # Full startup sequence, ends in exec
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # envgate.toml and CLI overrides
//!     ├── constants     # Default paths and bindings
//!     ├── env           # .env line classifier and parser
//!     ├── secrets       # Secrets document rendering and writing
//!     ├── redact        # *_API_KEY masking
//!     ├── launcher      # Startup state machine
//!     └── validation    # Identifier checks
//! ```

pub mod cli;
pub mod core;
pub mod error;
