//! Core library components.
//!
//! Env parsing, secrets document generation, redaction, configuration and
//! the startup sequence. Nothing here prints except through the writers
//! handed in by the CLI.

pub mod config;
pub mod constants;
pub mod env;
pub mod launcher;
pub mod redact;
pub mod secrets;
pub mod validation;
