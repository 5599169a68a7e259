//! Subcommand implementations.

/// Translation command handler.
pub mod translate;
