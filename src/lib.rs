//! # trans - Command-line Translator
//!
//! `trans` translates a piece of text with the Google Translate web service
//! and prints the result, optionally with its pronunciation and the detected
//! source language.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate to the configured (or default) language
//! trans "Hola, ¿cómo estás?"
//!
//! # Pick a destination by code or by name
//! trans --dst ja "Good morning"
//! trans --dst Japanese "Good morning"
//!
//! # Show pronunciation and detected languages
//! trans -p -v --dst ru "Thank you"
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from a `config` file in the working directory:
//!
//! ```text
//! # trans defaults
//! [trans]
//! dst = fr
//! v = True
//! p = False
//! ```
//!
//! Command-line flags take precedence over the file.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Config file parsing and option resolution.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Translation backend and language tables.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
