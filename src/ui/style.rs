//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. All helpers
//! return plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Supported languages")
    pub fn header<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.bold())
    }

    /// Style for secondary/supplementary info (e.g., language names)
    pub fn secondary<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.dimmed())
    }

    /// Style for notes and warnings
    pub fn warning<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.yellow())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.yellow())
    }
}
