//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, white for messages
//! - **Standardized spacing**: Newline before and after headers and messages
//! - **Machine output**: `--json` bypasses all styling via [`print_json`]

use crate::core::error::Result;
use colored::*;
use serde::Serialize;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints a value as pretty JSON without any styling
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Information message");
    }

    #[test]
    fn test_print_section_header_does_not_panic() {
        print_section_header("Todo");
    }

    #[test]
    fn test_print_json() -> Result<()> {
        print_json(&serde_json::json!({ "in_progress": false }))
    }
}
