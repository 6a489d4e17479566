//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Standardized formatting for the messages git-checkout-branch prints outside
//! of the interactive menu: errors, the post-checkout confirmation, and
//! informational notes.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success markers
//! - **Standardized spacing**: Newline before command output
//! - **User-friendly formatting**: Clear visual hierarchy and readable output

use colored::*;

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

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Switched to branch 'main'");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Information message");
    }
}
