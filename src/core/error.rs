//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`CheckoutBranchError`] which covers every failure mode
//! of git-checkout-branch. It uses `thiserror` for ergonomic error definitions.
//!
//! # Public API
//! - [`CheckoutBranchError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, CheckoutBranchError>`
//!
//! # Error Categories
//! - **Git operations**: Repository not found, git2 library errors, checkout failures
//! - **Terminal I/O**: Non-interactive stdin/stdout, raw mode and read failures
//!
//! Note that an empty branch list and a query matching nothing are *not*
//! errors: the caller skips the session for the former, and the session simply
//! renders an empty list for the latter.

use thiserror::Error;

/// Domain-specific error types for git-checkout-branch
#[derive(Error, Debug)]
pub enum CheckoutBranchError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Branch name is not valid UTF-8")]
    InvalidUtf8BranchName,

    #[error("Failed to checkout branch '{branch}': {message}")]
    CheckoutFailed { branch: String, message: String },

    #[error("git command failed: {message}")]
    GitCommandFailed { message: String },

    // Terminal errors
    #[error("Standard input is not an interactive terminal")]
    NotInteractive,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using CheckoutBranchError
pub type Result<T> = std::result::Result<T, CheckoutBranchError>;

impl CheckoutBranchError {
    /// Create a checkout failed error for a specific branch
    pub fn checkout_failed(branch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CheckoutFailed {
            branch: branch.into(),
            message: message.into(),
        }
    }

    /// Create a git command failed error
    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckoutBranchError::NotInGitRepo;
        assert_eq!(err.to_string(), "Not in a git repository");
    }

    #[test]
    fn test_checkout_failed_error() {
        let err = CheckoutBranchError::checkout_failed("develop", "would be overwritten");
        assert_eq!(
            err.to_string(),
            "Failed to checkout branch 'develop': would be overwritten"
        );
    }

    #[test]
    fn test_git_command_failed_error() {
        let err = CheckoutBranchError::git_command_failed("exit status 128");
        assert!(err.to_string().contains("exit status 128"));
    }

    #[test]
    fn test_not_interactive_error() {
        let err = CheckoutBranchError::NotInteractive;
        assert!(err.to_string().contains("not an interactive terminal"));
    }
}
