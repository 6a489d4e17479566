//! Core functionality for the git-checkout-branch tool.
//!
//! This module provides the fundamental building blocks around the selection
//! engine: git operations, error handling, and CLI output formatting.

pub mod error;
pub mod git;
pub mod output;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{CheckoutBranchError, Result};

// === Git operations ===
// Branch source (enumeration) and branch sink (checkout)
pub use git::{extract_checkout_target, BranchScope, GitRepo};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_success};
