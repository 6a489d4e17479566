//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-checkout-branch output and error
//! messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the checkout confirmation line
pub fn switched_to(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Switched to branch '{branch}'"))
}

/// Creates a predicate that checks for the empty-repository notice
pub fn no_branches() -> impl Predicate<str> {
    predicates::str::contains("No branches found")
}
