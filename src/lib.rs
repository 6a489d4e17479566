//! git-checkout-branch - An interactive branch switcher for Git.
//!
//! This library provides the building blocks behind the `git-checkout-branch`
//! binary: git repository access, the searchable selection menu, and error
//! handling. The menu itself is a pure state machine, so every behavior of
//! the interactive flow can be exercised without a terminal.
//!
//! # Public API
//! - [`core`] — repository access, checkout execution, errors, and output
//! - [`select`] — candidate building, query matching, match highlighting,
//!   viewport math, the selection session, and the raw-mode front end

pub mod core;
pub mod select;

// Re-export the public API for external users
pub use core::{
    extract_checkout_target,
    print_error,
    print_info,
    print_success,
    BranchScope,
    // Error handling
    CheckoutBranchError,
    // Git operations
    GitRepo,
    Result,
};

pub use select::{
    build_candidates,
    // Terminal front end
    pick,
    // Selection state machine
    Candidate,
    SelectionSession,
    SessionConfig,
    SessionEvent,
    Step,
};
