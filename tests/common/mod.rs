//! Consolidated test utilities for git-checkout-branch
//!
//! This module provides unified testing utilities for integration tests,
//! focused on real git repository scenarios for reliable testing.

pub mod assertions;
pub mod repository;
