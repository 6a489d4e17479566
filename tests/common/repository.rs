//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! branches in various configurations for integration testing.

#![allow(dead_code)]

use git_checkout_branch::core::error::{CheckoutBranchError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The branch currently checked out, per `git branch --show-current`.
    pub fn current_branch(&self) -> Result<String> {
        let output = std::process::Command::new("git")
            .args(["branch", "--show-current"])
            .current_dir(&self.path)
            .output()
            .map_err(CheckoutBranchError::Io)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository with
/// `main` as the default branch, and sets up basic git configuration to
/// avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(CheckoutBranchError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    // Initialize git repo
    std::process::Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(&repo_path)
        .output()
        .map_err(CheckoutBranchError::Io)?;

    // Set git config to avoid prompts during tests
    std::process::Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(&repo_path)
        .output()
        .map_err(CheckoutBranchError::Io)?;

    std::process::Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(&repo_path)
        .output()
        .map_err(CheckoutBranchError::Io)?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit
///
/// Creates a repository using `setup_test_repo()` and adds an initial commit
/// with a basic file so branches can be created from it.
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    // Create initial file and commit
    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Sets up a repository with an initial commit and the given extra branches,
/// ending back on `main`.
pub fn setup_test_repo_with_branches(branches: &[&str]) -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    for branch in branches {
        run_git(&repo.path, &["branch", branch])?;
    }

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(CheckoutBranchError::Io)?;
    Ok(())
}

/// Adds a file to the git index
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["add", filename])
}

/// Creates a commit with the given message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    run_git(repo_path, &["commit", "-m", message])
}

/// Runs an arbitrary git command in the repository, failing the test setup
/// when git reports an error.
pub fn run_git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(CheckoutBranchError::Io)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CheckoutBranchError::git_command_failed(
            stderr.trim().to_string(),
        ));
    }
    Ok(())
}
