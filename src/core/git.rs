//! Git repository operations: the branch source and the branch sink.
//!
//! This module provides a high-level interface to git operations through the
//! [`GitRepo`] struct. It wraps the `git2` library for everything that reads
//! repository state (branch enumeration, current branch lookup) and shells out
//! to the `git` binary for the checkout itself, so hooks and messages behave
//! exactly as they do on the command line.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for git repository operations
//! - [`BranchScope`]: Which branches to enumerate (local, remote, all)
//! - [`extract_checkout_target`]: Reduce a display name to a checkout target
//!
//! # Key Features
//! - **Branch enumeration**: Sorted, deduplicated branch name lists per scope
//! - **Remote HEAD rendering**: Symbolic refs are shown as
//!   `origin/HEAD -> origin/main`, matching porcelain output
//! - **Checkout**: Runs `git checkout <target>` in the repository workdir

use crate::core::error::{CheckoutBranchError, Result};
use git2::{BranchType, Repository};
use std::path::Path;

/// Which branches the picker should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchScope {
    /// Local branches only (the default)
    Local,
    /// Remote-tracking branches only
    Remote,
    /// Local branches followed by remote-tracking branches
    All,
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Execute a git command in the repository's working directory
    fn execute_git_command(&self, mut cmd: std::process::Command) -> Result<String> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| {
                CheckoutBranchError::git_command_failed("Repository has no working directory")
            })?;

        cmd.current_dir(workdir);

        let output = cmd.output().map_err(CheckoutBranchError::Io)?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(CheckoutBranchError::git_command_failed(
                error_msg.trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }

    /// List branch display names for the given scope, sorted within each group.
    ///
    /// Local names come first under [`BranchScope::All`], mirroring the order
    /// of `git branch -a`. A symbolic remote HEAD is rendered with its target
    /// appended (`origin/HEAD -> origin/main`); callers must pass such names
    /// through [`extract_checkout_target`] before checking them out.
    pub fn branch_names(&self, scope: BranchScope) -> Result<Vec<String>> {
        let mut names = match scope {
            BranchScope::Local => self.collect_branches(BranchType::Local)?,
            BranchScope::Remote => self.collect_branches(BranchType::Remote)?,
            BranchScope::All => {
                let mut all = self.collect_branches(BranchType::Local)?;
                all.extend(self.collect_branches(BranchType::Remote)?);
                all
            }
        };
        names.dedup();
        log::debug!("enumerated {} branches for {:?}", names.len(), scope);
        Ok(names)
    }

    fn collect_branches(&self, branch_type: BranchType) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in self.repo.branches(Some(branch_type))? {
            let (branch, _) = entry?;
            let name = branch
                .name()?
                .ok_or(CheckoutBranchError::InvalidUtf8BranchName)?
                .to_string();

            // A symbolic remote HEAD is displayed with its resolution target,
            // the same way `git branch -r` prints it.
            if let Some(target) = branch.get().symbolic_target() {
                let short = target
                    .strip_prefix("refs/remotes/")
                    .or_else(|| target.strip_prefix("refs/heads/"))
                    .unwrap_or(target);
                names.push(format!("{name} -> {short}"));
            } else {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        if let Some(branch_name) = head.shorthand() {
            if head.is_branch() {
                Ok(branch_name.to_string())
            } else {
                // Detached HEAD
                let oid = head
                    .target()
                    .ok_or(CheckoutBranchError::InvalidUtf8BranchName)?;
                Ok(format!("detached at {}", &oid.to_string()[..7]))
            }
        } else {
            Ok("-none-".to_string())
        }
    }

    pub fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        log::debug!("checking out branch '{branch_name}'");
        let mut cmd = std::process::Command::new("git");
        cmd.args(["checkout", branch_name]);
        self.execute_git_command(cmd)
            .map(|_| ())
            .map_err(|e| match e {
                CheckoutBranchError::GitCommandFailed { message } => {
                    CheckoutBranchError::checkout_failed(branch_name, message)
                }
                other => other,
            })
    }

    pub fn create_branch(&self, branch_name: &str) -> Result<()> {
        let mut cmd = std::process::Command::new("git");
        cmd.args(["checkout", "-b", branch_name]);
        self.execute_git_command(cmd).map(|_| ())
    }

    pub fn get_repository(&self) -> &Repository {
        &self.repo
    }
}

/// Reduce a branch display name to the name handed to `git checkout`.
///
/// Remote HEAD entries carry an arrow suffix (`origin/HEAD -> origin/main`);
/// only the trimmed left-hand side is a valid checkout target.
pub fn extract_checkout_target(name: &str) -> &str {
    match name.split_once("->") {
        Some((target, _)) => target.trim(),
        None => name,
    }
}
