use clap::Parser;
use git_checkout_branch::core::{
    error::{CheckoutBranchError, Result},
    print_error, print_info, print_success,
};
use git_checkout_branch::core::{extract_checkout_target, BranchScope, GitRepo};
use git_checkout_branch::select::{build_candidates, pick, SessionConfig};
use std::env;

#[derive(Parser)]
#[command(name = "git-checkout-branch")]
#[command(about = "Checkout git branches through a searchable menu")]
#[command(version = "0.1.0")]
struct Cli {
    /// Include remote-tracking branches alongside local ones
    #[arg(short = 'a', long = "all", conflicts_with = "remotes")]
    all: bool,

    /// Show remote-tracking branches only
    #[arg(short = 'r', long = "remotes")]
    remotes: bool,

    /// Number of branches visible at once
    #[arg(short = 'n', long = "number", default_value_t = 10)]
    number: usize,

    /// Hide the key-binding hint below the menu
    #[arg(long = "hide-help")]
    hide_help: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(&cli) {
        if let CheckoutBranchError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let repo = GitRepo::open(".").map_err(|_| CheckoutBranchError::NotInGitRepo)?;

    let scope = if cli.all {
        BranchScope::All
    } else if cli.remotes {
        BranchScope::Remote
    } else {
        BranchScope::Local
    };

    let names = repo.branch_names(scope)?;
    if names.is_empty() {
        print_info("No branches found");
        return Ok(());
    }

    // Start the cursor on the current branch when it is in the list.
    let initial_cursor = repo
        .current_branch()
        .ok()
        .and_then(|current| names.iter().position(|name| *name == current))
        .unwrap_or(0);

    let config = SessionConfig {
        window_size: cli.number.max(1),
        show_help: !cli.hide_help,
        initial_cursor,
    };

    let selected = match pick(build_candidates(&names), config) {
        Ok(selected) => selected,
        Err(CheckoutBranchError::NotInteractive) => {
            log::warn!("stdin/stdout is not a terminal; nothing to select");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let Some(candidate) = selected else {
        log::debug!("selection cancelled");
        return Ok(());
    };

    let target = extract_checkout_target(&candidate.name);
    repo.checkout_branch(target)?;
    print_success(&format!("Switched to branch '{target}'"));

    Ok(())
}
