// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg - Commit message format hook
//!
//! Rejects commit messages that do not follow the ticket/tag/module convention.

use clap::error::ErrorKind;
use clap::Parser;
use commit_msg::cli::{run, Cli};
use commit_msg::error::EXIT_FAILURE;
use commit_msg::rules::print_error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_FAILURE);
        }
    };

    // Set up logging
    setup_logging(cli.debug);

    // Run the hook
    if let Err(e) = run(cli) {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commit_msg=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
