// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::error::{CommitMsgError, Result};
use crate::rules::RuleEngine;

use super::args::Cli;

/// Run the hook with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!("commit-msg {}", crate::version::version_string());

    let path = cli.file.ok_or(CommitMsgError::Usage)?;
    if !cli.extra.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", cli.extra.len());
    }

    RuleEngine::new().check_file(&path)
}
