// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// commit-msg - Commit message format hook
///
/// Checks that a drafted commit message has a subject of the form
/// `{T?}{ID} [TAG,...] module1, module2: description` followed by a body.
#[derive(Parser, Debug)]
#[command(name = "commit-msg")]
#[command(author = "Eshan Roy")]
#[command(version = crate::version::VERSION)]
#[command(about = "Commit message format hook", long_about = None)]
pub struct Cli {
    /// Path to the commit message file (as passed by git)
    #[arg(value_name = "COMMIT_MSG_FILE")]
    pub file: Option<PathBuf>,

    /// Extra arguments from the hook runner, ignored
    #[arg(hide = true)]
    pub extra: Vec<OsString>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
