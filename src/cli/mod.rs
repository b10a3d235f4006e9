// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commit-msg.
//!
//! This module handles command-line argument parsing and execution.

pub mod args;
mod dispatch;

pub use args::Cli;
pub use dispatch::run;
