// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal output for rejected messages.

use crate::error::CommitMsgError;
use console::style;

/// Format the error for terminal output.
///
/// The first line is `ERROR: <message>`; help text, if any, follows on its
/// own lines. Styling only applies when stderr is a terminal.
pub fn format_error(err: &CommitMsgError) -> String {
    let mut output = format!(
        "{} {}",
        style("ERROR:").red().bold().for_stderr(),
        err
    );

    if let Some(help) = err.help() {
        output.push('\n');
        output.push_str(&help);
    }

    output
}

/// Print the error where the author will see it.
///
/// The usage banner goes to stdout; diagnostics go to stderr.
pub fn print_error(err: &CommitMsgError) {
    if err.is_usage() {
        println!("{}", err);
    } else {
        eprintln!("{}", format_error(err));
    }
}
