// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module checks a commit message against the ticket/tag/module
//! convention and renders the first violation for the author.

mod builtin;
mod engine;
pub mod report;

pub use builtin::*;
pub use engine::RuleEngine;
pub use report::{format_error, print_error};
