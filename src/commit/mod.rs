// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message model.
//!
//! This module loads the drafted message and exposes its subject and body.

mod message;
pub mod subject;

pub use message::{split_lines, CommitMessage};
pub use subject::Subject;
