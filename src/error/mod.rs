// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commit-msg hook.
//!
//! Every error is terminal for the invocation: it is reported once and the
//! process exits with [`EXIT_FAILURE`].

use std::path::PathBuf;
use thiserror::Error;

use crate::commit::subject::{FORMAT_TEMPLATE, SUBJECT_EXAMPLES};

/// Exit status for any rejected message or failed invocation.
pub const EXIT_FAILURE: i32 = 1;

/// The main error type for commit-msg operations.
#[derive(Error, Debug)]
pub enum CommitMsgError {
    // Missing positional argument
    #[error("Usage: commit-msg <commit-msg-file>")]
    Usage,

    // Input file errors
    #[error(transparent)]
    Input(#[from] InputError),

    // Message rejected by a rule
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CommitMsgError {
    /// Whether this error is the usage banner rather than a diagnostic.
    pub fn is_usage(&self) -> bool {
        matches!(self, CommitMsgError::Usage)
    }

    /// Exit status for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Extra lines printed after the diagnostic, if any.
    pub fn help(&self) -> Option<String> {
        match self {
            CommitMsgError::Validation(err) => err.help(),
            _ => None,
        }
    }
}

/// Errors loading the commit message file.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Commit message file {} does not exist.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read commit message file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Structural violations of the commit message convention.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Commit message is empty.")]
    EmptyMessage,

    #[error("Commit message subject does not match required format.")]
    SubjectFormat { subject: String },

    #[error("Commit description (body) is required after the subject line.")]
    MissingBody,

    #[error("Commit description (body) must have at least one non-empty line.")]
    EmptyBody,
}

impl ValidationError {
    /// Short identifier for the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyMessage => "message-empty",
            ValidationError::SubjectFormat { .. } => "subject-format",
            ValidationError::MissingBody => "body-missing",
            ValidationError::EmptyBody => "body-empty",
        }
    }

    /// The expected format and worked examples for subject errors.
    pub fn help(&self) -> Option<String> {
        match self {
            ValidationError::SubjectFormat { .. } => {
                let mut help = format!("Format:\n  {}\nExamples:", FORMAT_TEMPLATE);
                for example in SUBJECT_EXAMPLES {
                    help.push_str("\n  ");
                    help.push_str(example);
                }
                Some(help)
            }
            _ => None,
        }
    }
}

/// Result type alias for commit-msg operations.
pub type Result<T> = std::result::Result<T, CommitMsgError>;
