// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and loading.

use crate::error::{InputError, Result};
use std::path::Path;

use super::subject::Subject;

/// A commit message split into logical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    lines: Vec<String>,
}

impl CommitMessage {
    /// Build a commit message from raw text.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: split_lines(text).into_iter().map(str::to_string).collect(),
        }
    }

    /// Read and parse the commit message file at `path`.
    ///
    /// The file is opened read-only and closed as soon as its content is loaded.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading commit message from: {:?}", path);

        if !path.exists() {
            return Err(InputError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| InputError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        let message = Self::parse(&content);
        tracing::debug!("Read {} line(s)", message.line_count());
        Ok(message)
    }

    /// All lines, terminators stripped.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of logical lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the message has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first line, if any.
    pub fn subject_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// The first line broken into its parts, if it is well formed.
    pub fn subject(&self) -> Option<Subject> {
        self.subject_line().and_then(Subject::parse)
    }

    /// Every line after the subject.
    pub fn body_lines(&self) -> &[String] {
        self.lines.get(1..).unwrap_or(&[])
    }

    /// Whether any body line has non-whitespace content.
    pub fn has_body_content(&self) -> bool {
        self.body_lines().iter().any(|line| !line.trim().is_empty())
    }
}

/// Whether `c` ends a line on its own.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into logical lines.
///
/// Unlike `str::lines`, this also breaks on lone `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators. `\r\n` counts as one break. A trailing break does
/// not produce an empty final line, and empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);

        let mut end = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                end = next_idx + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}
