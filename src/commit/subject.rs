// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject line grammar.
//!
//! A subject looks like `T1234 [FIX, IMP] module1, module2: description`.
//! Only the lexical shape is checked; tags and modules carry no meaning here.

use lazy_static::lazy_static;
use regex::Regex;

/// Human-readable form of the subject grammar.
pub const FORMAT_TEMPLATE: &str = "{T?}{Task/Ticket ID} [TAGs] module1, module2: short description";

/// Subjects shown to the author when the format is wrong.
pub const SUBJECT_EXAMPLES: &[&str] = &[
    "12345 [IMP] module_name: Improved sale order selection",
    "T1234 [FIX, IMP] module1, module2: Fixed bug and improved performance",
];

lazy_static! {
    /// Regex for the whole subject line.
    static ref SUBJECT_REGEX: Regex = Regex::new(
        r"^(?P<prefix>T)?(?P<ticket>[0-9]+)\s+\[(?P<tags>[^\]]+)\]\s+(?P<modules>[a-zA-Z0-9_]+(?:,\s*[a-zA-Z0-9_]+)*):\s(?P<description>.+)$"
    ).unwrap();

    /// Separator between module tokens.
    static ref MODULE_SEPARATOR: Regex = Regex::new(r",\s*").unwrap();
}

/// The lexical parts of a well-formed subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Ticket or task number, without the `T` prefix.
    pub ticket: String,
    /// Whether the ticket was written as `T1234`.
    pub ticket_prefixed: bool,
    /// Raw text between the brackets.
    pub tag_block: String,
    /// Module tokens in order.
    pub modules: Vec<String>,
    /// Free text after the colon. May contain anything, colons included.
    pub description: String,
}

impl Subject {
    /// Parse a subject line, returning `None` if it does not match the grammar.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = SUBJECT_REGEX.captures(line)?;

        let modules = captures
            .name("modules")
            .map(|m| {
                MODULE_SEPARATOR
                    .split(m.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            ticket: captures["ticket"].to_string(),
            ticket_prefixed: captures.name("prefix").is_some(),
            tag_block: captures["tags"].to_string(),
            modules,
            description: captures["description"].to_string(),
        })
    }

    /// Check a subject line without building the parts.
    pub fn is_valid(line: &str) -> bool {
        SUBJECT_REGEX.is_match(line)
    }

    /// Tags split on commas, trimmed, empty entries dropped.
    pub fn tags(&self) -> Vec<&str> {
        self.tag_block
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// The ticket as written, including any `T` prefix.
    pub fn ticket_ref(&self) -> String {
        if self.ticket_prefixed {
            format!("T{}", self.ticket)
        } else {
            self.ticket.clone()
        }
    }
}
