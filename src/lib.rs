// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg - Commit message format hook
//!
//! Validates a drafted commit message before the commit is created. The
//! subject must name a ticket, a tag block and the affected modules, and a
//! non-blank body must follow:
//!
//! ```text
//! T1234 [FIX, IMP] module1, module2: Fixed bug and improved performance
//!
//! Details here.
//! ```
//!
//! # Example
//!
//! ```
//! use commit_msg::rules::RuleEngine;
//! use commit_msg::error::ValidationError;
//!
//! let engine = RuleEngine::new();
//!
//! assert!(engine
//!     .validate_str("12345 [IMP] sale: Improved order selection\n\nDetails.\n")
//!     .is_ok());
//! assert_eq!(
//!     engine.validate_str("12345 [IMP] sale: Improved order selection\n"),
//!     Err(ValidationError::MissingBody)
//! );
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::{CommitMessage, Subject};
pub use error::{CommitMsgError, Result, ValidationError};
pub use rules::RuleEngine;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-msg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Short SHA used in the version string.
    fn short_sha(sha: &str) -> &str {
        sha.get(..7).unwrap_or(sha)
    }

    /// Version plus build provenance, e.g. `1.0.0 (abc1234 2024-05-01)`.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, short_sha(sha), date),
            (Some(sha), None) => format!("{} ({})", VERSION, short_sha(sha)),
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_package_version() {
            assert!(version_string().starts_with(VERSION));
            assert_eq!(short_sha("abcdef0123"), "abcdef0");
            assert_eq!(short_sha("abc"), "abc");
        }
    }
}
