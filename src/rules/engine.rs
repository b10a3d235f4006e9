// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::error::{Result, ValidationError};
use std::path::Path;

use super::builtin::{builtin_rules, Rule};

/// Rule engine for validating commit messages.
///
/// Rules run in order and the first violation stops the run, so the author
/// sees one problem at a time.
#[derive(Debug)]
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Create a rule engine with the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Append a rule, run after the existing ones.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Validate a commit message.
    pub fn validate(&self, message: &CommitMessage) -> std::result::Result<(), ValidationError> {
        for rule in &self.rules {
            tracing::trace!("Applying rule: {}", rule.name());
            if let Some(violation) = rule.check(message) {
                tracing::debug!("Rule '{}' rejected the message", rule.name());
                return Err(violation);
            }
        }
        Ok(())
    }

    /// Validate a commit message string.
    pub fn validate_str(&self, text: &str) -> std::result::Result<(), ValidationError> {
        self.validate(&CommitMessage::parse(text))
    }

    /// Load the commit message file at `path` and validate it.
    pub fn check_file(&self, path: &Path) -> Result<()> {
        let message = CommitMessage::from_file(path)?;
        self.validate(&message)?;
        tracing::debug!("Commit message accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NoWip;

    impl Rule for NoWip {
        fn check(&self, message: &CommitMessage) -> Option<ValidationError> {
            message
                .subject_line()
                .filter(|s| s.contains("WIP"))
                .map(|s| ValidationError::SubjectFormat {
                    subject: s.to_string(),
                })
        }

        fn name(&self) -> &str {
            "no-wip"
        }
    }

    #[test]
    fn test_accepts_valid_messages() {
        let engine = RuleEngine::new();
        assert!(engine
            .validate_str(
                "12345 [IMP] module_name: Improved sale order selection\n\nFixes a regression in discount handling.\n"
            )
            .is_ok());
        assert!(engine
            .validate_str(
                "T1234 [FIX, IMP] module1, module2: Fixed bug and improved performance\n\nDetails here.\n"
            )
            .is_ok());
    }

    #[test]
    fn test_body_may_follow_subject_directly() {
        let engine = RuleEngine::new();
        assert!(engine.validate_str("1 [FIX] core: fix\nbody").is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let engine = RuleEngine::new();

        assert_eq!(engine.validate_str(""), Err(ValidationError::EmptyMessage));
        // Bad subject and no body: the subject is reported.
        assert_eq!(
            engine.validate_str("Fixed a bug\n"),
            Err(ValidationError::SubjectFormat {
                subject: "Fixed a bug".to_string()
            })
        );
        assert_eq!(
            engine.validate_str("12345 [IMP] module_name: Improved sale order selection\n"),
            Err(ValidationError::MissingBody)
        );
        assert_eq!(
            engine.validate_str("12345 [IMP] module_name: Improved sale order selection\n\n   \n"),
            Err(ValidationError::EmptyBody)
        );
    }

    #[test]
    fn test_blank_first_line_is_a_subject_error() {
        let engine = RuleEngine::new();
        assert!(matches!(
            engine.validate_str("\n\nbody"),
            Err(ValidationError::SubjectFormat { .. })
        ));
    }

    #[test]
    fn test_crlf_message() {
        let engine = RuleEngine::new();
        assert!(engine
            .validate_str("T9 [FIX] core: Fix crash\r\n\r\nDetails.\r\n")
            .is_ok());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let engine = RuleEngine::new();
        let text = "12345 [IMP] a-b: nope\n\nbody\n";
        assert_eq!(engine.validate_str(text), engine.validate_str(text));
    }

    #[test]
    fn test_custom_rule_runs_last() {
        let mut engine = RuleEngine::new();
        engine.add_rule(Box::new(NoWip));

        assert!(engine.validate_str("1 [FIX] core: WIP\n\nbody").is_err());
        assert_eq!(
            engine.validate_str("1 [FIX] core: WIP\n"),
            Err(ValidationError::MissingBody)
        );
    }
}
