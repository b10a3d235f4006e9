// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::{CommitMessage, Subject};
use crate::error::ValidationError;

/// A single structural check on a commit message.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return the violation, if any.
    fn check(&self, message: &CommitMessage) -> Option<ValidationError>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// The message must have at least one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyMessage;

impl Rule for NonEmptyMessage {
    fn check(&self, message: &CommitMessage) -> Option<ValidationError> {
        message.is_empty().then_some(ValidationError::EmptyMessage)
    }

    fn name(&self) -> &str {
        "message-empty"
    }
}

/// The first line must match the subject grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectFormat;

impl Rule for SubjectFormat {
    fn check(&self, message: &CommitMessage) -> Option<ValidationError> {
        let line = message.subject_line().unwrap_or_default();

        match Subject::parse(line) {
            Some(subject) => {
                tracing::debug!(
                    ticket = %subject.ticket_ref(),
                    tags = ?subject.tags(),
                    modules = ?subject.modules,
                    "Subject matched"
                );
                None
            }
            None => Some(ValidationError::SubjectFormat {
                subject: line.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "subject-format"
    }
}

/// A line must follow the subject.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyRequired;

impl Rule for BodyRequired {
    fn check(&self, message: &CommitMessage) -> Option<ValidationError> {
        (message.line_count() < 2).then_some(ValidationError::MissingBody)
    }

    fn name(&self) -> &str {
        "body-missing"
    }
}

/// At least one body line must have visible content.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyNotBlank;

impl Rule for BodyNotBlank {
    fn check(&self, message: &CommitMessage) -> Option<ValidationError> {
        (!message.has_body_content()).then_some(ValidationError::EmptyBody)
    }

    fn name(&self) -> &str {
        "body-empty"
    }
}

/// The built-in rules in the order they are applied.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NonEmptyMessage),
        Box::new(SubjectFormat),
        Box::new(BodyRequired),
        Box::new(BodyNotBlank),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: &dyn Rule, text: &str) -> Option<ValidationError> {
        rule.check(&CommitMessage::parse(text))
    }

    #[test]
    fn test_non_empty_message() {
        assert_eq!(check(&NonEmptyMessage, ""), Some(ValidationError::EmptyMessage));
        assert_eq!(check(&NonEmptyMessage, "\n"), None);
    }

    #[test]
    fn test_subject_format() {
        assert_eq!(check(&SubjectFormat, "12345 [IMP] sale: Improve"), None);
        assert_eq!(
            check(&SubjectFormat, "Fixed a bug\n\nDetails."),
            Some(ValidationError::SubjectFormat {
                subject: "Fixed a bug".to_string()
            })
        );
    }

    #[test]
    fn test_body_required() {
        assert_eq!(check(&BodyRequired, "subject\n"), Some(ValidationError::MissingBody));
        assert_eq!(check(&BodyRequired, "subject\n\n"), None);
    }

    #[test]
    fn test_body_not_blank() {
        assert_eq!(check(&BodyNotBlank, "subject\n\n \t\n"), Some(ValidationError::EmptyBody));
        assert_eq!(check(&BodyNotBlank, "subject\n\n  text  \n"), None);
    }

    #[test]
    fn test_builtin_rule_order() {
        let names: Vec<_> = builtin_rules().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["message-empty", "subject-format", "body-missing", "body-empty"]
        );
    }

    #[test]
    fn test_rule_names_match_error_codes() {
        let cases: Vec<(Box<dyn Rule>, &str)> = vec![
            (Box::new(NonEmptyMessage), ""),
            (Box::new(SubjectFormat), "nope"),
            (Box::new(BodyRequired), "subject"),
            (Box::new(BodyNotBlank), "subject\n"),
        ];
        for (rule, text) in cases {
            let err = check(rule.as_ref(), text).unwrap();
            assert_eq!(err.code(), rule.name());
        }
    }
}
