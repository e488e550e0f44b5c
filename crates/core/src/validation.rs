//! Request field validation shared by the API handlers.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length of a project title.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum length of a contact message body.
pub const MAX_MESSAGE_LEN: usize = 10_000;

/// Check that every `(name, value)` pair is non-empty after trimming.
///
/// The error message enumerates all offending field names, not just the
/// first, e.g. `Missing required fields: title, short_description`.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Validate that `value` is at most `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate an email address.
pub fn validate_email(field: &str, email: &str) -> Result<(), CoreError> {
    if !email.trim().validate_email() {
        return Err(CoreError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_present_passes() {
        assert!(require_fields(&[("title", Some("A")), ("short_description", Some("B"))]).is_ok());
    }

    #[test]
    fn missing_fields_are_enumerated() {
        let result = require_fields(&[
            ("title", Some("  ")),
            ("short_description", None),
            ("category", Some("web")),
        ]);
        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg == "Missing required fields: title, short_description"
        );
    }

    #[test]
    fn max_len_counts_characters() {
        assert!(validate_max_len("title", "ééé", 3).is_ok());
        assert_matches!(
            validate_max_len("title", "abcd", 3),
            Err(CoreError::Validation(msg)) if msg.contains("at most 3")
        );
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("email", "someone@example.com").is_ok());
        assert_matches!(
            validate_email("email", "not-an-email"),
            Err(CoreError::Validation(_))
        );
    }
}
