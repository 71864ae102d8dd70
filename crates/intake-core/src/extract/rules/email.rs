//! Email extraction.

use super::patterns::EMAIL;
use super::FieldRule;
use crate::models::application::ApplicationField;

/// Email rule. The same shape applies in chat and document text.
pub struct EmailRule;

impl FieldRule for EmailRule {
    fn field(&self) -> ApplicationField {
        ApplicationField::Email
    }

    fn extract(&self, text: &str) -> Option<String> {
        EMAIL.find(text).map(|m| m.as_str().to_string())
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailRule.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_email_in_sentence() {
        assert_eq!(
            extract_email("reach me at a.b-c@example.co"),
            Some("a.b-c@example.co".to_string())
        );
    }

    #[test]
    fn test_extract_email_drops_trailing_punctuation() {
        assert_eq!(
            extract_email("Mail jane_doe@mail.example.org."),
            Some("jane_doe@mail.example.org".to_string())
        );
    }

    #[test]
    fn test_extract_first_email() {
        assert_eq!(
            extract_email("a@one.io or b@two.io"),
            Some("a@one.io".to_string())
        );
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert_eq!(extract_email("user@localhost"), None);
        assert_eq!(extract_email("no address here @ all"), None);
    }
}
