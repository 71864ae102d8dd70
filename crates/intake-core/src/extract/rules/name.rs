//! Name extraction.

use super::patterns::{CHAT_NAME_INTRO, CHAT_NAME_SELF, DOCUMENT_NAME};
use super::FieldRule;
use crate::extract::ExtractionMode;
use crate::models::application::ApplicationField;

/// Name rule for either extraction mode.
pub struct NameRule {
    mode: ExtractionMode,
}

impl NameRule {
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }
}

impl FieldRule for NameRule {
    fn field(&self) -> ApplicationField {
        ApplicationField::Name
    }

    fn extract(&self, text: &str) -> Option<String> {
        match self.mode {
            ExtractionMode::Chat => chat_name(text),
            ExtractionMode::Document => DOCUMENT_NAME
                .captures(text)
                .map(|caps| caps[1].trim().to_string()),
        }
    }
}

/// Words that end a lowercase name ("my name is alice and ...").
const NAME_STOP_WORDS: &[&str] = &["and", "but", "or", "from", "here", "im", "my", "so", "the"];

/// Earliest of the "my name is" / "i am" introductions, title-cased.
fn chat_name(text: &str) -> Option<String> {
    let capture = [&*CHAT_NAME_INTRO, &*CHAT_NAME_SELF]
        .into_iter()
        .filter_map(|pattern| pattern.captures(text))
        .filter_map(|caps| caps.get(1))
        .min_by_key(|m| m.start())?;

    let words: Vec<&str> = capture
        .as_str()
        .split_whitespace()
        .take_while(|w| !NAME_STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(title_case(&words.join(" ")))
    }
}

/// Title-case a string: every letter that follows a non-letter is
/// uppercased, every other letter lowercased.
///
/// `"o'brien"` becomes `"O'Brien"`, `"MARY-JANE"` becomes `"Mary-Jane"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chat(text: &str) -> Option<String> {
        NameRule::new(ExtractionMode::Chat).extract(text)
    }

    fn document(text: &str) -> Option<String> {
        NameRule::new(ExtractionMode::Document).extract(text)
    }

    #[test]
    fn test_chat_name_intro() {
        assert_eq!(chat("Hi! My name is Alice Smith."), Some("Alice Smith".to_string()));
        assert_eq!(chat("MY NAME IS Bob"), Some("Bob".to_string()));
        assert_eq!(chat("I am Carol Danvers and I know Rust"), Some("Carol Danvers".to_string()));
    }

    #[test]
    fn test_chat_name_title_cases_capture() {
        assert_eq!(chat("my name is ALICE O'BRIEN"), Some("Alice O'Brien".to_string()));
    }

    #[test]
    fn test_chat_name_excludes_pronoun_of_next_clause() {
        assert_eq!(chat("My name is Alice Smith I know Python"), Some("Alice Smith".to_string()));
        assert_eq!(chat("Hi, I am Bob I can use Rust"), Some("Bob".to_string()));
        assert_eq!(chat("I am A. Turing"), None);
    }

    #[test]
    fn test_chat_name_intro_accepts_lowercase() {
        assert_eq!(chat("my name is alice smith"), Some("Alice Smith".to_string()));
        assert_eq!(chat("hey, my name is bob and i know go"), Some("Bob".to_string()));
        assert_eq!(chat("My name is Alice and I know Rust"), Some("Alice".to_string()));
    }

    #[test]
    fn test_chat_name_self_intro_requires_capitalized_word() {
        assert_eq!(chat("i am looking for a job"), None);
        assert_eq!(chat("hello there"), None);
    }

    #[test]
    fn test_chat_name_earliest_introduction_wins() {
        assert_eq!(chat("I am Bob, my name is Robert"), Some("Bob".to_string()));
    }

    #[test]
    fn test_chat_name_stays_on_one_line() {
        assert_eq!(chat("I am Dana\nSkills are Go"), Some("Dana".to_string()));
    }

    #[test]
    fn test_document_name_labels() {
        assert_eq!(document("Full Name: Jane Doe\nEmail: j@d.io"), Some("Jane Doe".to_string()));
        assert_eq!(document("Resume\nName:   John Smith\n"), Some("John Smith".to_string()));
        assert_eq!(document("Name:\nJohn Smith"), Some("John Smith".to_string()));
    }

    #[test]
    fn test_document_name_requires_line_prefix() {
        assert_eq!(document("Company Name: Acme Corp"), None);
        assert_eq!(document("name: lowercase person"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mary-jane watson"), "Mary-Jane Watson");
        assert_eq!(title_case(""), "");
    }
}
