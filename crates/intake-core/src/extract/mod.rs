//! Application field extraction module.
//!
//! Text from a chat turn or a decoded document runs through one rule per
//! field. Rules are independent, so a miss on one field never hides the
//! others, and extraction never fails: a field without a match is simply
//! absent from the result.

pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::application::ExtractionResult;
use rules::{EmailRule, FieldRule, NameRule, SkillsRule};

/// Which rule set applies to a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Short conversational utterance.
    Chat,
    /// Full resume text, possibly spanning many lines.
    Document,
}

/// Field extractor bundling the rules of one extraction mode.
pub struct FieldExtractor {
    mode: ExtractionMode,
    rules: Vec<Box<dyn FieldRule>>,
}

impl FieldExtractor {
    /// Create an extractor with the standard rules for a mode.
    pub fn for_mode(mode: ExtractionMode) -> Self {
        Self {
            mode,
            rules: vec![
                Box::new(NameRule::new(mode)),
                Box::new(EmailRule),
                Box::new(SkillsRule::new(mode)),
            ],
        }
    }

    /// Extractor for chat turns.
    pub fn chat() -> Self {
        Self::for_mode(ExtractionMode::Chat)
    }

    /// Extractor for document text.
    pub fn document() -> Self {
        Self::for_mode(ExtractionMode::Document)
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Run every rule over the text.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new();

        for rule in &self.rules {
            result.insert(rule.field(), rule.extract(text));
        }

        debug!(
            "Extracted {:?} from {} characters of {:?} text",
            result.found_fields(),
            text.len(),
            self.mode
        );

        result
    }
}

/// Extract application fields from text using the rules of `mode`.
pub fn extract(text: &str, mode: ExtractionMode) -> ExtractionResult {
    FieldExtractor::for_mode(mode).extract(text)
}
