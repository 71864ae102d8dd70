//! Skills extraction.
//!
//! In chat the skills follow a trigger phrase on the same line. In a resume
//! they live in a "Skills" section under a dash separator, usually as a
//! bulleted list, and are flattened to a comma-separated line.

use super::patterns::{CHAT_SKILLS, SECTION_END, SKILLS_SECTION};
use super::FieldRule;
use crate::extract::ExtractionMode;
use crate::models::application::ApplicationField;

const BULLETS: &[char] = &['•', '-', '*', '·', '▪', '–'];

/// Skills rule for either extraction mode.
pub struct SkillsRule {
    mode: ExtractionMode,
}

impl SkillsRule {
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }

    fn extract_section(&self, text: &str) -> Option<String> {
        let header = SKILLS_SECTION.find(text)?;
        let body = &text[header.end()..];

        let end = SECTION_END
            .find(body)
            .map(|m| m.start())
            .unwrap_or(body.len());

        let skills = normalize_skill_block(&body[..end]);
        if skills.is_empty() {
            None
        } else {
            Some(skills)
        }
    }
}

impl FieldRule for SkillsRule {
    fn field(&self) -> ApplicationField {
        ApplicationField::Skills
    }

    fn extract(&self, text: &str) -> Option<String> {
        match self.mode {
            ExtractionMode::Chat => CHAT_SKILLS
                .captures(text)
                .map(|caps| caps[1].trim().to_string())
                .filter(|s| !s.is_empty()),
            ExtractionMode::Document => self.extract_section(text),
        }
    }
}

/// Flatten a multi-line skills block into one line.
///
/// Leading bullet markers are stripped, blank lines dropped, inner
/// whitespace collapsed, and the remaining lines joined with `", "`.
pub fn normalize_skill_block(block: &str) -> String {
    block
        .lines()
        .map(|line| line.trim_start_matches(|c: char| BULLETS.contains(&c) || c.is_whitespace()))
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
