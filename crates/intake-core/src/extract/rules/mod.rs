//! Rule-based extractors for application fields.

pub mod patterns;
pub mod name;
pub mod email;
pub mod skills;

pub use name::{title_case, NameRule};
pub use email::{extract_email, EmailRule};
pub use skills::{normalize_skill_block, SkillsRule};

use crate::models::application::ApplicationField;

/// A single, independent field rule.
///
/// Rules never fail: a rule that does not match returns `None` and has no
/// effect on the other rules run over the same text.
pub trait FieldRule: Send + Sync {
    /// The field this rule fills.
    fn field(&self) -> ApplicationField;

    /// Extract the field value from text.
    fn extract(&self, text: &str) -> Option<String>;
}
