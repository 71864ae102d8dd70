//! Application form data: the tracked fields, the per-session state, and
//! the readiness verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field tracked for completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationField {
    /// Applicant's full name.
    Name,
    /// Contact email address.
    Email,
    /// Free-text list of skills.
    Skills,
}

impl ApplicationField {
    /// All fields in enumeration order.
    pub const ALL: [ApplicationField; 3] = [Self::Name, Self::Email, Self::Skills];

    /// Lowercase key, as used in status messages.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Skills => "skills",
        }
    }

    /// Capitalized label, as used in the summary artifact.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Skills => "Skills",
        }
    }

    /// Parse a field from its key (case-insensitive).
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "skills" => Some(Self::Skills),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The three application fields collected during one session.
///
/// Blank values are never stored: setting a field to an empty or
/// whitespace-only string leaves it absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationState {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<String>,
}

impl ApplicationState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: ApplicationField) -> Option<&str> {
        match field {
            ApplicationField::Name => self.name.as_deref(),
            ApplicationField::Email => self.email.as_deref(),
            ApplicationField::Skills => self.skills.as_deref(),
        }
    }

    /// Set a field. Blank values clear it.
    pub fn set(&mut self, field: ApplicationField, value: impl Into<String>) {
        let value = normalize(Some(value.into()));
        *self.slot(field) = value;
    }

    /// Clear a single field.
    pub fn clear(&mut self, field: ApplicationField) {
        *self.slot(field) = None;
    }

    /// Whether a field holds a non-empty value.
    pub fn is_present(&self, field: ApplicationField) -> bool {
        self.get(field).is_some()
    }

    /// Fields that are still absent, in enumeration order.
    pub fn missing_fields(&self) -> Vec<ApplicationField> {
        ApplicationField::ALL
            .into_iter()
            .filter(|f| !self.is_present(*f))
            .collect()
    }

    /// Builder-style setter, handy for tests and hosts seeding state.
    pub fn with(mut self, field: ApplicationField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    fn slot(&mut self, field: ApplicationField) -> &mut Option<String> {
        match field {
            ApplicationField::Name => &mut self.name,
            ApplicationField::Email => &mut self.email,
            ApplicationField::Skills => &mut self.skills,
        }
    }
}

/// Candidate values produced by a single extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<String>,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracted value for a field, if any.
    pub fn get(&self, field: ApplicationField) -> Option<&str> {
        match field {
            ApplicationField::Name => self.name.as_deref(),
            ApplicationField::Email => self.email.as_deref(),
            ApplicationField::Skills => self.skills.as_deref(),
        }
    }

    /// Record a candidate value. Blank values are dropped.
    pub fn insert(&mut self, field: ApplicationField, value: Option<String>) {
        let value = normalize(value);
        match field {
            ApplicationField::Name => self.name = value,
            ApplicationField::Email => self.email = value,
            ApplicationField::Skills => self.skills = value,
        }
    }

    /// Fields that matched, in enumeration order.
    pub fn found_fields(&self) -> Vec<ApplicationField> {
        ApplicationField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    /// True when no rule matched.
    pub fn is_empty(&self) -> bool {
        self.found_fields().is_empty()
    }
}

/// Completion verdict for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// All three fields are present.
    Complete {
        name: String,
        email: String,
        skills: String,
    },
    /// At least one field is missing.
    Incomplete { missing: Vec<ApplicationField> },
}

impl ReadinessStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Missing fields (empty when complete).
    pub fn missing(&self) -> &[ApplicationField] {
        match self {
            Self::Complete { .. } => &[],
            Self::Incomplete { missing } => missing,
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete {
                name,
                email,
                skills,
            } => write!(
                f,
                "You're ready! Name: {}, Email: {}, Skills: {}.",
                name, email, skills
            ),
            Self::Incomplete { missing } => {
                let keys: Vec<&str> = missing.iter().map(|m| m.key()).collect();
                write!(f, "Still need: {}", keys.join(", "))
            }
        }
    }
}
