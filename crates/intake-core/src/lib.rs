//! Core library for conversational application intake.
//!
//! This crate provides:
//! - Field extraction (name, email, skills) from chat turns and document text
//! - Document decoding (PDF and plain text) into extractable text
//! - Session coordination: merging, readiness checks, and the summary artifact
//! - A tool capability interface for conversational assistants

pub mod error;
pub mod models;
pub mod extract;
pub mod document;
pub mod session;
pub mod assistant;

pub use error::{DecodeError, IntakeError, Result, ToolError};
pub use models::application::{
    ApplicationField, ApplicationState, ExtractionResult, ReadinessStatus,
};
pub use models::config::{IntakeConfig, MergePolicy};
pub use extract::{extract, ExtractionMode, FieldExtractor};
pub use document::{document_to_text, DocumentDecoder, DocumentKind, PlainTextDecoder};
#[cfg(feature = "pdf")]
pub use document::PdfDecoder;
pub use session::{Session, SessionCoordinator};
pub use assistant::{ApplicationTool, Assistant, AssistantError, RuleAssistant, ToolBox};
