//! Session coordination: merging extraction results, judging readiness,
//! and rendering the summary artifact.

mod coordinator;

pub use coordinator::SessionCoordinator;

use tracing::{info, warn};

use crate::document::{document_to_text, DocumentKind};
use crate::error::DecodeError;
use crate::extract::{extract, ExtractionMode};
use crate::models::application::{ApplicationState, ExtractionResult, ReadinessStatus};
use crate::models::config::IntakeConfig;

/// One interactive session.
///
/// Owns the session's [`ApplicationState`]; nothing is shared between
/// sessions. Hosts create one `Session` per user conversation.
#[derive(Debug, Clone)]
pub struct Session {
    coordinator: SessionCoordinator,
    config: IntakeConfig,
    state: ApplicationState,
    completed: bool,
}

impl Session {
    /// Start an empty session.
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            coordinator: SessionCoordinator::new(config.session.merge_policy),
            config,
            state: ApplicationState::new(),
            completed: false,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Whether the application has turned complete since the last reset.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Extract fields from a chat turn and merge them.
    pub fn ingest_chat(&mut self, text: &str) -> ExtractionResult {
        self.ingest(text, ExtractionMode::Chat)
    }

    /// Merge fields from text that has already been decoded from a document.
    pub fn ingest_text_document(&mut self, text: &str) -> ExtractionResult {
        self.ingest(text, ExtractionMode::Document)
    }

    /// Decode an uploaded document, then extract and merge its fields.
    ///
    /// On a decode failure the state is left untouched.
    pub fn ingest_document(
        &mut self,
        data: &[u8],
        kind: DocumentKind,
    ) -> Result<ExtractionResult, DecodeError> {
        let text = document_to_text(data, kind, &self.config.document).inspect_err(|e| {
            warn!("Document upload could not be decoded: {}", e);
        })?;
        Ok(self.ingest_text_document(&text))
    }

    /// Current readiness.
    pub fn readiness(&self) -> ReadinessStatus {
        self.coordinator.check_readiness(&self.state)
    }

    /// Summary artifact, once the application is complete.
    pub fn summary(&self) -> Option<String> {
        self.coordinator.build_summary(&self.state)
    }

    /// Clear every field and the completion flag.
    pub fn reset(&mut self) {
        self.state = self.coordinator.reset();
        self.completed = false;
        info!("Session reset");
    }

    fn ingest(&mut self, text: &str, mode: ExtractionMode) -> ExtractionResult {
        let result = extract(text, mode);
        let state = std::mem::take(&mut self.state);
        self.state = self.coordinator.merge(state, &result);

        if !self.completed && self.readiness().is_complete() {
            self.completed = true;
            info!("Application complete");
        }

        result
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(IntakeConfig::default())
    }
}
