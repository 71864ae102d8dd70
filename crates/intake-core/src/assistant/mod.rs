//! Tool capability interface for conversational assistants.
//!
//! A conversational front end (typically an LLM agent) answers user
//! utterances and may call two tools: one that extracts application fields
//! from the utterance and one that reports what is still missing. The core
//! exposes those tools over a borrowed [`Session`]; how the assistant
//! decides to call them is up to the host.

mod tools;

pub use tools::{ApplicationTool, ToolBox};

use thiserror::Error;
use tracing::debug;

use crate::error::ToolError;
use crate::session::Session;

/// Errors from an assistant backend.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// A tool call failed.
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),

    /// The backing service failed to answer.
    #[error("assistant backend error: {0}")]
    Backend(String),
}

/// Something that can answer a user utterance, with the application tools
/// at hand.
pub trait Assistant {
    /// Produce a reply to one user turn.
    fn respond(&mut self, utterance: &str, tools: &mut ToolBox<'_>) -> Result<String, AssistantError>;
}

/// Deterministic assistant that always extracts, then reports progress.
///
/// Useful as a fallback when no language model is configured.
#[derive(Debug, Default)]
pub struct RuleAssistant;

impl Assistant for RuleAssistant {
    fn respond(&mut self, utterance: &str, tools: &mut ToolBox<'_>) -> Result<String, AssistantError> {
        let ack = tools.invoke(ApplicationTool::ExtractApplicationInfo.name(), utterance)?;
        let status = tools.invoke(ApplicationTool::CheckApplicationGoal.name(), "check")?;
        debug!("Rule assistant replied with status: {}", status);
        Ok(format!("{} {}", ack, status))
    }
}

/// Run one conversational turn against a session.
pub fn respond(
    assistant: &mut dyn Assistant,
    session: &mut Session,
    utterance: &str,
) -> Result<String, AssistantError> {
    let mut tools = ToolBox::new(session);
    assistant.respond(utterance, &mut tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingAssistant;

    impl Assistant for FailingAssistant {
        fn respond(&mut self, _: &str, tools: &mut ToolBox<'_>) -> Result<String, AssistantError> {
            tools.invoke("send_email", "")?;
            Ok(String::new())
        }
    }

    #[test]
    fn test_rule_assistant_turn() {
        let mut session = Session::default();
        let reply = respond(&mut RuleAssistant, &mut session, "I am Alice, alice@example.com").unwrap();

        assert_eq!(
            reply,
            "Got it. Let me check what else I need. Still need: skills"
        );
        assert_eq!(session.state().name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_unknown_tool_surfaces_as_error() {
        let mut session = Session::default();
        let err = respond(&mut FailingAssistant, &mut session, "hi").unwrap_err();
        assert!(matches!(
            err,
            AssistantError::Tool(ToolError::UnknownTool(name)) if name == "send_email"
        ));
    }
}
