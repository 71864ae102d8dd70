//! The two tools exposed to assistants.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ToolError;
use crate::session::Session;

const EXTRACT_ACK: &str = "Got it. Let me check what else I need.";

/// Tools an assistant may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationTool {
    /// Extract name, email and skills from the user's message.
    ExtractApplicationInfo,
    /// Report whether the application is complete.
    CheckApplicationGoal,
}

impl ApplicationTool {
    pub const ALL: [ApplicationTool; 2] = [Self::ExtractApplicationInfo, Self::CheckApplicationGoal];

    /// Stable tool name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtractApplicationInfo => "extract_application_info",
            Self::CheckApplicationGoal => "check_application_goal",
        }
    }

    /// Description handed to the assistant.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExtractApplicationInfo => "Extract name, email, skills",
            Self::CheckApplicationGoal => "Check completion",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for ApplicationTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tools bound to one session for the duration of a turn.
pub struct ToolBox<'a> {
    session: &'a mut Session,
}

impl<'a> ToolBox<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Tools available to the assistant.
    pub fn tools(&self) -> &'static [ApplicationTool] {
        &ApplicationTool::ALL
    }

    /// Invoke a tool by name with a text argument; returns the tool's
    /// textual observation.
    pub fn invoke(&mut self, name: &str, input: &str) -> Result<String, ToolError> {
        let tool =
            ApplicationTool::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        debug!("Invoking tool {}", tool);

        match tool {
            ApplicationTool::ExtractApplicationInfo => {
                self.session.ingest_chat(input);
                Ok(EXTRACT_ACK.to_string())
            }
            ApplicationTool::CheckApplicationGoal => Ok(self.session.readiness().to_string()),
        }
    }

    pub fn session(&self) -> &Session {
        &*self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tool_names() {
        for tool in ApplicationTool::ALL {
            assert_eq!(ApplicationTool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(ApplicationTool::from_name("Extract"), None);
    }

    #[test]
    fn test_invoke_tools() {
        let mut session = Session::default();
        let mut tools = ToolBox::new(&mut session);

        let ack = tools
            .invoke("extract_application_info", "My name is Alice Smith. I know Rust")
            .unwrap();
        assert_eq!(ack, EXTRACT_ACK);

        let status = tools.invoke("check_application_goal", "").unwrap();
        assert_eq!(status, "Still need: email");
    }

    #[test]
    fn test_goal_reached_message() {
        let mut session = Session::default();
        let mut tools = ToolBox::new(&mut session);
        tools
            .invoke("extract_application_info", "I am Bo, bo@x.io\nskills are Go")
            .unwrap();

        assert_eq!(
            tools.invoke("check_application_goal", "check").unwrap(),
            "You're ready! Name: Bo, Email: bo@x.io, Skills: Go."
        );
        assert!(tools.session().completed());
    }
}
