//! Pure operations over [`ApplicationState`].

use tracing::debug;

use crate::models::application::{
    ApplicationField, ApplicationState, ExtractionResult, ReadinessStatus,
};
use crate::models::config::MergePolicy;

/// Merges extraction output into application state and judges completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCoordinator {
    policy: MergePolicy,
}

impl SessionCoordinator {
    pub fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Merge an extraction result into the current state.
    ///
    /// Fields absent from `result` are never touched. Present fields replace
    /// the current value under [`MergePolicy::LatestWins`] and only fill
    /// empty fields under [`MergePolicy::KeepFirst`]. Merging the same
    /// result twice gives the same state as merging it once.
    pub fn merge(&self, mut current: ApplicationState, result: &ExtractionResult) -> ApplicationState {
        for field in ApplicationField::ALL {
            let Some(value) = result.get(field) else {
                continue;
            };

            let replace = match self.policy {
                MergePolicy::LatestWins => true,
                MergePolicy::KeepFirst => !current.is_present(field),
            };

            if replace {
                if current.get(field).is_some_and(|old| old != value) {
                    debug!("Replacing {} value", field);
                }
                current.set(field, value);
            }
        }

        current
    }

    /// Complete when all three fields hold a value.
    pub fn check_readiness(&self, state: &ApplicationState) -> ReadinessStatus {
        match (
            state.get(ApplicationField::Name),
            state.get(ApplicationField::Email),
            state.get(ApplicationField::Skills),
        ) {
            (Some(name), Some(email), Some(skills)) => ReadinessStatus::Complete {
                name: name.to_string(),
                email: email.to_string(),
                skills: skills.to_string(),
            },
            _ => ReadinessStatus::Incomplete {
                missing: state.missing_fields(),
            },
        }
    }

    /// A fresh, empty state.
    pub fn reset(&self) -> ApplicationState {
        ApplicationState::new()
    }

    /// Three-line summary artifact; `None` until the application is complete.
    pub fn build_summary(&self, state: &ApplicationState) -> Option<String> {
        match self.check_readiness(state) {
            ReadinessStatus::Complete {
                name,
                email,
                skills,
            } => Some(format!(
                "{}: {}\n{}: {}\n{}: {}\n",
                ApplicationField::Name.label(),
                name,
                ApplicationField::Email.label(),
                email,
                ApplicationField::Skills.label(),
                skills
            )),
            ReadinessStatus::Incomplete { .. } => None,
        }
    }
}
