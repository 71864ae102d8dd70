//! Data models for application intake.

pub mod application;
pub mod config;

pub use application::{ApplicationField, ApplicationState, ExtractionResult, ReadinessStatus};
pub use config::{IntakeConfig, MergePolicy};
