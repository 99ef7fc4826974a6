//! Skill Roadmap Library
//!
//! Rule-based study and skill advice for students, plus the reference
//! catalog, form validation and terminal UI around it.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod profile;
pub mod report;
pub mod resources;
pub mod roadmap;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{CatalogField, ReferenceCatalog};
pub use config::Settings;
pub use error::RoadmapError;
pub use profile::{StudentForm, StudentProfile, Submission};
pub use report::OutputFormat;
pub use resources::{ResourceCategory, RESOURCE_CATEGORIES};
pub use roadmap::{build_roadmap, generate, Roadmap, RoadmapStep, Rule};
pub use types::{CommunicationLevel, Level, SkillLevel, Toggle};
