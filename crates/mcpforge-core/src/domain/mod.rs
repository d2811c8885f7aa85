// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for mcpforge.
//!
//! This module contains pure generation logic with no I/O. Writing to disk is
//! handled via the `Filesystem` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Compiled-in catalog**: template content is `&'static str` data
//! - **Deterministic**: rendering and planning depend only on the project name
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    generation_plan::{GenerationPlan, PlanEntry, SOURCE_DIRECTORIES},
    manifest::{EntryKind, GenerationManifest, ManifestEntry},
    template::{RenderContext, TemplateContent, TemplateId},
};

pub use error::DomainError;

pub use value_objects::ProjectName;

pub use validation::DomainValidator;
