//! Application layer for mcpforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectGenerator, Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer drives the domain layer but owns no content or
//! planning rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerationPhase, Materializer, ProjectGenerator};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
