//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the single high-level use case: "generate a FastMCP project".

pub mod materializer;
pub mod project_generator;

pub use materializer::Materializer;
pub use project_generator::{GenerationPhase, ProjectGenerator};
