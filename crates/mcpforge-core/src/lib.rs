//! mcpforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mcpforge
//! FastMCP project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          mcpforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ProjectGenerator, Materializer)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   mcpforge-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectName, TemplateId, GenerationPlan)│
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mcpforge_core::prelude::*;
//!
//! let generator = ProjectGenerator::new(Box::new(filesystem));
//! let manifest = generator.generate(&ProjectName::new("calc_demo"))?;
//! for entry in &manifest {
//!     println!("Created {}", entry.path.display());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GenerationPhase, Materializer, ProjectGenerator, ports::Filesystem,
    };
    pub use crate::domain::{
        EntryKind, GenerationManifest, GenerationPlan, ManifestEntry, PlanEntry, ProjectName,
        TemplateId,
    };
    pub use crate::error::{McpForgeError, McpForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
