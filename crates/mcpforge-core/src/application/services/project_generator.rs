//! Project Generator - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Check the project root does not exist yet
//! 2. Plan directories and files for the project name
//! 3. Materialize the plan through the `Filesystem` port
//!
//! ```text
//! Start → Validated → Planned → Writing → Done
//!                                  └────→ Failed
//! ```
//!
//! There is no retry, resume, or rollback transition. The existence check
//! runs once; a directory created by another process between the check and
//! the first write is reused and files in it may be overwritten. Callers
//! needing cross-process exclusivity must lock externally.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, Materializer, ports::Filesystem},
    domain::{DomainValidator as validator, GenerationManifest, GenerationPlan, ProjectName},
    error::McpForgeResult,
};

/// Lifecycle of a single [`ProjectGenerator::generate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Start,
    Validated,
    Planned,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Validated => "validated",
            Self::Planned => "planned",
            Self::Writing => "writing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Main generation service.
pub struct ProjectGenerator {
    filesystem: Box<dyn Filesystem>,
    output_root: PathBuf,
}

impl ProjectGenerator {
    /// Create a generator writing relative to the working directory.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            output_root: PathBuf::new(),
        }
    }

    /// Resolve project roots against `root` instead of the working directory.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Where `name` would be generated.
    pub fn project_path(&self, name: &ProjectName) -> PathBuf {
        self.output_root.join(name.root_path())
    }

    /// Generate a project and return the manifest of created paths.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::ProjectExists` if anything exists at the project
    ///   root; nothing is written
    /// - `ApplicationError::FilesystemError` if a write fails; entries created
    ///   before the failure stay on disk
    #[instrument(skip_all, fields(project = %name))]
    pub fn generate(&self, name: &ProjectName) -> McpForgeResult<GenerationManifest> {
        let mut phase = GenerationPhase::Start;
        debug!(%phase, "Generation requested");

        let root = self.project_path(name);
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }
        phase = advance(phase, GenerationPhase::Validated);

        let plan = GenerationPlan::for_project(name);
        validator::validate_plan(&plan)?;
        phase = advance(phase, GenerationPhase::Planned);

        phase = advance(phase, GenerationPhase::Writing);
        let materializer = Materializer::new(self.filesystem.as_ref(), &self.output_root);
        match materializer.apply(&plan, name) {
            Ok(manifest) => {
                advance(phase, GenerationPhase::Done);
                info!(
                    path = %root.display(),
                    entries = manifest.len(),
                    "Project generated"
                );
                Ok(manifest)
            }
            Err(e) => {
                advance(phase, GenerationPhase::Failed);
                Err(e)
            }
        }
    }
}

fn advance(from: GenerationPhase, to: GenerationPhase) -> GenerationPhase {
    debug!(%from, %to, "Generation phase changed");
    to
}
