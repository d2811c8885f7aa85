//! Materializer - writes a generation plan through the `Filesystem` port.
//!
//! Not transactional: entries are created strictly in plan order and a
//! failure leaves everything written so far on disk.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{GenerationManifest, GenerationPlan, PlanEntry, ProjectName, RenderContext},
    error::McpForgeResult,
};

/// Executes a [`GenerationPlan`] against a filesystem.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
    output_root: &'a Path,
}

impl<'a> Materializer<'a> {
    /// `output_root` is joined in front of every planned path; pass an empty
    /// path to resolve against the working directory.
    pub fn new(filesystem: &'a dyn Filesystem, output_root: &'a Path) -> Self {
        Self {
            filesystem,
            output_root,
        }
    }

    /// Create every planned entry and return what was created, in order.
    ///
    /// - directories: create-if-absent, parents included
    /// - files: create/truncate and write the rendered template
    /// - executable files: owner-executable bit set after writing, only when
    ///   the filesystem supports it
    #[instrument(skip_all, fields(project = %name, entries = plan.entry_count()))]
    pub fn apply(
        &self,
        plan: &GenerationPlan,
        name: &ProjectName,
    ) -> McpForgeResult<GenerationManifest> {
        let ctx = RenderContext::new(name);
        let can_chmod = self.filesystem.supports_executable_bit();
        let mut manifest = GenerationManifest::new();

        for entry in plan.entries() {
            if let Err(e) = self.apply_entry(entry, &ctx, can_chmod, &mut manifest) {
                warn!(
                    written = manifest.len(),
                    error = %e,
                    "Generation aborted, partial output left on disk"
                );
                return Err(e);
            }
        }

        info!(entries = manifest.len(), "All entries written");
        Ok(manifest)
    }

    fn apply_entry(
        &self,
        entry: &PlanEntry,
        ctx: &RenderContext,
        can_chmod: bool,
        manifest: &mut GenerationManifest,
    ) -> McpForgeResult<()> {
        let path = self.output_root.join(entry.path());

        match entry {
            PlanEntry::Directory { .. } => {
                self.filesystem.create_dir_all(&path)?;
                info!(path = %path.display(), "Created directory");
                manifest.record_directory(path);
            }
            PlanEntry::File {
                template,
                executable,
                ..
            } => {
                let content = template.content().render(ctx);
                self.filesystem.write_file(&path, &content)?;

                let made_executable = *executable && can_chmod;
                if made_executable {
                    self.filesystem.set_executable(&path)?;
                } else if *executable {
                    debug!(path = %path.display(), "No executable bit on this filesystem, skipping");
                }

                info!(path = %path.display(), bytes = content.len(), "Created file");
                manifest.record_file(path, made_executable);
            }
        }

        Ok(())
    }
}
