//! Implementation of `mcpforge <PROJECT_NAME>`.
//!
//! Responsibility: wire the local filesystem into the core generator, run it,
//! and display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use mcpforge_adapters::LocalFilesystem;
use mcpforge_core::prelude::{
    EntryKind, GenerationManifest, ManifestEntry, ProjectGenerator, ProjectName,
};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

/// Where the generated server listens by default.
pub const SERVER_URL: &str = "http://localhost:8001/mcp";

/// Machine-readable summary printed for `--output-format json`.
#[derive(Debug, Serialize)]
struct GenerationReport<'a> {
    project: &'a ProjectName,
    display_name: String,
    root: PathBuf,
    platform: &'static str,
    server_url: &'static str,
    #[serde(flatten)]
    manifest: &'a GenerationManifest,
}

/// Execute a generation run.
///
/// 1. Announce the project and platform
/// 2. Generate through `ProjectGenerator` + `LocalFilesystem`
/// 3. Print one line per created entry, then next steps
#[instrument(skip_all, fields(project = %name))]
pub fn execute(name: ProjectName, output: &OutputManager) -> CliResult<()> {
    let json = output.format() == OutputFormat::Json;
    let generator = ProjectGenerator::new(Box::new(LocalFilesystem::new()));

    if !json {
        output.header(&format!("Creating MCP Server project: {name}"))?;
        output.print(&format!("Platform: {}", platform_name()))?;
        output.print("")?;
    }

    let manifest = generator.generate(&name)?;
    info!(entries = manifest.len(), "Generation finished");

    if json {
        output.json(&GenerationReport {
            project: &name,
            display_name: name.display_name(),
            root: generator.project_path(&name),
            platform: platform_name(),
            server_url: SERVER_URL,
            manifest: &manifest,
        })?;
        return Ok(());
    }

    for entry in &manifest {
        output.print(&progress_line(entry))?;
    }

    output.print("")?;
    output.success(&format!(
        "SUCCESS: MCP Server project '{name}' created successfully!"
    ))?;
    output.print("")?;
    for line in next_steps(&name) {
        output.print(&line)?;
    }
    output.print("")?;
    output.info(&format!("The MCP server will be available at: {SERVER_URL}"))?;

    Ok(())
}

fn progress_line(entry: &ManifestEntry) -> String {
    match entry.kind {
        EntryKind::Directory => format!("Created directory: {}", entry.path.display()),
        EntryKind::File => format!("Created file: {}", entry.path.display()),
    }
}

fn next_steps(name: &ProjectName) -> Vec<String> {
    vec![
        "Next steps:".into(),
        format!("  1. cd {name}"),
        "  2. Run setup script:".into(),
        "     Windows: setup.bat".into(),
        "     Linux:   ./setup.sh".into(),
        "  3. Start the MCP server:".into(),
        "     python src/server/app.py".into(),
        "  4. Test with MCP Inspector:".into(),
        format!("     npx @modelcontextprotocol/inspector@latest {SERVER_URL}"),
    ]
}

/// Operating system name as users know it.
fn platform_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}
