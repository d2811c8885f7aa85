//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mcpforge",
    bin_name = "mcpforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant FastMCP server projects",
    long_about = "mcpforge writes a runnable FastMCP (Python) server project \
                  with a calculator example, tests, and setup scripts.",
    after_help = "EXAMPLES:\n\
        \x20 mcpforge my_mcp_server\n\
        \x20 mcpforge --output-format json calc_demo\n\
        \x20 mcpforge -vv ../servers/calc_demo",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the project directory to create.
    ///
    /// Used verbatim as the directory name and inside the generated files.
    /// `my_mcp_server` is displayed as "My Mcp Server".
    #[arg(value_name = "PROJECT_NAME", help = "Project name (e.g. my_mcp_server)")]
    pub name: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────
