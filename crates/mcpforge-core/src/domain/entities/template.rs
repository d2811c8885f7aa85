//! Template catalog and rendering.
//!
//! The catalog is the closed set of files every generated FastMCP project
//! contains. It is compiled into the binary and never mutated.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  TemplateId (closed enum, TemplateId::ALL = catalog)      │
//! │  ├── relative_path()  "src/server/app.py"               │
//! │  ├── is_executable()  true only for setup.sh            │
//! │  └── content()        TemplateContent                   │
//! │        ├── Literal(&'static str)        copied as-is      │
//! │        └── Parameterized(&'static str)  via RenderContext │
//! ├──────────────────────────────────────────────────────────┤
//! │  RenderContext                                           │
//! │  └── {{PROJECT_NAME}} -> "my_mcp_server"                  │
//! │      {{DISPLAY_NAME}} -> "My Mcp Server"                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is a pure function of the [`ProjectName`]: no clock, no
//! environment, no filesystem.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::ProjectName;

mod content;

/// Context for template rendering.
///
/// Holds the two derived forms of the project name. Values are spliced in
/// without any escaping.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: Vec<(&'static str, String)>,
}

impl RenderContext {
    pub const PROJECT_NAME: &'static str = "PROJECT_NAME";
    pub const DISPLAY_NAME: &'static str = "DISPLAY_NAME";

    pub fn new(name: &ProjectName) -> Self {
        Self {
            variables: vec![
                (Self::PROJECT_NAME, name.as_str().to_owned()),
                (Self::DISPLAY_NAME, name.display_name()),
            ],
        }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right pass: substituted values are never rescanned, so a
    /// project name that itself contains `{{DISPLAY_NAME}}` comes out
    /// verbatim.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}`
    /// - `{{` without a closing `}}` → copied as-is
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// How a catalog entry produces its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateContent {
    /// Constant content, no substitution.
    Literal(&'static str),
    /// Content with `{{VARIABLE}}` placeholders.
    Parameterized(&'static str),
}

impl TemplateContent {
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => (*source).to_owned(),
            Self::Parameterized(source) => ctx.render(source),
        }
    }
}

/// Identifier of one file producer in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    FastMcpConfig,
    Requirements,
    EnvExample,
    GitIgnore,
    Readme,
    SrcPackage,
    ServerPackage,
    ServerApp,
    ToolsPackage,
    CalculatorTools,
    ResourcesPackage,
    CalculatorResources,
    PromptsPackage,
    CalculatorPrompts,
    TestsPackage,
    CalculatorTests,
    SetupWindows,
    SetupPosix,
}

impl TemplateId {
    /// The catalog, in generation order.
    ///
    /// The first sixteen entries are the project files proper; the two setup
    /// scripts follow.
    pub const ALL: [TemplateId; 18] = [
        Self::FastMcpConfig,
        Self::Requirements,
        Self::EnvExample,
        Self::GitIgnore,
        Self::Readme,
        Self::SrcPackage,
        Self::ServerPackage,
        Self::ServerApp,
        Self::ToolsPackage,
        Self::CalculatorTools,
        Self::ResourcesPackage,
        Self::CalculatorResources,
        Self::PromptsPackage,
        Self::CalculatorPrompts,
        Self::TestsPackage,
        Self::CalculatorTests,
        Self::SetupWindows,
        Self::SetupPosix,
    ];

    /// Path relative to the project root, `/`-separated.
    pub const fn relative_path(self) -> &'static str {
        match self {
            Self::FastMcpConfig => "fastmcp.json",
            Self::Requirements => "requirements.txt",
            Self::EnvExample => ".env.example",
            Self::GitIgnore => ".gitignore",
            Self::Readme => "README.md",
            Self::SrcPackage => "src/__init__.py",
            Self::ServerPackage => "src/server/__init__.py",
            Self::ServerApp => "src/server/app.py",
            Self::ToolsPackage => "src/server/tools/__init__.py",
            Self::CalculatorTools => "src/server/tools/calculator_tools.py",
            Self::ResourcesPackage => "src/server/resources/__init__.py",
            Self::CalculatorResources => "src/server/resources/calculator_resource.py",
            Self::PromptsPackage => "src/server/prompts/__init__.py",
            Self::CalculatorPrompts => "src/server/prompts/calculator_prompts.py",
            Self::TestsPackage => "src/tests/__init__.py",
            Self::CalculatorTests => "src/tests/test_calculator.py",
            Self::SetupWindows => "setup.bat",
            Self::SetupPosix => "setup.sh",
        }
    }

    /// Whether the file gets the owner-executable bit after writing.
    pub const fn is_executable(self) -> bool {
        matches!(self, Self::SetupPosix)
    }

    pub const fn content(self) -> TemplateContent {
        use TemplateContent::{Literal, Parameterized};

        match self {
            Self::FastMcpConfig => Parameterized(content::FASTMCP_JSON),
            Self::Requirements => Literal(content::REQUIREMENTS_TXT),
            Self::EnvExample => Literal(content::ENV_EXAMPLE),
            Self::GitIgnore => Literal(content::GITIGNORE),
            Self::Readme => Parameterized(content::README_MD),
            Self::SrcPackage
            | Self::ServerPackage
            | Self::ToolsPackage
            | Self::ResourcesPackage
            | Self::PromptsPackage
            | Self::TestsPackage => Literal(content::PACKAGE_MARKER),
            Self::ServerApp => Parameterized(content::SERVER_APP),
            Self::CalculatorTools => Literal(content::CALCULATOR_TOOLS),
            Self::CalculatorResources => Literal(content::CALCULATOR_RESOURCES),
            Self::CalculatorPrompts => Literal(content::CALCULATOR_PROMPTS),
            Self::CalculatorTests => Literal(content::CALCULATOR_TESTS),
            Self::SetupWindows => Literal(content::SETUP_BAT),
            Self::SetupPosix => Literal(content::SETUP_SH),
        }
    }

    /// Render this entry for a project. Pure and total.
    pub fn render(self, name: &ProjectName) -> String {
        self.content().render(&RenderContext::new(name))
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn render_context_exposes_both_name_forms() {
        let ctx = RenderContext::new(&ProjectName::new("my_mcp_server"));

        assert_eq!(ctx.get("PROJECT_NAME"), Some("my_mcp_server"));
        assert_eq!(ctx.get("DISPLAY_NAME"), Some("My Mcp Server"));
        assert_eq!(ctx.get("YEAR"), None);
    }

    #[test]
    fn render_context_leaves_unknown_and_unclosed_placeholders() {
        let ctx = RenderContext::new(&ProjectName::new("demo"));

        assert_eq!(ctx.render("{{UNKNOWN}}/{{PROJECT_NAME}}"), "{{UNKNOWN}}/demo");
        assert_eq!(ctx.render("a {{PROJECT_NAME"), "a {{PROJECT_NAME");
        assert_eq!(ctx.render("{ plain }"), "{ plain }");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = RenderContext::new(&ProjectName::new("{{DISPLAY_NAME}}"));
        assert_eq!(ctx.render("{{PROJECT_NAME}}"), "{{DISPLAY_NAME}}");
    }

    #[test]
    fn catalog_paths_are_unique_and_relative() {
        let mut seen = HashSet::new();
        for id in TemplateId::ALL {
            let path = id.relative_path();
            assert!(!path.starts_with('/'), "{path} must be relative");
            assert!(seen.insert(path), "duplicate catalog path {path}");
        }
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn only_posix_setup_script_is_executable() {
        let executables: Vec<_> = TemplateId::ALL
            .into_iter()
            .filter(|id| id.is_executable())
            .collect();
        assert_eq!(executables, vec![TemplateId::SetupPosix]);
    }

    #[test]
    fn literal_entries_carry_no_placeholders() {
        for id in TemplateId::ALL {
            if let TemplateContent::Literal(source) = id.content() {
                assert!(!source.contains("{{"), "{id} has an unexpected placeholder");
            }
        }
    }

    #[test]
    fn config_file_interpolates_raw_name_without_escaping() {
        let rendered = TemplateId::FastMcpConfig.render(&ProjectName::new("calc_demo"));
        assert!(rendered.contains(r#""name": "calc_demo","#));

        let quoted = TemplateId::FastMcpConfig.render(&ProjectName::new("bad\"name"));
        assert!(quoted.contains(r#""name": "bad"name","#));
    }

    #[test]
    fn display_name_appears_in_app_and_readme() {
        let name = ProjectName::new("my_mcp_server");

        let app = TemplateId::ServerApp.render(&name);
        assert!(app.starts_with("\"\"\"\nMy Mcp Server MCP Server\n"));
        assert!(app.contains(r#"app = FastMCP("My Mcp Server MCP Server")"#));
        assert!(app.contains(r#"print(f"Starting My Mcp Server MCP Server on {host}:{port}")"#));
        assert!(!app.contains("{{"));

        let readme = TemplateId::Readme.render(&name);
        assert!(readme.starts_with("# My Mcp Server\n"));
        assert!(readme.contains("cd my_mcp_server\n"));
        assert!(readme.contains("my_mcp_server/\n├── fastmcp.json"));
    }

    #[test]
    fn app_entry_defaults_to_localhost_8001() {
        let app = TemplateId::ServerApp.render(&ProjectName::new("x"));
        assert!(app.contains(r#"os.getenv("MCP_SERVER_HOST", "localhost")"#));
        assert!(app.contains(r#"os.getenv("MCP_SERVER_PORT", "8001")"#));
    }

    #[test]
    fn package_markers_are_empty() {
        let name = ProjectName::new("x");
        assert_eq!(TemplateId::SrcPackage.render(&name), "");
        assert_eq!(TemplateId::TestsPackage.render(&name), "");
    }

    #[test]
    fn rendering_is_deterministic() {
        let name = ProjectName::new("calc_demo");
        for id in TemplateId::ALL {
            assert_eq!(id.render(&name), id.render(&name));
        }
    }

    #[test]
    fn setup_script_has_shebang() {
        assert!(
            TemplateId::SetupPosix
                .render(&ProjectName::new("x"))
                .starts_with("#!/bin/bash\n")
        );
    }
}
