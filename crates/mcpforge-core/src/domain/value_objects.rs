//! Domain value objects.
//!
//! Immutable, self-validating values with no identity. For now this is only
//! [`ProjectName`], the single input of a generation run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The project name token supplied by the user.
///
/// It is used verbatim as the root directory name and spliced into generated
/// text in two forms:
///
/// | Form | Example | Used for |
/// |------|---------|----------|
/// | raw (`as_str`) | `my_mcp_server` | paths, package names, config values |
/// | display (`display_name`) | `My Mcp Server` | headings, banners |
///
/// No charset or length validation happens here. Any token the filesystem
/// accepts is accepted, including tokens containing `"` or control
/// characters, which will corrupt the generated `fastmcp.json` because the
/// raw form is interpolated without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Humanized display form: `_` becomes a space and every word is
    /// title-cased.
    ///
    /// A word is a maximal run of alphabetic characters. Its first letter is
    /// uppercased and the rest lowercased, so digits and punctuation also act
    /// as word boundaries (`calc2demo` → `Calc2Demo`, `myMCP` → `Mymcp`).
    pub fn display_name(&self) -> String {
        title_case(&self.0.replace('_', " "))
    }

    /// Directory the project is generated into, relative to the output root.
    ///
    /// An empty token maps to `.`: the current directory always exists, so an
    /// empty name is refused by the existence check instead of spilling the
    /// project files into the working directory.
    pub fn root_path(&self) -> PathBuf {
        if self.0.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.0)
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
                in_word = true;
            }
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
