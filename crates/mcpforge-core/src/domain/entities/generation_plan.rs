use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::template::TemplateId, error::DomainError, value_objects::ProjectName};

/// Nested directories created under the project root, parents first.
pub const SOURCE_DIRECTORIES: [&str; 6] = [
    "src",
    "src/server",
    "src/server/tools",
    "src/server/resources",
    "src/server/prompts",
    "src/tests",
];

/// Ordered list of filesystem entries one generation run creates.
///
/// Every path starts with the project root directory and is resolved against
/// the generator's output root (an absolute project name stays absolute).
/// Invariant: every entry's parent directory appears at an earlier index
/// (see [`GenerationPlan::validate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub(crate) entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    /// Plan the full catalog for a project.
    ///
    /// Order: project root, then [`SOURCE_DIRECTORIES`], then every
    /// [`TemplateId::ALL`] file.
    pub fn for_project(name: &ProjectName) -> Self {
        let root = name.root_path();
        let mut plan = Self::new();

        plan.push_directory(root.clone());
        for dir in SOURCE_DIRECTORIES {
            plan.push_directory(nest(&root, dir));
        }
        for template in TemplateId::ALL {
            plan.push_file(nest(&root, template.relative_path()), template);
        }

        plan
    }

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(PlanEntry::Directory { path: path.into() });
    }

    pub fn push_file(&mut self, path: impl Into<PathBuf>, template: TemplateId) {
        self.entries.push(PlanEntry::File {
            path: path.into(),
            template,
            executable: template.is_executable(),
        });
    }

    /// Check the structural invariants the materializer depends on.
    ///
    /// - the plan is not empty
    /// - no path appears twice
    /// - every entry after the first has its parent directory planned at an
    ///   earlier index; the first entry is the project root, whose ancestors
    ///   are created along with it
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        let mut planned_dirs: HashSet<&Path> = HashSet::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let path = entry.path();

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            if index > 0 {
                let parent = path.parent().unwrap_or(Path::new(""));
                if !planned_dirs.contains(parent) {
                    return Err(DomainError::ParentNotPlanned {
                        path: path.display().to_string(),
                        parent: parent.display().to_string(),
                    });
                }
            }

            if let PlanEntry::Directory { path } = entry {
                planned_dirs.insert(path.as_path());
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| !e.is_file())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for GenerationPlan {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    Directory {
        path: PathBuf,
    },
    File {
        path: PathBuf,
        template: TemplateId,
        executable: bool,
    },
}

impl PlanEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path } | Self::File { path, .. } => path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

/// Join a `/`-separated catalog path onto the root one component at a time,
/// so the platform separator is used throughout.
fn nest(root: &Path, relative: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(relative.split('/'));
    path
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn plan() -> GenerationPlan {
        GenerationPlan::for_project(&ProjectName::new("calc_demo"))
    }

    #[test]
    fn root_comes_first() {
        let plan = plan();
        assert_eq!(
            plan.entries()[0],
            PlanEntry::Directory {
                path: PathBuf::from("calc_demo")
            }
        );
    }

    #[test]
    fn plan_holds_seven_directories_and_eighteen_files() {
        let plan = plan();
        assert_eq!(plan.directories().count(), 7);
        assert_eq!(plan.files().count(), 18);
        assert_eq!(plan.entry_count(), 25);
    }

    #[test]
    fn all_directories_precede_all_files() {
        let plan = plan();
        let first_file = plan.entries().iter().position(PlanEntry::is_file).unwrap();
        assert!(plan.entries()[first_file..].iter().all(PlanEntry::is_file));
    }

    #[test]
    fn generated_plan_is_valid() {
        assert_eq!(plan().validate(), Ok(()));
    }

    #[test]
    fn file_paths_nest_under_root() {
        let plan = plan();
        let app = plan
            .files()
            .find(|e| matches!(e, PlanEntry::File { template: TemplateId::ServerApp, .. }))
            .unwrap();
        let expected: PathBuf = ["calc_demo", "src", "server", "app.py"].iter().collect();
        assert_eq!(app.path(), expected.as_path());
    }

    #[test]
    fn only_setup_sh_is_flagged_executable() {
        let plan = plan();
        let flagged: Vec<_> = plan
            .files()
            .filter(|e| matches!(e, PlanEntry::File { executable: true, .. }))
            .map(|e| e.path().to_path_buf())
            .collect();
        assert_eq!(flagged.len(), 1);
        assert!(flagged[0].ends_with("setup.sh"));
    }

    #[test]
    fn validate_rejects_empty_plan() {
        assert_eq!(GenerationPlan::new().validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn validate_rejects_file_before_its_directory() {
        let mut plan = GenerationPlan::new();
        plan.push_directory(PathBuf::from("p"));
        plan.push_file(PathBuf::from("p/src/app.py"), TemplateId::ServerApp);
        plan.push_directory(PathBuf::from("p/src"));

        assert!(matches!(
            plan.validate(),
            Err(DomainError::ParentNotPlanned { .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let mut plan = GenerationPlan::new();
        plan.push_directory(PathBuf::from("p"));
        plan.push_file(PathBuf::from("p/README.md"), TemplateId::Readme);
        plan.push_file(PathBuf::from("p/README.md"), TemplateId::Readme);

        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn nested_project_name_still_validates() {
        let plan = GenerationPlan::for_project(&ProjectName::new("parent/demo"));
        assert!(plan.validate().is_ok());
        assert_eq!(plan.entries()[0].path(), Path::new("parent/demo"));
    }

    #[test]
    fn empty_name_plans_into_current_directory() {
        let plan = GenerationPlan::for_project(&ProjectName::new(""));
        assert_eq!(plan.entries()[0].path(), Path::new("."));
        assert!(plan.validate().is_ok());
    }
}
