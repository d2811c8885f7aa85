//! Integration tests for mcpforge-core through its public API.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use mcpforge_core::prelude::*;

/// Minimal port implementation: a flat map of created paths.
#[derive(Clone, Default)]
struct RecordingFs {
    entries: Arc<Mutex<BTreeMap<PathBuf, Option<String>>>>,
}

impl Filesystem for RecordingFs {
    fn exists(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> McpForgeResult<()> {
        self.entries.lock().unwrap().insert(path.to_path_buf(), None);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> McpForgeResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Some(content.to_owned()));
        Ok(())
    }

    fn supports_executable_bit(&self) -> bool {
        false
    }

    fn set_executable(&self, _path: &Path) -> McpForgeResult<()> {
        unreachable!("capability reported as unsupported")
    }
}

#[test]
fn full_generation_workflow() {
    let fs = RecordingFs::default();
    let generator = ProjectGenerator::new(Box::new(fs.clone())).with_output_root("/output");

    let manifest = generator.generate(&ProjectName::new("my_mcp_server")).unwrap();

    assert_eq!(manifest.len(), 25);
    assert_eq!(manifest.entries()[0].path, PathBuf::from("/output/my_mcp_server"));

    let entries = fs.entries.lock().unwrap();
    let readme = entries
        .get(Path::new("/output/my_mcp_server/README.md"))
        .cloned()
        .flatten()
        .unwrap();
    assert!(readme.starts_with("# My Mcp Server"));
}

#[test]
fn plan_lists_directories_before_contents() {
    let plan = GenerationPlan::for_project(&ProjectName::new("calc_demo"));
    plan.validate().unwrap();

    let mut seen_dirs = Vec::new();
    for entry in plan.entries() {
        if let Some(parent) = entry.path().parent().filter(|p| !p.as_os_str().is_empty()) {
            if entry.path() != Path::new("calc_demo") {
                assert!(
                    seen_dirs.iter().any(|d: &PathBuf| d == parent),
                    "{} planned before {}",
                    entry.path().display(),
                    parent.display()
                );
            }
        }
        if !entry.is_file() {
            seen_dirs.push(entry.path().to_path_buf());
        }
    }
}

#[test]
fn catalog_is_rendered_identically_for_equal_names() {
    let a = ProjectName::new("calc_demo");
    let b = ProjectName::from("calc_demo".to_owned());
    for id in TemplateId::ALL {
        assert_eq!(id.render(&a), id.render(&b), "{id} differs");
    }
}

#[test]
fn manifest_tracks_kinds_and_executable_flag() {
    let mut manifest = GenerationManifest::new();
    manifest.record_directory("demo");
    manifest.record_file("demo/setup.sh", true);
    manifest.record_file("demo/setup.bat", false);

    let kinds: Vec<EntryKind> = manifest.entries().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EntryKind::Directory, EntryKind::File, EntryKind::File]);
    assert_eq!(manifest.files().filter(|f| f.executable).count(), 1);
}
