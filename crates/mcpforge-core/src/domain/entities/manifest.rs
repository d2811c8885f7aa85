use std::path::{Path, PathBuf};

use serde::Serialize;

/// Ordered record of the filesystem entries one run actually created.
///
/// Owned by the generator for the duration of a single invocation and handed
/// to the caller for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationManifest {
    entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub executable: bool,
}

impl GenerationManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(ManifestEntry {
            path: path.into(),
            kind: EntryKind::Directory,
            executable: false,
        });
    }

    pub fn record_file(&mut self, path: impl Into<PathBuf>, executable: bool) {
        self.entries.push(ManifestEntry {
            path: path.into(),
            kind: EntryKind::File,
            executable,
        });
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }

    pub fn files(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }

    pub fn directories(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a GenerationManifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
