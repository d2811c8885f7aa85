//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::debug;

use mcpforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::McpForgeResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying state, so a test can keep one handle for
/// assertions while a `ProjectGenerator` owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    /// Paths whose creation fails with an injected error.
    failures: HashSet<PathBuf>,
    executable_bit: bool,
}

impl Default for MemoryFilesystemInner {
    fn default() -> Self {
        Self {
            files: HashMap::new(),
            directories: HashSet::new(),
            executables: HashSet::new(),
            failures: HashSet::new(),
            executable_bit: true,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Filesystem that reports no executable-bit support, like Windows.
    pub fn without_executable_bit() -> Self {
        let fs = Self::new();
        fs.write().executable_bit = false;
        fs
    }

    /// Make any later attempt to create `path` fail.
    pub fn fail_on(&self, path: impl Into<PathBuf>) -> &Self {
        self.write().failures.insert(path.into());
        self
    }

    /// Pre-create a directory (and its ancestors).
    pub fn add_directory(&self, path: impl AsRef<Path>) -> &Self {
        insert_ancestors(&mut self.write().directories, path.as_ref());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.read().executables.contains(path)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.read().files.keys().cloned().collect();
        files.sort();
        files
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<_> = self.read().directories.iter().cloned().collect();
        dirs.sort();
        dirs
    }

    // A poisoned lock only means another test thread panicked mid-write;
    // the maps are still usable.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> McpForgeResult<()> {
        let mut inner = self.write();
        check_injected(&inner, path, "create directory")?;

        if inner.files.contains_key(path) {
            return Err(fs_error(path, "Failed to create directory: file exists"));
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> McpForgeResult<()> {
        let mut inner = self.write();
        check_injected(&inner, path, "create file")?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(fs_error(
                    path,
                    "Failed to create file: parent directory does not exist",
                ));
            }
        }
        if inner.directories.contains(path) {
            return Err(fs_error(path, "Failed to create file: is a directory"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn supports_executable_bit(&self) -> bool {
        self.read().executable_bit
    }

    fn set_executable(&self, path: &Path) -> McpForgeResult<()> {
        let mut inner = self.write();
        if !inner.files.contains_key(path) {
            return Err(fs_error(path, "Failed to get metadata: no such file"));
        }
        inner.executables.insert(path.to_path_buf());
        Ok(())
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn check_injected(
    inner: &MemoryFilesystemInner,
    path: &Path,
    operation: &str,
) -> McpForgeResult<()> {
    if inner.failures.contains(path) {
        debug!(path = %path.display(), "Injected failure");
        return Err(fs_error(
            path,
            &format!("Failed to {operation}: injected failure"),
        ));
    }
    Ok(())
}

fn fs_error(path: &Path, reason: &str) -> mcpforge_core::error::McpForgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.to_owned(),
    }
    .into()
}
