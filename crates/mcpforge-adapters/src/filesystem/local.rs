//! Local filesystem adapter using std::fs.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use mcpforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{McpForgeError, McpForgeResult},
};

/// Mode applied to executable files: `rwxr-xr-x`.
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> McpForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> McpForgeResult<()> {
        // The handle is dropped on every return path, including errors.
        let mut file = File::create(path).map_err(|e| map_io_error(path, e, "create file"))?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn supports_executable_bit(&self) -> bool {
        cfg!(unix)
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> McpForgeResult<()> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)
            .map_err(|e| map_io_error(path, e, "get metadata"))?
            .permissions();
        perms.set_mode(EXECUTABLE_MODE);
        trace!(path = %path.display(), mode = format_args!("{EXECUTABLE_MODE:o}"), "chmod");
        std::fs::set_permissions(path, perms).map_err(|e| map_io_error(path, e, "set permissions"))
    }

    #[cfg(not(unix))]
    fn set_executable(&self, _path: &Path) -> McpForgeResult<()> {
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> McpForgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_truncates_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "a much longer first version").unwrap();
        fs.write_file(&path, "short").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/server/tools");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        assert!(nested.is_dir());
        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_into_missing_directory_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/app.py");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();

        match err {
            McpForgeError::Application(ApplicationError::FilesystemError { path: p, reason }) => {
                assert_eq!(p, path);
                assert!(reason.starts_with("Failed to create file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directory_over_existing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src");
        std::fs::write(&path, "").unwrap();

        assert!(LocalFilesystem::new().create_dir_all(&path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_sets_owner_exec_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup.sh");
        let fs = LocalFilesystem::new();
        fs.write_file(&path, "#!/bin/bash\n").unwrap();

        assert!(fs.supports_executable_bit());
        fs.set_executable(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_on_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .set_executable(&dir.path().join("nope.sh"))
            .unwrap_err();
        assert!(err.to_string().contains("nope.sh"));
    }
}
