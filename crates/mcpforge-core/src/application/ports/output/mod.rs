//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mcpforge-adapters` crate provides implementations.

use crate::error::McpForgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mcpforge_adapters::LocalFilesystem` (production)
/// - `mcpforge_adapters::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - Operations are additive: nothing here deletes or renames
/// - `write_file` creates or truncates, and releases its handle on every
///   exit path, including errors
/// - Failures surface as `ApplicationError::FilesystemError` carrying the
///   offending path
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Succeeds if it
    /// already exists.
    fn create_dir_all(&self, path: &Path) -> McpForgeResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> McpForgeResult<()>;

    /// Whether this filesystem has an owner-executable permission bit.
    fn supports_executable_bit(&self) -> bool;

    /// Set the owner-executable bit on an existing file.
    ///
    /// Only called when [`Filesystem::supports_executable_bit`] is `true`.
    fn set_executable(&self, path: &Path) -> McpForgeResult<()>;
}
