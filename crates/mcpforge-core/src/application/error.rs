//! Application layer errors.
//!
//! These errors represent failures in orchestration, not planning.
//! Plan invariant violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while generating a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Something already exists at the project root. Nothing was written.
    #[error("Directory '{}' already exists", .path.display())]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed. Entries written before the failure are
    /// left on disk.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove/rename the existing directory first".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Partially generated files were left in place; remove them before retrying"
                    .into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
