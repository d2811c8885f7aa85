//! Unified error handling for mcpforge core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for mcpforge core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum McpForgeError {
    /// Errors from the domain layer (plan invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (precondition and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl McpForgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Internal,
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the project root already existed and nothing was written.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::ProjectExists { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type McpForgeResult<T> = Result<T, McpForgeError>;
