// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised only when a generation plan breaks its own structural invariants.
/// The compiled-in catalog never triggers these; they guard extensions of it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Generation plan is empty")]
    EmptyPlan,

    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("'{path}' is planned before its parent directory '{parent}'")]
    ParentNotPlanned { path: String, parent: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ParentNotPlanned { parent, .. } => vec![
                format!("Add '{}' to the planned directories", parent),
                "Directories must be listed before the files they contain".into(),
            ],
            Self::DuplicatePath { path } => {
                vec![format!("Remove the duplicate catalog entry for '{}'", path)]
            }
            Self::EmptyPlan => {
                vec!["This is a bug in the template catalog, please report it".into()]
            }
        }
    }
}
