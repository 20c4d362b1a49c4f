//! Domain failure taxonomy carried through outcome pipelines

use thiserror::Error;

use crate::outcome::Outcome;

/// The failure channel's domain taxonomy.
///
/// Services that speak `Outcome` agree on these categories so callers can
/// branch on the kind of failure without parsing message strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// Input failed a precondition before any work happened.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation clashes with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A collaborator the operation depends on misbehaved.
    #[error("dependency failed: {0}")]
    Dependency(String),
}

impl Fault {
    /// Build a validation fault.
    pub fn validation(message: impl Into<String>) -> Self {
        Fault::Validation(message.into())
    }

    /// Build a not-found fault.
    pub fn not_found(message: impl Into<String>) -> Self {
        Fault::NotFound(message.into())
    }

    /// Build a conflict fault.
    pub fn conflict(message: impl Into<String>) -> Self {
        Fault::Conflict(message.into())
    }

    /// Build a dependency fault.
    pub fn dependency(message: impl Into<String>) -> Self {
        Fault::Dependency(message.into())
    }

    /// The human-readable message, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Fault::Validation(message)
            | Fault::NotFound(message)
            | Fault::Conflict(message)
            | Fault::Dependency(message) => message,
        }
    }
}

/// Outcome alias for pipelines that fail with a [`Fault`].
pub type FaultOutcome<T> = Outcome<T, Fault>;
