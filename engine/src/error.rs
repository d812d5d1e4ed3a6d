//! Error types for the Pokedex engine.

use crate::RecordId;
use thiserror::Error;

/// Broad classification of an [`Error`], for callers that only need to
/// decide how to report an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A lookup by id or name missed.
    NotFound,
    /// The operation collided with something that already exists.
    Duplicate,
    /// The operands are well-formed but the operation does not apply to them.
    InvalidOperand,
}

/// All possible errors from the Pokedex engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Lookup errors
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("owner not found: {0}")]
    OwnerNotFound(String),

    // Collisions
    #[error("record already exists: {0}")]
    RecordExists(RecordId),

    #[error("owner already exists: {0}")]
    OwnerExists(String),

    // Operand errors
    #[error("record cannot evolve: {0}")]
    CannotEvolve(RecordId),

    #[error("owner has no records: {0}")]
    EmptyStore(String),

    #[error("cannot merge owner into itself: {0}")]
    SelfMerge(String),

    #[error("invalid owner name: {0:?}")]
    InvalidOwnerName(String),

    #[error("no template for id {0}")]
    TemplateOutOfRange(RecordId),

    #[error("invalid template table: {0}")]
    InvalidTable(String),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RecordNotFound(_) | Error::OwnerNotFound(_) => ErrorKind::NotFound,
            Error::RecordExists(_) | Error::OwnerExists(_) => ErrorKind::Duplicate,
            Error::CannotEvolve(_)
            | Error::EmptyStore(_)
            | Error::SelfMerge(_)
            | Error::InvalidOwnerName(_)
            | Error::TemplateOutOfRange(_)
            | Error::InvalidTable(_) => ErrorKind::InvalidOperand,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::RecordNotFound(25);
        assert_eq!(err.to_string(), "record not found: 25");

        let err = Error::OwnerExists("Ash".into());
        assert_eq!(err.to_string(), "owner already exists: Ash");

        let err = Error::InvalidOwnerName("".into());
        assert_eq!(err.to_string(), "invalid owner name: \"\"");
    }

    #[test]
    fn error_kinds() {
        assert_eq!(Error::RecordNotFound(1).kind(), ErrorKind::NotFound);
        assert_eq!(Error::OwnerNotFound("Red".into()).kind(), ErrorKind::NotFound);
        assert_eq!(Error::OwnerExists("Red".into()).kind(), ErrorKind::Duplicate);
        assert_eq!(Error::RecordExists(4).kind(), ErrorKind::Duplicate);
        assert_eq!(Error::SelfMerge("Red".into()).kind(), ErrorKind::InvalidOperand);
        assert_eq!(Error::CannotEvolve(3).kind(), ErrorKind::InvalidOperand);
    }
}
