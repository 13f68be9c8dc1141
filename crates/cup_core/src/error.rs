//! Failure taxonomy for the tournament engine.

use thiserror::Error;

/// Errors produced by the tournament-state engine.
///
/// `DuplicateName`, `TeamNotFound` and `EmptyState` are recoverable: the
/// stage controllers log them and carry on. `NoDecision` is fatal to the
/// match that raised it and should not occur under the probability model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CupError {
    /// A team with this name is already registered in the table.
    #[error("team '{0}' is already registered in this group")]
    DuplicateName(String),

    /// A lookup or removal referenced a name that is not present.
    #[error("team '{0}' not found")]
    TeamNotFound(String),

    /// An operation was attempted on a table or set with no entries.
    #[error("operation on empty {0}")]
    EmptyState(&'static str),

    /// The knockout tie-break loop exceeded its replay ceiling.
    #[error("no winner after {attempts} knockout replays")]
    NoDecision { attempts: u32 },
}
