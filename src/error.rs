use thiserror::Error;

/// Errors a command can be rejected with.
///
/// Both variants are caller errors, not transient failures: the engine
/// rejects the command without mutating any state and stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The command referenced an id, step, or option absent from current state.
    #[error("not found: {0}")]
    NotFound(String),

    /// The command is not permitted from the current screen.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
