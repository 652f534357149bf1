use thiserror::Error;

/// Errors raised while resolving note names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretError {
    /// The token is not one of the recognised note spellings
    #[error("unknown note '{0}'")]
    UnknownNote(String),
}
