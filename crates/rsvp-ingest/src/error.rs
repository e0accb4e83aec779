use thiserror::Error;

/// Errors from roster parsing. Fatal to initialization: the caller surfaces
/// a load-failed condition and leaves already-loaded functionality alone.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("malformed roster: {0}")]
    MalformedRoster(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
