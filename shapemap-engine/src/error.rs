//! Error types for the mapping engine.

use thiserror::Error;

/// Result type for request-time mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Fatal configuration errors raised while registering a mapping pair.
///
/// These surface during warm-up and must abort startup; they are never
/// deferred to request time and never caught inside the engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The destination type requires constructor arguments and at least one
    /// of them has no matching source field.
    #[error(
        "cannot construct '{destination}' from '{source}': constructor parameter '{param}' has no matching source field"
    )]
    UnresolvedConstructor {
        r#source: &'static str,
        destination: &'static str,
        param: &'static str,
    },
}

/// Errors local to a single mapping call.
#[derive(Debug, Error)]
pub enum MapError {
    /// No mapping was registered for this ordered type pair. Callers can
    /// detect this distinctly instead of receiving a silently empty value.
    #[error("no mapping registered from '{source}' to '{destination}'")]
    NotFound {
        r#source: &'static str,
        destination: &'static str,
    },

    /// A user override routine failed; the underlying error is preserved
    /// unmodified.
    #[error("mapping override failed: {0}")]
    Override(#[source] anyhow::Error),

    /// The cancellation signal was observed before an element was
    /// dispatched. Elements already dispatched are not retracted.
    #[error("collection mapping cancelled before dispatch")]
    Cancelled,

    /// A fanned-out element task aborted before producing a result.
    #[error("mapping task aborted: {0}")]
    Join(String),
}
