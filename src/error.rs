use thiserror::Error;

/// Result type for container adapters.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the document and storage adapters.
///
/// Reading an absent container through `must_get` is not represented here: it
/// is a programming error and panics.
#[derive(Debug, Error)]
pub enum Error {
    /// A scanned storage value had a runtime type other than the container's.
    #[error("unsupported type: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[cfg(feature = "json")]
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[cfg(feature = "json")]
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}
