//! Error types for eager operations.

/// Returned by [`chunk`](super::chunk) when the requested chunk size is zero.
///
/// The check happens before any chunk is built, so a failed call never
/// produces a partial result.
///
/// # Examples
///
/// ```rust
/// use seqops::eager::{self, InvalidChunkSizeError};
///
/// let error = eager::chunk(&[1, 2, 3], 0).unwrap_err();
/// assert_eq!(error, InvalidChunkSizeError { size: 0 });
/// assert_eq!(
///     format!("{error}"),
///     "invalid chunk size 0: chunk size must be greater than 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChunkSizeError {
    /// The size that was rejected.
    pub size: usize,
}

impl std::fmt::Display for InvalidChunkSizeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "invalid chunk size {}: chunk size must be greater than 0",
            self.size
        )
    }
}

impl std::error::Error for InvalidChunkSizeError {}

static_assertions::assert_impl_all!(
    InvalidChunkSizeError: std::error::Error,
    Send,
    Sync,
    Copy
);
