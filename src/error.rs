use thiserror::Error;

/// Errors reported by the checked operations of [`GrowableVec`](crate::GrowableVec).
///
/// All three kinds are contract violations or resource exhaustion, so they are
/// handed straight back to the caller; nothing inside the crate retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum VecError {
    /// A checked access used an index that is not below the current length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the vector at the time of the access.
        len: usize,
    },

    /// `front`, `back` or `pop_back` was called on a vector with no elements.
    #[error("container is empty")]
    EmptyContainer,

    /// Storage for `capacity` slots could not be obtained.
    ///
    /// Also reported when the byte size of the request does not fit a valid layout.
    #[error("failed to allocate storage for {capacity} elements")]
    AllocationFailure {
        /// The number of slots that was requested.
        capacity: usize,
    },
}

/// Result alias used by every fallible [`GrowableVec`](crate::GrowableVec) operation.
pub type VecResult<T> = Result<T, VecError>;

/// Unwraps `result`, panicking with the error's message.
///
/// Backs the panicking conveniences (`new`, `with_len`, `Clone`, indexing).
#[inline]
#[track_caller]
pub(crate) fn or_panic<T>(result: VecResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
