use std::fmt;

use thiserror::Error;

/// Errors returned by [`Heap`](crate::Heap) operations.
///
/// `CapacityExceeded` hands the rejected value back so the caller can retry
/// the insert after making room.
#[derive(Error, PartialEq, Eq)]
pub enum HeapError<T> {
    #[error("heap is empty")]
    EmptyContainer,

    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize, value: T },

    #[error("index {index} out of range for heap of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl<T> HeapError<T> {
    /// Recovers the value rejected by a failed insert, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            HeapError::CapacityExceeded { value, .. } => Some(value),
            _ => None,
        }
    }
}

// Manual impl so `T` need not be `Debug`; the rejected value is elided.
impl<T> fmt::Debug for HeapError<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => fmt.write_str("EmptyContainer"),
            HeapError::CapacityExceeded { capacity, .. } => fmt
                .debug_struct("CapacityExceeded")
                .field("capacity", capacity)
                .finish_non_exhaustive(),
            HeapError::IndexOutOfRange { index, size } => fmt
                .debug_struct("IndexOutOfRange")
                .field("index", index)
                .field("size", size)
                .finish(),
            HeapError::InvalidArgument(msg) => {
                fmt.debug_tuple("InvalidArgument").field(msg).finish()
            }
        }
    }
}
