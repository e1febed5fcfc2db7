use thiserror::Error;

/// Error types for `Vector`, `Stack` and `Queue` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CollectionError {
    /// Index is outside the live range of the container
    #[error("Index out of range: index {index} is beyond length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Pop, peek or dequeue on a container without elements
    #[error("Operation on empty container")]
    Empty,
    /// Push on a full static stack or enqueue on a full queue
    #[error("Container is full: capacity {capacity}")]
    Full {
        /// Capacity of the container
        capacity: usize,
    },
    /// The allocator refused to provide the requested slots
    #[error("Allocation failure: could not reserve {requested} slots")]
    AllocationFailure {
        /// Number of slots requested
        requested: usize,
    },
    /// The container storage was already released
    #[error("Container used after release")]
    Released,
}

/// Turns a failed contract check into a panic carrying the error message.
pub(crate) trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for Result<T, CollectionError> {
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
