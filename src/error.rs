use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Malformed input that no container state could make valid
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected argument
        reason: &'static str,
    },
    /// Index is beyond the occupied range
    #[error("No such element: index {index} is beyond length {length}")]
    NotFound {
        /// Index that was accessed
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Allocation failed, or the requested size is not addressable
    #[error("Out of memory: cannot provide {requested} slots")]
    OutOfMemory {
        /// Number of slots that could not be provided
        requested: usize,
    },
    /// An arithmetic step would leave the index or size range
    #[error("Overflow: length {length} cannot grow by {additional}")]
    Overflow {
        /// Current length of the container
        length: usize,
        /// Number of slots the operation tried to add
        additional: usize,
    },
}
