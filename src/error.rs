//! Error types for `DynamicArray` operations.

use thiserror::Error;

/// Result type for fallible `DynamicArray` operations.
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Errors returned by `DynamicArray` and its cursor.
///
/// Every failing operation leaves the array exactly as it was before the call.
///
/// `IndexOutOfBounds`, `InvalidRange` and `Exhausted` are precondition
/// violations. `CapacityOverflow` and `AllocFailed` are resource exhaustion
/// and may be recovered from by reducing the amount of data held.
/// `Unsupported` marks an operation this container never provides.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// An index was outside `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Length of the array at the time of the call
        len: usize,
    },

    /// A sub-array request whose lower bound lies past its upper bound.
    #[error("invalid range {from}..={to} for length {len}")]
    InvalidRange {
        /// Lower bound, inclusive
        from: usize,
        /// Upper bound, inclusive
        to: usize,
        /// Length of the array at the time of the call
        len: usize,
    },

    /// The capacity computation went past the largest representable size.
    #[error("capacity overflow: {requested} elements requested, maximum is {max}")]
    CapacityOverflow {
        /// Capacity that was needed
        requested: usize,
        /// Largest capacity this array may hold
        max: usize,
    },

    /// The allocator refused the request.
    #[error("memory allocation of {size} bytes failed")]
    AllocFailed {
        /// Size of the refused request in bytes
        size: usize,
    },

    /// The cursor has no element left.
    #[error("iterator exhausted")]
    Exhausted,

    /// The operation is not provided by this container.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the operation
        operation: &'static str,
    },
}

impl ArrayError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Returns `true` for an out-of-bounds index or an invalid range.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfBounds { .. } | Self::InvalidRange { .. }
        )
    }

    /// Returns `true` if the error reports that storage could not grow.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::CapacityOverflow { .. } | Self::AllocFailed { .. })
    }
}
