//! Error types for bloomhash operations.
//!
//! All fallible operations in this crate are synchronous, deterministic
//! computations: a failure is terminal for the operation attempted and
//! retrying reproduces the identical failure. Callers should treat these
//! errors as programming mistakes to fix, not transient conditions.
//!
//! # Error Propagation
//!
//! ```
//! use bloomhash::{Result, BloomHashError, Shape};
//! use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
//!
//! fn make_shape(k: usize, m: usize) -> Result<Shape> {
//!     let identity = HashFunctionIdentity::new(
//!         "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
//!     );
//!     let shape = Shape::new(identity, k, m)?;
//!     Ok(shape)
//! }
//! # assert!(make_shape(3, 100).is_ok());
//! # assert!(make_shape(0, 100).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bloomhash operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`BloomHashError`].
pub type Result<T> = std::result::Result<T, BloomHashError>;

/// Errors that can occur while constructing shapes and hashers or while
/// producing bit indices.
///
/// Each variant carries the context needed to diagnose the failure.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - Compatibility errors carry both identities' common-string forms so the
///   mismatch is visible without re-running anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BloomHashError {
    /// Shape built with a non-positive bit count or hash function count.
    InvalidShape {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False-positive probability requested for a non-positive item count.
    ///
    /// `Shape::probability(n)` requires `n >= 1`; the formula is meaningless
    /// for an empty insertion count.
    InvalidItemCount {
        /// The invalid count that was provided.
        count: usize,
    },

    /// Combinatorial hasher built from an empty byte buffer.
    ///
    /// There is no way to derive an `(initial, increment)` seed pair from
    /// zero bytes.
    EmptyBuffer,

    /// A hasher's hash function identity does not match the shape's.
    ///
    /// Mixing hashers and shapes built around incompatible hash algorithms
    /// would silently produce garbage indices, so the mismatch is surfaced
    /// before any index is emitted.
    IncompatibleHashFunction {
        /// Common-string form of the identity the shape expects.
        expected: String,
        /// Common-string form of the identity the hasher carries.
        actual: String,
    },

    /// A pre-cached hasher was built from a non-cyclic hash function.
    ///
    /// Cached `(base, delta)` pairs only reproduce the original index
    /// sequence when the source function derives later seeds linearly from
    /// the seed-0 digest, which is the defining property of the cyclic
    /// process type.
    ProcessTypeMismatch {
        /// Common-string form of the offending identity.
        identity: String,
    },

    /// A static hasher was given an index outside `[0, m)`.
    IndexOutOfRange {
        /// The invalid index that was supplied.
        index: usize,
        /// Number of bits in the target shape.
        bits: usize,
    },

    /// A static hasher was queried with a shape other than the one it was
    /// frozen against.
    ShapeMismatch {
        /// Display form of the frozen shape.
        expected: String,
        /// Display form of the shape that was supplied.
        actual: String,
    },
}

impl fmt::Display for BloomHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { message } => {
                write!(f, "Invalid shape: {}.", message)
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Number of items must be greater than 0.",
                    count
                )
            }
            Self::EmptyBuffer => {
                write!(f, "Cannot build a hasher from an empty byte buffer.")
            }
            Self::IncompatibleHashFunction { expected, actual } => {
                write!(
                    f,
                    "Incompatible hash function: expected '{}', got '{}'.",
                    expected, actual
                )
            }
            Self::ProcessTypeMismatch { identity } => {
                write!(
                    f,
                    "Hash function '{}' is not cyclic; a caching hasher requires a \
                     cyclic process type.",
                    identity
                )
            }
            Self::IndexOutOfRange { index, bits } => {
                write!(
                    f,
                    "Index {} is out of range for a shape with {} bits.",
                    index, bits
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Shape mismatch: hasher was frozen for {} but queried with {}.",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BloomHashError {}

impl BloomHashError {
    /// Create an `InvalidShape` error with a formatted message.
    #[must_use]
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `EmptyBuffer` error.
    #[must_use]
    pub fn empty_buffer() -> Self {
        Self::EmptyBuffer
    }

    /// Create an `IncompatibleHashFunction` error from both identities'
    /// common-string forms.
    #[must_use]
    pub fn incompatible_hash_function(
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::IncompatibleHashFunction {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a `ProcessTypeMismatch` error.
    #[must_use]
    pub fn process_type_mismatch(identity: impl Into<String>) -> Self {
        Self::ProcessTypeMismatch {
            identity: identity.into(),
        }
    }

    /// Create an `IndexOutOfRange` error.
    #[must_use]
    pub fn index_out_of_range(index: usize, bits: usize) -> Self {
        Self::IndexOutOfRange { index, bits }
    }

    /// Create a `ShapeMismatch` error.
    #[must_use]
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
