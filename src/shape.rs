//! Bloom filter shape: the `(m, k)` configuration plus its hash identity.
//!
//! A [`Shape`] is the immutable description of a Bloom filter's geometry:
//! `m` bits in the array and `k` hash functions per item. It also carries the
//! [`HashFunctionIdentity`] the filter was built around, which every hasher
//! validates before producing indices.
//!
//! # Mathematical Background
//!
//! For a filter of `m` bits holding `n` items with `k` hash functions:
//!
//! - Worst-case false positive probability: `p = (1 - e^(-k·n/m))^k`
//! - Cardinality estimate from `c` set bits: `n ≈ -(m/k)·ln(1 - c/m)`
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Swamidass & Baldi (2007). "Mathematical correction for fingerprint similarity measures"

#![allow(clippy::cast_precision_loss)]

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{BloomHashError, Result};
use crate::hash::HashFunctionIdentity;

/// Immutable `(bits, hash functions)` configuration of a Bloom filter.
///
/// # Equality
///
/// Two shapes are equal iff they agree on `m` and `k`. The identity is
/// context for the compatibility boundary, not part of value equality: many
/// hashers and filters may reference the same shape value without ownership
/// implications, and a shape reconstructed from a wire format compares equal
/// to the original regardless of identity provenance.
///
/// # Examples
///
/// ```
/// use bloomhash::Shape;
/// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
///
/// let identity = HashFunctionIdentity::new(
///     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
/// );
/// let shape = Shape::new(identity, 7, 1000).unwrap();
/// assert_eq!(shape.number_of_hash_functions(), 7);
/// assert_eq!(shape.number_of_bits(), 1000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    identity: HashFunctionIdentity,
    number_of_hash_functions: usize,
    number_of_bits: usize,
}

impl Shape {
    /// Create a new shape.
    ///
    /// # Arguments
    ///
    /// * `identity` - Identity of the hash algorithm the filter is built around
    /// * `number_of_hash_functions` - `k`, must be at least 1
    /// * `number_of_bits` - `m`, must be at least 1
    ///
    /// # Errors
    ///
    /// [`BloomHashError::InvalidShape`] if either count is zero.
    pub fn new(
        identity: HashFunctionIdentity,
        number_of_hash_functions: usize,
        number_of_bits: usize,
    ) -> Result<Self> {
        if number_of_hash_functions < 1 {
            return Err(BloomHashError::invalid_shape(format!(
                "number of hash functions must be at least 1, got {}",
                number_of_hash_functions
            )));
        }
        if number_of_bits < 1 {
            return Err(BloomHashError::invalid_shape(format!(
                "number of bits must be at least 1, got {}",
                number_of_bits
            )));
        }

        Ok(Self {
            identity,
            number_of_hash_functions,
            number_of_bits,
        })
    }

    /// Number of bits in the filter (`m`).
    #[must_use]
    #[inline]
    pub const fn number_of_bits(&self) -> usize {
        self.number_of_bits
    }

    /// Number of hash functions per item (`k`).
    #[must_use]
    #[inline]
    pub const fn number_of_hash_functions(&self) -> usize {
        self.number_of_hash_functions
    }

    /// Identity of the hash algorithm this shape was built around.
    #[must_use]
    #[inline]
    pub const fn identity(&self) -> &HashFunctionIdentity {
        &self.identity
    }

    /// Worst-case false positive probability after inserting `n` items.
    ///
    /// Implements `p = (1 - e^(-k·n/m))^k`.
    ///
    /// # Errors
    ///
    /// [`BloomHashError::InvalidItemCount`] if `n < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomhash::Shape;
    /// # use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
    /// # let identity = HashFunctionIdentity::new(
    /// #     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
    /// # );
    /// // 9585 bits and 7 hash functions are the optimal parameters for
    /// // 1000 items at a 1% false positive rate.
    /// let shape = Shape::new(identity, 7, 9585).unwrap();
    /// let p = shape.probability(1000).unwrap();
    /// assert!((p - 0.01).abs() < 0.001);
    /// ```
    pub fn probability(&self, number_of_items: usize) -> Result<f64> {
        if number_of_items < 1 {
            return Err(BloomHashError::invalid_item_count(number_of_items));
        }

        let k = self.number_of_hash_functions as f64;
        let n = number_of_items as f64;
        let m = self.number_of_bits as f64;

        let exponent = -(k * n) / m;
        Ok((1.0 - exponent.exp()).powf(k))
    }

    /// Estimate the number of items inserted from the count of set bits.
    ///
    /// Implements `n = -(m/k)·ln(1 - c/m)` where `c` is the Hamming weight
    /// (cardinality) of the filter's bit array.
    ///
    /// The caller should ensure `0 <= c < m`. Out-of-range weights are not
    /// guarded: `c == m` yields infinity and `c > m` yields NaN, exactly as
    /// the logarithm produces.
    #[must_use]
    pub fn estimate_n(&self, hamming_weight: usize) -> f64 {
        let c = hamming_weight as f64;
        let m = self.number_of_bits as f64;
        let k = self.number_of_hash_functions as f64;

        -(m / k) * (1.0 - c / m).ln()
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.number_of_bits == other.number_of_bits
            && self.number_of_hash_functions == other.number_of_hash_functions
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number_of_bits.hash(state);
        self.number_of_hash_functions.hash(state);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shape[k={} m={} HF={}]",
            self.number_of_hash_functions,
            self.number_of_bits,
            self.identity.common_string()
        )
    }
}
