//! Combinatorial single-item hasher.
//!
//! One logical item is represented by two 64-bit seeds, `(initial,
//! increment)`, typically the two halves of a 128-bit digest. The
//! Kirsch-Mitzenmacher double-hashing technique then synthesizes all `k`
//! index values for any shape by linear combination, so one digest
//! computation replaces `k` expensive hash invocations.
//!
//! # References
//!
//! - Kirsch & Mitzenmacher (2006): "Less Hashing, Same Performance: Building a Better Bloom Filter"

use crate::error::{BloomHashError, Result};
use crate::hash::{check_are_equal, HashFunctionIdentity};
use crate::producer::{IndexProducer, UniqueIndexFilter};
use crate::shape::Shape;

use super::{emit_combinatorial, Hasher};

/// Increment substituted when a hasher's increment is zero.
///
/// The 64-bit fractional part of the golden ratio. A zero increment would
/// collapse the whole sequence onto a single repeated index; this constant
/// guarantees a non-degenerate step while staying deterministic.
pub const DEFAULT_INCREMENT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Hasher representing exactly one item as an `(initial, increment)` pair.
///
/// For a given [`Shape`] the emitted sequence is
/// `initial mod m, +increment, +increment, …` (wrapping within `[0, m)`),
/// passed through a per-item de-duplication filter — so the result has at
/// most `k` distinct indices, possibly fewer.
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
/// use bloomhash::{Shape, SimpleHasher, Hasher, IndexProducer};
///
/// let identity = HashFunctionIdentity::new(
///     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
/// );
/// let shape = Shape::new(identity.clone(), 3, 10).unwrap();
///
/// let hasher = SimpleHasher::new(identity, 7, 3);
/// assert_eq!(hasher.indices(&shape).unwrap().as_vec(), vec![7, 0, 3]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleHasher {
    identity: HashFunctionIdentity,
    initial: u64,
    increment: u64,
}

impl SimpleHasher {
    /// Create a hasher from a seed pair.
    ///
    /// An `increment` of zero is replaced by [`DEFAULT_INCREMENT`], so the
    /// two constructions behave identically.
    #[must_use]
    pub fn new(identity: HashFunctionIdentity, initial: u64, increment: u64) -> Self {
        Self {
            identity,
            initial,
            increment: if increment == 0 {
                DEFAULT_INCREMENT
            } else {
                increment
            },
        }
    }

    /// Create a hasher by splitting a raw byte buffer into a seed pair.
    ///
    /// The buffer is split at its midpoint (for odd lengths the first half
    /// is one byte shorter); each half is interpreted as a big-endian
    /// integer, ignoring bytes beyond the 8th of the half. This convention
    /// is preserved bit-for-bit for interoperability with previously
    /// serialized hashers.
    ///
    /// # Errors
    ///
    /// [`BloomHashError::EmptyBuffer`] if `buffer` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
    /// use bloomhash::SimpleHasher;
    ///
    /// # let identity = HashFunctionIdentity::new(
    /// #     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
    /// # );
    /// // Odd length: first half is [0x01], second half [0x02, 0x03].
    /// let hasher = SimpleHasher::from_buffer(identity, &[0x01, 0x02, 0x03]).unwrap();
    /// assert_eq!(hasher.initial(), 0x01);
    /// assert_eq!(hasher.increment(), 0x0203);
    /// ```
    pub fn from_buffer(identity: HashFunctionIdentity, buffer: &[u8]) -> Result<Self> {
        if buffer.is_empty() {
            return Err(BloomHashError::empty_buffer());
        }
        let mid = buffer.len() / 2;
        Ok(Self::new(
            identity,
            be_decode(&buffer[..mid]),
            be_decode(&buffer[mid..]),
        ))
    }

    /// First seed value.
    #[must_use]
    pub const fn initial(&self) -> u64 {
        self.initial
    }

    /// Second seed value (never zero after construction).
    #[must_use]
    pub const fn increment(&self) -> u64 {
        self.increment
    }

    /// Identity of the hash algorithm the seed pair was derived from.
    #[must_use]
    pub const fn identity(&self) -> &HashFunctionIdentity {
        &self.identity
    }
}

impl Hasher for SimpleHasher {
    fn indices<'a>(&'a self, shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>> {
        check_are_equal(shape.identity(), &self.identity)?;
        Ok(Box::new(SimpleProducer {
            hasher: self,
            shape,
        }))
    }

    fn size(&self) -> usize {
        1
    }
}

struct SimpleProducer<'a> {
    hasher: &'a SimpleHasher,
    shape: &'a Shape,
}

impl IndexProducer for SimpleProducer<'_> {
    fn for_each_index(&self, consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        let mut filter = UniqueIndexFilter::new(self.shape.number_of_bits());
        emit_combinatorial(
            self.hasher.initial,
            self.hasher.increment,
            self.shape,
            &mut filter,
            consumer,
        )
    }
}

/// Big-endian decode of up to the first 8 bytes of `bytes`.
fn be_decode(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
