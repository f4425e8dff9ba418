//! Cyclic hash function built on xxHash3-128.
//!
//! Seed 0 digests the buffer once with `xxh3_128` and splits the 128-bit
//! result into a `(base, increment)` pair; every later seed for the same
//! item is the cheap linear combination `base + seed·increment` (wrapping),
//! with no re-digesting. This is the combinatorial seed-reuse strategy that
//! makes double hashing pay off: one expensive digest yields the whole
//! seed sequence.
//!
//! # References
//!
//! - Kirsch & Mitzenmacher (2006): "Less Hashing, Same Performance: Building a Better Bloom Filter"

use std::cell::Cell;

use xxhash_rust::xxh3::xxh3_128;

use super::identity::{HashFunctionIdentity, ProcessType, Signedness};
use super::{HashFunction, PROVIDER};

/// Algorithm name carried by [`CyclicXx128`]'s identity.
pub const NAME: &str = "xx3-128";

/// xxHash3-128 with cyclic seed derivation.
///
/// # Usage Constraint
///
/// The seed-0 digest is cached in interior state scoped to the most recently
/// hashed item, which makes this type `!Sync` by construction (the cache is
/// a [`Cell`]). Hash one item's full seed sequence at a time; use one
/// instance per thread for concurrent work. Seed 0 always resets the cache.
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{CyclicXx128, HashFunction};
///
/// let function = CyclicXx128::new();
/// let base = function.apply(b"item", 0);
/// let delta = function.apply(b"item", 1).wrapping_sub(base);
///
/// // Later seeds step linearly from the cached pair.
/// assert_eq!(function.apply(b"item", 5), base.wrapping_add(delta.wrapping_mul(5)));
/// ```
#[derive(Debug, Clone)]
pub struct CyclicXx128 {
    identity: HashFunctionIdentity,
    // (base, increment) from the seed-0 digest of the current item.
    state: Cell<Option<(u64, u64)>>,
}

impl CyclicXx128 {
    /// Create a new instance.
    ///
    /// The identity's signature is computed here by hashing the identity's
    /// own canonical description with seed 0.
    #[must_use]
    pub fn new() -> Self {
        let identity = HashFunctionIdentity::new(
            PROVIDER,
            NAME,
            Signedness::Unsigned,
            ProcessType::Cyclic,
            0,
        );
        let (signature, _) = Self::digest(&identity.prepare_signature_buffer());
        Self {
            identity: identity.with_signature(signature),
            state: Cell::new(None),
        }
    }

    /// Split the 128-bit digest of `buffer` into `(base, increment)`.
    fn digest(buffer: &[u8]) -> (u64, u64) {
        let h = xxh3_128(buffer);
        ((h >> 64) as u64, h as u64)
    }
}

impl Default for CyclicXx128 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashFunction for CyclicXx128 {
    fn apply(&self, buffer: &[u8], seed: u64) -> u64 {
        if seed == 0 {
            let parts = Self::digest(buffer);
            self.state.set(Some(parts));
            return parts.0;
        }

        // The cache belongs to the most recently digested item; a cold call
        // with a non-zero seed digests first so the sequence stays coherent.
        let (base, increment) = match self.state.get() {
            Some(parts) => parts,
            None => {
                let parts = Self::digest(buffer);
                self.state.set(Some(parts));
                parts
            }
        };
        base.wrapping_add(seed.wrapping_mul(increment))
    }

    fn identity(&self) -> &HashFunctionIdentity {
        &self.identity
    }
}
