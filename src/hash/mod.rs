//! Hash functions and their identities.
//!
//! This module provides the [`HashFunction`] capability — mapping a
//! `(byte buffer, seed)` pair to a 64-bit value — together with the
//! [`HashFunctionIdentity`] fingerprint used to check that hashers and
//! shapes were built around compatible algorithms.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── identity.rs   - HashFunctionIdentity, Signedness, ProcessType, compatibility checks
//! ├── cyclic.rs     - CyclicXx128 (xxHash3-128, cyclic seed derivation)
//! ├── iterative.rs  - IterativeXx64 (xxHash3-64, full re-hash per seed)
//! └── mod.rs        - This file (HashFunction trait, public API)
//! ```
//!
//! # Choosing a Hash Function
//!
//! | Function        | Process type | Per-seed cost       | Thread sharing |
//! |-----------------|--------------|---------------------|----------------|
//! | [`CyclicXx128`] | CYCLIC       | Digest once, then O(1) | One instance per thread |
//! | [`IterativeXx64`] | ITERATIVE  | Full digest every seed | Freely shareable |
//!
//! # Cyclic State
//!
//! A cyclic function trades statelessness for performance: seed 0 computes
//! the expensive digest and caches two derived words; every later seed for
//! the *same item* is a cheap linear combination of the cached pair. The
//! cache belongs to whichever item was hashed most recently, so a cyclic
//! instance is scoped to hashing one item's full seed sequence at a time.
//! This is a documented usage constraint, not a defect: callers needing
//! concurrency use distinct instances per thread.
//!
//! # Examples
//!
//! ```
//! use bloomhash::hash::{CyclicXx128, HashFunction};
//!
//! let function = CyclicXx128::new();
//! let base = function.apply(b"hello", 0);
//! let next = function.apply(b"hello", 1);
//! assert_ne!(base, next);
//! // Deterministic: re-running the seed sequence reproduces it.
//! assert_eq!(function.apply(b"hello", 0), base);
//! assert_eq!(function.apply(b"hello", 1), next);
//! ```

pub mod cyclic;
pub mod identity;
pub mod iterative;

pub use cyclic::CyclicXx128;
pub use identity::{
    are_equal, check_are_equal, HashFunctionIdentity, ProcessType, Signedness,
};
pub use iterative::IterativeXx64;

/// A hash algorithm: maps `(byte buffer, seed)` to a 64-bit value.
///
/// Implementations are tagged with a [`HashFunctionIdentity`] so hashers and
/// shapes built from them can be checked for compatibility without
/// re-executing the algorithm.
///
/// # Contract
///
/// - Deterministic: the same `(buffer, seed)` pair always yields the same
///   value within one crate version.
/// - Seed 0 is the canonical entry point: for cyclic implementations it
///   resets any cached per-item state.
///
/// This trait deliberately does **not** require `Sync`: cyclic
/// implementations carry interior per-item cache state (see the module
/// docs). Iterative implementations are free to be `Sync` anyway.
pub trait HashFunction {
    /// Hash `buffer` with the given seed.
    fn apply(&self, buffer: &[u8], seed: u64) -> u64;

    /// The identity of this algorithm.
    fn identity(&self) -> &HashFunctionIdentity;
}

/// Provider string attached to this crate's built-in hash functions.
pub(crate) const PROVIDER: &str = "bloomhash";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_identities_are_distinct() {
        let cyclic = CyclicXx128::new();
        let iterative = IterativeXx64::new();
        assert!(!are_equal(cyclic.identity(), iterative.identity()));
    }

    #[test]
    fn test_builtin_identities_carry_provider() {
        let cyclic = CyclicXx128::new();
        assert_eq!(cyclic.identity().provider(), PROVIDER);
        let iterative = IterativeXx64::new();
        assert_eq!(iterative.identity().provider(), PROVIDER);
    }

    #[test]
    fn test_trait_object_usability() {
        // The trait must stay object-safe; hashers store `dyn HashFunction`
        // behind generics or boxes interchangeably.
        let function: Box<dyn HashFunction> = Box::new(IterativeXx64::new());
        let h1 = function.apply(b"abc", 1);
        let h2 = function.apply(b"abc", 1);
        assert_eq!(h1, h2);
    }
}
