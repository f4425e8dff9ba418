//! Iterative hash function built on xxHash3-64.
//!
//! Every `(buffer, seed)` call runs the full seeded digest; nothing is
//! cached between seeds. Slower than the cyclic strategy for multi-seed
//! sequences, but stateless and freely shareable across threads.

use xxhash_rust::xxh3::xxh3_64_with_seed;

use super::identity::{HashFunctionIdentity, ProcessType, Signedness};
use super::{HashFunction, PROVIDER};

/// Algorithm name carried by [`IterativeXx64`]'s identity.
pub const NAME: &str = "xx3-64";

/// xxHash3-64 with per-seed full re-hashing.
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{IterativeXx64, HashFunction};
///
/// let function = IterativeXx64::new();
/// assert_ne!(function.apply(b"item", 0), function.apply(b"item", 1));
/// assert_eq!(function.apply(b"item", 0), function.apply(b"item", 0));
/// ```
#[derive(Debug, Clone)]
pub struct IterativeXx64 {
    identity: HashFunctionIdentity,
}

impl IterativeXx64 {
    /// Create a new instance.
    #[must_use]
    pub fn new() -> Self {
        let identity = HashFunctionIdentity::new(
            PROVIDER,
            NAME,
            Signedness::Unsigned,
            ProcessType::Iterative,
            0,
        );
        let signature = xxh3_64_with_seed(&identity.prepare_signature_buffer(), 0);
        Self {
            identity: identity.with_signature(signature),
        }
    }
}

impl Default for IterativeXx64 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashFunction for IterativeXx64 {
    fn apply(&self, buffer: &[u8], seed: u64) -> u64 {
        xxh3_64_with_seed(buffer, seed)
    }

    fn identity(&self) -> &HashFunctionIdentity {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fields() {
        let function = IterativeXx64::new();
        let identity = function.identity();
        assert_eq!(identity.name(), NAME);
        assert_eq!(identity.signedness(), Signedness::Unsigned);
        assert_eq!(identity.process_type(), ProcessType::Iterative);
        assert_ne!(identity.signature(), 0);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let function = IterativeXx64::new();
        for seed in 0..5u64 {
            assert_eq!(
                function.apply(b"hello", seed),
                function.apply(b"hello", seed)
            );
        }
    }

    #[test]
    fn test_seeds_produce_distinct_values() {
        let function = IterativeXx64::new();
        let h0 = function.apply(b"hello", 0);
        let h1 = function.apply(b"hello", 1);
        assert_ne!(h0, h1);
    }

    #[test]
    fn test_no_hidden_state() {
        // Interleaving items must not change any result.
        let function = IterativeXx64::new();
        let a1 = function.apply(b"alpha", 1);
        function.apply(b"beta", 0);
        function.apply(b"beta", 1);
        assert_eq!(function.apply(b"alpha", 1), a1);
    }

    #[test]
    fn test_signature_is_self_hash() {
        let function = IterativeXx64::new();
        let buffer = function.identity().prepare_signature_buffer();
        assert_eq!(
            function.identity().signature(),
            xxh3_64_with_seed(&buffer, 0)
        );
    }
}
