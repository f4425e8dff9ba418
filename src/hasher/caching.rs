//! Pre-cached multi-item hasher.
//!
//! Holds one pre-computed `(base, delta)` pair per item plus the
//! [`HashFunctionIdentity`] of the cyclic function that produced them. The
//! pairs reproduce the original index sequences through the same
//! accumulate-and-wrap arithmetic as the combinatorial single-item hasher,
//! re-seeding at each pair.
//!
//! The point of this variant is boundary crossing: a hasher can be shipped
//! to another process or host carrying only two derived 64-bit words per
//! item instead of the raw item bytes, reducing information leakage. That
//! only works when the source function derives later seeds linearly from
//! the seed-0 digest — hence the CYCLIC process type requirement, enforced
//! at construction.

use crate::error::{BloomHashError, Result};
use crate::hash::{check_are_equal, HashFunction, HashFunctionIdentity, ProcessType};
use crate::producer::{IndexProducer, UniqueIndexFilter};
use crate::shape::Shape;

use super::{emit_combinatorial, Hasher};

/// Hasher holding pre-computed `(base, delta)` pairs, one per item.
///
/// Construct directly from pairs recovered off the wire with
/// [`CachingHasher::new`], or hash items up front with
/// [`CachingHasher::builder`].
///
/// Each pair is a single logical item, so each pair's sub-sequence is
/// de-duplicated independently; repeats across pairs are permitted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CachingHasher {
    identity: HashFunctionIdentity,
    pairs: Vec<(u64, u64)>,
}

impl CachingHasher {
    /// Create a hasher from already-derived pairs.
    ///
    /// # Errors
    ///
    /// [`BloomHashError::ProcessTypeMismatch`] if `identity` is not CYCLIC:
    /// pairs derived from an iterative function cannot reproduce its
    /// per-seed sequence.
    pub fn new(identity: HashFunctionIdentity, pairs: Vec<(u64, u64)>) -> Result<Self> {
        if identity.process_type() != ProcessType::Cyclic {
            return Err(BloomHashError::process_type_mismatch(
                identity.common_string(),
            ));
        }
        Ok(Self { identity, pairs })
    }

    /// Start a builder that hashes items through `function` as they are added.
    ///
    /// # Errors
    ///
    /// [`BloomHashError::ProcessTypeMismatch`] if the function is not CYCLIC.
    pub fn builder<F: HashFunction>(function: F) -> Result<CachingHasherBuilder<F>> {
        if function.identity().process_type() != ProcessType::Cyclic {
            return Err(BloomHashError::process_type_mismatch(
                function.identity().common_string(),
            ));
        }
        Ok(CachingHasherBuilder {
            function,
            pairs: Vec::new(),
        })
    }

    /// The derived `(base, delta)` pairs, in item insertion order.
    ///
    /// This is the payload to persist or transmit; reconstruct with
    /// [`CachingHasher::new`] and a matching identity on the other side.
    #[must_use]
    pub fn pairs(&self) -> &[(u64, u64)] {
        &self.pairs
    }

    /// Identity of the cyclic function the pairs were derived from.
    #[must_use]
    pub const fn identity(&self) -> &HashFunctionIdentity {
        &self.identity
    }
}

impl Hasher for CachingHasher {
    fn indices<'a>(&'a self, shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>> {
        check_are_equal(shape.identity(), &self.identity)?;
        Ok(Box::new(CachingProducer {
            hasher: self,
            shape,
        }))
    }

    fn size(&self) -> usize {
        self.pairs.len()
    }
}

struct CachingProducer<'a> {
    hasher: &'a CachingHasher,
    shape: &'a Shape,
}

impl IndexProducer for CachingProducer<'_> {
    fn for_each_index(&self, consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        for &(base, delta) in &self.hasher.pairs {
            // Fresh filter per pair: de-duplication is a per-item guarantee.
            let mut filter = UniqueIndexFilter::new(self.shape.number_of_bits());
            if !emit_combinatorial(base, delta, self.shape, &mut filter, consumer) {
                return false;
            }
        }
        true
    }
}

/// Accumulates items, hashing each immediately into a `(base, delta)` pair.
///
/// The wrapped function's process type was validated CYCLIC when the
/// builder was created. [`build`](Self::build) clears the accumulated
/// pairs, so the builder is reusable for a fresh item set.
#[derive(Debug)]
pub struct CachingHasherBuilder<F: HashFunction> {
    function: F,
    pairs: Vec<(u64, u64)>,
}

impl<F: HashFunction> CachingHasherBuilder<F> {
    /// Hash one item and retain only its derived pair.
    pub fn with(&mut self, item: impl AsRef<[u8]>) -> &mut Self {
        let buffer = item.as_ref();
        let base = self.function.apply(buffer, 0);
        let delta = self.function.apply(buffer, 1).wrapping_sub(base);
        self.pairs.push((base, delta));
        self
    }

    /// Freeze the accumulated pairs into a hasher and reset the builder.
    #[must_use]
    pub fn build(&mut self) -> CachingHasher {
        CachingHasher {
            identity: self.function.identity().clone(),
            pairs: std::mem::take(&mut self.pairs),
        }
    }
}
