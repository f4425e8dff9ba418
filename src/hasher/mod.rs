//! Hasher variants: from raw items to shape-bound bit indices.
//!
//! A [`Hasher`] represents one or more logical items and, given a
//! [`Shape`], produces the sequence of bit indices a Bloom filter would set
//! or test for those items. Variants differ only in internal representation;
//! all implement the same two-method contract.
//!
//! # Module Structure
//!
//! ```text
//! hasher/
//! ├── simple.rs        - SimpleHasher: one item as an (initial, increment) seed pair
//! ├── dynamic.rs       - DynamicHasher: raw buffers hashed lazily at query time
//! ├── caching.rs       - CachingHasher: pre-computed (base, delta) pairs per item
//! ├── static_hasher.rs - StaticHasher: frozen, shape-bound resolved indices
//! ├── collection.rs    - HasherCollection and the single-item collapsing variant
//! ├── null.rs          - NullHasher: zero items, zero indices
//! └── mod.rs           - This file (Hasher trait, shared index arithmetic)
//! ```
//!
//! # Choosing a Variant
//!
//! | Variant | Items | Holds | Use Case |
//! |---------|-------|-------|----------|
//! | [`SimpleHasher`] | 1 | two u64 seeds | one item, digest already split |
//! | [`DynamicHasher`] | n | raw byte buffers | hash lazily, any process type |
//! | [`CachingHasher`] | n | `(base, delta)` pairs | ship across a boundary without raw bytes |
//! | [`StaticHasher`] | frozen | resolved indices | replay against one known shape |
//! | [`HasherCollection`] | Σ children | child hashers | aggregate independent items |
//! | [`NullHasher`] | 0 | nothing | safe no-op default |
//!
//! # Duplicate Indices
//!
//! Variants representing a *single* item never emit the same index twice for
//! one traversal (a [`UniqueIndexFilter`](crate::producer::UniqueIndexFilter)
//! wraps the raw stream, so fewer than `k` indices may come out). Variants
//! representing *multiple* items may legitimately repeat indices across
//! items — that is ordinary Bloom filter behavior.

pub mod caching;
pub mod collection;
pub mod dynamic;
pub mod null;
pub mod simple;
pub mod static_hasher;

pub use caching::{CachingHasher, CachingHasherBuilder};
pub use collection::{HasherCollection, SingleItemHasherCollection};
pub use dynamic::{DynamicHasher, DynamicHasherBuilder};
pub use null::NullHasher;
pub use simple::{SimpleHasher, DEFAULT_INCREMENT};
pub use static_hasher::StaticHasher;

use crate::error::Result;
use crate::producer::{IndexProducer, UniqueIndexFilter};
use crate::shape::Shape;

/// Capability of producing bit indices for one or more logical items.
///
/// Hashers are immutable once built and may be queried any number of times,
/// with possibly different shapes sharing a compatible hash function
/// identity. Each [`indices`](Self::indices) call validates compatibility
/// before returning a producer, so an incompatible pairing fails fast with
/// no partial emission.
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
/// let hasher = SimpleHasher::new(identity, 7, 3);
///
/// assert_eq!(hasher.size(), 1);
/// assert_eq!(hasher.indices(&shape).unwrap().as_vec(), vec![7, 0, 3]);
/// ```
pub trait Hasher {
    /// Produce the bit indices for `shape`.
    ///
    /// # Errors
    ///
    /// Fails before emitting anything when the hasher's hash function
    /// identity is incompatible with the shape's (see
    /// [`check_are_equal`](crate::hash::check_are_equal)), or when a
    /// variant-specific constraint is violated.
    fn indices<'a>(&'a self, shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>>;

    /// Number of logical items this hasher represents.
    fn size(&self) -> usize;

    /// Whether this hasher represents no items at all.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Emit one item's combinatorial index sequence through a de-dup filter.
///
/// This is the double-hashing kernel shared by [`SimpleHasher`] and
/// [`CachingHasher`]: reduce both seeds modulo `m`, substitute
/// [`DEFAULT_INCREMENT`] if the reduced increment is zero (a zero step would
/// degenerate to a single repeated index), then emit `k` values with
/// wraparound by subtraction. Unsigned arithmetic makes `%` the true
/// mathematical modulus.
///
/// Returns `false` iff the consumer stopped the traversal.
pub(crate) fn emit_combinatorial(
    initial: u64,
    increment: u64,
    shape: &Shape,
    filter: &mut UniqueIndexFilter,
    consumer: &mut dyn FnMut(usize) -> bool,
) -> bool {
    let m = shape.number_of_bits() as u64;
    let mut index = initial % m;
    let mut inc = increment % m;
    if inc == 0 {
        inc = DEFAULT_INCREMENT % m;
    }

    for _ in 0..shape.number_of_hash_functions() {
        if !filter.accept(index as usize, consumer) {
            return false;
        }
        index += inc;
        if index >= m {
            index -= m;
        }
    }
    true
}
