//! BloomHash: the hashing layer beneath a Bloom filter.
//!
//! BloomHash turns items into the bit indices a Bloom filter sets or tests,
//! without owning the bit array itself. It separates three concerns that
//! most filter implementations fuse together:
//!
//! - **[`Shape`]** — the filter geometry: `m` bits, `k` hash functions per
//!   item, plus the identity of the hash algorithm the filter was built
//!   around.
//! - **[`Hasher`]** — one or more logical items in some internal
//!   representation (raw bytes, seed pairs, frozen indices), able to produce
//!   indices for any compatible shape.
//! - **[`IndexProducer`]** — a single-pass push traversal of those indices
//!   with early termination, so a query that already knows its answer stops
//!   paying immediately.
//!
//! The same hasher can be queried against differently sized shapes, shipped
//! across a process boundary as derived pairs, or frozen to a resolved index
//! set — the filter storage layer never needs to know which.
//!
//! # Quick Start
//!
//! ```
//! use bloomhash::hash::{CyclicXx128, HashFunction};
//! use bloomhash::{DynamicHasher, Shape, Hasher, IndexProducer};
//!
//! let function = CyclicXx128::new();
//! let shape = Shape::new(function.identity().clone(), 7, 9585).unwrap();
//!
//! let hasher = DynamicHasher::builder(function)
//!     .with("hello")
//!     .with("world")
//!     .build();
//!
//! // 7 indices per item, each in [0, 9585).
//! let indices = hasher.indices(&shape).unwrap().as_vec();
//! assert_eq!(indices.len(), 14);
//! assert!(indices.iter().all(|&i| i < 9585));
//! ```
//!
//! # Choosing a Hasher
//!
//! | Hasher | Items | Holds | Use Case |
//! |--------|-------|-------|----------|
//! | [`SimpleHasher`] | 1 | two u64 seeds | one item, digest already split |
//! | [`DynamicHasher`] | n | raw byte buffers | hash lazily at query time |
//! | [`CachingHasher`] | n | `(base, delta)` pairs | cross a boundary without raw bytes |
//! | [`StaticHasher`] | frozen | resolved indices | replay against one known shape |
//! | [`HasherCollection`] | Σ children | child hashers | aggregate independent items |
//! | [`SingleItemHasherCollection`] | 1 | child hashers | merge children into one item |
//! | [`NullHasher`] | 0 | nothing | safe no-op default |
//!
//! # Compatibility
//!
//! Every hasher validates its [`HashFunctionIdentity`](hash::HashFunctionIdentity)
//! against the shape's before producing anything. Identities are compatible
//! when the algorithm name (case-insensitively), signedness, and process
//! type all agree; provider and signature are informational. Mixing
//! incompatible pairings fails fast with
//! [`BloomHashError::IncompatibleHashFunction`] instead of silently
//! producing garbage indices.
//!
//! # Features
//!
//! - `serde` - Serialization for shapes, identities, and the hashers whose
//!   state is data rather than code (simple, caching, static, null)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::len_zero)]
#![doc(html_root_url = "https://docs.rs/bloomhash/0.1.0")]

/// Error types and result alias
pub mod error;

/// Hash functions and their identities
pub mod hash;

/// Hasher variants: items to shape-bound indices
pub mod hasher;

/// Push-style index production and de-duplication
pub mod producer;

/// Filter geometry
pub mod shape;

// Re-export commonly used types at crate root
pub use error::{BloomHashError, Result};

pub use shape::Shape;

pub use producer::{EmptyProducer, IndexProducer, UniqueIndexFilter};

pub use hasher::{
    CachingHasher, CachingHasherBuilder, DynamicHasher, DynamicHasherBuilder, Hasher,
    HasherCollection, NullHasher, SimpleHasher, SingleItemHasherCollection, StaticHasher,
    DEFAULT_INCREMENT,
};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomhash::prelude::*;
///
/// let identity = HashFunctionIdentity::new(
///     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
/// );
/// let shape = Shape::new(identity.clone(), 3, 10).unwrap();
/// let hasher = SimpleHasher::new(identity, 7, 3);
/// assert_eq!(hasher.indices(&shape).unwrap().as_vec(), vec![7, 0, 3]);
/// ```
pub mod prelude {
    pub use crate::error::{BloomHashError, Result};
    pub use crate::hash::{
        CyclicXx128, HashFunction, HashFunctionIdentity, IterativeXx64, ProcessType, Signedness,
    };
    pub use crate::hasher::{
        CachingHasher, CachingHasherBuilder, DynamicHasher, DynamicHasherBuilder, Hasher,
        HasherCollection, NullHasher, SimpleHasher, SingleItemHasherCollection, StaticHasher,
        DEFAULT_INCREMENT,
    };
    pub use crate::producer::{EmptyProducer, IndexProducer, UniqueIndexFilter};
    pub use crate::shape::Shape;
}
