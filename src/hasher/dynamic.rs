//! On-demand multi-item hasher.
//!
//! Stores the raw byte buffers of one or more items plus a
//! [`HashFunction`], and computes indices lazily at query time: for each
//! buffer in storage order, the function is invoked exactly `k` times with
//! seeds `0..k`, each result reduced modulo `m`.
//!
//! Unlike the single-item variants, this hasher applies **no
//! de-duplication**: it represents "one or more items", and repeated
//! indices across items are expected Bloom filter behavior. Within one
//! item's sub-sequence duplicates are possible too — a documented asymmetry
//! with [`SimpleHasher`](crate::SimpleHasher), not a bug to silently fix.

use crate::error::Result;
use crate::hash::{check_are_equal, HashFunction};
use crate::producer::IndexProducer;
use crate::shape::Shape;

use super::Hasher;

/// Hasher that keeps raw item bytes and hashes them on demand.
///
/// Build one through [`DynamicHasher::builder`].
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{CyclicXx128, HashFunction};
/// use bloomhash::{DynamicHasher, Shape, Hasher, IndexProducer};
///
/// let function = CyclicXx128::new();
/// let shape = Shape::new(function.identity().clone(), 7, 1000).unwrap();
///
/// let hasher = DynamicHasher::builder(function)
///     .with("hello")
///     .with("world")
///     .build();
/// assert_eq!(hasher.size(), 2);
///
/// let indices = hasher.indices(&shape).unwrap().as_vec();
/// assert_eq!(indices.len(), 14); // k per item, no de-duplication
/// assert!(indices.iter().all(|&i| i < 1000));
/// ```
#[derive(Debug, Clone)]
pub struct DynamicHasher<F: HashFunction> {
    function: F,
    buffers: Vec<Vec<u8>>,
}

impl<F: HashFunction> DynamicHasher<F> {
    /// Start a builder that accumulates items for `function`.
    #[must_use]
    pub fn builder(function: F) -> DynamicHasherBuilder<F> {
        DynamicHasherBuilder {
            function,
            buffers: Vec::new(),
        }
    }

    /// The hash function this hasher queries.
    #[must_use]
    pub const fn function(&self) -> &F {
        &self.function
    }
}

impl<F: HashFunction> Hasher for DynamicHasher<F> {
    fn indices<'a>(&'a self, shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>> {
        check_are_equal(shape.identity(), self.function.identity())?;
        Ok(Box::new(DynamicProducer {
            hasher: self,
            shape,
        }))
    }

    fn size(&self) -> usize {
        self.buffers.len()
    }
}

struct DynamicProducer<'a, F: HashFunction> {
    hasher: &'a DynamicHasher<F>,
    shape: &'a Shape,
}

impl<F: HashFunction> IndexProducer for DynamicProducer<'_, F> {
    fn for_each_index(&self, consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        let m = self.shape.number_of_bits() as u64;
        let k = self.shape.number_of_hash_functions() as u64;

        for buffer in &self.hasher.buffers {
            // Seeds run 0..k in order so cyclic functions digest once per item.
            for seed in 0..k {
                let index = (self.hasher.function.apply(buffer, seed) % m) as usize;
                if !consumer(index) {
                    return false;
                }
            }
        }
        true
    }
}

/// Accumulates raw items and freezes them into a [`DynamicHasher`].
///
/// # Reuse
///
/// [`build`](Self::build) clears the accumulated buffers, so the builder is
/// immediately reusable for a fresh item set. Building with no accumulated
/// items yields an empty hasher.
#[derive(Debug)]
pub struct DynamicHasherBuilder<F: HashFunction> {
    function: F,
    buffers: Vec<Vec<u8>>,
}

impl<F: HashFunction> DynamicHasherBuilder<F> {
    /// Append one item's bytes.
    ///
    /// Accepts anything byte-like: `&[u8]`, `&str`, `String`, `Vec<u8>`.
    pub fn with(&mut self, item: impl AsRef<[u8]>) -> &mut Self {
        self.buffers.push(item.as_ref().to_vec());
        self
    }
}

impl<F: HashFunction + Clone> DynamicHasherBuilder<F> {
    /// Freeze the accumulated items into a hasher and reset the builder.
    #[must_use]
    pub fn build(&mut self) -> DynamicHasher<F> {
        DynamicHasher {
            function: self.function.clone(),
            buffers: std::mem::take(&mut self.buffers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomHashError;
    use crate::hash::{CyclicXx128, IterativeXx64};

    fn shape_for<F: HashFunction>(function: &F, k: usize, m: usize) -> Shape {
        Shape::new(function.identity().clone(), k, m).unwrap()
    }

    #[test]
    fn test_size_counts_items() {
        let hasher = DynamicHasher::builder(IterativeXx64::new())
            .with("a")
            .with("b")
            .with("c")
            .build();
        assert_eq!(hasher.size(), 3);
    }

    #[test]
    fn test_empty_hasher_produces_nothing() {
        let hasher = DynamicHasher::builder(IterativeXx64::new()).build();
        let shape = shape_for(hasher.function(), 7, 1000);
        assert!(hasher.is_empty());
        assert!(hasher.indices(&shape).unwrap().as_vec().is_empty());
    }

    #[test]
    fn test_emits_k_indices_per_item_in_range() {
        let hasher = DynamicHasher::builder(IterativeXx64::new())
            .with("hello")
            .with("world")
            .build();
        let shape = shape_for(hasher.function(), 7, 1000);
        let indices = hasher.indices(&shape).unwrap().as_vec();
        assert_eq!(indices.len(), 14);
        assert!(indices.iter().all(|&i| i < 1000));
    }

    #[test]
    fn test_determinism_across_queries() {
        let hasher = DynamicHasher::builder(CyclicXx128::new())
            .with("hello")
            .with("world")
            .build();
        let shape = shape_for(hasher.function(), 7, 1000);
        assert_eq!(
            hasher.indices(&shape).unwrap().as_vec(),
            hasher.indices(&shape).unwrap().as_vec()
        );
    }

    #[test]
    fn test_storage_order_preserved() {
        let ab = DynamicHasher::builder(IterativeXx64::new())
            .with("a")
            .with("b")
            .build();
        let ba = DynamicHasher::builder(IterativeXx64::new())
            .with("b")
            .with("a")
            .build();
        let shape = shape_for(ab.function(), 5, 10_000);

        let forward = ab.indices(&shape).unwrap().as_vec();
        let mut reversed = ba.indices(&shape).unwrap().as_vec();
        reversed.rotate_left(5);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_incompatible_shape_rejected() {
        let hasher = DynamicHasher::builder(CyclicXx128::new()).with("x").build();
        let foreign = IterativeXx64::new();
        let shape = shape_for(&foreign, 7, 1000);
        assert!(matches!(
            hasher.indices(&shape).unwrap_err(),
            BloomHashError::IncompatibleHashFunction { .. }
        ));
    }

    #[test]
    fn test_builder_clears_on_build() {
        let mut builder = DynamicHasher::builder(IterativeXx64::new());
        builder.with("only-item");
        let first = builder.build();
        assert_eq!(first.size(), 1);

        let second = builder.build();
        assert_eq!(second.size(), 0, "build must reset accumulated items");
    }

    #[test]
    fn test_builder_reusable_for_new_item_set() {
        let mut builder = DynamicHasher::builder(IterativeXx64::new());
        let first = builder.with("a").build();
        let second = builder.with("b").with("c").build();
        assert_eq!(first.size(), 1);
        assert_eq!(second.size(), 2);
    }

    #[test]
    fn test_early_termination_stops_mid_item() {
        let hasher = DynamicHasher::builder(IterativeXx64::new())
            .with("hello")
            .with("world")
            .build();
        let shape = shape_for(hasher.function(), 7, 1000);
        let producer = hasher.indices(&shape).unwrap();

        let mut calls = 0;
        let completed = producer.for_each_index(&mut |_| {
            calls += 1;
            calls < 3
        });
        assert!(!completed);
        assert_eq!(calls, 3);
    }
}
