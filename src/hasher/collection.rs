//! Hasher aggregation.
//!
//! Two ways to combine independently built hashers:
//!
//! - [`HasherCollection`] treats its children as distinct item sets: sizes
//!   add up and every child's indices are forwarded untouched.
//! - [`SingleItemHasherCollection`] collapses its children into one logical
//!   item: the merged stream passes through a single de-duplication filter,
//!   so each index appears at most once per traversal.

use crate::error::Result;
use crate::producer::{IndexProducer, UniqueIndexFilter};
use crate::shape::Shape;

use super::Hasher;

/// Ordered aggregate of hashers, itself a [`Hasher`].
///
/// Children keep their own duplicate semantics; the collection merely
/// concatenates their index streams in insertion order. Compatibility with
/// a shape is checked against every child up front, so a single
/// incompatible member fails the whole query before anything is emitted.
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
/// use bloomhash::{Shape, SimpleHasher, HasherCollection, Hasher, IndexProducer};
///
/// let identity = HashFunctionIdentity::new(
///     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
/// );
/// let shape = Shape::new(identity.clone(), 3, 10).unwrap();
///
/// let mut collection = HasherCollection::new();
/// collection.add(SimpleHasher::new(identity.clone(), 7, 3));
/// collection.add(SimpleHasher::new(identity, 2, 3));
///
/// assert_eq!(collection.size(), 2);
/// assert_eq!(
///     collection.indices(&shape).unwrap().as_vec(),
///     vec![7, 0, 3, 2, 5, 8]
/// );
/// ```
#[derive(Default)]
pub struct HasherCollection {
    hashers: Vec<Box<dyn Hasher>>,
}

impl HasherCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hasher. Traversal order follows insertion order.
    pub fn add(&mut self, hasher: impl Hasher + 'static) {
        self.hashers.push(Box::new(hasher));
    }

    /// Number of aggregated hashers (not items; see [`Hasher::size`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.hashers.len()
    }

    /// Whether no hashers have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashers.is_empty()
    }

    fn child_producers<'a>(&'a self, shape: &'a Shape) -> Result<Vec<Box<dyn IndexProducer + 'a>>> {
        self.hashers
            .iter()
            .map(|hasher| hasher.indices(shape))
            .collect()
    }
}

impl Hasher for HasherCollection {
    fn indices<'a>(&'a self, shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>> {
        Ok(Box::new(CollectionProducer {
            producers: self.child_producers(shape)?,
        }))
    }

    fn size(&self) -> usize {
        self.hashers.iter().map(|hasher| hasher.size()).sum()
    }
}

struct CollectionProducer<'a> {
    producers: Vec<Box<dyn IndexProducer + 'a>>,
}

impl IndexProducer for CollectionProducer<'_> {
    fn for_each_index(&self, consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        for producer in &self.producers {
            if !producer.for_each_index(consumer) {
                return false;
            }
        }
        true
    }
}

/// Aggregate that presents its children as a single logical item.
///
/// The merged index stream is de-duplicated across *all* children with one
/// filter per traversal, matching the single-item guarantee of
/// [`SimpleHasher`](crate::SimpleHasher). Size is 1 if any child carries
/// items, otherwise 0.
pub struct SingleItemHasherCollection {
    hashers: Vec<Box<dyn Hasher>>,
}

impl SingleItemHasherCollection {
    /// Create an empty collapsing collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hashers: Vec::new(),
        }
    }

    /// Append a hasher whose indices fold into the single logical item.
    pub fn add(&mut self, hasher: impl Hasher + 'static) {
        self.hashers.push(Box::new(hasher));
    }
}

impl Default for SingleItemHasherCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for SingleItemHasherCollection {
    fn indices<'a>(&'a self, shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>> {
        let producers: Vec<_> = self
            .hashers
            .iter()
            .map(|hasher| hasher.indices(shape))
            .collect::<Result<_>>()?;
        Ok(Box::new(CollapsingProducer {
            producers,
            bits: shape.number_of_bits(),
        }))
    }

    fn size(&self) -> usize {
        usize::from(self.hashers.iter().any(|hasher| !hasher.is_empty()))
    }
}

struct CollapsingProducer<'a> {
    producers: Vec<Box<dyn IndexProducer + 'a>>,
    bits: usize,
}

impl IndexProducer for CollapsingProducer<'_> {
    fn for_each_index(&self, consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        // One filter spanning every child: the collection is one item.
        let mut filter = UniqueIndexFilter::new(self.bits);
        for producer in &self.producers {
            if !producer.for_each_index(&mut |index| filter.accept(index, &mut *consumer)) {
                return false;
            }
        }
        true
    }
}
