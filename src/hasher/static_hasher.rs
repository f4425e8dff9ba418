//! Static (frozen) hasher.
//!
//! Binds a [`Shape`] to a sorted, de-duplicated set of already-resolved bit
//! indices. Once frozen, the hasher answers only for that one shape,
//! emitting its indices in ascending order — a read-only replay of a past
//! resolution, useful for persisting query sets or comparing filters.

use crate::error::{BloomHashError, Result};
use crate::hash::check_are_equal;
use crate::producer::IndexProducer;
use crate::shape::Shape;

use super::Hasher;

/// Hasher frozen to one shape and a fixed, ordered index set.
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
/// use bloomhash::{Shape, SimpleHasher, StaticHasher, Hasher, IndexProducer};
///
/// let identity = HashFunctionIdentity::new(
///     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
/// );
/// let shape = Shape::new(identity.clone(), 3, 10).unwrap();
///
/// // Freeze a combinatorial hasher's resolution of this shape.
/// let simple = SimpleHasher::new(identity, 7, 3);
/// let frozen = StaticHasher::from_hasher(&simple, &shape).unwrap();
///
/// // 7, 0, 3 stored ascending.
/// assert_eq!(frozen.indices(&shape).unwrap().as_vec(), vec![0, 3, 7]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticHasher {
    shape: Shape,
    indices: Vec<usize>,
    items: usize,
}

impl StaticHasher {
    /// Freeze an existing hasher's resolution of `shape`.
    ///
    /// Drains the hasher through its own compatibility-checked path, then
    /// sorts and de-duplicates. The source hasher's item count is preserved.
    ///
    /// # Errors
    ///
    /// Whatever `hasher.indices(shape)` surfaces (identity mismatch, shape
    /// mismatch for a nested static hasher, …).
    pub fn from_hasher(hasher: &dyn Hasher, shape: &Shape) -> Result<Self> {
        let producer = hasher.indices(shape)?;
        let mut indices = producer.as_vec();
        indices.sort_unstable();
        indices.dedup();
        Ok(Self {
            shape: shape.clone(),
            indices,
            items: hasher.size(),
        })
    }

    /// Freeze a set of already-resolved indices against `shape`.
    ///
    /// The result represents one logical item (zero if `indices` is empty).
    ///
    /// # Errors
    ///
    /// [`BloomHashError::IndexOutOfRange`] if any index is `>=` the shape's
    /// bit count. (Indices are `usize`, so the negative half of the range
    /// check is enforced by the type system.)
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
    /// use bloomhash::{Shape, StaticHasher};
    ///
    /// # let identity = HashFunctionIdentity::new(
    /// #     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
    /// # );
    /// let shape = Shape::new(identity, 3, 10).unwrap();
    /// assert!(StaticHasher::from_indices(&shape, [0, 3, 7]).is_ok());
    /// assert!(StaticHasher::from_indices(&shape, [10]).is_err());
    /// ```
    pub fn from_indices(
        shape: &Shape,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut collected: Vec<usize> = indices.into_iter().collect();
        for &index in &collected {
            if index >= shape.number_of_bits() {
                return Err(BloomHashError::index_out_of_range(
                    index,
                    shape.number_of_bits(),
                ));
            }
        }
        collected.sort_unstable();
        collected.dedup();
        let items = usize::from(!collected.is_empty());
        Ok(Self {
            shape: shape.clone(),
            indices: collected,
            items,
        })
    }

    /// The shape this hasher was frozen against.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The resolved indices, ascending and duplicate-free.
    #[must_use]
    pub fn bit_indices(&self) -> &[usize] {
        &self.indices
    }
}

impl Hasher for StaticHasher {
    fn indices<'a>(&'a self, shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>> {
        if *shape != self.shape {
            return Err(BloomHashError::shape_mismatch(
                self.shape.to_string(),
                shape.to_string(),
            ));
        }
        check_are_equal(shape.identity(), self.shape.identity())?;
        Ok(Box::new(StaticProducer { hasher: self }))
    }

    fn size(&self) -> usize {
        self.items
    }
}

struct StaticProducer<'a> {
    hasher: &'a StaticHasher,
}

impl IndexProducer for StaticProducer<'_> {
    fn for_each_index(&self, consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        for &index in &self.hasher.indices {
            if !consumer(index) {
                return false;
            }
        }
        true
    }
}
