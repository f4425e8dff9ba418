//! The no-item hasher.

use crate::error::Result;
use crate::producer::{EmptyProducer, IndexProducer};
use crate::shape::Shape;

use super::Hasher;

/// Hasher representing zero items.
///
/// Always compatible, always empty. Useful as a default or placeholder
/// where a [`Hasher`] is required but nothing should be emitted.
///
/// # Examples
///
/// ```
/// use bloomhash::hash::{HashFunctionIdentity, Signedness, ProcessType};
/// use bloomhash::{Shape, NullHasher, Hasher, IndexProducer};
///
/// let identity = HashFunctionIdentity::new(
///     "example", "demo", Signedness::Unsigned, ProcessType::Cyclic, 0,
/// );
/// let shape = Shape::new(identity, 3, 10).unwrap();
///
/// assert!(NullHasher.is_empty());
/// assert!(NullHasher.indices(&shape).unwrap().as_vec().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NullHasher;

impl Hasher for NullHasher {
    fn indices<'a>(&'a self, _shape: &'a Shape) -> Result<Box<dyn IndexProducer + 'a>> {
        Ok(Box::new(EmptyProducer))
    }

    fn size(&self) -> usize {
        0
    }
}
