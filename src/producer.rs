//! Push-style index production and per-item de-duplication.
//!
//! A hasher reports its resolved bit indices through the [`IndexProducer`]
//! contract: a single-pass push traversal that invokes a caller-supplied
//! callback per index. The callback returns `true` to continue and `false`
//! to stop early, so a consumer that has already decided (e.g. a `contains`
//! query that hit a zero bit) never pays for the rest of the sequence.
//!
//! There is no `has_next`/`next` iterator protocol and producers hold no
//! cross-traversal state: a fresh producer is handed out per
//! `indices(shape)` call, and any filter state is instantiated per traversal.
//!
//! [`UniqueIndexFilter`] is the shared de-duplication machinery used by every
//! single-item hasher variant: a fixed-size bitset sized to the shape's bit
//! count, test-and-set before forwarding.

use std::fmt;

/// Push-style producer of bit indices.
///
/// # Contract
///
/// - Single-pass: each call to [`for_each_index`](Self::for_each_index) is an
///   independent traversal; implementations must not retain state between
///   calls.
/// - Early termination: when the consumer returns `false`, no further
///   indices are generated or tested, and the traversal returns `false`.
/// - Every produced index lies in `[0, m)` for the shape the producer was
///   created against.
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
/// let producer = hasher.indices(&shape).unwrap();
/// let mut seen = Vec::new();
/// let completed = producer.for_each_index(&mut |index| {
///     seen.push(index);
///     true
/// });
/// assert!(completed);
/// assert_eq!(seen, vec![7, 0, 3]);
/// ```
pub trait IndexProducer {
    /// Invoke `consumer` once per index, in generation order.
    ///
    /// # Arguments
    ///
    /// * `consumer` - Callback receiving each index; return `true` to
    ///   continue the traversal, `false` to stop it
    ///
    /// # Returns
    ///
    /// `true` if the traversal ran to completion, `false` if the consumer
    /// stopped it early.
    fn for_each_index(&self, consumer: &mut dyn FnMut(usize) -> bool) -> bool;

    /// Drain the full traversal into a vector, in generation order.
    fn as_vec(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        self.for_each_index(&mut |index| {
            indices.push(index);
            true
        });
        indices
    }
}

impl fmt::Debug for dyn IndexProducer + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexProducer").finish_non_exhaustive()
    }
}

/// A producer that never emits anything.
///
/// Used by the null hasher and any other variant representing zero items.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProducer;

impl IndexProducer for EmptyProducer {
    fn for_each_index(&self, _consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        true
    }
}

/// Per-item duplicate suppression over a bounded index range.
///
/// Backed by a plain `Vec<u64>` bitset with one bit per possible index
/// (64 indices per word), so membership testing is a single mask check and
/// the tracked slots are inherently capped at the shape's bit count.
///
/// One filter instance covers one logical item's traversal (or, for the
/// collapsing collection hasher, one combined traversal); instantiate a
/// fresh filter per traversal.
pub struct UniqueIndexFilter {
    seen: Vec<u64>,
}

impl UniqueIndexFilter {
    /// Create a filter covering indices `[0, bits)`.
    #[must_use]
    pub fn new(bits: usize) -> Self {
        Self {
            seen: vec![0u64; (bits + 63) / 64],
        }
    }

    /// Forward `index` to `consumer` unless it was already seen.
    ///
    /// Duplicates are swallowed (the traversal continues without invoking
    /// the consumer).
    ///
    /// # Returns
    ///
    /// `false` iff the consumer was invoked and asked to stop.
    pub fn accept(&mut self, index: usize, consumer: &mut dyn FnMut(usize) -> bool) -> bool {
        let word = index / 64;
        let mask = 1u64 << (index % 64);
        if self.seen[word] & mask != 0 {
            return true;
        }
        self.seen[word] |= mask;
        consumer(index)
    }
}

impl fmt::Debug for UniqueIndexFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueIndexFilter")
            .field("words", &self.seen.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_producer_never_invokes_consumer() {
        let producer = EmptyProducer;
        let mut calls = 0;
        let completed = producer.for_each_index(&mut |_| {
            calls += 1;
            true
        });
        assert!(completed);
        assert_eq!(calls, 0);
        assert!(producer.as_vec().is_empty());
    }

    #[test]
    fn test_filter_forwards_first_occurrence_only() {
        let mut filter = UniqueIndexFilter::new(100);
        let mut seen = Vec::new();
        let mut consumer = |index: usize| {
            seen.push(index);
            true
        };

        assert!(filter.accept(5, &mut consumer));
        assert!(filter.accept(5, &mut consumer));
        assert!(filter.accept(63, &mut consumer));
        assert!(filter.accept(64, &mut consumer));
        assert!(filter.accept(64, &mut consumer));
        assert_eq!(seen, vec![5, 63, 64]);
    }

    #[test]
    fn test_filter_propagates_consumer_stop() {
        let mut filter = UniqueIndexFilter::new(100);
        let mut consumer = |_: usize| false;
        assert!(!filter.accept(5, &mut consumer));
    }

    #[test]
    fn test_filter_duplicate_does_not_reach_consumer_after_stop_request() {
        // A duplicate is swallowed without consulting the consumer at all.
        let mut filter = UniqueIndexFilter::new(100);
        let mut first = |_: usize| true;
        assert!(filter.accept(7, &mut first));

        let mut must_not_run = |_: usize| panic!("duplicate reached consumer");
        assert!(filter.accept(7, &mut must_not_run));
    }

    #[test]
    fn test_filter_covers_word_boundary_sizes() {
        // Exactly one word, exactly two words, and a ragged tail.
        for bits in [64, 128, 65, 1] {
            let mut filter = UniqueIndexFilter::new(bits);
            let mut consumer = |_: usize| true;
            assert!(filter.accept(bits - 1, &mut consumer));
        }
    }
}
