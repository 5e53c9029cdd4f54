//! Constructors for root sequences.
//!
//! These are the entry points that turn plain values, optionals, and
//! iterators into pull sequences. Iterator-backed sources report
//! `ORDERED | IMMUTABLE`, plus `SIZED` when the iterator knows its exact
//! length.

use std::cmp::Ordering;

use super::characteristics::Characteristics;
use super::pull::PullSequence;

/// A pull sequence backed by any [`Iterator`].
pub struct IterSequence<I> {
    iter: I,
}

impl<I: Iterator> PullSequence for IterSequence<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn estimated_size(&self) -> Option<usize> {
        let (lower, upper) = self.iter.size_hint();
        match upper {
            Some(upper) if upper == lower => Some(lower),
            _ => None,
        }
    }

    fn characteristics(&self) -> Characteristics {
        let base = Characteristics::ORDERED | Characteristics::IMMUTABLE;
        if self.estimated_size().is_some() {
            base | Characteristics::SIZED
        } else {
            base
        }
    }
}

/// A sequence over a fixed list of values.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let values: Vec<&str> = pullseq::of(vec!["a", "b"]).into_iter().collect();
/// assert_eq!(values, vec!["a", "b"]);
/// ```
pub fn of<T>(values: Vec<T>) -> IterSequence<std::vec::IntoIter<T>> {
    from_iterator(values)
}

/// A sequence over anything iterable.
pub fn from_iterator<I: IntoIterator>(iterable: I) -> IterSequence<I::IntoIter> {
    IterSequence {
        iter: iterable.into_iter(),
    }
}

/// A sequence of zero or one elements from an optional value.
pub fn from_option<T>(value: Option<T>) -> IterSequence<std::option::IntoIter<T>> {
    from_iterator(value)
}

/// A sequence over a possibly-absent collection; `None` yields the empty
/// sequence.
pub fn from_nullable<C: IntoIterator>(
    collection: Option<C>,
) -> IterSequence<std::iter::Flatten<std::option::IntoIter<C>>> {
    from_iterator(collection.into_iter().flatten())
}

/// The empty sequence.
pub fn empty<T>() -> IterSequence<std::iter::Empty<T>> {
    from_iterator(std::iter::empty())
}

/// A source wrapper asserting that its elements arrive sorted by the given
/// comparator.
///
/// The assertion is taken on trust; it sets [`Characteristics::SORTED`] and
/// makes the comparator available to downstream combinators that preserve
/// sortedness.
pub struct AssumeSorted<S: PullSequence> {
    source: S,
    comparator: Box<dyn Fn(&S::Item, &S::Item) -> Ordering>,
}

/// Declare `source` sorted by `comparator` without verifying it.
pub fn assume_sorted_by<S: PullSequence>(
    source: S,
    comparator: impl Fn(&S::Item, &S::Item) -> Ordering + 'static,
) -> AssumeSorted<S> {
    AssumeSorted {
        source,
        comparator: Box::new(comparator),
    }
}

impl<S: PullSequence> PullSequence for AssumeSorted<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        self.source.pull()
    }

    fn estimated_size(&self) -> Option<usize> {
        self.source.estimated_size()
    }

    fn characteristics(&self) -> Characteristics {
        self.source.characteristics() | Characteristics::SORTED | Characteristics::ORDERED
    }

    fn comparator(&self) -> Option<&dyn Fn(&S::Item, &S::Item) -> Ordering> {
        Some(self.comparator.as_ref())
    }
}
