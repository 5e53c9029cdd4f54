//! One-element lookahead over a pull sequence.

use std::cmp::Ordering;

use super::characteristics::Characteristics;
use super::pull::PullSequence;

/// Wraps a sequence with a one-slot buffer so the next element can be
/// inspected without consuming it.
///
/// Calling [`peek`](Peekable::peek) any number of times without an
/// intervening [`pull`](PullSequence::pull) is idempotent and has no side
/// effect beyond the first fill.
///
/// # Example
///
/// ```rust
/// use pullseq::{Peekable, PullSequence};
///
/// let mut peekable = Peekable::new(pullseq::of(vec![1, 2]));
/// assert_eq!(peekable.peek(), Some(&1));
/// assert_eq!(peekable.peek(), Some(&1));
/// assert_eq!(peekable.pull(), Some(1));
/// assert_eq!(peekable.pull(), Some(2));
/// assert_eq!(peekable.peek(), None);
/// ```
pub struct Peekable<S: PullSequence> {
    source: S,
    slot: Option<S::Item>,
}

impl<S: PullSequence> Peekable<S> {
    /// Wrap `source` with a one-slot lookahead buffer.
    pub fn new(source: S) -> Peekable<S> {
        Peekable { source, slot: None }
    }

    /// A reference to the next element, filling the buffer if empty.
    pub fn peek(&mut self) -> Option<&S::Item> {
        if self.slot.is_none() {
            self.slot = self.source.pull();
        }
        self.slot.as_ref()
    }
}

impl<S: PullSequence> PullSequence for Peekable<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        match self.slot.take() {
            Some(item) => Some(item),
            None => self.source.pull(),
        }
    }

    fn estimated_size(&self) -> Option<usize> {
        let buffered = usize::from(self.slot.is_some());
        self.source.estimated_size().map(|n| n + buffered)
    }

    fn characteristics(&self) -> Characteristics {
        self.source.characteristics()
    }

    fn comparator(&self) -> Option<&dyn Fn(&S::Item, &S::Item) -> Ordering> {
        self.source.comparator()
    }
}
