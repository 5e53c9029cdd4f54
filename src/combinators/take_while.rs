//! Prefix-taking combinators.

use std::cmp::Ordering;

use crate::sequence::{Characteristics, Peekable, PullSequence};

/// Emits elements while the condition holds on the peeked element, then
/// stops permanently.
///
/// In the exclusive form the first failing element is left unconsumed in
/// the lookahead slot. In the inclusive form it is emitted exactly once
/// before iteration stops.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let taken: Vec<i32> = pullseq::take_while(pullseq::of(vec![1, 2, 3, 10, 4]), |x| *x < 5)
///     .into_iter()
///     .collect();
/// assert_eq!(taken, vec![1, 2, 3]);
/// ```
pub struct TakeWhile<S: PullSequence, P> {
    source: Peekable<S>,
    condition: P,
    inclusive: bool,
    done: bool,
}

impl<S, P> TakeWhile<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    /// Take elements while `condition` holds; the failing element is not
    /// consumed.
    pub fn new(source: S, condition: P) -> TakeWhile<S, P> {
        TakeWhile {
            source: Peekable::new(source),
            condition,
            inclusive: false,
            done: false,
        }
    }

    /// Take elements while `condition` holds, emitting the first failing
    /// element as well.
    pub fn inclusive(source: S, condition: P) -> TakeWhile<S, P> {
        TakeWhile {
            source: Peekable::new(source),
            condition,
            inclusive: true,
            done: false,
        }
    }
}

impl<S, P> PullSequence for TakeWhile<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        let holds = match self.source.peek() {
            Some(item) => (self.condition)(item),
            None => {
                self.done = true;
                return None;
            }
        };
        if holds {
            self.source.pull()
        } else {
            self.done = true;
            if self.inclusive {
                self.source.pull()
            } else {
                None
            }
        }
    }

    fn estimated_size(&self) -> Option<usize> {
        if self.done {
            Some(0)
        } else {
            self.source.estimated_size()
        }
    }

    fn characteristics(&self) -> Characteristics {
        self.source.characteristics() & !Characteristics::SIZED
    }

    fn comparator(&self) -> Option<&dyn Fn(&S::Item, &S::Item) -> Ordering> {
        self.source.comparator()
    }
}
