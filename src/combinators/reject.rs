//! The negated filter.

use std::cmp::Ordering;

use crate::sequence::{Characteristics, PullSequence};

/// Drops every element matching the condition.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let kept: Vec<i32> = pullseq::reject(pullseq::of(vec![1, 2, 3, 4]), |x| x % 2 == 0)
///     .into_iter()
///     .collect();
/// assert_eq!(kept, vec![1, 3]);
/// ```
pub struct Reject<S, P> {
    source: S,
    condition: P,
}

impl<S, P> Reject<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    /// Drop elements of `source` for which `condition` holds.
    pub fn new(source: S, condition: P) -> Reject<S, P> {
        Reject { source, condition }
    }
}

impl<S, P> PullSequence for Reject<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        loop {
            let item = self.source.pull()?;
            if !(self.condition)(&item) {
                return Some(item);
            }
        }
    }

    fn estimated_size(&self) -> Option<usize> {
        self.source.estimated_size()
    }

    fn characteristics(&self) -> Characteristics {
        self.source.characteristics() & !Characteristics::SIZED
    }

    fn comparator(&self) -> Option<&dyn Fn(&S::Item, &S::Item) -> Ordering> {
        self.source.comparator()
    }
}
