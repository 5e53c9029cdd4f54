//! Selection strategies for [`interleave`](crate::interleave).
//!
//! A selector is handed the interleave buffer (one `Option` slot per input,
//! `None` marking an exhausted source) and returns the index of the slot to
//! emit next. Strategies are plain stateful closures; any
//! `FnMut(&[Option<T>]) -> usize` is a [`Selector`].
//!
//! Every strategy here requires at least one non-empty slot, which the
//! interleave combinator guarantees before invoking it.

use std::cmp::Ordering;

/// Chooses which buffered element an interleave emits next.
///
/// Implemented for every `FnMut(&[Option<T>]) -> usize` closure. Returning
/// the index of an empty slot is a contract violation.
pub trait Selector<T> {
    /// Pick the index of the slot to emit, given the current buffer.
    fn select(&mut self, options: &[Option<T>]) -> usize;
}

impl<T, F> Selector<T> for F
where
    F: FnMut(&[Option<T>]) -> usize,
{
    fn select(&mut self, options: &[Option<T>]) -> usize {
        self(options)
    }
}

/// Cycles through the inputs fairly, skipping exhausted slots.
///
/// The scan start advances past whichever slot was just consumed, so no
/// input is starved.
pub fn round_robin<T>() -> impl FnMut(&[Option<T>]) -> usize {
    let mut start_index = 0usize;
    move |options| {
        let mut index = start_index % options.len();
        while options[index].is_none() {
            index = (index + 1) % options.len();
        }
        start_index = (index + 1) % options.len();
        index
    }
}

/// Always picks the smallest buffered value under `comparator`.
///
/// Ties break to the first matching slot at or after a scan position that
/// rotates past each pick, so repeated ties do not starve later slots.
pub fn take_min_by<T, F>(mut comparator: F) -> impl FnMut(&[Option<T>]) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut start_index = 0usize;
    move |options| {
        let smallest = options
            .iter()
            .flatten()
            .reduce(|best, candidate| {
                if comparator(candidate, best) == Ordering::Less {
                    candidate
                } else {
                    best
                }
            })
            .expect("extremum selector requires at least one non-empty option");
        let mut index = start_index % options.len();
        loop {
            if let Some(candidate) = &options[index] {
                if comparator(candidate, smallest) == Ordering::Equal {
                    break;
                }
            }
            index = (index + 1) % options.len();
        }
        start_index = (index + 1) % options.len();
        index
    }
}

/// [`take_min_by`] with the natural order.
pub fn take_min<T: Ord>() -> impl FnMut(&[Option<T>]) -> usize {
    take_min_by(T::cmp)
}

/// Always picks the largest buffered value under `comparator`.
pub fn take_max_by<T, F>(mut comparator: F) -> impl FnMut(&[Option<T>]) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    take_min_by(move |a, b| comparator(b, a))
}

/// [`take_max_by`] with the natural order.
pub fn take_max<T: Ord>() -> impl FnMut(&[Option<T>]) -> usize {
    take_max_by(T::cmp)
}
