//! Sliding, overlapping, and gapped windows over a sequence.

use std::collections::VecDeque;

use crate::error::InvalidArgument;
use crate::sequence::{Characteristics, PullSequence};

/// Emits snapshots of a FIFO buffer of up to `size` elements, advancing by
/// `skip` elements between windows.
///
/// The first window is seeded by pulling `size` elements; each subsequent
/// window drops `skip` elements from the front and pulls `skip` fresh ones,
/// clamped at end-of-source. With `allow_lesser_size` unset, windows shorter
/// than `size` (a short seed, or the tail of the source) are dropped rather
/// than emitted.
///
/// `size = 1, skip = 1` is the classic one-window-per-element slide;
/// `skip >= size` produces non-overlapping or gapped chunks.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let windows: Vec<Vec<i32>> = pullseq::windowed_with(pullseq::of(vec![1, 2, 3, 4, 5]), 3, 2, false)
///     .unwrap()
///     .into_iter()
///     .collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![3, 4, 5]]);
/// ```
pub struct Windowed<S: PullSequence> {
    source: S,
    size: usize,
    skip: usize,
    allow_lesser_size: bool,
    next: VecDeque<S::Item>,
    seeded: bool,
}

impl<S> Windowed<S>
where
    S: PullSequence,
    S::Item: Clone,
{
    /// Window `source` into snapshots of `size` elements, `skip` apart.
    ///
    /// Fails with [`InvalidArgument::WindowSize`] when `size` is zero.
    pub fn new(
        source: S,
        size: usize,
        skip: usize,
        allow_lesser_size: bool,
    ) -> Result<Windowed<S>, InvalidArgument> {
        if size == 0 {
            return Err(InvalidArgument::WindowSize(size));
        }
        Ok(Windowed {
            source,
            size,
            skip,
            allow_lesser_size,
            next: VecDeque::with_capacity(size),
            seeded: false,
        })
    }

    fn seed_window(&mut self) {
        for _ in 0..self.size {
            match self.source.pull() {
                Some(item) => self.next.push_back(item),
                None => break,
            }
        }
        if self.next.len() != self.size && !self.allow_lesser_size {
            self.next.clear();
        }
    }

    fn advance(&mut self) {
        for _ in 0..self.skip {
            if self.next.is_empty() {
                break;
            }
            self.next.pop_front();
            if let Some(item) = self.source.pull() {
                self.next.push_back(item);
            }
        }
        if !self.allow_lesser_size && self.next.len() != self.size {
            self.next.clear();
        }
    }
}

impl<S> PullSequence for Windowed<S>
where
    S: PullSequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Option<Vec<S::Item>> {
        if !self.seeded {
            self.seeded = true;
            self.seed_window();
        }
        if self.next.is_empty() {
            return None;
        }
        let window: Vec<S::Item> = self.next.iter().cloned().collect();
        self.advance();
        Some(window)
    }

    fn estimated_size(&self) -> Option<usize> {
        let source_size = self.source.estimated_size()?;
        if source_size == 0 {
            Some(0)
        } else if source_size <= self.size {
            Some(1)
        } else {
            Some(source_size - self.size)
        }
    }

    fn characteristics(&self) -> Characteristics {
        self.source.characteristics() & !(Characteristics::SIZED | Characteristics::ORDERED)
    }
}
