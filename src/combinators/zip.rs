//! Barrier-synchronized pairing of sequences.
//!
//! All zip variants pull exactly one element from each input per step, in a
//! fixed left-to-right order. The first failed pull ends the whole zip: no
//! partial tuple is ever emitted, and elements already pulled from the other
//! inputs on the losing step are discarded.

use crate::sequence::{Characteristics, PullSequence};

fn min_size(left: Option<usize>, right: Option<usize>) -> Option<usize> {
    match (left, right) {
        (Some(l), Some(r)) => Some(l.min(r)),
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}

/// Pairs two sequences with a combiner until either runs out of values.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let sums: Vec<i32> = pullseq::zip(
///     pullseq::of(vec![1, 2, 3]),
///     pullseq::of(vec![10, 20]),
///     |l, r| l + r,
/// )
/// .into_iter()
/// .collect();
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub struct Zip<L, R, F> {
    lefts: L,
    rights: R,
    combiner: F,
    done: bool,
}

impl<L, R, F, O> Zip<L, R, F>
where
    L: PullSequence,
    R: PullSequence,
    F: FnMut(L::Item, R::Item) -> O,
{
    /// Zip `lefts` and `rights` together with `combiner`.
    pub fn new(lefts: L, rights: R, combiner: F) -> Zip<L, R, F> {
        Zip {
            lefts,
            rights,
            combiner,
            done: false,
        }
    }
}

impl<L, R, F, O> PullSequence for Zip<L, R, F>
where
    L: PullSequence,
    R: PullSequence,
    F: FnMut(L::Item, R::Item) -> O,
{
    type Item = O;

    fn pull(&mut self) -> Option<O> {
        if self.done {
            return None;
        }
        let Some(left) = self.lefts.pull() else {
            self.done = true;
            return None;
        };
        let Some(right) = self.rights.pull() else {
            self.done = true;
            return None;
        };
        Some((self.combiner)(left, right))
    }

    fn estimated_size(&self) -> Option<usize> {
        min_size(self.lefts.estimated_size(), self.rights.estimated_size())
    }

    fn characteristics(&self) -> Characteristics {
        self.lefts.characteristics()
            & self.rights.characteristics()
            & !(Characteristics::DISTINCT | Characteristics::SORTED)
    }
}

/// Three-way [`Zip`].
pub struct Zip3<L, M, R, F> {
    lefts: L,
    middles: M,
    rights: R,
    combiner: F,
    done: bool,
}

impl<L, M, R, F, O> Zip3<L, M, R, F>
where
    L: PullSequence,
    M: PullSequence,
    R: PullSequence,
    F: FnMut(L::Item, M::Item, R::Item) -> O,
{
    /// Zip three sequences together with `combiner`.
    pub fn new(lefts: L, middles: M, rights: R, combiner: F) -> Zip3<L, M, R, F> {
        Zip3 {
            lefts,
            middles,
            rights,
            combiner,
            done: false,
        }
    }
}

impl<L, M, R, F, O> PullSequence for Zip3<L, M, R, F>
where
    L: PullSequence,
    M: PullSequence,
    R: PullSequence,
    F: FnMut(L::Item, M::Item, R::Item) -> O,
{
    type Item = O;

    fn pull(&mut self) -> Option<O> {
        if self.done {
            return None;
        }
        let Some(left) = self.lefts.pull() else {
            self.done = true;
            return None;
        };
        let Some(middle) = self.middles.pull() else {
            self.done = true;
            return None;
        };
        let Some(right) = self.rights.pull() else {
            self.done = true;
            return None;
        };
        Some((self.combiner)(left, middle, right))
    }

    fn estimated_size(&self) -> Option<usize> {
        min_size(
            min_size(self.lefts.estimated_size(), self.middles.estimated_size()),
            self.rights.estimated_size(),
        )
    }

    fn characteristics(&self) -> Characteristics {
        self.lefts.characteristics()
            & self.middles.characteristics()
            & self.rights.characteristics()
            & !(Characteristics::DISTINCT | Characteristics::SORTED)
    }
}

/// N-ary [`Zip`] over a homogeneous list of sequences.
///
/// Each step collects one element from every input, in order, into a `Vec`
/// handed to the combiner. An empty input list yields the empty sequence.
pub struct ZipList<S, F> {
    sources: Vec<S>,
    combiner: F,
    done: bool,
}

impl<S, F, O> ZipList<S, F>
where
    S: PullSequence,
    F: FnMut(Vec<S::Item>) -> O,
{
    /// Zip all of `sources` together with `combiner`.
    pub fn new(sources: Vec<S>, combiner: F) -> ZipList<S, F> {
        ZipList {
            sources,
            combiner,
            done: false,
        }
    }
}

impl<S, F, O> PullSequence for ZipList<S, F>
where
    S: PullSequence,
    F: FnMut(Vec<S::Item>) -> O,
{
    type Item = O;

    fn pull(&mut self) -> Option<O> {
        if self.done || self.sources.is_empty() {
            self.done = true;
            return None;
        }
        let mut values = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.pull() {
                Some(value) => values.push(value),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
        Some((self.combiner)(values))
    }

    fn estimated_size(&self) -> Option<usize> {
        self.sources
            .iter()
            .map(PullSequence::estimated_size)
            .fold(None, min_size)
    }

    fn characteristics(&self) -> Characteristics {
        let combined = self
            .sources
            .iter()
            .map(PullSequence::characteristics)
            .reduce(|acc, c| acc & c)
            .unwrap_or_else(Characteristics::empty);
        combined & !(Characteristics::DISTINCT | Characteristics::SORTED)
    }
}
