//! Ragged N-ary folding merge.

use crate::sequence::{Characteristics, PullSequence};

/// Per step, pulls one value from every source that still has one and folds
/// them left-to-right into a fresh unit value.
///
/// Unlike [`Zip`](crate::combinators::Zip), a temporarily empty source just
/// omits its contribution for that step; the merge ends only when every
/// source is simultaneously empty.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let rows: Vec<Vec<i32>> = pullseq::merge_to_list(vec![
///     pullseq::of(vec![1, 2, 3]),
///     pullseq::of(vec![4, 5]),
///     pullseq::of(vec![6]),
/// ])
/// .into_iter()
/// .collect();
/// assert_eq!(rows, vec![vec![1, 4, 6], vec![2, 5], vec![3]]);
/// ```
pub struct Merge<S, U, F> {
    sources: Vec<S>,
    unit: U,
    merger: F,
}

impl<S, U, F, O> Merge<S, U, F>
where
    S: PullSequence,
    U: FnMut() -> O,
    F: FnMut(O, S::Item) -> O,
{
    /// Merge `sources`, folding each step's values into `unit()` with
    /// `merger`.
    pub fn new(sources: Vec<S>, unit: U, merger: F) -> Merge<S, U, F> {
        Merge {
            sources,
            unit,
            merger,
        }
    }
}

impl<S, U, F, O> PullSequence for Merge<S, U, F>
where
    S: PullSequence,
    U: FnMut() -> O,
    F: FnMut(O, S::Item) -> O,
{
    type Item = O;

    fn pull(&mut self) -> Option<O> {
        let mut folded: Option<O> = None;
        for source in &mut self.sources {
            if let Some(item) = source.pull() {
                let accumulator = match folded.take() {
                    Some(accumulator) => accumulator,
                    None => (self.unit)(),
                };
                folded = Some((self.merger)(accumulator, item));
            }
        }
        folded
    }

    fn estimated_size(&self) -> Option<usize> {
        self.sources
            .iter()
            .map(PullSequence::estimated_size)
            .try_fold(0usize, |acc, size| size.map(|n| acc.max(n)))
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::ORDERED
    }
}
