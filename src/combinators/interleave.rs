//! Selector-driven fair merging of multiple sequences.

use crate::selectors::Selector;
use crate::sequence::{Characteristics, PullSequence};

/// Interleaves several sequences, letting a [`Selector`] choose which
/// buffered element to emit next.
///
/// One element per input is held in a buffer, primed on the first pull. At
/// each step the selector sees the full buffer snapshot (`None` marks an
/// exhausted input) and returns the index to emit; only that slot is then
/// refilled from its source. The sequence ends when every buffer slot is
/// empty.
///
/// # Precondition
///
/// The selector must choose a non-empty slot. Choosing an exhausted slot is
/// a contract violation and panics.
///
/// # Example
///
/// ```rust
/// use pullseq::{selectors, PullSequence};
///
/// let merged: Vec<&str> = pullseq::interleave(
///     selectors::round_robin(),
///     vec![pullseq::of(vec!["P", "Q"]), pullseq::of(vec!["A", "B", "C"])],
/// )
/// .into_iter()
/// .collect();
/// assert_eq!(merged, vec!["P", "A", "Q", "B", "C"]);
/// ```
pub struct Interleave<S: PullSequence, Sel> {
    sources: Vec<S>,
    selector: Sel,
    buffers: Vec<Option<S::Item>>,
    primed: bool,
}

impl<S, Sel> Interleave<S, Sel>
where
    S: PullSequence,
    Sel: Selector<S::Item>,
{
    /// Interleave `sources`, choosing each next element with `selector`.
    pub fn new(selector: Sel, sources: Vec<S>) -> Interleave<S, Sel> {
        Interleave {
            sources,
            selector,
            buffers: Vec::new(),
            primed: false,
        }
    }
}

impl<S, Sel> PullSequence for Interleave<S, Sel>
where
    S: PullSequence,
    Sel: Selector<S::Item>,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if !self.primed {
            self.primed = true;
            self.buffers = self.sources.iter_mut().map(PullSequence::pull).collect();
        }
        if self.buffers.iter().all(Option::is_none) {
            return None;
        }
        let index = self.selector.select(&self.buffers);
        let value = self
            .buffers
            .get_mut(index)
            .and_then(Option::take)
            .expect("interleave selector must choose a non-empty slot");
        self.buffers[index] = self.sources[index].pull();
        Some(value)
    }

    fn estimated_size(&self) -> Option<usize> {
        let buffered = self.buffers.iter().flatten().count();
        self.sources
            .iter()
            .try_fold(buffered, |acc, source| source.estimated_size().map(|n| acc + n))
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::ORDERED
    }
}
