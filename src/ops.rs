//! The free-function entry points, re-exported from the crate root.
//!
//! Each function delegates to the combinator struct of the same concern;
//! negated and fixed-size variants are expressed in terms of their general
//! forms.

use std::cmp::Ordering;

use crate::combinators::{
    Aggregate, GroupRuns, Interleave, Join, Merge, Reject, SkipUntil, TakeWhile, Tap, Unfold,
    Windowed, Zip, Zip3, ZipList,
};
use crate::error::InvalidArgument;
use crate::selectors::Selector;
use crate::sequence::{Indexed, PullSequence};

/// Zip two sequences with a combiner; see [`Zip`].
pub fn zip<L, R, F, O>(lefts: L, rights: R, combiner: F) -> Zip<L, R, F>
where
    L: PullSequence,
    R: PullSequence,
    F: FnMut(L::Item, R::Item) -> O,
{
    Zip::new(lefts, rights, combiner)
}

/// Zip three sequences with a combiner; see [`Zip3`].
pub fn zip3<L, M, R, F, O>(lefts: L, middles: M, rights: R, combiner: F) -> Zip3<L, M, R, F>
where
    L: PullSequence,
    M: PullSequence,
    R: PullSequence,
    F: FnMut(L::Item, M::Item, R::Item) -> O,
{
    Zip3::new(lefts, middles, rights, combiner)
}

/// Zip a list of sequences with a combiner; see [`ZipList`].
pub fn zip_list<S, F, O>(sources: Vec<S>, combiner: F) -> ZipList<S, F>
where
    S: PullSequence,
    F: FnMut(Vec<S::Item>) -> O,
{
    ZipList::new(sources, combiner)
}

/// Pair every element with its zero-based position.
pub fn zip_with_index<S>(source: S) -> impl PullSequence<Item = Indexed<S::Item>>
where
    S: PullSequence,
{
    zip(
        Unfold::new(0u64, |index| Some(index + 1)),
        source,
        Indexed::new,
    )
}

/// Merge-join two pre-sorted sequences; see [`Join`].
pub fn join<L, R, C, F, O>(comparator: C, combiner: F, left: L, right: R) -> Join<L, R, C, F>
where
    L: PullSequence,
    R: PullSequence<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
    F: FnMut(L::Item, L::Item) -> O,
{
    Join::new(comparator, combiner, left, right)
}

/// Interleave sequences under a selection strategy; see [`Interleave`].
pub fn interleave<S, Sel>(selector: Sel, sources: Vec<S>) -> Interleave<S, Sel>
where
    S: PullSequence,
    Sel: Selector<S::Item>,
{
    Interleave::new(selector, sources)
}

/// Fold one step's worth of values from every source; see [`Merge`].
pub fn merge<S, U, F, O>(unit: U, merger: F, sources: Vec<S>) -> Merge<S, U, F>
where
    S: PullSequence,
    U: FnMut() -> O,
    F: FnMut(O, S::Item) -> O,
{
    Merge::new(sources, unit, merger)
}

/// [`merge`] into per-step `Vec`s.
pub fn merge_to_list<S>(sources: Vec<S>) -> impl PullSequence<Item = Vec<S::Item>>
where
    S: PullSequence,
{
    merge(Vec::new, |mut accumulator, item| {
        accumulator.push(item);
        accumulator
    }, sources)
}

/// Sliding windows of `size`, advancing one element at a time; see
/// [`Windowed`].
pub fn windowed<S>(source: S, size: usize) -> Result<Windowed<S>, InvalidArgument>
where
    S: PullSequence,
    S::Item: Clone,
{
    Windowed::new(source, size, 1, false)
}

/// Windows of `size`, advancing `skip` elements between windows, optionally
/// emitting a trailing shorter window; see [`Windowed`].
pub fn windowed_with<S>(
    source: S,
    size: usize,
    skip: usize,
    allow_lesser_size: bool,
) -> Result<Windowed<S>, InvalidArgument>
where
    S: PullSequence,
    S::Item: Clone,
{
    Windowed::new(source, size, skip, allow_lesser_size)
}

/// Chunks of exactly `size` elements, except possibly the last; see
/// [`Aggregate`].
pub fn aggregate<S>(
    source: S,
    size: usize,
) -> Result<Aggregate<S, impl FnMut(&[S::Item], &S::Item) -> bool>, InvalidArgument>
where
    S: PullSequence,
{
    if size == 0 {
        return Err(InvalidArgument::AggregateSize(size));
    }
    Ok(Aggregate::new(source, move |slide: &[S::Item], _: &S::Item| {
        slide.len() < size
    }))
}

/// Chunks cut wherever the condition rejects the incoming element; see
/// [`Aggregate`].
pub fn aggregate_by<S, P>(source: S, condition: P) -> Aggregate<S, P>
where
    S: PullSequence,
    P: FnMut(&[S::Item], &S::Item) -> bool,
{
    Aggregate::new(source, condition)
}

/// Runs of naturally-equal neighbours; see [`GroupRuns`].
pub fn group_runs<S>(source: S) -> GroupRuns<S, impl FnMut(&S::Item, &S::Item) -> Ordering>
where
    S: PullSequence,
    S::Item: Ord,
{
    GroupRuns::new(source, |a: &S::Item, b: &S::Item| a.cmp(b))
}

/// Runs of comparator-equal neighbours; see [`GroupRuns`].
pub fn group_runs_by<S, C>(source: S, comparator: C) -> GroupRuns<S, C>
where
    S: PullSequence,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    GroupRuns::new(source, comparator)
}

/// Elements while `condition` holds; see [`TakeWhile`].
pub fn take_while<S, P>(source: S, condition: P) -> TakeWhile<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile::new(source, condition)
}

/// Elements while `condition` holds, plus the first failing element; see
/// [`TakeWhile`].
pub fn take_while_inclusive<S, P>(source: S, condition: P) -> TakeWhile<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile::inclusive(source, condition)
}

/// Elements until `condition` first holds.
pub fn take_until<S, P>(
    source: S,
    mut condition: P,
) -> TakeWhile<S, impl FnMut(&S::Item) -> bool>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile::new(source, move |item| !condition(item))
}

/// Elements until `condition` first holds, plus that element.
pub fn take_until_inclusive<S, P>(
    source: S,
    mut condition: P,
) -> TakeWhile<S, impl FnMut(&S::Item) -> bool>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile::inclusive(source, move |item| !condition(item))
}

/// Everything from the first element satisfying `condition`; see
/// [`SkipUntil`].
pub fn skip_until<S, P>(source: S, condition: P) -> SkipUntil<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipUntil::new(source, condition)
}

/// Everything after the first element satisfying `condition`.
pub fn skip_until_inclusive<S, P>(source: S, condition: P) -> SkipUntil<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipUntil::inclusive(source, condition)
}

/// Everything from the first element failing `condition`.
pub fn skip_while<S, P>(
    source: S,
    mut condition: P,
) -> SkipUntil<S, impl FnMut(&S::Item) -> bool>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipUntil::new(source, move |item| !condition(item))
}

/// Everything after the first element failing `condition`.
pub fn skip_while_inclusive<S, P>(
    source: S,
    mut condition: P,
) -> SkipUntil<S, impl FnMut(&S::Item) -> bool>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipUntil::inclusive(source, move |item| !condition(item))
}

/// The seed and its successive generator images; see [`Unfold`].
pub fn unfold<T, F>(seed: T, generator: F) -> Unfold<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    Unfold::new(seed, generator)
}

/// Observe every element with a side effect; see [`Tap`].
pub fn tap<S, F>(source: S, effect: F) -> Tap<S, F>
where
    S: PullSequence,
    F: FnMut(&S::Item),
{
    Tap::new(source, effect)
}

/// Drop elements matching `condition`; see [`Reject`].
pub fn reject<S, P>(source: S, condition: P) -> Reject<S, P>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    Reject::new(source, condition)
}
