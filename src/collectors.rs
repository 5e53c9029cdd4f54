//! Terminal operations that reduce a whole sequence to a single value.

use std::fmt::Debug;

use crate::error::NonUniqueValueError;
use crate::sequence::PullSequence;

/// The element whose projection is largest; the earliest such element wins
/// on ties. `None` for an empty sequence.
pub fn max_by_projection<S, K, F>(source: S, mut projection: F) -> Option<S::Item>
where
    S: PullSequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut iter = source.into_iter();
    let mut best = iter.next()?;
    let mut best_key = projection(&best);
    for item in iter {
        let key = projection(&item);
        if key > best_key {
            best = item;
            best_key = key;
        }
    }
    Some(best)
}

/// The element whose projection is smallest; the earliest such element wins
/// on ties. `None` for an empty sequence.
pub fn min_by_projection<S, K, F>(source: S, mut projection: F) -> Option<S::Item>
where
    S: PullSequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut iter = source.into_iter();
    let mut best = iter.next()?;
    let mut best_key = projection(&best);
    for item in iter {
        let key = projection(&item);
        if key < best_key {
            best = item;
            best_key = key;
        }
    }
    Some(best)
}

/// The single element of the sequence, if any.
///
/// Returns `Ok(None)` for an empty sequence and
/// [`NonUniqueValueError`] carrying both conflicting values as soon as a
/// second element is found; elements past the second are never pulled.
pub fn unique<S>(source: S) -> Result<Option<S::Item>, NonUniqueValueError<S::Item>>
where
    S: PullSequence,
    S::Item: Debug,
{
    let mut iter = source.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    match iter.next() {
        Some(second) => Err(NonUniqueValueError { first, second }),
        None => Ok(Some(first)),
    }
}
