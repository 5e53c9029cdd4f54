//! Error types for construction-time validation and collector failures.

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised synchronously when a combinator is constructed with
/// arguments that can never produce a valid pipeline. No element is
/// pulled from any source before these are reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("window size must be at least 1, got {0}")]
    WindowSize(usize),

    #[error("aggregate size must be at least 1, got {0}")]
    AggregateSize(usize),
}

/// More than one element was found by [`unique`](crate::collectors::unique).
///
/// Carries both conflicting values so the caller can report or inspect them.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("duplicate values found: {first:?} and {second:?}")]
pub struct NonUniqueValueError<T: Debug> {
    /// The element that was seen first.
    pub first: T,
    /// The element that conflicted with it.
    pub second: T,
}
