//! A value paired with the state that accompanied it.

use serde::{Deserialize, Serialize};

/// An input value tagged with the machine state reached after consuming it.
///
/// Produced by [`TaggingStateMachine`](crate::machine::TaggingStateMachine).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedValue<S, T> {
    /// The post-transition state.
    pub tag: S,
    /// The input value that produced it.
    pub value: T,
}

impl<S, T> TaggedValue<S, T> {
    /// Pair a tag and a value.
    pub fn new(tag: S, value: T) -> TaggedValue<S, T> {
        TaggedValue { tag, value }
    }
}
