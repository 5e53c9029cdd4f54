//! The state-machine transducer framework.
//!
//! A [`StateMachine`] consumes one input at a time, transitioning between
//! states and emitting zero or more outputs per step, optionally terminating
//! early or flushing trailing outputs. The [`transform`] driver turns a
//! machine plus an input sequence into an output sequence; [`traverse`]
//! runs to completion and returns only the final state; the
//! [`StateMachineRunner`] drives a machine by hand.
//!
//! Ready-made machines cover windowing, tagging, indexing, subset
//! membership, and last-match finding, each with a matching one-call driver.
//!
//! # Example
//!
//! ```rust
//! use pullseq::machine;
//! use pullseq::PullSequence;
//!
//! let indexed: Vec<_> = machine::index(pullseq::of(vec!["a", "b"]))
//!     .into_iter()
//!     .map(|i| (i.index, i.value))
//!     .collect();
//! assert_eq!(indexed, vec![(0, "a"), (1, "b")]);
//! ```

mod driver;
mod machines;
mod runner;
mod state_machine;
mod tagged;
mod transition;
mod window;

pub use driver::{
    find_last_matching, for_each_while, includes_items, index, tag, tag_until, terminates,
    transform, traverse, window, Transduced,
};
pub use machines::{
    checking_subset, last_matching_finder, tagging, tagging_until, terminating_for_each,
    windowing, FinderState, LastMatchingFinderStateMachine, SubsetCheckingStateMachine,
    TaggingStateMachine, TerminatingActionStateMachine, WindowingStateMachine,
};
pub use runner::StateMachineRunner;
pub use state_machine::{Composed, StateMachine};
pub use tagged::TaggedValue;
pub use transition::Transition;
pub use window::Window;
