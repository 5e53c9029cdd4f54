//! Pullseq: composable, lazily-evaluated pull-sequence transformations
//!
//! Everything in this crate is built on a single-element "pull" protocol:
//! a [`PullSequence`] yields its next element only when asked, and every
//! combinator (zip, window, aggregate, interleave, merge, join,
//! take/skip-while, unfold) consumes pull sequences and produces a new one
//! without materializing intermediate collections. Control flows upstream
//! on demand; data flows strictly downstream.
//!
//! On top of the combinators sits a generic state-machine transducer
//! framework ([`machine`]): a [`machine::StateMachine`] consumes one input
//! at a time and emits zero or more outputs per step, optionally
//! terminating early or flushing final outputs.
//!
//! Evaluation is single-threaded and synchronous: every step happens on the
//! calling thread when the consumer asks for the next element, and no
//! combinator buffers beyond what its algorithm requires. If sequences are
//! shared across threads, synchronization is entirely the caller's concern.
//!
//! # Example
//!
//! ```rust
//! use pullseq::PullSequence;
//!
//! // Sliding windows over the values kept by a predicate.
//! let kept = pullseq::take_while(pullseq::of(vec![1, 2, 3, 10, 4]), |x| *x < 5);
//! let windows: Vec<Vec<i32>> = pullseq::windowed(kept, 2)
//!     .unwrap()
//!     .into_iter()
//!     .collect();
//! assert_eq!(windows, vec![vec![1, 2], vec![2, 3]]);
//! ```
//!
//! ```rust
//! use pullseq::machine;
//! use std::collections::HashSet;
//!
//! // Subset membership terminates as soon as both items are seen.
//! let seen = pullseq::of(vec!["x", "y", "z", "y"]);
//! assert!(machine::includes_items(seen, HashSet::from(["x", "y"])));
//! ```

pub mod collectors;
pub mod combinators;
pub mod comparators;
pub mod error;
pub mod machine;
mod ops;
pub mod selectors;
pub mod sequence;

pub use error::{InvalidArgument, NonUniqueValueError};
pub use ops::*;
pub use sequence::sources::{
    assume_sorted_by, empty, from_iterator, from_nullable, from_option, of,
};
pub use sequence::{Characteristics, Indexed, IntoIter, Peekable, PullSequence};
