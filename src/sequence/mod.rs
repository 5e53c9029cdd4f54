//! The foundational pull protocol and its root sources.
//!
//! This module contains:
//! - The [`PullSequence`] trait, the single-method cursor every combinator
//!   consumes and produces
//! - [`Characteristics`], the advisory flag set carried alongside a sequence
//! - [`Peekable`], the one-slot lookahead adapter
//! - Constructors for sequences over values, optionals, and iterators

mod characteristics;
mod indexed;
mod peekable;
mod pull;
pub mod sources;

pub use characteristics::Characteristics;
pub use indexed::Indexed;
pub use peekable::Peekable;
pub use pull::{IntoIter, PullSequence};
