//! Sequence transformations.
//!
//! Every type here consumes one or more [`PullSequence`](crate::PullSequence)
//! inputs and is itself a pull sequence. Nothing is pulled from any input
//! until the downstream consumer asks for an element, and no combinator
//! buffers beyond what its algorithm requires (a one-slot peek, a window,
//! a pending group).
//!
//! The free functions in the crate root are the usual entry points; the
//! structs are exposed for signatures that need to name them.

mod aggregate;
mod group_runs;
mod interleave;
mod join;
mod merge;
mod reject;
mod skip_until;
mod take_while;
mod tap;
mod unfold;
mod windowed;
mod zip;

pub use aggregate::Aggregate;
pub use group_runs::GroupRuns;
pub use interleave::Interleave;
pub use join::Join;
pub use merge::Merge;
pub use reject::Reject;
pub use skip_until::SkipUntil;
pub use take_while::TakeWhile;
pub use tap::Tap;
pub use unfold::Unfold;
pub use windowed::Windowed;
pub use zip::{Zip, Zip3, ZipList};
