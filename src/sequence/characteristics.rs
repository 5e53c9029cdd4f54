//! Advisory characteristic flags carried alongside a pull sequence.
//!
//! Characteristics are hints, never guarantees. A combinator must clear any
//! flag its operation can invalidate, and downstream code must behave
//! correctly when a flag is absent or wrong.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A small set of boolean traits describing a sequence.
///
/// Flags combine with `|`, intersect with `&`, and invert with `!`, so a
/// combinator can express "everything the source had, minus sizing" as
/// `source.characteristics() & !Characteristics::SIZED`.
///
/// # Example
///
/// ```rust
/// use pullseq::Characteristics;
///
/// let source = Characteristics::SIZED | Characteristics::ORDERED;
/// let filtered = source & !Characteristics::SIZED;
///
/// assert!(filtered.contains(Characteristics::ORDERED));
/// assert!(!filtered.contains(Characteristics::SIZED));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Characteristics(u8);

impl Characteristics {
    /// The estimated size is an exact element count.
    pub const SIZED: Characteristics = Characteristics(1 << 0);
    /// Elements have a defined encounter order.
    pub const ORDERED: Characteristics = Characteristics(1 << 1);
    /// Elements are sorted; a comparator is available from the sequence.
    pub const SORTED: Characteristics = Characteristics(1 << 2);
    /// No two elements are equal.
    pub const DISTINCT: Characteristics = Characteristics(1 << 3);
    /// The underlying source cannot be structurally modified during traversal.
    pub const IMMUTABLE: Characteristics = Characteristics(1 << 4);

    const ALL: Characteristics = Characteristics(0b0001_1111);

    /// The empty flag set.
    pub const fn empty() -> Characteristics {
        Characteristics(0)
    }

    /// True if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Characteristics) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Characteristics {
    type Output = Characteristics;

    fn bitor(self, rhs: Characteristics) -> Characteristics {
        Characteristics(self.0 | rhs.0)
    }
}

impl BitAnd for Characteristics {
    type Output = Characteristics;

    fn bitand(self, rhs: Characteristics) -> Characteristics {
        Characteristics(self.0 & rhs.0)
    }
}

impl Not for Characteristics {
    type Output = Characteristics;

    fn not(self) -> Characteristics {
        Characteristics(!self.0 & Characteristics::ALL.0)
    }
}

impl fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Characteristics::SIZED, "SIZED"),
            (Characteristics::ORDERED, "ORDERED"),
            (Characteristics::SORTED, "SORTED"),
            (Characteristics::DISTINCT, "DISTINCT"),
            (Characteristics::IMMUTABLE, "IMMUTABLE"),
        ];
        let mut set = f.debug_set();
        for (flag, name) in names {
            if self.contains(flag) {
                set.entry(&name);
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contains_no_flags() {
        let characteristics = Characteristics::empty();
        assert!(characteristics.is_empty());
        assert!(!characteristics.contains(Characteristics::SIZED));
    }

    #[test]
    fn union_sets_both_flags() {
        let characteristics = Characteristics::SIZED | Characteristics::ORDERED;
        assert!(characteristics.contains(Characteristics::SIZED));
        assert!(characteristics.contains(Characteristics::ORDERED));
        assert!(!characteristics.contains(Characteristics::SORTED));
    }

    #[test]
    fn intersection_keeps_common_flags() {
        let left = Characteristics::SIZED | Characteristics::ORDERED;
        let right = Characteristics::ORDERED | Characteristics::DISTINCT;
        assert_eq!(left & right, Characteristics::ORDERED);
    }

    #[test]
    fn negation_masks_a_flag() {
        let source = Characteristics::SIZED | Characteristics::SORTED;
        let masked = source & !Characteristics::SIZED;
        assert!(!masked.contains(Characteristics::SIZED));
        assert!(masked.contains(Characteristics::SORTED));
    }

    #[test]
    fn contains_requires_all_queried_flags() {
        let characteristics = Characteristics::SIZED | Characteristics::ORDERED;
        assert!(characteristics.contains(Characteristics::SIZED | Characteristics::ORDERED));
        assert!(!characteristics.contains(Characteristics::SIZED | Characteristics::SORTED));
    }

    #[test]
    fn debug_lists_set_flags() {
        let characteristics = Characteristics::SIZED | Characteristics::IMMUTABLE;
        let rendered = format!("{characteristics:?}");
        assert!(rendered.contains("SIZED"));
        assert!(rendered.contains("IMMUTABLE"));
        assert!(!rendered.contains("SORTED"));
    }
}
