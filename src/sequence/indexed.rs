//! A value paired with its position in a sequence.

use serde::{Deserialize, Serialize};

/// A value combined with the zero-based index at which it was produced.
///
/// Produced by [`zip_with_index`](crate::zip_with_index) and the
/// [`index`](crate::machine::index) driver.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Indexed<T> {
    /// Position of the value in its source sequence.
    pub index: u64,
    /// The value itself.
    pub value: T,
}

impl<T> Indexed<T> {
    /// Combine an index and a value.
    pub fn new(index: u64, value: T) -> Indexed<T> {
        Indexed { index, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_covers_both_fields() {
        assert_eq!(Indexed::new(0, "a"), Indexed::new(0, "a"));
        assert_ne!(Indexed::new(0, "a"), Indexed::new(1, "a"));
        assert_ne!(Indexed::new(0, "a"), Indexed::new(0, "b"));
    }

    #[test]
    fn serializes_round_trip() {
        let indexed = Indexed::new(3, "x".to_string());
        let json = serde_json::to_string(&indexed).unwrap();
        let back: Indexed<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(indexed, back);
    }
}
