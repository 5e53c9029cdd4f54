//! Property-based tests for the combinator and transducer laws.
//!
//! These tests use proptest to verify the algebraic properties of the
//! pipeline operations across many randomly generated inputs.

use proptest::prelude::*;
use pullseq::machine::{self, Composed, Transition};
use pullseq::PullSequence;
use std::collections::HashSet;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..100i32, 0..40)
}

proptest! {
    #[test]
    fn zip_length_is_the_minimum_of_the_inputs(
        left in small_vec(),
        right in small_vec()
    ) {
        let expected = left.len().min(right.len());
        let zipped: Vec<(i32, i32)> =
            pullseq::zip(pullseq::of(left.clone()), pullseq::of(right.clone()), |l, r| (l, r))
                .into_iter()
                .collect();
        prop_assert_eq!(zipped.len(), expected);
        for (i, (l, r)) in zipped.iter().enumerate() {
            prop_assert_eq!(*l, left[i]);
            prop_assert_eq!(*r, right[i]);
        }
    }

    #[test]
    fn sliding_windows_count_and_overlap(values in prop::collection::vec(-100..100i32, 3..30)) {
        let n = 3;
        let windows: Vec<Vec<i32>> = pullseq::windowed(pullseq::of(values.clone()), n)
            .unwrap()
            .into_iter()
            .collect();
        prop_assert_eq!(windows.len(), values.len() - n + 1);
        for window in &windows {
            prop_assert_eq!(window.len(), n);
        }
        for pair in windows.windows(2) {
            // Consecutive windows agree on all but their first/last element.
            prop_assert_eq!(&pair[0][1..], &pair[1][..n - 1]);
        }
    }

    #[test]
    fn aggregate_chunks_concatenate_to_the_source(
        values in small_vec(),
        size in 1..8usize
    ) {
        let chunks: Vec<Vec<i32>> = pullseq::aggregate(pullseq::of(values.clone()), size)
            .unwrap()
            .into_iter()
            .collect();
        for chunk in chunks.iter().rev().skip(1) {
            prop_assert_eq!(chunk.len(), size);
        }
        if let Some(last) = chunks.last() {
            prop_assert!(last.len() <= size);
            prop_assert!(!last.is_empty());
        }
        let rebuilt: Vec<i32> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn group_runs_concatenate_to_the_source(values in small_vec()) {
        let runs: Vec<Vec<i32>> = pullseq::group_runs(pullseq::of(values.clone()))
            .into_iter()
            .collect();
        for run in &runs {
            prop_assert!(!run.is_empty());
            prop_assert!(run.iter().all(|x| *x == run[0]));
        }
        for pair in runs.windows(2) {
            // A run boundary is a genuine mismatch.
            prop_assert_ne!(pair[0][0], pair[1][0]);
        }
        let rebuilt: Vec<i32> = runs.into_iter().flatten().collect();
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn take_and_skip_partition_the_source(values in small_vec()) {
        let taken: Vec<i32> = pullseq::take_while(pullseq::of(values.clone()), |x| *x < 0)
            .into_iter()
            .collect();
        let skipped: Vec<i32> = pullseq::skip_while(pullseq::of(values.clone()), |x| *x < 0)
            .into_iter()
            .collect();
        let rebuilt: Vec<i32> = taken.into_iter().chain(skipped).collect();
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn take_while_inclusive_extends_by_exactly_the_boundary(values in small_vec()) {
        let exclusive: Vec<i32> = pullseq::take_while(pullseq::of(values.clone()), |x| *x < 0)
            .into_iter()
            .collect();
        let inclusive: Vec<i32> =
            pullseq::take_while_inclusive(pullseq::of(values.clone()), |x| *x < 0)
                .into_iter()
                .collect();
        if exclusive.len() < values.len() {
            prop_assert_eq!(inclusive.len(), exclusive.len() + 1);
            prop_assert!(inclusive[exclusive.len()] >= 0);
        } else {
            prop_assert_eq!(inclusive, exclusive);
        }
    }

    #[test]
    fn zip_with_index_indexes_sequentially(values in small_vec()) {
        let indexed: Vec<_> = pullseq::zip_with_index(pullseq::of(values.clone()))
            .into_iter()
            .collect();
        prop_assert_eq!(indexed.len(), values.len());
        for (expected_index, indexed_value) in indexed.iter().enumerate() {
            prop_assert_eq!(indexed_value.index, expected_index as u64);
            prop_assert_eq!(indexed_value.value, values[expected_index]);
        }
    }

    #[test]
    fn merge_to_list_row_lengths_shrink_with_exhaustion(
        left in small_vec(),
        right in small_vec()
    ) {
        let rows: Vec<Vec<i32>> = pullseq::merge_to_list(vec![
            pullseq::of(left.clone()),
            pullseq::of(right.clone()),
        ])
        .into_iter()
        .collect();
        prop_assert_eq!(rows.len(), left.len().max(right.len()));
        let total: usize = rows.iter().map(Vec::len).sum();
        prop_assert_eq!(total, left.len() + right.len());
    }

    #[test]
    fn traverse_is_idempotent_over_fresh_equal_inputs(values in small_vec()) {
        let mut machine: Composed<i64, i32, i64> = Composed::new(
            || 0i64,
            |total: i64, x: i32| Transition::to(total + i64::from(x)),
        );
        let first = machine::traverse(pullseq::of(values.clone()), &mut machine);
        let second = machine::traverse(pullseq::of(values.clone()), &mut machine);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn includes_items_agrees_with_set_containment(
        values in prop::collection::vec(0..10i32, 0..30),
        subset in prop::collection::hash_set(0..10i32, 0..4)
    ) {
        let expected = subset.iter().all(|needle| values.contains(needle));
        let actual = machine::includes_items(pullseq::of(values.clone()), subset.clone());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn window_machine_emits_one_reduction_per_full_window(
        values in prop::collection::vec(-100..100i32, 0..30),
        size in 1..6usize
    ) {
        let sums: Vec<i32> = machine::window(pullseq::of(values.clone()), size, |w: &[i32]| {
            w.iter().sum()
        })
        .unwrap()
        .into_iter()
        .collect();
        let expected = values.len().saturating_sub(size - 1);
        prop_assert_eq!(sums.len(), expected);
        for (i, sum) in sums.iter().enumerate() {
            let direct: i32 = values[i..i + size].iter().sum();
            prop_assert_eq!(*sum, direct);
        }
    }
}

#[test]
fn includes_items_never_pulls_past_the_satisfying_point() {
    use std::cell::Cell;

    struct Counted<'a, S> {
        source: S,
        pulls: &'a Cell<usize>,
    }

    impl<S: PullSequence> PullSequence for Counted<'_, S> {
        type Item = S::Item;

        fn pull(&mut self) -> Option<S::Item> {
            let item = self.source.pull();
            if item.is_some() {
                self.pulls.set(self.pulls.get() + 1);
            }
            item
        }
    }

    let pulls = Cell::new(0);
    let input = Counted {
        source: pullseq::of(vec!["x", "y", "z", "y"]),
        pulls: &pulls,
    };
    assert!(machine::includes_items(input, HashSet::from(["x", "y"])));
    assert_eq!(pulls.get(), 2);
}
