//! Drivers that run a state machine over a pull sequence.

use std::collections::HashSet;
use std::collections::VecDeque;
use std::hash::Hash;

use super::machines::{
    checking_subset, last_matching_finder, tagging_until, terminating_for_each, windowing,
};
use super::state_machine::{Composed, StateMachine};
use super::tagged::TaggedValue;
use super::transition::Transition;
use crate::error::InvalidArgument;
use crate::sequence::{Characteristics, Indexed, PullSequence};

/// The output sequence of a machine driven over an input sequence.
///
/// Per consumed input element: if the current state is terminal, input
/// consumption stops and [`finish`](StateMachine::finish) is never invoked;
/// otherwise the transition runs and its outputs stream downstream. When the
/// input is exhausted in a non-terminal state, `finish` runs exactly once
/// and its outputs are the tail of this sequence.
pub struct Transduced<S, M: StateMachine> {
    input: S,
    machine: M,
    state: Option<M::State>,
    pending: VecDeque<M::Output>,
    finished: bool,
}

impl<S, M> PullSequence for Transduced<S, M>
where
    S: PullSequence<Item = M::Input>,
    M: StateMachine,
{
    type Item = M::Output;

    fn pull(&mut self) -> Option<M::Output> {
        loop {
            if let Some(output) = self.pending.pop_front() {
                return Some(output);
            }
            if self.finished {
                return None;
            }
            let Some(state) = self.state.take() else {
                self.finished = true;
                return None;
            };
            if self.machine.is_terminal(&state) {
                self.state = Some(state);
                self.finished = true;
                return None;
            }
            match self.input.pull() {
                Some(input) => {
                    let (new_state, outputs) = self.machine.apply(state, input).into_parts();
                    self.state = Some(new_state);
                    self.pending.extend(outputs);
                }
                None => {
                    self.finished = true;
                    let trailing = self.machine.finish(state);
                    self.pending.extend(trailing);
                }
            }
        }
    }

    fn estimated_size(&self) -> Option<usize> {
        self.input.estimated_size()
    }

    fn characteristics(&self) -> Characteristics {
        self.input.characteristics() & Characteristics::ORDERED
    }
}

/// Drive `machine` over `input`, producing the transformed output sequence.
///
/// # Example
///
/// ```rust
/// use pullseq::machine::{transform, Composed, Transition};
/// use pullseq::PullSequence;
///
/// // Running totals.
/// let totals: Vec<i32> = transform(
///     pullseq::of(vec![1, 2, 3]),
///     Composed::new(|| 0, |total: i32, x: i32| Transition::with(total + x, total + x)),
/// )
/// .into_iter()
/// .collect();
/// assert_eq!(totals, vec![1, 3, 6]);
/// ```
pub fn transform<S, M>(input: S, machine: M) -> Transduced<S, M>
where
    S: PullSequence<Item = M::Input>,
    M: StateMachine,
{
    let state = machine.initial_state();
    Transduced {
        input,
        machine,
        state: Some(state),
        pending: VecDeque::new(),
        finished: false,
    }
}

/// Drive `machine` over the whole of `input` and return only the final
/// state. Stops early at a terminal state; never invokes `finish`.
pub fn traverse<S, M>(mut input: S, machine: &mut M) -> M::State
where
    S: PullSequence<Item = M::Input>,
    M: StateMachine,
{
    let mut state = machine.initial_state();
    loop {
        if machine.is_terminal(&state) {
            return state;
        }
        match input.pull() {
            Some(item) => {
                let (new_state, _outputs) = machine.apply(state, item).into_parts();
                state = new_state;
            }
            None => return state,
        }
    }
}

/// Whether driving `machine` over `input` reaches a terminal state before
/// the input is exhausted.
pub fn terminates<S, M>(input: S, mut machine: M) -> bool
where
    S: PullSequence<Item = M::Input>,
    M: StateMachine,
{
    let final_state = traverse(input, &mut machine);
    machine.is_terminal(&final_state)
}

/// Reduce every full window of `size` consecutive elements.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let sums: Vec<i32> = pullseq::machine::window(pullseq::of(vec![1, 2, 3, 4]), 2, |w: &[i32]| {
///     w.iter().sum()
/// })
/// .unwrap()
/// .into_iter()
/// .collect();
/// assert_eq!(sums, vec![3, 5, 7]);
/// ```
pub fn window<S, R, F>(
    input: S,
    size: usize,
    reducer: F,
) -> Result<impl PullSequence<Item = R>, InvalidArgument>
where
    S: PullSequence,
    S::Item: Clone,
    F: FnMut(&[S::Item]) -> R,
{
    Ok(transform(input, windowing(size, reducer)?))
}

/// Pair every element with its zero-based position.
pub fn index<S>(input: S) -> impl PullSequence<Item = Indexed<S::Item>>
where
    S: PullSequence,
{
    transform(
        input,
        Composed::new(
            || 0u64,
            |position, item| Transition::with(position + 1, Indexed::new(position, item)),
        ),
    )
}

/// Tag every element with the state reached after consuming it.
pub fn tag<S, St>(
    input: S,
    initial: St,
    step: impl FnMut(St, S::Item) -> St + 'static,
) -> impl PullSequence<Item = TaggedValue<St, S::Item>>
where
    S: PullSequence,
    S::Item: Clone,
    St: Clone + 'static,
{
    tag_until(input, initial, step, |_| false)
}

/// Tag every element with the state reached after consuming it, stopping
/// once the state is terminal.
pub fn tag_until<S, St>(
    input: S,
    initial: St,
    step: impl FnMut(St, S::Item) -> St + 'static,
    is_terminal: impl Fn(&St) -> bool + 'static,
) -> impl PullSequence<Item = TaggedValue<St, S::Item>>
where
    S: PullSequence,
    S::Item: Clone,
    St: Clone + 'static,
{
    transform(
        input,
        tagging_until(move || initial.clone(), step, is_terminal),
    )
}

/// The last element of the leading run of matches: matching elements are
/// remembered, and the remembered one is returned at the first non-match or
/// at end-of-input. `None` when the very first element already fails.
pub fn find_last_matching<S, P>(input: S, condition: P) -> Option<S::Item>
where
    S: PullSequence,
    P: FnMut(&S::Item) -> bool,
{
    transform(input, last_matching_finder(condition)).pull()
}

/// Run `action` on every element until it returns `false`.
///
/// Returns `true` when the whole input was consumed without the action ever
/// declining.
pub fn for_each_while<S, A>(input: S, action: A) -> bool
where
    S: PullSequence,
    A: FnMut(S::Item) -> bool,
{
    let mut machine = terminating_for_each(action);
    traverse(input, &mut machine)
}

/// Whether every element of `subset` appears somewhere in `input`.
///
/// Terminates, and stops pulling, as soon as the last required element is
/// seen.
pub fn includes_items<S>(input: S, subset: HashSet<S::Item>) -> bool
where
    S: PullSequence,
    S::Item: Eq + Hash + Clone,
{
    terminates(input, checking_subset(subset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::FinderState;
    use crate::sequence::sources;
    use std::cell::Cell;

    /// Counts how many elements have been pulled from the underlying source.
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

    fn running_total() -> Composed<i32, i32, i32> {
        Composed::new(|| 0, |total, x| Transition::with(total + x, total + x))
    }

    #[test]
    fn transform_streams_transition_outputs() {
        let totals: Vec<i32> = transform(sources::of(vec![1, 2, 3]), running_total())
            .into_iter()
            .collect();
        assert_eq!(totals, vec![1, 3, 6]);
    }

    #[test]
    fn transform_appends_finish_outputs_at_exhaustion() {
        let machine = running_total().finish_with(|total| vec![-total]);
        let totals: Vec<i32> = transform(sources::of(vec![1, 2]), machine)
            .into_iter()
            .collect();
        assert_eq!(totals, vec![1, 3, -3]);
    }

    #[test]
    fn transform_skips_finish_when_the_machine_terminates() {
        let machine = running_total()
            .terminal_when(|total| *total >= 3)
            .finish_with(|_| vec![99]);
        let totals: Vec<i32> = transform(sources::of(vec![1, 2, 3, 4]), machine)
            .into_iter()
            .collect();
        assert_eq!(totals, vec![1, 3]);
    }

    #[test]
    fn a_terminal_state_stops_input_consumption() {
        let pulls = Cell::new(0);
        let input = Counted {
            source: sources::of(vec![1, 2, 3, 4, 5]),
            pulls: &pulls,
        };
        let machine = running_total().terminal_when(|total| *total >= 3);
        let _drained: Vec<i32> = transform(input, machine).into_iter().collect();
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn traverse_returns_the_final_state() {
        let mut machine = running_total();
        let state = traverse(sources::of(vec![1, 2, 3]), &mut machine);
        assert_eq!(state, 6);
    }

    #[test]
    fn traverse_is_repeatable_over_fresh_equal_inputs() {
        let mut machine = running_total();
        let first = traverse(sources::of(vec![1, 2, 3]), &mut machine);
        let second = traverse(sources::of(vec![1, 2, 3]), &mut machine);
        assert_eq!(first, second);
    }

    #[test]
    fn terminates_distinguishes_early_stop_from_exhaustion() {
        assert!(terminates(
            sources::of(vec![1, 2, 3]),
            running_total().terminal_when(|t| *t >= 3)
        ));
        assert!(!terminates(
            sources::of(vec![1, 2, 3]),
            running_total().terminal_when(|t| *t >= 100)
        ));
    }

    #[test]
    fn window_reduces_each_full_window() {
        let sums: Vec<i32> = window(sources::of(vec![1, 2, 3, 4]), 2, |w: &[i32]| w.iter().sum())
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(sums, vec![3, 5, 7]);
    }

    #[test]
    fn window_shorter_input_than_size_emits_nothing() {
        let sums: Vec<i32> = window(sources::of(vec![1, 2]), 5, |w: &[i32]| w.iter().sum())
            .unwrap()
            .into_iter()
            .collect();
        assert!(sums.is_empty());
    }

    #[test]
    fn index_counts_from_zero() {
        let indexed: Vec<Indexed<&str>> = index(sources::of(vec!["a", "b", "c"]))
            .into_iter()
            .collect();
        assert_eq!(
            indexed,
            vec![
                Indexed::new(0, "a"),
                Indexed::new(1, "b"),
                Indexed::new(2, "c"),
            ]
        );
    }

    #[test]
    fn tag_pairs_values_with_running_state() {
        let tagged: Vec<TaggedValue<u32, &str>> =
            tag(sources::of(vec!["a", "bb", "ccc"]), 0u32, |total, word| {
                total + word.len() as u32
            })
            .into_iter()
            .collect();
        assert_eq!(
            tagged,
            vec![
                TaggedValue::new(1, "a"),
                TaggedValue::new(3, "bb"),
                TaggedValue::new(6, "ccc"),
            ]
        );
    }

    #[test]
    fn tag_until_stops_at_the_terminal_state() {
        let tagged: Vec<TaggedValue<u32, u32>> = tag_until(
            sources::of(vec![1, 1, 1, 1]),
            0u32,
            |count, _| count + 1,
            |count| *count >= 2,
        )
        .into_iter()
        .collect();
        assert_eq!(tagged.len(), 2);
    }

    #[test]
    fn find_last_matching_returns_the_last_of_the_leading_run() {
        let found = find_last_matching(sources::of(vec![1, 3, 7, 12, 2]), |x| *x < 10);
        assert_eq!(found, Some(7));
    }

    #[test]
    fn find_last_matching_flushes_at_exhaustion_when_all_match() {
        let found = find_last_matching(sources::of(vec![1, 3, 7]), |x| *x < 10);
        assert_eq!(found, Some(7));
    }

    #[test]
    fn find_last_matching_with_no_leading_match_is_none() {
        let found = find_last_matching(sources::of(vec![50, 1]), |x| *x < 10);
        assert_eq!(found, None);
    }

    #[test]
    fn for_each_while_reports_whether_the_input_survived() {
        let seen = std::cell::RefCell::new(Vec::new());
        let survived = for_each_while(sources::of(vec![1, 2, 3]), |x| {
            seen.borrow_mut().push(x);
            x < 2
        });
        assert!(!survived);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn includes_items_finds_a_present_subset() {
        assert!(includes_items(
            sources::of(vec!["x", "y", "z", "y"]),
            HashSet::from(["x", "y"])
        ));
    }

    #[test]
    fn includes_items_rejects_a_missing_item() {
        assert!(!includes_items(
            sources::of(vec!["x", "z"]),
            HashSet::from(["x", "y"])
        ));
    }

    #[test]
    fn includes_items_stops_pulling_at_the_satisfying_point() {
        let pulls = Cell::new(0);
        let input = Counted {
            source: sources::of(vec!["x", "y", "z", "w"]),
            pulls: &pulls,
        };
        assert!(includes_items(input, HashSet::from(["x", "y"])));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn transduced_keeps_order_and_clears_other_characteristics() {
        let transduced = transform(sources::of(vec![1, 2]), running_total());
        assert_eq!(transduced.characteristics(), Characteristics::ORDERED);
    }

    #[test]
    fn finder_state_is_inspectable_via_traverse() {
        let mut machine = last_matching_finder(|x: &i32| *x < 10);
        let state = traverse(sources::of(vec![1, 2, 99]), &mut machine);
        assert_eq!(state, FinderState::Done);
    }
}
