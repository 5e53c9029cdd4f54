//! Ready-made state machines for common stateful traversals.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use super::state_machine::StateMachine;
use super::tagged::TaggedValue;
use super::transition::Transition;
use super::window::Window;
use crate::error::InvalidArgument;

/// Emits one reduced value per full [`Window`] as items stream through.
pub struct WindowingStateMachine<T, F> {
    size: usize,
    reducer: F,
    _item: PhantomData<fn() -> T>,
}

/// A windowing machine of the given size.
///
/// Fails with [`InvalidArgument::WindowSize`] when `size` is zero.
pub fn windowing<T, R, F>(size: usize, reducer: F) -> Result<WindowingStateMachine<T, F>, InvalidArgument>
where
    T: Clone,
    F: FnMut(&[T]) -> R,
{
    if size == 0 {
        return Err(InvalidArgument::WindowSize(size));
    }
    Ok(WindowingStateMachine {
        size,
        reducer,
        _item: PhantomData,
    })
}

impl<T, R, F> StateMachine for WindowingStateMachine<T, F>
where
    T: Clone,
    F: FnMut(&[T]) -> R,
{
    type State = Window<T>;
    type Input = T;
    type Output = R;

    fn initial_state(&self) -> Window<T> {
        Window::initialise(self.size)
    }

    fn apply(&mut self, window: Window<T>, item: T) -> Transition<Window<T>, R> {
        let new_window = window.add(item);
        let outputs = new_window.reduce(&mut self.reducer);
        Transition::with_outputs(new_window, outputs)
    }
}

/// Pairs every input with the state reached after consuming it.
pub struct TaggingStateMachine<S, T> {
    initial: Box<dyn Fn() -> S>,
    step: Box<dyn FnMut(S, T) -> S>,
    terminal: Box<dyn Fn(&S) -> bool>,
}

/// A tagging machine that never terminates early.
pub fn tagging<S, T>(
    initial: impl Fn() -> S + 'static,
    step: impl FnMut(S, T) -> S + 'static,
) -> TaggingStateMachine<S, T> {
    tagging_until(initial, step, |_| false)
}

/// A tagging machine that stops once `is_terminal` holds on the state.
pub fn tagging_until<S, T>(
    initial: impl Fn() -> S + 'static,
    step: impl FnMut(S, T) -> S + 'static,
    is_terminal: impl Fn(&S) -> bool + 'static,
) -> TaggingStateMachine<S, T> {
    TaggingStateMachine {
        initial: Box::new(initial),
        step: Box::new(step),
        terminal: Box::new(is_terminal),
    }
}

impl<S: Clone, T: Clone> StateMachine for TaggingStateMachine<S, T> {
    type State = S;
    type Input = T;
    type Output = TaggedValue<S, T>;

    fn initial_state(&self) -> S {
        (self.initial)()
    }

    fn apply(&mut self, state: S, input: T) -> Transition<S, TaggedValue<S, T>> {
        let tagged_input = input.clone();
        let new_state = (self.step)(state, input);
        let tagged = TaggedValue::new(new_state.clone(), tagged_input);
        Transition::with(new_state, tagged)
    }

    fn is_terminal(&self, state: &S) -> bool {
        (self.terminal)(state)
    }
}

/// Tracks the required items not yet seen; terminal once none remain.
///
/// Inputs pass through as outputs, so the machine can sit in the middle of
/// a pipeline; membership is answered by whether traversal terminates.
pub struct SubsetCheckingStateMachine<T> {
    subset: HashSet<T>,
}

/// A machine checking that every element of `subset` eventually appears.
pub fn checking_subset<T: Eq + Hash + Clone>(subset: HashSet<T>) -> SubsetCheckingStateMachine<T> {
    SubsetCheckingStateMachine { subset }
}

impl<T: Eq + Hash + Clone> StateMachine for SubsetCheckingStateMachine<T> {
    type State = HashSet<T>;
    type Input = T;
    type Output = T;

    fn initial_state(&self) -> HashSet<T> {
        self.subset.clone()
    }

    fn apply(&mut self, mut state: HashSet<T>, input: T) -> Transition<HashSet<T>, T> {
        state.remove(&input);
        Transition::with(state, input)
    }

    fn is_terminal(&self, state: &HashSet<T>) -> bool {
        state.is_empty()
    }
}

/// State of a [`LastMatchingFinderStateMachine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinderState<T> {
    /// Still consuming matches; holds the latest one seen.
    Scanning(Option<T>),
    /// A non-matching input ended the scan.
    Done,
}

/// Remembers the latest matching input while inputs keep matching; the
/// first non-matching input releases the remembered match (if any) and
/// terminates. If every input matches, the remembered match is released by
/// `finish` at end-of-input.
pub struct LastMatchingFinderStateMachine<T, P> {
    condition: P,
    _item: PhantomData<fn() -> T>,
}

/// A machine finding the last matching element of the leading run of
/// matches.
pub fn last_matching_finder<T, P>(condition: P) -> LastMatchingFinderStateMachine<T, P>
where
    P: FnMut(&T) -> bool,
{
    LastMatchingFinderStateMachine {
        condition,
        _item: PhantomData,
    }
}

impl<T, P> StateMachine for LastMatchingFinderStateMachine<T, P>
where
    P: FnMut(&T) -> bool,
{
    type State = FinderState<T>;
    type Input = T;
    type Output = T;

    fn initial_state(&self) -> FinderState<T> {
        FinderState::Scanning(None)
    }

    fn apply(&mut self, state: FinderState<T>, input: T) -> Transition<FinderState<T>, T> {
        match state {
            FinderState::Scanning(remembered) => {
                if (self.condition)(&input) {
                    Transition::to(FinderState::Scanning(Some(input)))
                } else {
                    Transition::with_outputs(FinderState::Done, remembered)
                }
            }
            FinderState::Done => Transition::to(FinderState::Done),
        }
    }

    fn is_terminal(&self, state: &FinderState<T>) -> bool {
        matches!(state, FinderState::Done)
    }

    fn finish(&mut self, final_state: FinderState<T>) -> Vec<T> {
        match final_state {
            FinderState::Scanning(remembered) => remembered.into_iter().collect(),
            FinderState::Done => Vec::new(),
        }
    }
}

/// Runs an action per input until the action asks to stop.
///
/// The state is a keep-going flag; the machine is terminal once the action
/// has returned `false`.
pub struct TerminatingActionStateMachine<T, A> {
    action: A,
    _item: PhantomData<fn() -> T>,
}

/// A machine invoking `action` on every input until it returns `false`.
pub fn terminating_for_each<T, A>(action: A) -> TerminatingActionStateMachine<T, A>
where
    A: FnMut(T) -> bool,
{
    TerminatingActionStateMachine {
        action,
        _item: PhantomData,
    }
}

impl<T, A> StateMachine for TerminatingActionStateMachine<T, A>
where
    A: FnMut(T) -> bool,
{
    type State = bool;
    type Input = T;
    type Output = ();

    fn initial_state(&self) -> bool {
        true
    }

    fn apply(&mut self, keep_going: bool, input: T) -> Transition<bool, ()> {
        Transition::to(keep_going && (self.action)(input))
    }

    fn is_terminal(&self, state: &bool) -> bool {
        !state
    }
}
