//! The state-machine strategy trait and its closure-composed form.

use super::runner::StateMachineRunner;
use super::transition::Transition;

/// A strategy that consumes one input at a time, transitioning between
/// states and emitting zero or more outputs per step.
///
/// A machine holds no traversal state of its own; the current state lives
/// in the driver or runner, so one machine value can be run over any number
/// of inputs. `apply` and `finish` take `&mut self` only so that composed
/// machines may hold `FnMut` closures.
///
/// The driver contract (see [`transform`](crate::machine::transform)):
/// a terminal state stops input consumption without calling
/// [`finish`](StateMachine::finish); an exhausted source calls `finish`
/// exactly once on the final non-terminal state.
pub trait StateMachine {
    /// The machine's state values.
    type State;
    /// The elements consumed.
    type Input;
    /// The elements emitted.
    type Output;

    /// A fresh initial state for a new traversal.
    fn initial_state(&self) -> Self::State;

    /// Apply one input to the current state.
    fn apply(&mut self, state: Self::State, input: Self::Input)
        -> Transition<Self::State, Self::Output>;

    /// Whether traversal should stop in this state.
    fn is_terminal(&self, _state: &Self::State) -> bool {
        false
    }

    /// Trailing outputs released when the input is exhausted in a
    /// non-terminal state.
    fn finish(&mut self, _final_state: Self::State) -> Vec<Self::Output> {
        Vec::new()
    }

    /// A [`StateMachineRunner`] for manual step-by-step driving.
    fn runner(self) -> StateMachineRunner<Self>
    where
        Self: Sized,
    {
        StateMachineRunner::new(self)
    }
}

type InitialFn<S> = Box<dyn Fn() -> S>;
type TransitionFn<S, I, O> = Box<dyn FnMut(S, I) -> Transition<S, O>>;
type TerminalFn<S> = Box<dyn Fn(&S) -> bool>;
type FinishFn<S, O> = Box<dyn FnMut(S) -> Vec<O>>;

/// A state machine assembled from closures: an initial-state factory, a
/// transition function, and optionally a terminal predicate and a finisher.
///
/// # Example
///
/// ```rust
/// use pullseq::machine::{Composed, StateMachine, Transition};
///
/// // Sums inputs, stopping once the total reaches 10.
/// let mut machine = Composed::new(|| 0, |total: i32, input: i32| Transition::with(total + input, total + input))
///     .terminal_when(|total| *total >= 10);
///
/// let state = machine.initial_state();
/// assert!(!machine.is_terminal(&state));
/// let (state, outputs) = machine.apply(state, 4).into_parts();
/// assert_eq!(outputs, vec![4]);
/// assert_eq!(state, 4);
/// ```
pub struct Composed<S, I, O> {
    initial: InitialFn<S>,
    transition: TransitionFn<S, I, O>,
    is_terminal: TerminalFn<S>,
    finisher: FinishFn<S, O>,
}

impl<S, I, O> Composed<S, I, O> {
    /// A machine that never terminates early and releases no final outputs.
    pub fn new(
        initial: impl Fn() -> S + 'static,
        transition: impl FnMut(S, I) -> Transition<S, O> + 'static,
    ) -> Composed<S, I, O> {
        Composed {
            initial: Box::new(initial),
            transition: Box::new(transition),
            is_terminal: Box::new(|_| false),
            finisher: Box::new(|_| Vec::new()),
        }
    }

    /// Stop consuming input once `is_terminal` holds on the state.
    pub fn terminal_when(mut self, is_terminal: impl Fn(&S) -> bool + 'static) -> Composed<S, I, O> {
        self.is_terminal = Box::new(is_terminal);
        self
    }

    /// Release final outputs from the end-of-input state with `finisher`.
    pub fn finish_with(mut self, finisher: impl FnMut(S) -> Vec<O> + 'static) -> Composed<S, I, O> {
        self.finisher = Box::new(finisher);
        self
    }
}

impl<S, I, O> StateMachine for Composed<S, I, O> {
    type State = S;
    type Input = I;
    type Output = O;

    fn initial_state(&self) -> S {
        (self.initial)()
    }

    fn apply(&mut self, state: S, input: I) -> Transition<S, O> {
        (self.transition)(state, input)
    }

    fn is_terminal(&self, state: &S) -> bool {
        (self.is_terminal)(state)
    }

    fn finish(&mut self, final_state: S) -> Vec<O> {
        (self.finisher)(final_state)
    }
}
