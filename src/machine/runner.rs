//! Manual step-by-step driving of a state machine.

use super::state_machine::StateMachine;

/// Feeds inputs to a machine one at a time, holding the current state and a
/// finished flag.
///
/// A runner that has finished, explicitly via [`finish`](Self::finish) or
/// because its state turned terminal, ignores all further input and
/// produces no more outputs.
///
/// # Example
///
/// ```rust
/// use pullseq::machine::{Composed, StateMachine, Transition};
///
/// let mut runner = Composed::new(|| 0u64, |count, item: &str| {
///     Transition::with(count + 1, format!("{count}:{item}"))
/// })
/// .runner();
///
/// assert_eq!(runner.accept("a"), vec!["0:a".to_string()]);
/// assert_eq!(runner.accept("b"), vec!["1:b".to_string()]);
/// assert_eq!(runner.state(), Some(&2));
/// ```
pub struct StateMachineRunner<M: StateMachine> {
    machine: M,
    state: Option<M::State>,
    finished: bool,
}

impl<M: StateMachine> StateMachineRunner<M> {
    /// Start a runner from the machine's own initial state.
    pub fn new(machine: M) -> StateMachineRunner<M> {
        let state = machine.initial_state();
        StateMachineRunner {
            machine,
            state: Some(state),
            finished: false,
        }
    }

    /// Start a runner from an explicit state.
    pub fn with_state(machine: M, state: M::State) -> StateMachineRunner<M> {
        StateMachineRunner {
            machine,
            state: Some(state),
            finished: false,
        }
    }

    /// Feed one input, returning the outputs of that step.
    pub fn accept(&mut self, input: M::Input) -> Vec<M::Output> {
        if self.finished {
            return Vec::new();
        }
        let Some(state) = self.state.take() else {
            return Vec::new();
        };
        if self.machine.is_terminal(&state) {
            self.state = Some(state);
            self.finished = true;
            return Vec::new();
        }
        let (new_state, outputs) = self.machine.apply(state, input).into_parts();
        self.state = Some(new_state);
        outputs
    }

    /// Feed several inputs, returning all outputs in order.
    pub fn accept_all(&mut self, inputs: impl IntoIterator<Item = M::Input>) -> Vec<M::Output> {
        let mut outputs = Vec::new();
        for input in inputs {
            outputs.extend(self.accept(input));
        }
        outputs
    }

    /// Feed several inputs, then finish, returning all outputs in order.
    pub fn accept_and_finish(
        &mut self,
        inputs: impl IntoIterator<Item = M::Input>,
    ) -> Vec<M::Output> {
        let mut outputs = self.accept_all(inputs);
        outputs.extend(self.finish());
        outputs
    }

    /// Release the machine's trailing outputs and mark the runner finished.
    ///
    /// Idempotent: a second call returns nothing.
    pub fn finish(&mut self) -> Vec<M::Output> {
        if self.finished {
            return Vec::new();
        }
        self.finished = true;
        match self.state.take() {
            Some(state) => self.machine.finish(state),
            None => Vec::new(),
        }
    }

    /// The current state, when the runner still holds one.
    pub fn state(&self) -> Option<&M::State> {
        self.state.as_ref()
    }

    /// Whether the runner has stopped accepting input.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
