//! The result of one state-machine step.

/// A transition to a new state together with zero or more outputs.
///
/// Created fresh by every call to a machine's transition function and
/// consumed immediately by the driver.
///
/// # Example
///
/// ```rust
/// use pullseq::machine::Transition;
///
/// let transition: Transition<u32, &str> = Transition::with(1, "started");
/// let (state, outputs) = transition.into_parts();
/// assert_eq!(state, 1);
/// assert_eq!(outputs, vec!["started"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S, O> {
    new_state: S,
    outputs: Vec<O>,
}

impl<S, O> Transition<S, O> {
    /// Transition to `new_state` with no outputs.
    pub fn to(new_state: S) -> Transition<S, O> {
        Transition {
            new_state,
            outputs: Vec::new(),
        }
    }

    /// Transition to `new_state`, emitting a single output.
    pub fn with(new_state: S, output: O) -> Transition<S, O> {
        Transition {
            new_state,
            outputs: vec![output],
        }
    }

    /// Transition to `new_state`, emitting every output in order.
    pub fn with_outputs(new_state: S, outputs: impl IntoIterator<Item = O>) -> Transition<S, O> {
        Transition {
            new_state,
            outputs: outputs.into_iter().collect(),
        }
    }

    /// The state transitioned to.
    pub fn new_state(&self) -> &S {
        &self.new_state
    }

    /// The outputs of this step.
    pub fn outputs(&self) -> &[O] {
        &self.outputs
    }

    /// Split into the new state and the outputs.
    pub fn into_parts(self) -> (S, Vec<O>) {
        (self.new_state, self.outputs)
    }
}
