//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions over the current state and the presented
//! event. The engine may evaluate a guard speculatively (see
//! `StateMachine::can_transition`), so guards should not carry side effects.

use super::state::{Event, State};
use std::fmt;

/// Predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{Guard, State};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum FormState {
///     Editing,
///     Submitted,
/// }
///
/// impl State for FormState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Editing => "Editing",
///             Self::Submitted => "Submitted",
///         }
///     }
/// }
///
/// let only_submit = Guard::new(|_: &FormState, event: &&str| *event == "submit");
///
/// assert!(only_submit.check(&FormState::Editing, &"submit"));
/// assert!(!only_submit.check(&FormState::Editing, &"cancel"));
/// ```
pub struct Guard<S: State, E: Event> {
    predicate: Box<dyn Fn(&S, &E) -> bool + Send + Sync>,
}

impl<S: State, E: Event> Guard<S, E> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate must be thread-safe (Send + Sync). It may close over
    /// caller-owned state; the engine takes no responsibility for that state.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this state and event.
    pub fn check(&self, state: &S, event: &E) -> bool {
        (self.predicate)(state, event)
    }
}

impl<S: State, E: Event> fmt::Debug for Guard<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
