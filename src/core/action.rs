//! Side-effecting callbacks run when a transition applies.

use super::state::{Event, State};
use std::fmt;

/// Callback invoked with the pre-transition state and the triggering event.
///
/// Actions run after the guard has passed and before the machine's current
/// state changes, so `state` is always the state being left.
pub struct Action<S: State, E: Event> {
    callback: Box<dyn Fn(&S, &E) + Send + Sync>,
}

impl<S: State, E: Event> Action<S, E> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        Action {
            callback: Box::new(callback),
        }
    }

    pub fn run(&self, state: &S, event: &E) {
        (self.callback)(state, event)
    }
}

impl<S: State, E: Event> fmt::Debug for Action<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}
