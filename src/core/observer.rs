//! State-change observers.

use super::state::State;
use std::fmt;

/// Callback notified with `(previous, current)` after a transition applies.
///
/// Observers run synchronously inside `send`, after the current state has
/// already changed. They are never invoked for rejected events.
pub struct StateObserver<S: State> {
    callback: Box<dyn Fn(&S, &S) + Send + Sync>,
}

impl<S: State> StateObserver<S> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&S, &S) + Send + Sync + 'static,
    {
        StateObserver {
            callback: Box::new(callback),
        }
    }

    pub fn notify(&self, previous: &S, current: &S) {
        (self.callback)(previous, current)
    }
}

impl<S: State> fmt::Debug for StateObserver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateObserver(..)")
    }
}
