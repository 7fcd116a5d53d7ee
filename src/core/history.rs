//! State transition history tracking.
//!
//! The machine appends one record per applied transition. Rejected events
//! never reach the history.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{State, StateTransition};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: TaskState::Pending,
///     event: "start",
///     to: TaskState::Running,
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert!(!transition.is_self_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, E: Serialize",
    deserialize = "S: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The event that triggered the transition
    pub event: E,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// 1-based position among all transitions the machine has applied
    pub sequence: u64,
}

impl<S: State, E: Event> StateTransition<S, E> {
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of applied transitions.
///
/// With a retention limit set, the oldest records are dropped once the
/// limit is exceeded; `sequence` numbers keep counting regardless.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{State, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum WorkState {
///     Start,
///     Middle,
///     End,
/// }
///
/// impl State for WorkState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Middle => "Middle",
///             Self::End => "End",
///         }
///     }
/// }
///
/// let mut history = StateHistory::new();
///
/// history.record(StateTransition {
///     from: WorkState::Start,
///     event: "advance",
///     to: WorkState::Middle,
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
/// history.record(StateTransition {
///     from: WorkState::Middle,
///     event: "advance",
///     to: WorkState::End,
///     timestamp: Utc::now(),
///     sequence: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&WorkState::Start, &WorkState::Middle, &WorkState::End]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, E: Serialize",
    deserialize = "S: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
    limit: Option<usize>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that retains at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Append a transition, evicting the oldest records past the limit.
    pub fn record(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            if self.transitions.len() > limit {
                let excess = self.transitions.len() - limit;
                self.transitions.drain(..excess);
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record, then the
    /// `to` state of each record. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
