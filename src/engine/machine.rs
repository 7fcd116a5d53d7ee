//! State machine that dispatches events through the compiled table.

use crate::config::{ConfigError, Configuration, HistoryMode};
use crate::core::{Enumerable, Event, State, StateHistory, StateObserver, StateTransition};
use crate::engine::table::TransitionTable;
use chrono::Utc;
use std::collections::HashSet;
use stillwater::validation::Validation;
use tracing::{debug, debug_span, warn};
use uuid::Uuid;

/// Result of presenting one event to the machine.
///
/// Callers that only care about the side effects may ignore it; rejected
/// events are ordinary control flow, never errors.
#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome<S: State> {
    /// The transition ran and the machine moved from `from` to `to`
    Applied { from: S, to: S },

    /// No transition is registered for the current state and event
    NoTransition,

    /// A transition exists but its guard returned false
    GuardRejected,
}

impl<S: State> SendOutcome<S> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Flat, single-active-state machine.
///
/// The transition set is compiled once in [`StateMachine::new`] and frozen.
/// The machine does no internal synchronization: move it onto one owning
/// thread or task and forward events to it.
///
/// Re-entrant `send` is disallowed. A guard, action or observer must not
/// call back into the machine that is dispatching it. `&mut self` rules out
/// the direct case, but a callback that captures the machine behind a shared
/// `Mutex` will deadlock on `lock()` during dispatch, and nothing reports it.
pub struct StateMachine<S: State, E: Event> {
    id: Uuid,
    current: S,
    previous: Option<S>,
    table: TransitionTable<S, E>,
    on_state_change: Option<StateObserver<S>>,
    observers: Vec<StateObserver<S>>,
    history: StateHistory<S, E>,
    recording: bool,
    applied: u64,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Build a machine, resolving duplicate `(from, event)` registrations by
    /// keeping the last one. Each override is logged at WARN.
    pub fn new(config: Configuration<S, E>) -> Self {
        let Configuration {
            initial,
            transitions,
            on_state_change,
            history: history_mode,
        } = config;

        let id = Uuid::new_v4();
        let (table, overridden) = TransitionTable::compile(transitions);
        for (from, event) in &overridden {
            warn!(
                machine = %id,
                from = from.name(),
                event = ?event,
                "duplicate transition overridden, last registration wins"
            );
        }
        debug!(
            machine = %id,
            initial = initial.name(),
            transitions = table.len(),
            "state machine compiled"
        );

        let history = match history_mode {
            HistoryMode::Bounded(limit) => StateHistory::with_limit(limit),
            HistoryMode::Unbounded | HistoryMode::Disabled => StateHistory::new(),
        };

        Self {
            id,
            current: initial,
            previous: None,
            table,
            on_state_change,
            observers: Vec::new(),
            history,
            recording: history_mode.is_enabled(),
            applied: 0,
        }
    }

    /// Build a machine only if the configuration validates cleanly.
    ///
    /// Every problem is reported at once in [`ConfigError::Invalid`].
    pub fn try_new(config: Configuration<S, E>) -> Result<Self, ConfigError> {
        match config.validate() {
            Validation::Success(_) => Ok(Self::new(config)),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Register an additional state-change observer.
    ///
    /// Observers run after the configuration's observer, in registration
    /// order. This does not change the transition set.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&S, &S) + Send + Sync + 'static,
    {
        self.observers.push(StateObserver::new(observer));
    }

    /// Present an event to the machine.
    ///
    /// Side effects happen in a fixed order: guard, action (sees the old
    /// state), state change, observers (see `(previous, current)`). When no
    /// transition matches or the guard rejects, nothing else runs.
    pub fn send(&mut self, event: E) -> SendOutcome<S> {
        let span = debug_span!(
            "send",
            machine = %self.id,
            state = self.current.name(),
            event = ?event
        );
        let _entered = span.enter();

        let Some(transition) = self.table.lookup(&self.current, &event) else {
            debug!("no transition registered");
            return SendOutcome::NoTransition;
        };

        if !transition.guard_allows(&self.current, &event) {
            debug!(to = transition.to.name(), "guard rejected transition");
            return SendOutcome::GuardRejected;
        }

        if let Some(action) = &transition.action {
            action.run(&self.current, &event);
        }

        let to = transition.to.clone();
        let from = std::mem::replace(&mut self.current, to);
        self.previous = Some(from.clone());
        self.applied += 1;
        if self.recording {
            self.history.record(StateTransition {
                from: from.clone(),
                event,
                to: self.current.clone(),
                timestamp: Utc::now(),
                sequence: self.applied,
            });
        }

        debug!(from = from.name(), to = self.current.name(), "transition applied");

        self.notify(&from, &self.current);

        SendOutcome::Applied {
            from,
            to: self.current.clone(),
        }
    }

    fn notify(&self, previous: &S, current: &S) {
        if let Some(observer) = &self.on_state_change {
            observer.notify(previous, current);
        }
        for observer in &self.observers {
            observer.notify(previous, current);
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// State before the most recent applied transition.
    pub fn previous_state(&self) -> Option<&S> {
        self.previous.as_ref()
    }

    /// True iff a transition exists for the current state and `event` and
    /// its guard (if any) passes right now.
    ///
    /// This evaluates the guard.
    pub fn can_transition(&self, event: &E) -> bool {
        self.table
            .lookup(&self.current, event)
            .is_some_and(|t| t.guard_allows(&self.current, event))
    }

    /// Events registered for the current state, including ones whose guard
    /// would currently reject. Use [`StateMachine::can_transition`] for the
    /// guard-filtered answer.
    pub fn available_transitions(&self) -> HashSet<E> {
        self.table.events_from(&self.current).cloned().collect()
    }

    /// True when the current state has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        !self.table.has_outgoing(&self.current)
    }

    /// Applied transitions, empty unless the configuration enabled history.
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Number of transitions applied since construction.
    pub fn transition_count(&self) -> u64 {
        self.applied
    }

    /// Identifier attached to this machine's log events.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl<S: Enumerable, E: Event> StateMachine<S, E> {
    /// Position of the current state in [`Enumerable::all`], normalized to
    /// `[0, 1]` as `index / max(1, count - 1)`.
    ///
    /// This is positional, not a measure of remaining path length. A single
    /// state enumeration reports `0.0`.
    pub fn progress(&self) -> f64 {
        let total = S::all().len();
        match self.current.index() {
            Some(index) => index as f64 / total.saturating_sub(1).max(1) as f64,
            None => {
                warn!(
                    machine = %self.id,
                    state = self.current.name(),
                    "current state missing from enumeration, reporting zero progress"
                );
                0.0
            }
        }
    }
}
