//! Machine configuration and validation.
//!
//! A [`Configuration`] bundles the initial state, the ordered transition
//! list and an optional state-change observer. It is consumed by value when
//! a machine is built and is never mutated afterwards.
//!
//! Validation uses Stillwater's `Validation` to report every problem in one
//! pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use statecraft::config::{ConfigError, Configuration};
//! use statecraft::engine::Transition;
//! use statecraft::state_enum;
//! use stillwater::validation::Validation;
//!
//! state_enum! {
//!     enum Fetch {
//!         Idle,
//!         Loading,
//!     }
//! }
//!
//! let config = Configuration::new(
//!     Fetch::Idle,
//!     vec![
//!         Transition::new(Fetch::Idle, "start", Fetch::Loading),
//!         Transition::new(Fetch::Idle, "start", Fetch::Idle),
//!     ],
//! );
//!
//! match config.validate() {
//!     Validation::Failure(errors) => {
//!         assert!(matches!(
//!             errors.iter().next(),
//!             Some(ConfigError::DuplicateTransition { count: 2, .. })
//!         ));
//!     }
//!     Validation::Success(_) => panic!("duplicates should be reported"),
//! }
//! ```

pub mod error;

pub use error::ConfigError;

use crate::core::{Event, State, StateObserver};
use crate::engine::Transition;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// How many applied transitions a machine keeps in its history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Record nothing
    #[default]
    Disabled,

    /// Keep every applied transition
    Unbounded,

    /// Keep only the most recent `n` applied transitions
    Bounded(usize),
}

impl HistoryMode {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Immutable bundle a state machine is built from.
///
/// History recording is off unless [`Configuration::with_history`] or
/// [`Configuration::with_history_limit`] is called.
#[derive(Debug)]
pub struct Configuration<S: State, E: Event> {
    pub(crate) initial: S,
    pub(crate) transitions: Vec<Transition<S, E>>,
    pub(crate) on_state_change: Option<StateObserver<S>>,
    pub(crate) history: HistoryMode,
}

impl<S: State, E: Event> Configuration<S, E> {
    pub fn new(initial: S, transitions: Vec<Transition<S, E>>) -> Self {
        Self {
            initial,
            transitions,
            on_state_change: None,
            history: HistoryMode::Disabled,
        }
    }

    /// Set the observer called with `(previous, current)` after every
    /// applied transition.
    pub fn on_state_change<F>(mut self, observer: F) -> Self
    where
        F: Fn(&S, &S) + Send + Sync + 'static,
    {
        self.on_state_change = Some(StateObserver::new(observer));
        self
    }

    /// Record every applied transition.
    pub fn with_history(mut self) -> Self {
        self.history = HistoryMode::Unbounded;
        self
    }

    /// Record applied transitions, retaining only the most recent `limit`.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = HistoryMode::Bounded(limit);
        self
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.transitions
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history
    }

    pub fn history_limit(&self) -> Option<usize> {
        match self.history {
            HistoryMode::Bounded(limit) => Some(limit),
            HistoryMode::Disabled | HistoryMode::Unbounded => None,
        }
    }

    pub fn has_observer(&self) -> bool {
        self.on_state_change.is_some()
    }

    /// `(from, event)` pairs registered more than once, with their counts,
    /// in order of first registration.
    pub fn duplicates(&self) -> Vec<(&S, &E, usize)> {
        let mut counts: HashMap<(&S, &E), usize> = HashMap::new();
        let mut order = Vec::new();

        for transition in &self.transitions {
            let key = (&transition.from, &transition.event);
            let count = counts.entry(key).or_insert(0);
            if *count == 0 {
                order.push(key);
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter_map(|key| match counts.get(&key) {
                Some(&count) if count > 1 => Some((key.0, key.1, count)),
                _ => None,
            })
            .collect()
    }

    /// Check the configuration, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        if self.history == HistoryMode::Bounded(0) {
            checks.push(Validation::fail(ConfigError::ZeroHistoryLimit));
        }

        for (from, event, count) in self.duplicates() {
            checks.push(Validation::fail(ConfigError::DuplicateTransition {
                from: from.name().to_string(),
                event: format!("{event:?}"),
                count,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
