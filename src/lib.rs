//! Statecraft: a declaratively-configured finite-state-machine engine
//!
//! A machine is built from a [`Configuration`]: an initial state, an ordered
//! list of transitions and an optional state-change observer. The transitions
//! are compiled once into a `from -> event -> transition` table; afterwards
//! the machine only tracks its current state.
//!
//! # Core Concepts
//!
//! - **State**: a finite, hashable value; `Enumerable` states also report progress
//! - **Event**: any hashable value presented to the machine via `send`
//! - **Guards**: predicates over `(state, event)` that must pass for a transition
//! - **Actions**: callbacks run before the state changes
//! - **Observers**: callbacks run after the state changes
//!
//! Rejected events (no matching transition, or a failing guard) are ordinary
//! outcomes. They are reported through `tracing` at DEBUG and in the returned
//! [`SendOutcome`], and never change state.
//!
//! # Example
//!
//! ```rust
//! use statecraft::{state_enum, Configuration, SendOutcome, StateMachine, Transition};
//! use std::sync::{Arc, Mutex};
//!
//! state_enum! {
//!     enum Fetch {
//!         Idle,
//!         Loading,
//!         Success,
//!     }
//! }
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&log);
//!
//! let config = Configuration::new(
//!     Fetch::Idle,
//!     vec![
//!         Transition::new(Fetch::Idle, "start", Fetch::Loading),
//!         Transition::new(Fetch::Loading, "succeed", Fetch::Success),
//!     ],
//! )
//! .on_state_change(move |prev: &Fetch, next: &Fetch| {
//!     sink.lock().unwrap().push(format!("{prev:?}->{next:?}"));
//! });
//!
//! let mut machine = StateMachine::new(config);
//! assert_eq!(machine.send("succeed"), SendOutcome::NoTransition);
//! machine.send("start");
//! machine.send("succeed");
//!
//! assert_eq!(machine.current_state(), &Fetch::Success);
//! assert_eq!(machine.progress(), 1.0);
//! assert_eq!(*log.lock().unwrap(), vec!["Idle->Loading", "Loading->Success"]);
//! ```

pub mod config;
pub mod core;
pub mod engine;
mod macros;

// Re-export commonly used types
pub use config::{ConfigError, Configuration, HistoryMode};
pub use core::{Enumerable, Event, Guard, State, StateHistory, StateTransition};
pub use engine::{SendOutcome, StateMachine, Transition};
