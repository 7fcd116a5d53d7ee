//! Core value types for the transition engine.
//!
//! This module contains the building blocks that carry no machine state:
//! - State and event traits, plus the `Enumerable` extension for progress
//! - Guard predicates and actions attached to transitions
//! - State-change observers
//! - History records of applied transitions

mod action;
mod guard;
mod history;
mod observer;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use observer::StateObserver;
pub use state::{Enumerable, Event, State};
