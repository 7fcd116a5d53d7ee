//! The transition engine.
//!
//! # Key Concepts
//!
//! - **Transitions**: `(from, event) -> to` rules with optional guard and action
//! - **Table**: the compiled, frozen `from -> event -> transition` lookup
//! - **State Machine**: owns the current state, dispatches events, answers queries
//!
//! Dispatch is synchronous. There is no queue: each `send` either applies one
//! transition or leaves the machine untouched before it returns.

mod machine;
mod table;
mod transition;

pub use machine::{SendOutcome, StateMachine};
pub use table::TransitionTable;
pub use transition::Transition;
