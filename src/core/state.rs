//! State and event traits for state machine values.
//!
//! States and events are plain values. The engine only ever compares,
//! hashes and clones them, so the traits carry no behaviour beyond naming
//! and (for states) the declared enumeration order.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records and outcomes
/// - `Eq` + `Hash`: States key the compiled transition table
/// - `Debug`: States appear in diagnostics
/// - `Send` + `Sync`: A machine can be moved onto its owning thread
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// States whose full set of values is known up front.
///
/// The order of [`Enumerable::all`] is the declared order and is the only
/// input to progress computation. It is not checked against the transition
/// graph: a declaration order that differs from the logical flow reports
/// misleading progress.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{Enumerable, State};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Phase { One, Two, Three }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///             Self::Three => "Three",
///         }
///     }
/// }
///
/// impl Enumerable for Phase {
///     fn all() -> &'static [Self] {
///         &[Phase::One, Phase::Two, Phase::Three]
///     }
/// }
///
/// assert_eq!(Phase::Three.index(), Some(2));
/// ```
pub trait Enumerable: State + 'static {
    /// Every state, in declaration order.
    fn all() -> &'static [Self];

    /// Position of this state within [`Enumerable::all`].
    fn index(&self) -> Option<usize> {
        Self::all().iter().position(|s| s == self)
    }
}

/// Marker trait for event values.
///
/// Blanket implemented for every type that satisfies the bounds, so
/// events can be enums, strings or any other hashable value.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Event for T where T: Clone + Eq + Hash + Debug + Send + Sync {}
