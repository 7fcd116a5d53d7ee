//! Transition records with optional guards and actions.

use crate::core::{Action, Event, Guard, State};

/// A rule mapping `(from, event)` to a target state.
///
/// The record is a plain value: guard and action are optional boxed
/// callables, not trait objects on the transition itself.
#[derive(Debug)]
pub struct Transition<S: State, E: Event> {
    pub from: S,
    pub event: E,
    pub to: S,
    pub guard: Option<Guard<S, E>>,
    pub action: Option<Action<S, E>>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create an unguarded transition with no action.
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            guard: None,
            action: None,
        }
    }

    /// Attach a guard predicate, replacing any existing one.
    pub fn with_guard<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S, &E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Attach an action, replacing any existing one.
    pub fn with_action<F>(mut self, callback: F) -> Self
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(callback));
        self
    }

    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }

    /// Evaluate the guard, if any. Unguarded transitions always pass.
    pub fn guard_allows(&self, state: &S, event: &E) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(state, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn new_stores_rule_fields() {
        let transition = Transition::new(TestState::Start, "next", TestState::Middle);

        assert_eq!(transition.from, TestState::Start);
        assert_eq!(transition.event, "next");
        assert_eq!(transition.to, TestState::Middle);
        assert!(transition.action.is_none());
    }

    #[test]
    fn guard_allows_respects_guard() {
        let transition = Transition::new(TestState::Middle, "finish", TestState::End)
            .with_guard(|s: &TestState, _: &&str| *s == TestState::Start);

        assert!(!transition.guard_allows(&TestState::Middle, &"finish"));
        assert!(transition.guard_allows(&TestState::Start, &"finish"));
    }

    #[test]
    fn unguarded_transition_always_allowed() {
        let transition = Transition::new(TestState::Start, "next", TestState::Middle);

        assert!(transition.guard.is_none());
        assert!(transition.guard_allows(&TestState::End, &"anything"));
    }

    #[test]
    fn self_transition_is_legal() {
        let transition = Transition::new(TestState::Middle, "refresh", TestState::Middle);

        assert!(transition.is_self_transition());
        assert!(transition.guard_allows(&TestState::Middle, &"refresh"));
    }

    #[test]
    fn with_action_attaches_callback() {
        let transition = Transition::new(TestState::Start, "next", TestState::Middle)
            .with_action(|_: &TestState, _: &&str| {});

        assert!(transition.action.is_some());
        assert!(transition.guard.is_none());
    }
}
