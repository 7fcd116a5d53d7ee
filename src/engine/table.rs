//! Compiled `from -> event -> transition` lookup.

use crate::core::{Event, State};
use crate::engine::transition::Transition;
use std::collections::HashMap;

/// Two-level lookup built once from a transition list.
///
/// The table is frozen after [`TransitionTable::compile`]; nothing can add,
/// remove or replace an entry afterwards.
#[derive(Debug)]
pub struct TransitionTable<S: State, E: Event> {
    entries: HashMap<S, HashMap<E, Transition<S, E>>>,
    len: usize,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Compile a transition list in O(T).
    ///
    /// When several transitions share a `(from, event)` pair the last one in
    /// the list is kept. Every pair that was overridden is returned, once per
    /// override, in the order the overrides happened.
    pub fn compile(transitions: Vec<Transition<S, E>>) -> (Self, Vec<(S, E)>) {
        let mut entries: HashMap<S, HashMap<E, Transition<S, E>>> = HashMap::new();
        let mut overridden = Vec::new();
        let mut len = 0;

        for transition in transitions {
            let from = transition.from.clone();
            let event = transition.event.clone();
            let by_event = entries.entry(from.clone()).or_default();
            if by_event.insert(event.clone(), transition).is_some() {
                overridden.push((from, event));
            } else {
                len += 1;
            }
        }

        (Self { entries, len }, overridden)
    }

    pub fn lookup(&self, from: &S, event: &E) -> Option<&Transition<S, E>> {
        self.entries.get(from).and_then(|by_event| by_event.get(event))
    }

    /// Events registered for `from`, in no particular order.
    pub fn events_from<'a>(&'a self, from: &S) -> impl Iterator<Item = &'a E> + 'a {
        self.entries
            .get(from)
            .into_iter()
            .flat_map(|by_event| by_event.keys())
    }

    pub fn has_outgoing(&self, from: &S) -> bool {
        self.entries
            .get(from)
            .is_some_and(|by_event| !by_event.is_empty())
    }

    /// Number of distinct `(from, event)` entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
