//! Automaton states.
//!
//! A state is a named node that carries its accepting mark and its outgoing
//! edges. States never hold each other directly: an edge names its target
//! by [`StateId`], the target's position in the owning automaton.

use super::alphabet::Symbol;
use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Position of a state inside the automaton that owns it.
///
/// Ids are handed out in insertion order and are never reused, since states
/// are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Arena index of the state.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named node of a deterministic automaton.
///
/// Two states are the same entity iff their names are equal, so equality
/// and hashing only look at the name.
///
/// # Example
///
/// ```rust
/// use fa::dfa::Dfa;
///
/// let mut dfa = Dfa::new();
/// dfa.add_symbol('0');
/// dfa.add_state("q0");
/// dfa.add_transition("q0", "q0", '0');
///
/// let q0 = dfa.get_state("q0").unwrap();
/// assert_eq!(q0.name(), "q0");
/// assert!(!q0.is_final());
/// assert_eq!(q0.next_state('0'), dfa.state_id("q0"));
/// assert_eq!(q0.next_state('1'), None);
/// ```
#[derive(Clone, Debug)]
pub struct State {
    name: String,
    // Marking sequence number while accepting. It orders the final set.
    final_mark: Option<u64>,
    transitions: IndexMap<Symbol, StateId>,
}

impl State {
    /// Create a non-final state with no outgoing edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            final_mark: None,
            transitions: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this state is accepting.
    pub fn is_final(&self) -> bool {
        self.final_mark.is_some()
    }

    /// Set or clear the accepting flag.
    ///
    /// Setting an already accepting state keeps its original marking order.
    pub fn set_final(&mut self, accepting: bool) {
        if accepting {
            self.final_mark.get_or_insert(0);
        } else {
            self.final_mark = None;
        }
    }

    /// Record the edge taken on `symbol`, replacing any previous target.
    ///
    /// Whether `symbol` belongs to an alphabet is not checked here.
    pub fn add_transition(&mut self, symbol: Symbol, target: StateId) {
        self.transitions.insert(symbol, target);
    }

    /// Target of the edge on `symbol`, or `None` where δ is undefined.
    pub fn next_state(&self, symbol: Symbol) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    /// Outgoing edges in the order their symbols were first wired.
    pub fn transitions(&self) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        self.transitions.iter().map(|(&symbol, &target)| (symbol, target))
    }

    pub(crate) fn final_mark(&self) -> Option<u64> {
        self.final_mark
    }

    pub(crate) fn mark_final(&mut self, sequence: u64) {
        self.final_mark.get_or_insert(sequence);
    }

    /// Rewrite every edge label through `relabel`, which must be a bijection.
    pub(crate) fn relabel(&mut self, relabel: impl Fn(Symbol) -> Symbol) {
        self.transitions = self
            .transitions
            .iter()
            .map(|(&symbol, &target)| (relabel(symbol), target))
            .collect();
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
