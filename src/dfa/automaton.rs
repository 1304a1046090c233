//! The deterministic finite automaton.

use crate::core::{Alphabet, State, StateId, Symbol};
use crate::dfa::error::DfaError;
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// A deterministic finite automaton over `char` symbols.
///
/// States live in an insertion-ordered arena keyed by name; a state's
/// position in the arena is its [`StateId`]. Edges, the start designation
/// and the final set all refer to states by id.
///
/// Every mutation comes in two flavours: a `try_*` method returning a
/// [`DfaError`] and a boolean one reporting only success. Neither changes
/// anything when it fails.
///
/// # Example
///
/// ```rust
/// use fa::dfa::Dfa;
///
/// // Strings over {0, 1} containing at least one `1`.
/// let mut dfa = Dfa::new();
/// dfa.add_symbol('0');
/// dfa.add_symbol('1');
/// assert!(dfa.add_state("a"));
/// assert!(dfa.add_state("b"));
/// assert!(dfa.set_start("a"));
/// assert!(dfa.set_final("b"));
/// assert!(dfa.add_transition("a", "a", '0'));
/// assert!(dfa.add_transition("a", "b", '1'));
/// assert!(dfa.add_transition("b", "a", '0'));
/// assert!(dfa.add_transition("b", "b", '1'));
///
/// assert!(dfa.accepts("101"));
/// assert!(!dfa.accepts("0"));
/// assert!(!dfa.accepts(""));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dfa {
    pub(super) states: IndexMap<String, State>,
    pub(super) sigma: Alphabet,
    pub(super) start: Option<StateId>,
    // Next sequence number handed to a newly accepting state.
    pub(super) final_sequence: u64,
}

impl Dfa {
    /// Create an automaton with no states, no symbols and no start state.
    pub fn new() -> Self {
        Self {
            states: IndexMap::new(),
            sigma: Alphabet::new(),
            start: None,
            final_sequence: 0,
        }
    }

    /// Add a non-final state with no outgoing edges.
    ///
    /// Returns `false` if a state with that name already exists.
    pub fn add_state(&mut self, name: impl Into<String>) -> bool {
        self.try_add_state(name).is_ok()
    }

    pub fn try_add_state(&mut self, name: impl Into<String>) -> Result<StateId, DfaError> {
        match self.states.entry(name.into()) {
            Entry::Occupied(entry) => {
                debug!(state = %entry.key(), "rejected duplicate state");
                Err(DfaError::DuplicateState {
                    name: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                let id = StateId::new(entry.index());
                let state = State::new(entry.key().clone());
                entry.insert(state);
                Ok(id)
            }
        }
    }

    /// Add `symbol` to the alphabet. Adding a known symbol does nothing.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.sigma.insert(symbol);
    }

    /// Designate the start state, replacing any previous one.
    ///
    /// Returns `false` if no state has that name.
    pub fn set_start(&mut self, name: &str) -> bool {
        self.try_set_start(name).is_ok()
    }

    pub fn try_set_start(&mut self, name: &str) -> Result<StateId, DfaError> {
        let id = self.resolve(name)?;
        self.start = Some(id);
        Ok(id)
    }

    /// Mark a state as accepting.
    ///
    /// Returns `false` if no state has that name.
    pub fn set_final(&mut self, name: &str) -> bool {
        self.try_set_final(name).is_ok()
    }

    pub fn try_set_final(&mut self, name: &str) -> Result<StateId, DfaError> {
        let id = self.resolve(name)?;
        let state = &mut self.states[id.index()];
        if !state.is_final() {
            state.mark_final(self.final_sequence);
            self.final_sequence += 1;
        }
        Ok(id)
    }

    /// Wire `from --symbol--> to`, replacing an earlier edge on the same
    /// source and symbol.
    ///
    /// Returns `false` if `symbol` is not in the alphabet or either state is
    /// unknown.
    pub fn add_transition(&mut self, from: &str, to: &str, symbol: Symbol) -> bool {
        self.try_add_transition(from, to, symbol).is_ok()
    }

    pub fn try_add_transition(
        &mut self,
        from: &str,
        to: &str,
        symbol: Symbol,
    ) -> Result<(), DfaError> {
        if !self.sigma.contains(symbol) {
            debug!(%symbol, from, to, "rejected transition on unknown symbol");
            return Err(DfaError::UnknownSymbol { symbol });
        }
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        self.states[source.index()].add_transition(symbol, target);
        Ok(())
    }

    /// Copy of the alphabet. Changing the copy leaves the automaton alone.
    pub fn alphabet(&self) -> Alphabet {
        self.sigma.clone()
    }

    pub fn get_state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states.get_index_of(name).map(StateId::new)
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get_index(id.index()).map(|(_, state)| state)
    }

    /// States in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.values()
    }

    pub fn start_state(&self) -> Option<&State> {
        self.start.and_then(|id| self.state(id))
    }

    /// Accepting states in the order they were first marked final.
    pub fn final_states(&self) -> Vec<&State> {
        let mut finals: Vec<&State> = self.states.values().filter(|s| s.is_final()).collect();
        finals.sort_by_key(|state| state.final_mark());
        finals
    }

    /// `false` for unknown names.
    pub fn is_final(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(State::is_final)
    }

    /// `false` when no start state is designated.
    pub fn is_start(&self, name: &str) -> bool {
        self.start_state().is_some_and(|state| state.name() == name)
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Run the automaton over `input` and return the state it halts in.
    ///
    /// Returns `None` without a start state, or as soon as a symbol has no
    /// edge from the current state. Symbols outside the alphabet are simply
    /// undefined.
    pub fn run<I>(&self, input: I) -> Option<StateId>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut current = self.start?;
        for symbol in input {
            let state = &self.states[current.index()];
            match state.next_state(symbol) {
                Some(next) => current = next,
                None => {
                    trace!(state = state.name(), %symbol, "run halted on undefined transition");
                    return None;
                }
            }
        }
        Some(current)
    }

    /// Whether the automaton accepts `input`.
    pub fn accepts(&self, input: &str) -> bool {
        self.accepts_symbols(input.chars())
    }

    pub fn accepts_symbols<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.run(input)
            .is_some_and(|id| self.states[id.index()].is_final())
    }

    fn resolve(&self, name: &str) -> Result<StateId, DfaError> {
        self.state_id(name).ok_or_else(|| {
            debug!(state = name, "unknown state");
            DfaError::UnknownState {
                name: name.to_owned(),
            }
        })
    }
}
