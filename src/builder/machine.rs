//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::Symbol;
use crate::dfa::Dfa;

/// Builder for constructing automata with a fluent API.
///
/// Steps are recorded as given and replayed in a fixed order on
/// [`build`](DfaBuilder::build): symbols, states, start, finals, then
/// transitions. The first step the automaton rejects becomes the error.
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    symbols: Vec<Symbol>,
    states: Vec<String>,
    start: Option<String>,
    finals: Vec<String>,
    transitions: Vec<(String, String, Symbol)>,
}

impl DfaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one alphabet symbol.
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Add several alphabet symbols, e.g. `.symbols("01".chars())`.
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Add a state.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Add several states at once.
    pub fn states<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Mark a state final.
    pub fn final_state(mut self, name: impl Into<String>) -> Self {
        self.finals.push(name.into());
        self
    }

    /// Add the edge `from --symbol--> to`.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        symbol: Symbol,
    ) -> Self {
        self.transitions.push((from.into(), to.into(), symbol));
        self
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing or any step is invalid.
    pub fn build(self) -> Result<Dfa, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let mut dfa = Dfa::new();
        for symbol in self.symbols {
            dfa.add_symbol(symbol);
        }
        for name in self.states {
            dfa.try_add_state(name)?;
        }
        dfa.try_set_start(&start)?;
        for name in &self.finals {
            dfa.try_set_final(name)?;
        }
        for (from, to, symbol) in &self.transitions {
            dfa.try_add_transition(from, to, *symbol)?;
        }

        Ok(dfa)
    }
}
