//! Errors raised by automaton mutations.

use crate::core::Symbol;
use thiserror::Error;

/// Reasons a mutation of a [`Dfa`](super::Dfa) was rejected.
///
/// A rejected mutation never changes the automaton.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DfaError {
    #[error("State '{name}' already exists")]
    DuplicateState { name: String },

    #[error("Unknown state '{name}'")]
    UnknownState { name: String },

    #[error("Symbol '{symbol}' is not in the alphabet")]
    UnknownSymbol { symbol: Symbol },
}
