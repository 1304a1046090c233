//! Core automaton building blocks.
//!
//! This module contains the pieces an automaton is made of:
//! - Symbols and the insertion-ordered `Alphabet`
//! - `State` nodes and the `StateId` handles that link them
//!
//! Nothing here knows about acceptance; that lives in [`crate::dfa`].

mod alphabet;
mod state;

pub use alphabet::{swap_symbol, Alphabet, Symbol};
pub use state::{State, StateId};
