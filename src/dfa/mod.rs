//! Deterministic finite automata.
//!
//! [`Dfa`] owns its states, alphabet and start designation and provides:
//! - Incremental construction (`add_state`, `add_symbol`, `set_start`,
//!   `set_final`, `add_transition`)
//! - Acceptance testing by deterministic simulation
//! - Symbol swapping into a fresh, independent automaton
//! - A tabular text rendering

mod automaton;
mod error;
mod render;
mod swap;

pub use automaton::Dfa;
pub use error::DfaError;
