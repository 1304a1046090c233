//! FA: deterministic finite automata
//!
//! An automaton is built incrementally from named states, alphabet symbols
//! and transitions, then queried for acceptance. States live in an
//! index-based arena, so copies such as [`Dfa::swap`] never share state
//! with their source.
//!
//! # Core Concepts
//!
//! - **State**: a named node with an accepting flag and outgoing edges
//! - **Alphabet**: the insertion-ordered set of input symbols
//! - **Dfa**: owns states, alphabet and start designation; runs inputs
//! - **Builder**: fluent construction with typed errors
//!
//! # Example
//!
//! ```rust
//! use fa::dfa::Dfa;
//!
//! // Strings with an even number of `0`s.
//! let mut dfa = Dfa::new();
//! dfa.add_symbol('0');
//! dfa.add_symbol('1');
//! dfa.add_state("even_0");
//! dfa.add_state("odd_0");
//! dfa.set_start("even_0");
//! dfa.set_final("even_0");
//! dfa.add_transition("even_0", "odd_0", '0');
//! dfa.add_transition("even_0", "even_0", '1');
//! dfa.add_transition("odd_0", "even_0", '0');
//! dfa.add_transition("odd_0", "odd_0", '1');
//!
//! assert!(dfa.accepts(""));
//! assert!(dfa.accepts("010"));
//! assert!(!dfa.accepts("0100"));
//!
//! // Even number of `1`s instead.
//! let swapped = dfa.swap('0', '1');
//! assert!(swapped.accepts("11"));
//! assert!(!swapped.accepts("1"));
//! ```

pub mod builder;
pub mod core;
pub mod dfa;

// Re-export commonly used types
pub use builder::{BuildError, DfaBuilder};
pub use crate::core::{Alphabet, State, StateId, Symbol};
pub use dfa::{Dfa, DfaError};
