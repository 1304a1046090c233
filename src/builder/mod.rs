//! Builder API for ergonomic automaton construction.
//!
//! The builder collects states, symbols and edges and validates them all
//! at once, surfacing the first invalid step as a typed error instead of a
//! `false` return.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::DfaBuilder;

use crate::core::Symbol;
use crate::dfa::Dfa;

/// Build an automaton from a transition table.
///
/// Every row is `(from, symbol, to)`. The alphabet is inferred from the
/// rows in order of first use, and states are added in order of first
/// mention, sources before targets.
///
/// # Example
///
/// ```
/// use fa::builder::from_table;
///
/// let dfa = from_table(
///     "a",
///     &["b"],
///     &[("a", '0', "a"), ("a", '1', "b"), ("b", '0', "a"), ("b", '1', "b")],
/// )
/// .unwrap();
///
/// assert!(dfa.accepts("101"));
/// assert!(!dfa.accepts("10"));
/// ```
pub fn from_table(
    start: &str,
    finals: &[&str],
    rows: &[(&str, Symbol, &str)],
) -> Result<Dfa, BuildError> {
    let mut builder = DfaBuilder::new().start(start);

    let mut seen: Vec<&str> = Vec::new();
    for name in std::iter::once(start)
        .chain(rows.iter().flat_map(|&(from, _, to)| [from, to]))
        .chain(finals.iter().copied())
    {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    builder = builder.states(seen);

    for &(from, symbol, to) in rows {
        builder = builder.symbol(symbol).transition(from, to, symbol);
    }
    for &name in finals {
        builder = builder.final_state(name);
    }

    builder.build()
}
