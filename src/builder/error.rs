//! Build errors for the automaton builder.

use crate::dfa::DfaError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(name) before .build()")]
    MissingStartState,

    #[error(transparent)]
    Automaton(#[from] DfaError),
}
