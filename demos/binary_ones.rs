//! Binary Strings Example
//!
//! Builds the automaton for "at least one `1`" over {0, 1}, prints its
//! five-tuple, then checks each command-line argument against it and
//! against its `0`/`1`-swapped copy.
//!
//! Run with: cargo run --example binary_ones -- 0 1 101 e
//! Set RUST_LOG=fa=trace to see where rejected runs halt.

use fa::builder::{BuildError, DfaBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dfa = DfaBuilder::new()
        .symbols("01".chars())
        .states(["a", "b"])
        .start("a")
        .final_state("b")
        .transition("a", "a", '0')
        .transition("a", "b", '1')
        .transition("b", "a", '0')
        .transition("b", "b", '1')
        .build()?;
    let swapped = dfa.swap('0', '1');

    println!("=== At least one 1 ===\n{dfa}\n");
    println!("=== At least one 0 (swapped) ===\n{swapped}\n");

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec!["0".to_string(), "1".to_string(), "101".to_string(), String::new()]
    } else {
        inputs
    };

    for input in &inputs {
        let quoted = format!("{input:?}");
        println!(
            "{quoted:>12}  original: {:<5}  swapped: {}",
            dfa.accepts(input),
            swapped.accepts(input)
        );
    }

    Ok(())
}
