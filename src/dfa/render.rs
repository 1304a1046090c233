//! Textual dump of an automaton.
//!
//! The layout is the classic five-tuple listing:
//!
//! ```text
//! Q = { a b }
//! Sigma = { 0 1 }
//! delta =
//!         0   1
//!     a   a   b
//!     b   a   b
//! q0 = a
//! F = { b }
//! ```
//!
//! Cells are tab separated. Whitespace carries no meaning; consumers should
//! compare on tokens and on which row and column each token sits in.

use super::Dfa;
use std::fmt;

impl Dfa {
    /// Render the automaton as text. Same as its `Display` output.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Q = { ")?;
        for name in self.states.keys() {
            write!(f, "{name} ")?;
        }
        f.write_str("}\n")?;

        writeln!(f, "Sigma = {}", self.sigma)?;

        f.write_str("delta =\n\t")?;
        for symbol in self.sigma.iter() {
            write!(f, "\t{symbol}")?;
        }
        f.write_str("\n")?;
        for state in self.states.values() {
            write!(f, "\t{}", state.name())?;
            for symbol in self.sigma.iter() {
                let target = state
                    .next_state(symbol)
                    .and_then(|id| self.state(id))
                    .map_or("", |target| target.name());
                write!(f, "\t{target}")?;
            }
            f.write_str("\n")?;
        }

        let start = self.start_state().map_or("", |state| state.name());
        writeln!(f, "q0 = {start}")?;

        f.write_str("F = { ")?;
        for state in self.final_states() {
            write!(f, "{} ", state.name())?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(text: &str) -> String {
        text.split_whitespace().collect()
    }

    #[test]
    fn renders_five_tuple() {
        let mut dfa = Dfa::new();
        dfa.add_symbol('0');
        dfa.add_symbol('1');
        dfa.add_state("a");
        dfa.add_state("b");
        dfa.set_start("a");
        dfa.set_final("b");
        dfa.add_transition("a", "a", '0');
        dfa.add_transition("a", "b", '1');
        dfa.add_transition("b", "a", '0');
        dfa.add_transition("b", "b", '1');

        let expected = "Q = { a b }\n\
                        Sigma = { 0 1 }\n\
                        delta =\n\
                        \t\t0\t1\n\
                        \ta\ta\tb\n\
                        \tb\ta\tb\n\
                        q0 = a\n\
                        F = { b }";
        assert_eq!(dfa.to_text(), expected);
    }

    #[test]
    fn undefined_cells_are_empty() {
        let mut dfa = Dfa::new();
        dfa.add_symbol('x');
        dfa.add_symbol('y');
        dfa.add_state("p");
        dfa.add_state("q");
        dfa.add_transition("p", "q", 'y');

        let text = dfa.to_text();
        assert!(text.contains("\tp\t\tq\n"));
        assert!(text.contains("\tq\t\t\n"));
    }

    #[test]
    fn missing_start_renders_empty() {
        let mut dfa = Dfa::new();
        dfa.add_state("p");

        assert_eq!(squash(&dfa.to_text()), "Q={p}Sigma={}delta=pq0=F={}");
    }

    #[test]
    fn finals_render_in_marking_order() {
        let mut dfa = Dfa::new();
        dfa.add_state("a");
        dfa.add_state("b");
        dfa.set_final("b");
        dfa.set_final("a");

        assert!(dfa.to_text().ends_with("F = { b a }"));
    }

    #[test]
    fn display_matches_to_text() {
        let mut dfa = Dfa::new();
        dfa.add_symbol('0');
        dfa.add_state("s");
        dfa.set_start("s");
        assert_eq!(format!("{dfa}"), dfa.to_text());
    }
}
