//! Symbol swapping.

use super::Dfa;
use crate::core::{swap_symbol, Symbol};

impl Dfa {
    /// Build a new automaton with the roles of `a` and `b` exchanged.
    ///
    /// The alphabet and every edge label go through the substitution
    /// `a ↦ b, b ↦ a`; states, their order, the start designation and the
    /// final set are kept as they are. The result owns its own states, so
    /// later changes to either automaton never reach the other.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fa::dfa::Dfa;
    ///
    /// let mut dfa = Dfa::new();
    /// dfa.add_symbol('0');
    /// dfa.add_symbol('1');
    /// dfa.add_state("a");
    /// dfa.add_state("b");
    /// dfa.set_start("a");
    /// dfa.set_final("b");
    /// dfa.add_transition("a", "b", '1');
    ///
    /// let swapped = dfa.swap('0', '1');
    /// assert!(swapped.accepts("0"));
    /// assert!(!swapped.accepts("1"));
    /// assert!(dfa.accepts("1"));
    /// ```
    pub fn swap(&self, a: Symbol, b: Symbol) -> Dfa {
        let mut states = self.states.clone();
        for state in states.values_mut() {
            state.relabel(|symbol| swap_symbol(symbol, a, b));
        }

        Dfa {
            states,
            sigma: self.sigma.swapped(a, b),
            start: self.start,
            final_sequence: self.final_sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    fn ends_with_01() -> Dfa {
        let mut dfa = Dfa::new();
        dfa.add_symbol('0');
        dfa.add_symbol('1');
        dfa.add_state("S");
        dfa.add_state("A");
        dfa.add_state("B");
        dfa.set_start("S");
        dfa.set_final("B");
        dfa.add_transition("S", "A", '0');
        dfa.add_transition("S", "S", '1');
        dfa.add_transition("A", "A", '0');
        dfa.add_transition("A", "B", '1');
        dfa.add_transition("B", "A", '0');
        dfa.add_transition("B", "S", '1');
        dfa
    }

    #[test]
    fn swap_exchanges_edge_labels() {
        let swapped = ends_with_01().swap('0', '1');
        assert!(swapped.accepts("10"));
        assert!(!swapped.accepts("01"));
        assert!(swapped.accepts("110"));
        assert!(!swapped.accepts("101"));
    }

    #[test]
    fn swap_keeps_structure() {
        let dfa = ends_with_01();
        let swapped = dfa.swap('0', '1');

        let names: Vec<&str> = swapped.states().map(State::name).collect();
        assert_eq!(names, vec!["S", "A", "B"]);
        assert!(swapped.is_start("S"));
        assert!(swapped.is_final("B"));
        assert!(!swapped.is_final("A"));
        assert_eq!(swapped.alphabet(), dfa.alphabet());

        let symbols: Vec<Symbol> = swapped.alphabet().iter().collect();
        assert_eq!(symbols, vec!['1', '0']);
    }

    #[test]
    fn swap_leaves_source_untouched() {
        let dfa = ends_with_01();
        let _swapped = dfa.swap('0', '1');

        assert!(dfa.accepts("01"));
        assert!(dfa.accepts("101"));
        assert!(!dfa.accepts("10"));
    }

    #[test]
    fn swapped_copy_is_independent() {
        let mut dfa = ends_with_01();
        let mut swapped = dfa.swap('0', '1');

        dfa.add_transition("B", "B", '1');
        let b = swapped.get_state("B").unwrap();
        assert_eq!(b.next_state('0'), swapped.state_id("S"));

        swapped.add_state("Z");
        assert!(dfa.get_state("Z").is_none());
    }

    #[test]
    fn swapped_states_are_distinct_objects() {
        let dfa = ends_with_01();
        let swapped = dfa.swap('0', '1');

        for name in ["S", "A", "B"] {
            let original = dfa.get_state(name).unwrap();
            let copy = swapped.get_state(name).unwrap();
            assert!(!std::ptr::eq(original, copy));
            assert_eq!(original, copy);
        }
    }

    #[test]
    fn swap_with_absent_symbol_renames_label() {
        let dfa = ends_with_01();
        let swapped = dfa.swap('1', 'x');

        assert!(swapped.alphabet().contains('x'));
        assert!(!swapped.alphabet().contains('1'));
        assert!(swapped.accepts("0x"));
        assert!(!swapped.accepts("01"));
    }

    #[test]
    fn swap_preserves_final_order() {
        let mut dfa = Dfa::new();
        dfa.add_state("p");
        dfa.add_state("q");
        dfa.set_final("q");
        dfa.set_final("p");

        let swapped = dfa.swap('a', 'b');
        let names: Vec<&str> = swapped.final_states().into_iter().map(State::name).collect();
        assert_eq!(names, vec!["q", "p"]);
    }
}
