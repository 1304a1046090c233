//! Input alphabet of an automaton.
//!
//! The alphabet is an insertion-ordered set of symbols. Order matters: it
//! fixes the column order of the rendered transition table and the order in
//! which [`Alphabet::iter`] yields symbols.

use indexmap::IndexSet;
use std::fmt;

/// A single input symbol.
pub type Symbol = char;

/// Exchange the roles of `a` and `b`, leaving every other symbol alone.
///
/// # Example
///
/// ```rust
/// use fa::core::swap_symbol;
///
/// assert_eq!(swap_symbol('0', '0', '1'), '1');
/// assert_eq!(swap_symbol('1', '0', '1'), '0');
/// assert_eq!(swap_symbol('x', '0', '1'), 'x');
/// ```
pub fn swap_symbol(symbol: Symbol, a: Symbol, b: Symbol) -> Symbol {
    if symbol == a {
        b
    } else if symbol == b {
        a
    } else {
        symbol
    }
}

/// Insertion-ordered set of symbols (Σ).
///
/// Equality is set equality: two alphabets holding the same symbols compare
/// equal regardless of the order they were inserted in.
///
/// # Example
///
/// ```rust
/// use fa::core::Alphabet;
///
/// let mut sigma = Alphabet::new();
/// assert!(sigma.insert('b'));
/// assert!(sigma.insert('a'));
/// assert!(!sigma.insert('b'));
///
/// let symbols: Vec<char> = sigma.iter().collect();
/// assert_eq!(symbols, vec!['b', 'a']);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: IndexSet<Symbol>,
}

impl Alphabet {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self {
            symbols: IndexSet::new(),
        }
    }

    /// Insert a symbol, returning `false` if it was already present.
    ///
    /// A repeated insert keeps the symbol at its original position.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        self.symbols.insert(symbol)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// Alphabet with `a` and `b` exchanged, keeping positions.
    ///
    /// If only one of the two symbols is present, it is replaced by the
    /// other one in place.
    pub fn swapped(&self, a: Symbol, b: Symbol) -> Self {
        self.iter().map(|s| swap_symbol(s, a, b)).collect()
    }
}

impl FromIterator<Symbol> for Alphabet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl Extend<Symbol> for Alphabet {
    fn extend<I: IntoIterator<Item = Symbol>>(&mut self, iter: I) {
        self.symbols.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = Symbol;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, Symbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter().copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for symbol in self.iter() {
            write!(f, "{symbol} ")?;
        }
        f.write_str("}")
    }
}
