//! Connectives and the precedence table driving the scan.
//!
//! This module defines the five supported connectives, the parentheses, and
//! the single fixed ordering that the plan builder consults when deciding
//! whether to reduce. The ordering is *positional*: a symbol's rank is its
//! index in [`PRECEDENCE`], and the builder reduces while the rank of the
//! symbol on top of the operator stack is not greater than the rank of the
//! incoming symbol. Parentheses occupy the two ends of the order purely so
//! that every symbol the scan can encounter has a defined rank.

use std::fmt;

/// A propositional connective.
///
/// Each connective has one canonical glyph, used in plan keys and all
/// rendered output, plus one ASCII spelling accepted on input:
/// `¬`/`~`, `∧`/`&`, `∨`/`|`, `→`/`>`, `↔`/`-`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    /// Negation (the only unary connective).
    Not,
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
    /// Material implication.
    Implies,
    /// Biconditional.
    Iff,
}

impl Op {
    /// Canonical glyph of the connective.
    pub const fn glyph(self) -> char {
        match self {
            Op::Not => '¬',
            Op::And => '∧',
            Op::Or => '∨',
            Op::Implies => '→',
            Op::Iff => '↔',
        }
    }

    /// Recognize an operator glyph, canonical or ASCII.
    ///
    /// Returns `None` for parentheses and for anything that is a variable.
    pub fn from_symbol(c: char) -> Option<Op> {
        match c {
            '¬' | '~' => Some(Op::Not),
            '∧' | '&' => Some(Op::And),
            '∨' | '|' => Some(Op::Or),
            '→' | '>' => Some(Op::Implies),
            '↔' | '-' => Some(Op::Iff),
            _ => None,
        }
    }

    /// `true` for [`Op::Not`], which takes a single (right) operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Op::Not)
    }

    /// Truth function of a binary connective, applied to one row.
    ///
    /// # Panics
    ///
    /// Panics for [`Op::Not`]; negation has no left operand and is handled
    /// by the evaluation pass directly.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Op::Not => unreachable!("NOT is unary"),
            Op::And => left && right,
            Op::Or => left || right,
            Op::Implies => !left || right,
            Op::Iff => left == right,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One symbol of the scan alphabet: a parenthesis or a connective.
///
/// Everything the scan sees is either a [`Symbol`] or a single-character
/// variable; whitespace is skipped before this distinction is made.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symbol {
    /// `(`
    Open,
    /// A connective glyph.
    Operator(Op),
    /// `)`
    Close,
}

/// The scan alphabet in reduction order.
///
/// A symbol's index in this array is its rank. Lower rank reduces first:
/// the builder pops the operator stack while the top's rank is `<=` the
/// incoming symbol's rank. This is an index comparison over one fixed
/// total order, not a numeric "binding strength".
pub const PRECEDENCE: [Symbol; 7] = [
    Symbol::Open,
    Symbol::Operator(Op::Not),
    Symbol::Operator(Op::And),
    Symbol::Operator(Op::Or),
    Symbol::Operator(Op::Implies),
    Symbol::Operator(Op::Iff),
    Symbol::Close,
];

impl Symbol {
    /// Recognize a scan symbol; variables return `None`.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '(' => Some(Symbol::Open),
            ')' => Some(Symbol::Close),
            _ => Op::from_symbol(c).map(Symbol::Operator),
        }
    }

    /// Index of the symbol in [`PRECEDENCE`].
    pub fn rank(self) -> usize {
        // Every Symbol variant appears in the array.
        PRECEDENCE.iter().position(|&s| s == self).unwrap()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Open => write!(f, "("),
            Symbol::Operator(op) => write!(f, "{}", op),
            Symbol::Close => write!(f, ")"),
        }
    }
}
