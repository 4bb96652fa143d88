//! # ttable-rs: truth tables for propositional logic in Rust
//!
//! **`ttable-rs`** evaluates propositional-logic expressions entered as plain
//! strings and derives their complete truth table, principal normal forms
//! (PDNF/PCNF), a step-by-step evaluation plan, and a layout-ready parse tree.
//!
//! ## How it works
//!
//! The heart of the library is a single left-to-right scan that parses a
//! parenthesized boolean expression, deduplicates repeated subexpressions by
//! their exact textual form, and emits a dependency-ordered [`Plan`] --- all in
//! one pass, without materializing a postfix form or a separate AST first.
//! Every subexpression becomes one plan node identified by its canonical text
//! (e.g. `( p ∧ q )`), so repeated subexpressions share a single node and a
//! single column in the resulting table.
//!
//! A later linear pass ([`Plan::evaluate`]) walks the plan in insertion order
//! and fills in one boolean vector per node, growing the variable columns by a
//! doubling technique instead of recomputing them.
//!
//! ## Operators
//!
//! Five connectives are supported, written with either the canonical glyphs
//! or their ASCII spellings:
//!
//! | Connective | Glyph | ASCII |
//! |------------|-------|-------|
//! | NOT        | `¬`   | `~`   |
//! | AND        | `∧`   | `&`   |
//! | OR         | `∨`   | `\|`  |
//! | IMPLIES    | `→`   | `>`   |
//! | IFF        | `↔`   | `-`   |
//!
//! Variables are single characters; whitespace is ignored.
//!
//! ## Quick start
//!
//! ```rust
//! use ttable_rs::truth_table;
//!
//! let plan = truth_table("( p ∧ q ) ∨ ( ¬ p )").unwrap();
//!
//! assert_eq!(plan.var_count(), 2);
//! assert_eq!(plan.rows(), 4);
//! assert!(plan.is_satisfiable());
//! assert_eq!(plan.count_models(), 3);
//! ```
//!
//! ## Core components
//!
//! - **[`build`]**: the expression-to-plan compiler ([`build_plan`]).
//! - **[`eval`]**: the truth-table engine ([`Plan::evaluate`], [`truth_table`]).
//! - **[`normal`]**: principal normal forms ([`Plan::pdnf`], [`Plan::pcnf`]).
//! - **[`equiv`]**: semantic equivalence of two expressions ([`are_equivalent`]).
//! - **[`tree`]**: the parse tree for visualization ([`Plan::to_tree`]).
//! - **[`dot`]**: Graphviz export of the parse tree.
//! - **[`render`]**: plain-text truth tables.
//!
//! ## Scaling
//!
//! Every node's vector holds one entry per assignment, so memory and time are
//! `O(2^N · P)` for `N` distinct variables and `P` plan nodes. This is meant
//! for interactive use with a handful of variables, not for SAT solving.

pub mod build;
pub mod dot;
pub mod equiv;
pub mod error;
pub mod eval;
pub mod normal;
pub mod operator;
pub mod plan;
pub mod render;
pub mod sat;
pub mod tree;

pub use crate::build::build_plan;
pub use crate::equiv::are_equivalent;
pub use crate::error::MalformedExpression;
pub use crate::eval::truth_table;
pub use crate::operator::Op;
pub use crate::plan::{NodeId, Plan, PlanNode};
pub use crate::tree::TreeNode;
