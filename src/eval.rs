//! The truth-table engine.
//!
//! Evaluation walks the plan strictly in insertion order, which the builder
//! guarantees is a dependency order, so a single linear pass suffices.
//! Variable columns are grown by doubling: whenever a new variable shows
//! up, every vector built so far is appended to itself, then the new
//! variable receives a half-true, half-false block. Operand vectors are
//! therefore always final and length-synchronized by the time an operator
//! node combines them elementwise.

use log::debug;

use crate::build::build_plan;
use crate::error::MalformedExpression;
use crate::operator::Op;
use crate::plan::Plan;

/// Compile and evaluate an expression in one call.
///
/// # Errors
///
/// Returns [`MalformedExpression`] when the expression does not compile;
/// evaluation itself cannot fail.
///
/// # Examples
///
/// ```
/// use ttable_rs::truth_table;
///
/// let plan = truth_table("p → q").unwrap();
/// assert_eq!(plan.root_values(), [true, true, false, true]);
/// ```
pub fn truth_table(expression: &str) -> Result<Plan, MalformedExpression> {
    let mut plan = build_plan(expression)?;
    plan.evaluate();
    Ok(plan)
}

impl Plan {
    /// Fill in the `values` vector of every node.
    ///
    /// After this pass each vector has length `2^N` for `N` distinct
    /// variables: one entry per assignment. The first-introduced variable
    /// alternates fastest in this raw order; [`render_table_sorted`]
    /// applies the conventional presentation sort on top.
    ///
    /// Memory and time are `O(2^N · P)` for `P` plan nodes, which bounds
    /// interactive use to a handful of variables. Calling this twice is a
    /// no-op: an evaluated plan stays as it is.
    ///
    /// [`render_table_sorted`]: Plan::render_table_sorted
    pub fn evaluate(&mut self) {
        if self.rows() > 0 {
            return;
        }

        debug!("evaluate: {} nodes", self.nodes.len());

        let mut introduced: u32 = 0;
        for i in 0..self.nodes.len() {
            match self.nodes[i].op {
                None => {
                    self.introduce_variable(i, introduced);
                    introduced += 1;
                }
                Some(op) => self.combine(i, op),
            }
        }
    }

    /// A new variable: re-synchronize every vector built so far by
    /// self-appending (empty vectors stay empty), then lay down the
    /// variable's own `2^k` true / `2^k` false block.
    fn introduce_variable(&mut self, i: usize, introduced: u32) {
        debug!(
            "introduce variable {:?} (#{})",
            self.nodes[i].key, introduced
        );

        for node in self.nodes.iter_mut() {
            node.values.extend_from_within(..);
        }

        let block = 1usize << introduced;
        let values = &mut self.nodes[i].values;
        values.extend(std::iter::repeat(true).take(block));
        values.extend(std::iter::repeat(false).take(block));
    }

    /// An operator node: combine the operand vectors elementwise. Both are
    /// complete by the dependency-order invariant.
    fn combine(&mut self, i: usize, op: Op) {
        debug!("combine {:?}", self.nodes[i].key);

        let right = self.nodes[i].right.expect("composite nodes have a right operand");
        let result: Vec<bool> = match op {
            Op::Not => self.nodes[right.index()].values.iter().map(|&r| !r).collect(),
            _ => {
                let left = self.nodes[i].left.expect("binary nodes have a left operand");
                let left = &self.nodes[left.index()].values;
                let right = &self.nodes[right.index()].values;
                left.iter().zip(right).map(|(&l, &r)| op.apply(l, r)).collect()
            }
        };
        self.nodes[i].values = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_single_variable_column() {
        let plan = truth_table("p").unwrap();
        assert_eq!(plan.get("p").unwrap().values(), [true, false]);
    }

    #[test]
    fn test_negation_column() {
        let plan = truth_table("¬p").unwrap();
        assert_eq!(plan.get("p").unwrap().values(), [true, false]);
        assert_eq!(plan.get("( ¬ p )").unwrap().values(), [false, true]);
    }

    #[test]
    fn test_conjunction_columns() {
        let plan = truth_table("p ∧ q").unwrap();

        assert_eq!(plan.get("p").unwrap().values(), [true, false, true, false]);
        assert_eq!(plan.get("q").unwrap().values(), [true, true, false, false]);
        assert_eq!(plan.root_values(), [true, false, false, false]);
    }

    #[test]
    fn test_disjunction_column() {
        let plan = truth_table("p ∨ q").unwrap();
        assert_eq!(plan.root_values(), [true, true, true, false]);
    }

    #[test]
    fn test_implication_column() {
        let plan = truth_table("p → q").unwrap();
        assert_eq!(plan.root_values(), [true, true, false, true]);
    }

    #[test]
    fn test_biconditional_column() {
        let plan = truth_table("p ↔ q").unwrap();
        assert_eq!(plan.root_values(), [true, false, false, true]);
    }

    #[test]
    fn test_every_vector_has_full_length() {
        let plan = truth_table("( p ∧ q ) → ( r ∨ ¬p )").unwrap();

        assert_eq!(plan.var_count(), 3);
        assert_eq!(plan.rows(), 8);
        for node in plan.nodes() {
            assert_eq!(node.values().len(), 8);
        }
    }

    #[test]
    fn test_later_variables_alternate_slower() {
        let plan = truth_table("( p ∨ q ) ∨ r").unwrap();

        let p = plan.get("p").unwrap().values();
        let q = plan.get("q").unwrap().values();
        let r = plan.get("r").unwrap().values();

        assert_eq!(p, [true, false, true, false, true, false, true, false]);
        assert_eq!(q, [true, true, false, false, true, true, false, false]);
        assert_eq!(r, [true, true, true, true, false, false, false, false]);
    }

    #[test]
    fn test_shared_subexpression_shares_one_column() {
        let plan = truth_table("( p ∧ q ) ∨ ( p ∧ q )").unwrap();

        assert_eq!(plan.len(), 4);
        assert_eq!(
            plan.root_values(),
            plan.get("( p ∧ q )").unwrap().values()
        );
    }

    #[test]
    fn test_tautology_and_contradiction() {
        let plan = truth_table("p ∨ ¬p").unwrap();
        assert_eq!(plan.root_values(), [true, true]);

        let plan = truth_table("p ∧ ¬p").unwrap();
        assert_eq!(plan.root_values(), [false, false]);
    }

    #[test]
    fn test_determinism() {
        let first = truth_table("( p → q ) ↔ ( ¬q → ¬p )").unwrap();
        let second = truth_table("( p → q ) ↔ ( ¬q → ¬p )").unwrap();

        for (a, b) in first.nodes().zip(second.nodes()) {
            assert_eq!(a.key(), b.key());
            assert_eq!(a.values(), b.values());
        }
    }
}
