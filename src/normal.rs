//! Principal normal forms read off the truth table.
//!
//! Both forms are correct by construction from the result column; neither
//! is minimized.

use crate::operator::Op;
use crate::plan::Plan;

impl Plan {
    /// Principal disjunctive normal form: one conjunctive clause per row
    /// where the expression is true.
    ///
    /// Returns the empty string for a contradiction; callers should read
    /// that as the constant false function.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttable_rs::truth_table;
    ///
    /// let plan = truth_table("p ∧ q").unwrap();
    /// assert_eq!(plan.pdnf(), "(p ∧ q)");
    ///
    /// let plan = truth_table("p ∨ ¬p").unwrap();
    /// assert_eq!(plan.pdnf(), "(p) ∨ (¬p)");
    /// ```
    pub fn pdnf(&self) -> String {
        self.normal_form(true, Op::And, Op::Or)
    }

    /// Principal conjunctive normal form: one disjunctive clause per row
    /// where the expression is false.
    ///
    /// Returns the empty string for a tautology; callers should read that
    /// as the constant true function.
    pub fn pcnf(&self) -> String {
        self.normal_form(false, Op::Or, Op::And)
    }

    /// Emit a clause for every row whose result equals `target`.
    ///
    /// Within a clause the variables appear in first-occurrence order, each
    /// negated exactly when its value at that row is false; the same
    /// literal-polarity rule is applied for both forms. Requires an
    /// evaluated plan; before evaluation there are no rows and the result
    /// is empty.
    pub fn normal_form(&self, target: bool, inner: Op, outer: Op) -> String {
        let root = self.root_node();
        let inner_sep = format!(" {} ", inner.glyph());
        let outer_sep = format!(" {} ", outer.glyph());

        let mut clauses = Vec::new();
        for row in 0..root.values().len() {
            if root.values()[row] != target {
                continue;
            }

            let literals: Vec<String> = self
                .vars
                .iter()
                .map(|&id| {
                    let node = self.node(id);
                    if node.values()[row] {
                        node.key().to_string()
                    } else {
                        format!("{}{}", Op::Not.glyph(), node.key())
                    }
                })
                .collect();
            clauses.push(format!("({})", literals.join(&inner_sep)));
        }

        clauses.join(&outer_sep)
    }
}
