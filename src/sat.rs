//! Satisfiability-flavored queries over the result column.
//!
//! These all require an evaluated plan; on an unevaluated plan the result
//! column is empty, so the predicates degenerate (no rows means "no true
//! row" and "no false row" at once).

use crate::plan::Plan;

impl Plan {
    /// `true` if at least one assignment satisfies the expression.
    pub fn is_satisfiable(&self) -> bool {
        self.root_values().iter().any(|&v| v)
    }

    /// `true` if every assignment satisfies the expression.
    pub fn is_tautology(&self) -> bool {
        !self.root_values().is_empty() && self.root_values().iter().all(|&v| v)
    }

    /// `true` if no assignment satisfies the expression.
    pub fn is_contradiction(&self) -> bool {
        !self.root_values().is_empty() && !self.is_satisfiable()
    }

    /// Number of satisfying assignments, at most `2^N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttable_rs::truth_table;
    ///
    /// let plan = truth_table("p → q").unwrap();
    /// assert_eq!(plan.count_models(), 3);
    /// ```
    pub fn count_models(&self) -> usize {
        self.root_values().iter().filter(|&&v| v).count()
    }

    /// One satisfying assignment, if any exists.
    ///
    /// Variables come back in first-occurrence order, valued as in the
    /// first satisfying row of the table.
    pub fn satisfying_assignment(&self) -> Option<Vec<(char, bool)>> {
        let row = self.root_values().iter().position(|&v| v)?;
        Some(
            self.vars
                .iter()
                .map(|&id| {
                    let node = self.node(id);
                    let name = node.variable().expect("vars holds only leaf nodes");
                    (name, node.values()[row])
                })
                .collect(),
        )
    }
}
