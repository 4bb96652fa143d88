//! Plain-text truth tables.
//!
//! One column per plan node, headed by its canonical key, in insertion
//! order. Row order is a presentation choice layered on top of the plan:
//! the raw table keeps the scan (evaluation) order, the sorted table
//! applies the conventional ascending sort over the variable columns.
//! Neither touches the plan itself.

use crate::plan::Plan;

impl Plan {
    /// Render the table in raw (scan) row order.
    pub fn render_table(&self) -> String {
        let order: Vec<usize> = (0..self.rows()).collect();
        self.render_rows(&order)
    }

    /// Render the table with variable columns sorted ascending (`F` before
    /// `T`), the first-introduced variable most significant.
    pub fn render_table_sorted(&self) -> String {
        let row_key = |row: usize| -> Vec<bool> {
            self.vars
                .iter()
                .map(|&id| self.node(id).values()[row])
                .collect()
        };

        let mut order: Vec<usize> = (0..self.rows()).collect();
        order.sort_by_key(|&row| row_key(row));
        self.render_rows(&order)
    }

    fn render_rows(&self, order: &[usize]) -> String {
        let widths: Vec<usize> = self.nodes.iter().map(|n| n.key.chars().count()).collect();

        let mut out = String::new();
        let header: Vec<&str> = self.nodes.iter().map(|n| n.key.as_str()).collect();
        out.push_str(&header.join(" | "));
        out.push('\n');

        for &row in order {
            let cells: Vec<String> = self
                .nodes
                .iter()
                .zip(&widths)
                .map(|(node, &width)| {
                    let cell = if node.values()[row] { 'T' } else { 'F' };
                    format!("{:^width$}", cell)
                })
                .collect();
            out.push_str(cells.join(" | ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use crate::eval::truth_table;

    #[test]
    fn test_header_lists_keys_in_plan_order() {
        let plan = truth_table("p ∧ q").unwrap();
        let table = plan.render_table();
        assert_eq!(table.lines().next().unwrap(), "p | q | ( p ∧ q )");
    }

    #[test]
    fn test_raw_order_matches_the_vectors() {
        let plan = truth_table("p ∧ q").unwrap();
        let rendered = plan.render_table();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "T | T |     T");
        assert_eq!(lines[2], "F | T |     F");
        assert_eq!(lines[3], "T | F |     F");
        assert_eq!(lines[4], "F | F |     F");
    }

    #[test]
    fn test_sorted_order_counts_upward() {
        let plan = truth_table("p ∧ q").unwrap();
        let rendered = plan.render_table_sorted();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "F | F |     F");
        assert_eq!(lines[2], "F | T |     F");
        assert_eq!(lines[3], "T | F |     F");
        assert_eq!(lines[4], "T | T |     T");
    }

    #[test]
    fn test_sorting_never_mutates_the_plan() {
        let plan = truth_table("p ∨ q").unwrap();
        let before: Vec<bool> = plan.root_values().to_vec();
        let _ = plan.render_table_sorted();
        assert_eq!(plan.root_values(), before);
    }
}
