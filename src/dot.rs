//! Parse tree to DOT (Graphviz) conversion.
//!
//! The generated graph renders operator nodes as circles labeled with
//! their glyph and variables as boxes; left edges come before right
//! edges so document order matches the expression read left to right.
//! Pixel placement is Graphviz's job, not ours.
//!
//! # Examples
//!
//! ```
//! use ttable_rs::build_plan;
//!
//! let plan = build_plan("p ∧ q").unwrap();
//! let dot = plan.to_dot().unwrap();
//! // Render with: dot -Tpng tree.dot -o tree.png
//! assert!(dot.starts_with("digraph"));
//! ```

use std::fmt::Write;

use crate::plan::Plan;
use crate::tree::TreeNode;

impl Plan {
    /// Convert the parse tree to DOT format.
    ///
    /// Node ids reuse the tree's in-order numbering, so shared
    /// subexpressions appear once per occurrence, exactly as drawn.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        let tree = self.to_tree();

        let mut out = String::new();
        writeln!(out, "digraph parse_tree {{")?;
        writeln!(out, "  rankdir=TB;")?;
        write_node(&tree, &mut out)?;
        writeln!(out, "}}")?;
        Ok(out)
    }
}

fn write_node(node: &TreeNode, out: &mut String) -> std::fmt::Result {
    match node.op {
        Some(op) => writeln!(
            out,
            "  n{} [shape=circle, label=\"{}\"];",
            node.order,
            op.glyph()
        )?,
        None => writeln!(out, "  n{} [shape=box, label=\"{}\"];", node.order, node.key)?,
    }

    if let Some(left) = &node.left {
        write_node(left, out)?;
        writeln!(out, "  n{} -> n{};", node.order, left.order)?;
    }
    if let Some(right) = &node.right {
        write_node(right, out)?;
        writeln!(out, "  n{} -> n{};", node.order, right.order)?;
    }
    Ok(())
}
