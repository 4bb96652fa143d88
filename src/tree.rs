//! The parse tree, shaped for external rendering.
//!
//! The plan is a DAG (shared subexpressions are one node); the tree view
//! re-expands sharing so every occurrence gets its own [`TreeNode`]. The
//! view carries keys and layout hints only --- it owns no boolean vectors.

use crate::operator::Op;
use crate::plan::{NodeId, Plan};

/// One node of the parse tree.
///
/// `depth` is the distance from the root; `order` numbers the nodes
/// in-order (left subtree first, then the node, then the right subtree),
/// which matches a node's horizontal position when the leaves are read
/// left to right. Renderers can place nodes directly from these two
/// coordinates.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Canonical key of the subexpression rooted here.
    pub key: String,
    /// The connective, or `None` for a variable.
    pub op: Option<Op>,
    /// Distance from the root (the root is at zero).
    pub depth: usize,
    /// In-order position, strictly increasing left to right.
    pub order: usize,
    /// Absent for variables and for NOT.
    pub left: Option<Box<TreeNode>>,
    /// Absent only for variables.
    pub right: Option<Box<TreeNode>>,
}

impl Plan {
    /// Expand the plan into a parse tree rooted at the whole expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttable_rs::{build_plan, Op};
    ///
    /// let plan = build_plan("p ∧ q").unwrap();
    /// let tree = plan.to_tree();
    ///
    /// assert_eq!(tree.op, Some(Op::And));
    /// assert_eq!(tree.left.as_ref().unwrap().key, "p");
    /// assert_eq!(tree.right.as_ref().unwrap().key, "q");
    /// ```
    pub fn to_tree(&self) -> TreeNode {
        let mut order = 0;
        self.resolve(self.root(), 0, &mut order)
    }

    fn resolve(&self, id: NodeId, depth: usize, order: &mut usize) -> TreeNode {
        let node = self.node(id);

        let left = node
            .left()
            .map(|l| Box::new(self.resolve(l, depth + 1, order)));

        let position = *order;
        *order += 1;

        let right = node
            .right()
            .map(|r| Box::new(self.resolve(r, depth + 1, order)));

        TreeNode {
            key: node.key().to_string(),
            op: node.op(),
            depth,
            order: position,
            left,
            right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::build::build_plan;

    fn collect_in_order(node: &TreeNode, out: &mut Vec<(String, usize, usize)>) {
        if let Some(left) = &node.left {
            collect_in_order(left, out);
        }
        out.push((node.key.clone(), node.depth, node.order));
        if let Some(right) = &node.right {
            collect_in_order(right, out);
        }
    }

    #[test]
    fn test_conjunction_shape() {
        let plan = build_plan("p ∧ q").unwrap();
        let tree = plan.to_tree();

        assert_eq!(tree.key, "( p ∧ q )");
        assert_eq!(tree.op, Some(Op::And));
        assert_eq!(tree.depth, 0);

        let left = tree.left.as_ref().unwrap();
        let right = tree.right.as_ref().unwrap();
        assert_eq!(left.key, "p");
        assert_eq!(right.key, "q");
        assert_eq!(left.depth, 1);
        assert_eq!(right.depth, 1);
    }

    #[test]
    fn test_negation_has_only_a_right_child() {
        let plan = build_plan("¬p").unwrap();
        let tree = plan.to_tree();

        assert_eq!(tree.op, Some(Op::Not));
        assert!(tree.left.is_none());
        assert_eq!(tree.right.as_ref().unwrap().key, "p");
    }

    #[test]
    fn test_in_order_numbering() {
        let plan = build_plan("( p ∧ q ) ∨ r").unwrap();
        let tree = plan.to_tree();

        let mut seen = Vec::new();
        collect_in_order(&tree, &mut seen);

        // In-order traversal yields strictly increasing order values.
        let orders: Vec<usize> = seen.iter().map(|&(_, _, o)| o).collect();
        assert_eq!(orders, [0, 1, 2, 3, 4]);

        let keys: Vec<&str> = seen.iter().map(|(k, _, _)| k.as_str()).collect();
        assert_eq!(keys, ["p", "( p ∧ q )", "q", "( ( p ∧ q ) ∨ r )", "r"]);
    }

    #[test]
    fn test_shared_subexpressions_expand() {
        let plan = build_plan("( p ∧ q ) ↔ ( p ∧ q )").unwrap();
        let tree = plan.to_tree();

        // One plan node, two tree occurrences.
        assert_eq!(plan.len(), 4);
        assert_eq!(tree.left.as_ref().unwrap().key, "( p ∧ q )");
        assert_eq!(tree.right.as_ref().unwrap().key, "( p ∧ q )");
        assert_ne!(
            tree.left.as_ref().unwrap().order,
            tree.right.as_ref().unwrap().order
        );
    }

    #[test]
    fn test_depth_increases_toward_leaves() {
        let plan = build_plan("¬ ( p ∧ ( q ∨ r ) )").unwrap();
        let tree = plan.to_tree();

        let mut seen = Vec::new();
        collect_in_order(&tree, &mut seen);

        for (key, depth, _) in &seen {
            match key.as_str() {
                "( ¬ ( p ∧ ( q ∨ r ) ) )" => assert_eq!(*depth, 0),
                "( p ∧ ( q ∨ r ) )" => assert_eq!(*depth, 1),
                "p" | "( q ∨ r )" => assert_eq!(*depth, 2),
                "q" | "r" => assert_eq!(*depth, 3),
                other => panic!("unexpected key {:?}", other),
            }
        }
    }
}
