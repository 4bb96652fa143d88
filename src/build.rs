//! The expression-to-plan compiler.
//!
//! One left-to-right scan over the input simultaneously parses the
//! expression, deduplicates repeated subexpressions by their canonical
//! text, and records the nodes in dependency order --- there is no
//! intermediate postfix form and no separate AST.
//!
//! The scan keeps two stacks: an *operator stack* of [`Symbol`]s (open
//! parentheses and connectives) and an *operand stack* of [`NodeId`]s.
//! Whenever an incoming symbol does not outrank the stack top, the top
//! operator is popped and folded with one operand (NOT) or two (everything
//! else) into a composite node. The whole input is wrapped in one extra
//! pair of parentheses so the final reduction leaves exactly one operand:
//! the root.

use std::collections::HashMap;

use log::debug;

use crate::error::MalformedExpression;
use crate::operator::{Op, Symbol};
use crate::plan::{NodeId, Plan, PlanNode};

/// Compile an expression into an evaluation [`Plan`].
///
/// Variables are single characters; any character that is neither a
/// connective, a parenthesis, nor whitespace counts as one. The ASCII
/// operator spellings are normalized, so `p & q` and `p ∧ q` compile to
/// byte-identical plans.
///
/// # Errors
///
/// Returns [`MalformedExpression`] when the input is empty, parentheses
/// are unbalanced, or an operator appears where an operand is expected.
///
/// # Examples
///
/// ```
/// use ttable_rs::build_plan;
///
/// let plan = build_plan("( p ∧ q ) ∨ p").unwrap();
///
/// // One node per distinct subexpression, in dependency order.
/// let keys: Vec<_> = plan.keys().collect();
/// assert_eq!(keys, ["p", "q", "( p ∧ q )", "( ( p ∧ q ) ∨ p )"]);
///
/// assert!(build_plan("p ∧ (q").is_err());
/// ```
pub fn build_plan(expression: &str) -> Result<Plan, MalformedExpression> {
    debug!("build_plan({:?})", expression);

    let mut builder = Builder::default();

    // The enclosing pair balances the scan and forces the final reduction.
    builder.feed(Symbol::Open)?;
    for c in expression.chars() {
        if c.is_whitespace() {
            continue;
        }
        match Symbol::from_char(c) {
            Some(sym) => builder.feed(sym)?,
            None => builder.push_variable(c),
        }
    }
    builder.feed(Symbol::Close)?;

    builder.finish()
}

#[derive(Default)]
struct Builder {
    nodes: Vec<PlanNode>,
    index: HashMap<String, NodeId>,
    vars: Vec<NodeId>,
    operators: Vec<Symbol>,
    operands: Vec<NodeId>,
}

impl Builder {
    /// Intern a variable on first occurrence and push it as an operand.
    fn push_variable(&mut self, name: char) {
        let key = name.to_string();
        let id = match self.index.get(&key) {
            Some(&id) => id,
            None => {
                let id = NodeId::new(self.nodes.len());
                debug!("variable {} = {:?}", id, key);
                self.nodes.push(PlanNode::leaf(key.clone()));
                self.index.insert(key, id);
                self.vars.push(id);
                id
            }
        };
        self.operands.push(id);
    }

    /// Consume one scan symbol, reducing the stacks as far as its rank allows.
    fn feed(&mut self, sym: Symbol) -> Result<(), MalformedExpression> {
        if sym == Symbol::Open {
            self.operators.push(sym);
            return Ok(());
        }

        loop {
            let top = *self.operators.last().ok_or(MalformedExpression)?;
            if top == Symbol::Open || top.rank() > sym.rank() {
                break;
            }
            self.reduce_top()?;
        }

        match sym {
            // The loop above stopped at the matching open parenthesis.
            Symbol::Close => {
                self.operators.pop();
            }
            _ => self.operators.push(sym),
        }
        Ok(())
    }

    /// Pop the top operator and fold it with its operand(s) into a
    /// composite node, reusing an existing node when the canonical key is
    /// already known.
    fn reduce_top(&mut self) -> Result<(), MalformedExpression> {
        let op = match self.operators.pop() {
            Some(Symbol::Operator(op)) => op,
            top => unreachable!("reduction stopped at {:?}", top),
        };

        // The right operand was pushed second, so it pops first.
        let right = self.operands.pop().ok_or(MalformedExpression)?;
        let left = if op.is_unary() {
            None
        } else {
            Some(self.operands.pop().ok_or(MalformedExpression)?)
        };

        let id = self.intern_composite(op, left, right);
        self.operands.push(id);
        Ok(())
    }

    fn intern_composite(&mut self, op: Op, left: Option<NodeId>, right: NodeId) -> NodeId {
        let key = match left {
            None => format!("( {} {} )", op.glyph(), self.nodes[right.index()].key()),
            Some(left) => format!(
                "( {} {} {} )",
                self.nodes[left.index()].key(),
                op.glyph(),
                self.nodes[right.index()].key()
            ),
        };

        if let Some(&id) = self.index.get(&key) {
            debug!("reuse {} = {:?}", id, key);
            return id;
        }

        let id = NodeId::new(self.nodes.len());
        debug!("compose {} = {:?}", id, key);
        self.nodes.push(PlanNode::composite(key.clone(), op, left, right));
        self.index.insert(key, id);
        id
    }

    /// After the scan, exactly one operand (the root) and no operators may
    /// remain.
    fn finish(mut self) -> Result<Plan, MalformedExpression> {
        let root = self.operands.pop().ok_or(MalformedExpression)?;
        if !self.operands.is_empty() || !self.operators.is_empty() {
            return Err(MalformedExpression);
        }

        debug!("root {} = {:?}", root, self.nodes[root.index()].key());
        Ok(Plan::from_parts(self.nodes, self.index, self.vars, root))
    }
}
