//! Semantic equivalence of two expressions.

use log::debug;

use crate::error::MalformedExpression;
use crate::eval::truth_table;

/// Check whether two expressions denote the same boolean function.
///
/// Each side is compiled and evaluated independently and the two result
/// columns are compared position by position. The comparison is over the
/// canonical enumeration, so it is meaningful only when both sides use the
/// same variables in the same first-occurrence order; expressions over a
/// different number of variables are never equivalent, even where padding
/// with an unused variable would make them so mathematically. That is a
/// deliberate simplification, not an oversight.
///
/// # Errors
///
/// Returns [`MalformedExpression`] if either expression fails to compile.
///
/// # Examples
///
/// ```
/// use ttable_rs::are_equivalent;
///
/// assert!(are_equivalent("p ∧ q", "q ∧ p").unwrap());
/// assert!(!are_equivalent("p ∧ q", "p ∨ q").unwrap());
/// ```
pub fn are_equivalent(a: &str, b: &str) -> Result<bool, MalformedExpression> {
    let plan_a = truth_table(a)?;
    let plan_b = truth_table(b)?;

    let equivalent = plan_a.root_values() == plan_b.root_values();
    debug!(
        "are_equivalent({:?}, {:?}) -> {}",
        plan_a.root_node().key(),
        plan_b.root_node().key(),
        equivalent
    );
    Ok(equivalent)
}
