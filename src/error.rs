//! Error types for plan building.

use thiserror::Error;

/// The single failure mode of [`build_plan`][crate::build::build_plan].
///
/// Raised when a reduction needs an operand or operator that is not there
/// (unbalanced parentheses, an operator where an operand was expected) or
/// when the scan ends with leftover symbols, including the empty-input case.
/// No partial plan is usable after this. Distinguishing "empty input" from
/// "unbalanced" is left to the presentation layer; the core reports one
/// uniform signal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("malformed expression: unbalanced symbols or missing operand")]
pub struct MalformedExpression;
