//! Rich diagnostic error types for the syllog engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know exactly what went wrong
//! with a command and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the syllog engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum SyllogError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Expr(#[from] ExprError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Convenience result alias used throughout the crate.
pub type SyllogResult<T> = std::result::Result<T, SyllogError>;

// ---------------------------------------------------------------------------
// Expression errors
// ---------------------------------------------------------------------------

/// Errors raised while tokenizing, compiling, or evaluating an expression.
#[derive(Debug, Error, Diagnostic)]
pub enum ExprError {
    #[error("empty expression")]
    #[diagnostic(
        code(syllog::expr::empty),
        help("The command needs a logical expression, e.g. `Query a & b`.")
    )]
    EmptyExpression,

    #[error("unbalanced parentheses in expression `{expr}`")]
    #[diagnostic(
        code(syllog::expr::unbalanced_parens),
        help("Every `(` needs a matching `)`. Check the expression and re-enter the command.")
    )]
    UnbalancedParens { expr: String },

    #[error("malformed expression `{expr}`: {reason}")]
    #[diagnostic(
        code(syllog::expr::malformed),
        help(
            "The expression does not have a valid operator/operand shape. \
             Binary operators (`&`, `|`) need two operands, `!` needs one."
        )
    )]
    Malformed { expr: String, reason: MalformedReason },
}

/// Why a postfix sequence failed to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// An operator tried to pop more operands than the stack held.
    OperandUnderflow,
    /// More than one operand remained after the final token.
    LeftoverOperands,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::OperandUnderflow => write!(f, "operand stack underflow"),
            MalformedReason::LeftoverOperands => write!(f, "leftover operands"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch errors
// ---------------------------------------------------------------------------

/// Errors raised while executing a parsed command against the knowledge base.
#[derive(Debug, Error, Diagnostic)]
pub enum DispatchError {
    #[error("command `{command}` is missing its argument")]
    #[diagnostic(
        code(syllog::dispatch::missing_argument),
        help("`Query` and `Why` take an expression; `Teach` takes a definition.")
    )]
    MissingArgument { command: String },

    #[error("failed to serialize knowledge-base snapshot: {message}")]
    #[diagnostic(
        code(syllog::dispatch::snapshot),
        help("This is an internal serialization failure; the knowledge base itself is intact.")
    )]
    Snapshot { message: String },
}
