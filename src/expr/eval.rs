//! Stack-based evaluation of postfix token sequences.
//!
//! The evaluator is generic over a symbol-resolution function, so the same
//! walk serves both direct fact lookup (forward chaining) and rule-aware
//! lookup (backward chaining), which recurses through the rule set.

use crate::error::{ExprError, MalformedReason};

use super::{Token, render};

/// Evaluate a postfix sequence with an infallible symbol resolver.
///
/// Binary operators pop two operands, `!` pops one, symbols push
/// `resolve(name)`. Operand-stack underflow and leftover operands are
/// [`ExprError::Malformed`]: a malformed expression shape, distinct from
/// a normal `false` result.
pub fn eval_postfix(
    postfix: &[Token],
    mut resolve: impl FnMut(&str) -> bool,
) -> Result<bool, ExprError> {
    try_eval_postfix(postfix, |name| Ok(resolve(name)))
}

/// Evaluate a postfix sequence with a fallible symbol resolver.
///
/// Used by rule-aware resolution, where resolving a symbol may itself
/// evaluate rule antecedents and fail on a malformed stored rule.
pub fn try_eval_postfix<E: From<ExprError>>(
    postfix: &[Token],
    mut resolve: impl FnMut(&str) -> Result<bool, E>,
) -> Result<bool, E> {
    let mut operands: Vec<bool> = Vec::new();

    let underflow = || {
        E::from(ExprError::Malformed {
            expr: render(postfix),
            reason: MalformedReason::OperandUnderflow,
        })
    };

    for token in postfix {
        match token {
            Token::And => {
                let rhs = operands.pop().ok_or_else(underflow)?;
                let lhs = operands.pop().ok_or_else(underflow)?;
                operands.push(lhs && rhs);
            }
            Token::Or => {
                let rhs = operands.pop().ok_or_else(underflow)?;
                let lhs = operands.pop().ok_or_else(underflow)?;
                operands.push(lhs || rhs);
            }
            Token::Not => {
                let operand = operands.pop().ok_or_else(underflow)?;
                operands.push(!operand);
            }
            Token::Symbol(name) => operands.push(resolve(name)?),
            Token::OpenParen | Token::CloseParen => {
                // Parentheses never survive compilation; seeing one means
                // the sequence was not produced by `to_postfix`.
                return Err(underflow());
            }
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(E::from(ExprError::EmptyExpression)),
        _ => Err(E::from(ExprError::Malformed {
            expr: render(postfix),
            reason: MalformedReason::LeftoverOperands,
        })),
    }
}
