//! Infix → postfix compilation (shunting-yard).
//!
//! Precedence, highest first: `!` (3) > `&` (2) > `|` (1) > `(` (0).
//! An incoming operator pops the stack while the top has precedence
//! greater than *or equal to* its own, which makes the binary operators
//! left-associative and lets a `!` directly following another `!` pop the
//! earlier one first.

use crate::error::ExprError;

use super::{Token, render};

/// Compile an infix token sequence into postfix (Reverse Polish) order.
///
/// Symbols are emitted immediately; operators go through an explicit
/// operator stack; parentheses only group and never reach the output.
/// Mismatched parentheses produce [`ExprError::UnbalancedParens`] rather
/// than a panic, so one bad command cannot take down a session.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ExprError> {
    let mut operators: Vec<Token> = Vec::new();
    let mut postfix: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Symbol(_) => postfix.push(token.clone()),
            Token::OpenParen => operators.push(Token::OpenParen),
            Token::CloseParen => loop {
                match operators.pop() {
                    Some(Token::OpenParen) => break,
                    Some(op) => postfix.push(op),
                    None => {
                        return Err(ExprError::UnbalancedParens {
                            expr: render(tokens),
                        });
                    }
                }
            },
            op if op.is_operator() => {
                while operators
                    .last()
                    .is_some_and(|top| top.precedence() >= op.precedence())
                {
                    postfix.push(operators.pop().unwrap());
                }
                operators.push(op.clone());
            }
            _ => unreachable!(),
        }
    }

    while let Some(op) = operators.pop() {
        if op == Token::OpenParen {
            return Err(ExprError::UnbalancedParens {
                expr: render(tokens),
            });
        }
        postfix.push(op);
    }

    Ok(postfix)
}
