//! Tokenizer for boolean expressions.
//!
//! Splits a raw expression string into operator and symbol tokens. No
//! whitespace is required between operators and symbol names: `a&!b` and
//! `a & ! b` tokenize identically.

use crate::error::ExprError;

use super::Token;

/// Tokenize a raw expression string.
///
/// Scans left to right. Each of the five operator characters (`!`, `&`,
/// `|`, `(`, `)`) becomes a single-character token; ASCII whitespace
/// separates tokens and is discarded; any maximal run of remaining
/// characters becomes one symbol token. Symbol names are not validated.
///
/// Returns [`ExprError::EmptyExpression`] when no token is produced.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut symbol = String::new();

    let mut flush = |symbol: &mut String, tokens: &mut Vec<Token>| {
        if !symbol.is_empty() {
            tokens.push(Token::Symbol(std::mem::take(symbol)));
        }
    };

    for ch in input.chars() {
        let op = match ch {
            '!' => Some(Token::Not),
            '&' => Some(Token::And),
            '|' => Some(Token::Or),
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            _ => None,
        };
        match op {
            Some(token) => {
                flush(&mut symbol, &mut tokens);
                tokens.push(token);
            }
            None if ch.is_whitespace() => flush(&mut symbol, &mut tokens),
            None => symbol.push(ch),
        }
    }
    flush(&mut symbol, &mut tokens);

    if tokens.is_empty() {
        return Err(ExprError::EmptyExpression);
    }
    Ok(tokens)
}
