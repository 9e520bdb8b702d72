//! Boolean expressions over named symbols.
//!
//! The pipeline is three small stages:
//! 1. **Tokenize** (`lexer`): raw text → operator/symbol tokens
//! 2. **Compile** (`compile`): infix token order → postfix (shunting-yard)
//! 3. **Evaluate** (`eval`): postfix + a symbol resolver → a boolean

pub mod compile;
pub mod eval;
pub mod lexer;

pub use compile::to_postfix;
pub use eval::{eval_postfix, try_eval_postfix};
pub use lexer::tokenize;

/// A single lexical token of a boolean expression.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    /// Unary negation `!`.
    Not,
    /// Logical conjunction `&`.
    And,
    /// Logical disjunction `|`.
    Or,
    /// Opening parenthesis (never survives compilation).
    OpenParen,
    /// Closing parenthesis (never survives compilation).
    CloseParen,
    /// A named symbol; any maximal run of non-operator characters.
    Symbol(String),
}

impl Token {
    /// Binding strength used by the shunting-yard compiler.
    ///
    /// `OpenParen` sits at 0 so it acts as a pop barrier on the operator
    /// stack without ever being emitted by precedence comparison.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Token::Not => 3,
            Token::And => 2,
            Token::Or => 1,
            Token::OpenParen => 0,
            Token::CloseParen | Token::Symbol(_) => unreachable!("no stack precedence"),
        }
    }

    /// Whether this token is one of the three logical operators.
    pub(crate) fn is_operator(&self) -> bool {
        matches!(self, Token::Not | Token::And | Token::Or)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Not => write!(f, "!"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Symbol(name) => write!(f, "{name}"),
        }
    }
}

/// Render a token slice back to a compact expression string.
///
/// Used in error messages where the original source text is not at hand.
pub(crate) fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
