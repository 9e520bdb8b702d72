//! # syllog
//!
//! A tiny boolean knowledge engine: infix logical expressions over named
//! symbols are compiled to postfix and evaluated against a mutable fact
//! set, with two reasoning modes on top.
//!
//! ## Architecture
//!
//! - **Expressions** (`expr`): tokenizer, shunting-yard infix→postfix
//!   compiler, and a stack-based postfix evaluator generic over symbol
//!   resolution
//! - **Knowledge base** (`kb`): descriptions, facts, and rules in one
//!   mutable aggregate
//! - **Inference** (`infer`): forward chaining to a fixpoint (`Learn`),
//!   backward chaining (`Query`), and explained backward chaining with
//!   proof traces (`Why`)
//! - **Dispatch** (`dispatch`): the line-oriented command protocol
//!
//! ## Library usage
//!
//! ```
//! use syllog::kb::KnowledgeBase;
//! use syllog::expr::{tokenize, to_postfix};
//! use syllog::infer;
//!
//! let mut kb = KnowledgeBase::new();
//! kb.assign("rain", true);
//! kb.add_rule("rain | sprinkler", "wet").unwrap();
//!
//! let expr = to_postfix(&tokenize("wet & !frozen").unwrap()).unwrap();
//! assert!(infer::query(&kb, &expr).unwrap());
//! ```

pub mod dispatch;
pub mod error;
pub mod export;
pub mod expr;
pub mod infer;
pub mod kb;

pub use error::{SyllogError, SyllogResult};
