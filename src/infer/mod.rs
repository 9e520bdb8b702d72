//! Reasoning engines over the knowledge base.
//!
//! - **Forward chaining** (`forward`): run all rules to a fixpoint, growing
//!   the fact set ("Learn").
//! - **Backward chaining** (`backward`): prove a goal on demand by searching
//!   facts and rules recursively ("Query").
//! - **Explanation** (`explain`): backward chaining that additionally builds
//!   a natural-language proof trace ("Why").

pub mod backward;
pub mod explain;
pub mod forward;

pub use backward::query;
pub use explain::explain;
pub use forward::learn;

/// Result of one `Learn` run.
#[derive(Debug, Clone)]
pub struct LearnOutcome {
    /// Facts derived during this run, in derivation order.
    pub derived: Vec<String>,
    /// Number of full passes over the rule list, including the final
    /// pass that derived nothing.
    pub passes: usize,
}

/// Result of an explained evaluation.
#[derive(Debug, Clone)]
pub struct Proof {
    /// The boolean verdict, identical to what `Query` would return.
    pub value: bool,
    /// Infix-style description text of the whole expression.
    pub text: String,
    /// Ordered natural-language reasoning lines.
    pub lines: Vec<String>,
}
