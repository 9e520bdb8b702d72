//! The knowledge base: descriptions, facts, and rules.
//!
//! One mutable aggregate owns everything the reasoning engines operate on.
//! There is no ambient state; every component takes the knowledge base by
//! reference. Facts grow monotonically under forward chaining; the only
//! state-removing mutation is an explicit `Teach <name> = false`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ExprError;
use crate::expr::{Token, eval_postfix, to_postfix, tokenize};

/// An implication rule: when the antecedent holds, the consequent is true.
///
/// The antecedent is kept both as source text (for `List` output and
/// explanation lines) and as a compiled postfix sequence (for evaluation).
/// Multiple rules sharing a consequent combine by logical OR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Original antecedent expression text, as taught.
    pub antecedent_text: String,
    /// Compiled postfix form of the antecedent.
    pub postfix: Vec<Token>,
    /// The symbol this rule concludes.
    pub consequent: String,
}

/// The single mutable aggregate of the engine.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Human-readable descriptions, used only for display and explanations.
    descriptions: BTreeMap<String, String>,
    /// Symbols currently known true.
    facts: BTreeSet<String>,
    /// Rules in declaration order; order drives explanation priority.
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a human-readable description for a symbol.
    pub fn describe(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.descriptions.insert(name.into(), text.into());
    }

    /// The description of a symbol, falling back to the raw symbol name.
    pub fn description_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.descriptions.get(name).map_or(name, String::as_str)
    }

    /// Assign a truth value directly. `true` adds a fact, `false` removes it.
    pub fn assign(&mut self, name: &str, value: bool) {
        if value {
            self.facts.insert(name.to_owned());
        } else {
            self.facts.remove(name);
        }
    }

    /// Add a symbol to the fact set. Returns `true` if it was new.
    pub fn add_fact(&mut self, name: &str) -> bool {
        self.facts.insert(name.to_owned())
    }

    /// Whether a symbol is a current fact.
    pub fn is_fact(&self, name: &str) -> bool {
        self.facts.contains(name)
    }

    /// Compile and store a rule `antecedent -> consequent`.
    ///
    /// The compiled antecedent is shape-checked with a dry-run evaluation,
    /// so a rule that could never evaluate (e.g. `a b`) is rejected here
    /// instead of failing every later `Learn` or `Query` that reaches it.
    pub fn add_rule(
        &mut self,
        antecedent_text: &str,
        consequent: &str,
    ) -> Result<(), ExprError> {
        let postfix = to_postfix(&tokenize(antecedent_text)?)?;
        eval_postfix(&postfix, |_| false)?;
        tracing::debug!(antecedent = antecedent_text, consequent, "storing rule");
        self.rules.push(Rule {
            antecedent_text: antecedent_text.trim().to_owned(),
            postfix,
            consequent: consequent.to_owned(),
        });
        Ok(())
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules whose consequent is `name`, in declaration order.
    pub fn rules_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Rule> {
        self.rules.iter().filter(move |rule| rule.consequent == name)
    }

    /// Descriptions, sorted by symbol name.
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.descriptions
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Current facts, sorted by name.
    pub fn facts(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(String::as_str)
    }

    /// Number of current facts.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }
}
