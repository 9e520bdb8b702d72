//! Export types for serializing knowledge-base state.
//!
//! These are human-readable JSON views, decoupled from the internal
//! representation so the snapshot format stays stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kb::KnowledgeBase;

/// Exported rule with its antecedent source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleExport {
    /// Antecedent expression, as taught.
    pub antecedent: String,
    /// The concluded symbol.
    pub consequent: String,
}

/// Full snapshot of a knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KbSnapshot {
    /// Symbol descriptions, sorted by name.
    pub variables: BTreeMap<String, String>,
    /// Current facts, sorted by name.
    pub facts: Vec<String>,
    /// Rules in declaration order.
    pub rules: Vec<RuleExport>,
}

impl KbSnapshot {
    /// Build a snapshot of the given knowledge base.
    pub fn of(kb: &KnowledgeBase) -> Self {
        Self {
            variables: kb
                .descriptions()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
            facts: kb.facts().map(str::to_owned).collect(),
            rules: kb
                .rules()
                .iter()
                .map(|rule| RuleExport {
                    antecedent: rule.antecedent_text.clone(),
                    consequent: rule.consequent.clone(),
                })
                .collect(),
        }
    }
}
