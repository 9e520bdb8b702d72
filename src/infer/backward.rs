//! Backward chaining: prove a goal on demand from facts and rules.
//!
//! A symbol proves true when it is a current fact, or when any rule with
//! that consequent has an antecedent that proves true under the same
//! recursive resolution. Rules are tried in declaration order and the
//! search short-circuits on the first success.
//!
//! Cyclic rule sets are cut by an in-progress goal set: re-entering a goal
//! that is already being resolved yields `false` for that branch instead
//! of recursing forever.

use std::collections::HashSet;

use crate::error::{SyllogError, SyllogResult};
use crate::expr::{Token, try_eval_postfix};
use crate::kb::KnowledgeBase;

/// Evaluate a compiled expression with rule-aware symbol resolution.
///
/// This is the engine behind the `Query` command: every symbol in the
/// expression is resolved by [`prove`] rather than by direct fact lookup.
pub fn query(kb: &KnowledgeBase, postfix: &[Token]) -> SyllogResult<bool> {
    let mut in_progress = HashSet::new();
    try_eval_postfix(postfix, |name| prove(kb, name, &mut in_progress))
}

/// Recursively resolve the truth of a single symbol.
///
/// `in_progress` holds the goals on the current resolution path; a goal
/// already present signals a rule cycle and resolves to `false`.
pub fn prove(
    kb: &KnowledgeBase,
    goal: &str,
    in_progress: &mut HashSet<String>,
) -> Result<bool, SyllogError> {
    if kb.is_fact(goal) {
        return Ok(true);
    }
    if !in_progress.insert(goal.to_owned()) {
        tracing::warn!(goal, "rule cycle detected, treating goal as unproven");
        return Ok(false);
    }

    let mut proven = false;
    for rule in kb.rules_for(goal) {
        if try_eval_postfix(&rule.postfix, |name| prove(kb, name, in_progress))? {
            proven = true;
            break;
        }
    }

    in_progress.remove(goal);
    Ok(proven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{to_postfix, tokenize};

    fn run(kb: &KnowledgeBase, src: &str) -> bool {
        let postfix = to_postfix(&tokenize(src).unwrap()).unwrap();
        query(kb, &postfix).unwrap()
    }

    #[test]
    fn facts_prove_directly() {
        let mut kb = KnowledgeBase::new();
        kb.assign("a", true);
        assert!(run(&kb, "a"));
        assert!(!run(&kb, "b"));
    }

    #[test]
    fn derives_through_rules_without_learn() {
        let mut kb = KnowledgeBase::new();
        kb.assign("a", true);
        kb.add_rule("a", "b").unwrap();
        kb.add_rule("b", "c").unwrap();
        // No forward chaining has run; resolution is on demand.
        assert!(run(&kb, "c"));
    }

    #[test]
    fn alternative_rules_combine_by_or() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("a", "z").unwrap();
        kb.add_rule("b", "z").unwrap();
        kb.assign("b", true);
        assert!(run(&kb, "z"));
    }

    #[test]
    fn unsupported_symbols_are_false() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("missing", "z").unwrap();
        assert!(!run(&kb, "z"));
        assert!(run(&kb, "!z"));
    }

    #[test]
    fn cycle_resolves_to_false() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("a", "b").unwrap();
        kb.add_rule("b", "a").unwrap();
        assert!(!run(&kb, "a"));
    }

    #[test]
    fn cycle_with_external_support_still_proves() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("b", "a").unwrap();
        kb.add_rule("a | c", "b").unwrap();
        kb.assign("c", true);
        // a -> b -> (a cycles to false, c is a fact) -> true.
        assert!(run(&kb, "a"));
    }

    #[test]
    fn guard_clears_between_sibling_branches() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("x", "a").unwrap();
        kb.assign("x", true);
        // `a & a`: the second resolution of `a` must not be mistaken
        // for a cycle left over from the first.
        assert!(run(&kb, "a & a"));
    }
}
