//! Forward chaining: apply rules until the fact set stops growing.

use crate::error::SyllogResult;
use crate::expr::eval_postfix;
use crate::kb::KnowledgeBase;

use super::LearnOutcome;

/// Run forward chaining to a fixpoint.
///
/// Each pass walks the full rule list; a rule whose consequent is already
/// a fact is skipped, otherwise its antecedent is evaluated with direct
/// fact lookup and a true antecedent adds the consequent. The first pass
/// that adds nothing terminates the loop, so the operation is monotonic
/// and idempotent.
///
/// No dependency ordering is attempted: worst case is one pass per link
/// of the longest rule chain, fine for small rule sets.
pub fn learn(kb: &mut KnowledgeBase) -> SyllogResult<LearnOutcome> {
    // The rule list is not mutated by learning; snapshot it so facts can
    // be added mid-pass (later rules in a pass see earlier derivations).
    let rules = kb.rules().to_vec();
    let mut derived = Vec::new();
    let mut passes = 0;

    loop {
        passes += 1;
        let mut fixed = true;
        for rule in &rules {
            if kb.is_fact(&rule.consequent) {
                continue;
            }
            if eval_postfix(&rule.postfix, |name| kb.is_fact(name))? {
                kb.add_fact(&rule.consequent);
                tracing::debug!(fact = %rule.consequent, pass = passes, "derived new fact");
                derived.push(rule.consequent.clone());
                fixed = false;
            }
        }
        if fixed {
            break;
        }
    }

    tracing::info!(
        derived = derived.len(),
        passes,
        facts = kb.fact_count(),
        "forward chaining reached fixpoint"
    );
    Ok(LearnOutcome { derived, passes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb_with_chain() -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        kb.assign("a", true);
        kb.add_rule("a", "b").unwrap();
        kb.add_rule("b", "c").unwrap();
        kb.add_rule("c & missing", "d").unwrap();
        kb
    }

    #[test]
    fn chains_to_fixpoint() {
        let mut kb = kb_with_chain();
        let outcome = learn(&mut kb).unwrap();
        assert!(kb.is_fact("b"));
        assert!(kb.is_fact("c"));
        assert!(!kb.is_fact("d"));
        assert_eq!(outcome.derived, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn idempotent() {
        let mut kb = kb_with_chain();
        learn(&mut kb).unwrap();
        let before: Vec<String> = kb.facts().map(str::to_owned).collect();

        let second = learn(&mut kb).unwrap();
        let after: Vec<String> = kb.facts().map(str::to_owned).collect();
        assert_eq!(before, after);
        assert!(second.derived.is_empty());
        assert_eq!(second.passes, 1);
    }

    #[test]
    fn monotonic() {
        let mut kb = kb_with_chain();
        let before: Vec<String> = kb.facts().map(str::to_owned).collect();
        learn(&mut kb).unwrap();
        for fact in before {
            assert!(kb.is_fact(&fact));
        }
    }

    #[test]
    fn cyclic_rules_terminate() {
        // Forward chaining is immune to rule cycles: once both consequents
        // are facts the rules are skipped and the pass derives nothing.
        let mut kb = KnowledgeBase::new();
        kb.add_rule("a", "b").unwrap();
        kb.add_rule("b", "a").unwrap();
        kb.assign("a", true);
        learn(&mut kb).unwrap();
        assert!(kb.is_fact("b"));
    }

    #[test]
    fn negation_uses_current_fact_set() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("!a", "b").unwrap();
        let outcome = learn(&mut kb).unwrap();
        assert!(kb.is_fact("b"));
        assert_eq!(outcome.derived, vec!["b".to_string()]);
    }
}
