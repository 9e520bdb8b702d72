//! Explained backward chaining: the engine behind the `Why` command.
//!
//! Resolution order is identical to [`backward`](super::backward), so `Why`
//! and `Query` always agree on the verdict. Each step additionally carries
//! a description of what was (or was not) proven and appends to an ordered
//! list of reasoning lines:
//!
//! - operator steps: `I THUS KNOW THAT …` / `THUS I CANNOT PROVE …`
//! - plain symbols: `I KNOW THAT …` / `I KNOW IT IS NOT TRUE THAT …`
//! - rule-backed symbols: `BECAUSE <antecedent> I KNOW THAT …`, or one
//!   `BECAUSE IT IS NOT TRUE THAT <antecedent> I CANNOT PROVE …` per
//!   failed rule.
//!
//! The first rule that proves wins: only its trace is kept. When every
//! rule fails, the traces of all attempted rules are kept.

use std::collections::HashSet;

use crate::error::{ExprError, MalformedReason, SyllogError, SyllogResult};
use crate::expr::Token;
use crate::kb::KnowledgeBase;

use super::Proof;

/// One resolved operand: its truth value and its display text.
#[derive(Debug, Clone)]
struct Step {
    value: bool,
    text: String,
}

/// Evaluate a compiled expression, producing a verdict and a proof trace.
pub fn explain(kb: &KnowledgeBase, postfix: &[Token]) -> SyllogResult<Proof> {
    let mut in_progress = HashSet::new();
    let mut lines = Vec::new();
    let step = explain_postfix(kb, postfix, &mut in_progress, &mut lines)?;
    Ok(Proof {
        value: step.value,
        text: step.text,
        lines,
    })
}

fn explain_postfix(
    kb: &KnowledgeBase,
    postfix: &[Token],
    in_progress: &mut HashSet<String>,
    lines: &mut Vec<String>,
) -> Result<Step, SyllogError> {
    let mut operands: Vec<Step> = Vec::new();

    let underflow = || {
        SyllogError::from(ExprError::Malformed {
            expr: crate::expr::render(postfix),
            reason: MalformedReason::OperandUnderflow,
        })
    };

    for token in postfix {
        match token {
            Token::And | Token::Or => {
                let rhs = operands.pop().ok_or_else(underflow)?;
                let lhs = operands.pop().ok_or_else(underflow)?;
                let (value, word) = match token {
                    Token::And => (lhs.value && rhs.value, "AND"),
                    _ => (lhs.value || rhs.value, "OR"),
                };
                // Infix text in original operand order.
                let text = format!("({} {word} {})", lhs.text, rhs.text);
                lines.push(connective_line(value, &text));
                operands.push(Step { value, text });
            }
            Token::Not => {
                let operand = operands.pop().ok_or_else(underflow)?;
                let value = !operand.value;
                let text = format!("(NOT {})", operand.text);
                lines.push(connective_line(value, &text));
                operands.push(Step { value, text });
            }
            Token::Symbol(name) => {
                let step = explain_symbol(kb, name, in_progress, lines)?;
                operands.push(step);
            }
            Token::OpenParen | Token::CloseParen => return Err(underflow()),
        }
    }

    match operands.len() {
        1 => Ok(operands.pop().unwrap()),
        0 => Err(ExprError::EmptyExpression.into()),
        _ => Err(ExprError::Malformed {
            expr: crate::expr::render(postfix),
            reason: MalformedReason::LeftoverOperands,
        }
        .into()),
    }
}

fn connective_line(value: bool, text: &str) -> String {
    if value {
        format!("I THUS KNOW THAT {text}")
    } else {
        format!("THUS I CANNOT PROVE {text}")
    }
}

/// Resolve one symbol, appending its reasoning lines.
///
/// Facts are checked before rules, mirroring plain backward chaining.
/// A goal already on the resolution path (rule cycle) is reported like an
/// unprovable plain symbol instead of expanding its rules again.
fn explain_symbol(
    kb: &KnowledgeBase,
    name: &str,
    in_progress: &mut HashSet<String>,
    lines: &mut Vec<String>,
) -> Result<Step, SyllogError> {
    let description = kb.description_of(name).to_owned();

    if kb.is_fact(name) {
        lines.push(format!("I KNOW THAT {description}"));
        return Ok(Step {
            value: true,
            text: description,
        });
    }

    let cycling = !in_progress.insert(name.to_owned());
    if cycling {
        tracing::warn!(goal = name, "rule cycle detected, treating goal as unproven");
    }

    let rules: Vec<_> = if cycling {
        Vec::new()
    } else {
        kb.rules_for(name).collect()
    };

    if rules.is_empty() {
        if !cycling {
            in_progress.remove(name);
        }
        lines.push(format!("I KNOW IT IS NOT TRUE THAT {description}"));
        return Ok(Step {
            value: false,
            text: description,
        });
    }

    // Try each rule in declaration order. The first success keeps only its
    // own trace; a total failure keeps every attempted trace.
    let mut failed: Vec<(Vec<String>, String)> = Vec::new();
    let mut result = None;

    for rule in rules {
        let mut sub_lines = Vec::new();
        let step = explain_postfix(kb, &rule.postfix, in_progress, &mut sub_lines)?;
        if step.value {
            lines.extend(sub_lines);
            lines.push(format!(
                "BECAUSE {} I KNOW THAT {description}",
                rule.antecedent_text
            ));
            result = Some(true);
            break;
        }
        failed.push((sub_lines, rule.antecedent_text.clone()));
    }

    let value = result.unwrap_or_else(|| {
        for (sub_lines, antecedent) in failed {
            lines.extend(sub_lines);
            lines.push(format!(
                "BECAUSE IT IS NOT TRUE THAT {antecedent} I CANNOT PROVE {description}"
            ));
        }
        false
    });

    in_progress.remove(name);
    Ok(Step {
        value,
        text: description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{to_postfix, tokenize};
    use crate::infer::query;

    fn run(kb: &KnowledgeBase, src: &str) -> Proof {
        let postfix = to_postfix(&tokenize(src).unwrap()).unwrap();
        explain(kb, &postfix).unwrap()
    }

    #[test]
    fn plain_fact_and_non_fact() {
        let mut kb = KnowledgeBase::new();
        kb.assign("a", true);

        let proof = run(&kb, "a");
        assert!(proof.value);
        assert_eq!(proof.lines, vec!["I KNOW THAT a"]);

        let proof = run(&kb, "x");
        assert!(!proof.value);
        assert_eq!(proof.lines, vec!["I KNOW IT IS NOT TRUE THAT x"]);
    }

    #[test]
    fn descriptions_replace_symbol_names() {
        let mut kb = KnowledgeBase::new();
        kb.describe("rain", "it is raining");

        let proof = run(&kb, "rain");
        assert_eq!(proof.lines, vec!["I KNOW IT IS NOT TRUE THAT it is raining"]);
    }

    #[test]
    fn connectives_report_in_original_operand_order() {
        let mut kb = KnowledgeBase::new();
        kb.assign("a", true);

        let proof = run(&kb, "a & b");
        assert!(!proof.value);
        assert_eq!(proof.text, "(a AND b)");
        assert_eq!(
            proof.lines,
            vec![
                "I KNOW THAT a",
                "I KNOW IT IS NOT TRUE THAT b",
                "THUS I CANNOT PROVE (a AND b)",
            ]
        );
    }

    #[test]
    fn negation_text() {
        let kb = KnowledgeBase::new();
        let proof = run(&kb, "!c");
        assert!(proof.value);
        assert_eq!(
            proof.lines,
            vec![
                "I KNOW IT IS NOT TRUE THAT c",
                "I THUS KNOW THAT (NOT c)",
            ]
        );
    }

    #[test]
    fn first_true_rule_wins_and_keeps_only_its_trace() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("a", "z").unwrap();
        kb.add_rule("b", "z").unwrap();
        kb.assign("b", true);

        let proof = run(&kb, "z");
        assert!(proof.value);
        // The failing `a` attempt leaves no lines; only the `b` branch is kept.
        assert_eq!(
            proof.lines,
            vec!["I KNOW THAT b", "BECAUSE b I KNOW THAT z"]
        );
    }

    #[test]
    fn all_failed_rules_are_reported() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("a", "z").unwrap();
        kb.add_rule("b", "z").unwrap();

        let proof = run(&kb, "z");
        assert!(!proof.value);
        assert_eq!(
            proof.lines,
            vec![
                "I KNOW IT IS NOT TRUE THAT a",
                "BECAUSE IT IS NOT TRUE THAT a I CANNOT PROVE z",
                "I KNOW IT IS NOT TRUE THAT b",
                "BECAUSE IT IS NOT TRUE THAT b I CANNOT PROVE z",
            ]
        );
    }

    #[test]
    fn why_agrees_with_query() {
        let mut kb = KnowledgeBase::new();
        kb.assign("p", true);
        kb.assign("q", true);
        kb.add_rule("p & q", "r").unwrap();
        kb.add_rule("r | s", "t").unwrap();
        kb.add_rule("t", "s").unwrap();

        for src in ["p", "q & !p", "r", "t", "s", "(p | x) & t", "x"] {
            let postfix = to_postfix(&tokenize(src).unwrap()).unwrap();
            let proof = explain(&kb, &postfix).unwrap();
            let verdict = query(&kb, &postfix).unwrap();
            assert_eq!(proof.value, verdict, "divergence on `{src}`");
        }
    }

    #[test]
    fn cycle_reports_goal_as_unproven() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule("b", "a").unwrap();
        kb.add_rule("a", "b").unwrap();

        let proof = run(&kb, "a");
        assert!(!proof.value);
        // The inner `a` is cut by the cycle guard and reads like a plain
        // unprovable symbol.
        assert_eq!(
            proof.lines,
            vec![
                "I KNOW IT IS NOT TRUE THAT a",
                "BECAUSE IT IS NOT TRUE THAT a I CANNOT PROVE b",
                "BECAUSE IT IS NOT TRUE THAT b I CANNOT PROVE a",
            ]
        );
    }
}
