//! Command protocol: parse input lines into structured commands and run
//! them against a session's knowledge base.
//!
//! One command per line, first word selects the command:
//!
//! ```text
//! Teach wet = "the grass is wet"
//! Teach rain = true
//! Teach rain | sprinkler -> wet
//! Learn
//! Query wet
//! Why wet
//! List
//! ```
//!
//! Unknown commands and blank lines are silently ignored. A malformed
//! expression fails only the offending command; facts and rules already
//! stored are untouched.

use crate::error::{DispatchError, SyllogResult};
use crate::export::KbSnapshot;
use crate::infer::{self, LearnOutcome};
use crate::kb::KnowledgeBase;

/// A structured command, decoupled from its line syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List descriptions, facts, and rules.
    List,
    /// Run forward chaining to a fixpoint.
    Learn,
    /// Evaluate an expression via backward chaining.
    Query { expr: String },
    /// Evaluate an expression and produce a proof trace.
    Why { expr: String },
    /// Register a human-readable description for a symbol.
    Describe { name: String, text: String },
    /// Directly assign a truth value to a symbol.
    Assign { name: String, value: bool },
    /// Store a rule `antecedent -> consequent`.
    Imply { antecedent: String, consequent: String },
}

/// Parse one input line. Returns `None` for blank or unrecognized lines,
/// which the protocol ignores silently.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "List" => Some(Command::List),
        "Learn" => Some(Command::Learn),
        "Query" => Some(Command::Query { expr: rest.to_owned() }),
        "Why" => Some(Command::Why { expr: rest.to_owned() }),
        "Teach" => parse_teach(rest),
        _ => {
            if !line.is_empty() {
                tracing::debug!(line, "ignoring unknown command");
            }
            None
        }
    }
}

/// Parse the three `Teach` forms: description, assignment, rule.
///
/// The `=` forms are checked before the rule form, so a description whose
/// text happens to contain an arrow stays a description.
fn parse_teach(rest: &str) -> Option<Command> {
    if let Some((name, value)) = rest.split_once('=') {
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() {
            return None;
        }

        if let Some(text) = value.strip_prefix('"') {
            // The closing quote is required; an unterminated description
            // is ignored like any other malformed Teach form.
            let text = text.strip_suffix('"')?;
            return Some(Command::Describe {
                name: name.to_owned(),
                text: text.to_owned(),
            });
        }

        return match value.to_ascii_lowercase().as_str() {
            "true" => Some(Command::Assign { name: name.to_owned(), value: true }),
            "false" => Some(Command::Assign { name: name.to_owned(), value: false }),
            _ => None,
        };
    }

    let (lhs, rhs) = rest.split_once("->")?;
    let antecedent = lhs.trim();
    let consequent = rhs.trim();
    if antecedent.is_empty() || consequent.is_empty() {
        return None;
    }
    Some(Command::Imply {
        antecedent: antecedent.to_owned(),
        consequent: consequent.to_owned(),
    })
}

/// A command session: owns the knowledge base for the process lifetime and
/// executes commands strictly sequentially.
#[derive(Debug, Default)]
pub struct Session {
    kb: KnowledgeBase,
}

impl Session {
    /// Create a session with an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the knowledge base, mainly for tests and export.
    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Parse and execute one input line. Ignored lines produce no output.
    pub fn run_line(&mut self, line: &str) -> SyllogResult<Vec<String>> {
        match parse_line(line) {
            Some(command) => self.execute(command),
            None => Ok(Vec::new()),
        }
    }

    /// Execute a structured command, returning the lines to display.
    pub fn execute(&mut self, command: Command) -> SyllogResult<Vec<String>> {
        match command {
            Command::List => Ok(self.list()),
            Command::Learn => {
                let LearnOutcome { derived, passes } = infer::learn(&mut self.kb)?;
                tracing::debug!(derived = derived.len(), passes, "Learn finished");
                Ok(Vec::new())
            }
            Command::Query { expr } => {
                let postfix = compile_argument("Query", &expr)?;
                let verdict = infer::query(&self.kb, &postfix)?;
                Ok(vec![verdict.to_string()])
            }
            Command::Why { expr } => {
                let postfix = compile_argument("Why", &expr)?;
                let proof = infer::explain(&self.kb, &postfix)?;
                let mut out = vec![proof.value.to_string()];
                out.extend(proof.lines);
                Ok(out)
            }
            Command::Describe { name, text } => {
                self.kb.describe(name, text);
                Ok(Vec::new())
            }
            Command::Assign { name, value } => {
                self.kb.assign(&name, value);
                Ok(Vec::new())
            }
            Command::Imply { antecedent, consequent } => {
                self.kb.add_rule(&antecedent, &consequent)?;
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the knowledge base as pretty-printed JSON.
    pub fn snapshot_json(&self) -> SyllogResult<String> {
        let snapshot = KbSnapshot::of(&self.kb);
        serde_json::to_string_pretty(&snapshot).map_err(|e| {
            DispatchError::Snapshot {
                message: e.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.push("Variables:".to_owned());
        for (name, text) in self.kb.descriptions() {
            out.push(format!("\t{name} = {text}"));
        }
        out.push("Facts:".to_owned());
        for name in self.kb.facts() {
            out.push(format!("\t{name}"));
        }
        out.push("Rules:".to_owned());
        for rule in self.kb.rules() {
            out.push(format!("\t{} -> {}", rule.antecedent_text, rule.consequent));
        }
        out
    }
}

fn compile_argument(
    command: &str,
    expr: &str,
) -> SyllogResult<Vec<crate::expr::Token>> {
    if expr.trim().is_empty() {
        return Err(DispatchError::MissingArgument {
            command: command.to_owned(),
        }
        .into());
    }
    let tokens = crate::expr::tokenize(expr)?;
    Ok(crate::expr::to_postfix(&tokens)?)
}
