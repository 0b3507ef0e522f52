use std::collections::HashMap;

use crate::grammar::{Alternative, Rewrite, Symbol};

use super::{RuleError, RuleErrorKind};

// Rewrites keyed by nonterminal, still carrying the line they came from
pub type IntermediateRuleset = HashMap<String, (Rewrite, usize)>;

fn alternative_undefined_symbols(
    alternative: &Alternative,
    line: usize,
    rules: &IntermediateRuleset,
) -> Vec<RuleError> {
    // Keep the nonterminals, then keep the ones without a definition
    alternative
        .iter()
        .filter_map(|symbol| match symbol {
            Symbol::Nonterminal(name) => Some(name),
            _ => None,
        })
        .filter(|name| !rules.contains_key(*name))
        .map(|name| RuleError {
            line,
            kind: RuleErrorKind::UndefinedNonterminal(name.to_owned()),
        })
        .collect()
}

fn rewrite_undefined_symbols(
    rewrite: &Rewrite,
    line: usize,
    rules: &IntermediateRuleset,
) -> Vec<RuleError> {
    rewrite
        .iter()
        .flat_map(|alternative| alternative_undefined_symbols(alternative, line, rules))
        .collect()
}

pub fn verify_rules(rules: &IntermediateRuleset) -> Vec<RuleError> {
    rules
        .iter()
        .flat_map(|(_, (rewrite, line))| rewrite_undefined_symbols(rewrite, *line, rules))
        .collect()
}
