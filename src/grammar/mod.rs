/*
    This module is for storing grammars over token-category terminals
*/

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::rules;

// The base unit in a grammar rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name) => name,
        }
    }
}

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule, in declared order
pub type Rewrite = Vec<Alternative>;

#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    pub start_symbol: String,
    pub rules: HashMap<String, Rewrite>,
}

impl Grammar {
    pub fn rewrite(&self, nonterminal: &str) -> Option<&Rewrite> {
        self.rules.get(nonterminal)
    }

    pub fn defines(&self, nonterminal: &str) -> bool {
        self.rules.contains_key(nonterminal)
    }
}

const ENGLISH_RULES: &str = include_str!("english.rules");

static ENGLISH: Lazy<Grammar> =
    Lazy::new(|| rules::parse_str(ENGLISH_RULES).expect("embedded English grammar is well formed"));

// The hand-authored English surface grammar. Parsed once on first use and
// shared read-only afterwards.
pub fn english() -> &'static Grammar {
    &ENGLISH
}
