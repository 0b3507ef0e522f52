/*
    This module checks semantic well-formedness over the dependency tree
*/

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::annotate::Token;

// Verbs that take a prepositional complement rather than a bare direct
// object: "listens to the radio", not "listens the radio"
static PREPOSITIONAL_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["go", "arrive", "return", "travel", "listen", "depend", "believe"].into()
});

/// A verb that governs a direct object where a preposition was required
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingPreposition {
    pub verb: String,
    pub object: String,
}

/// Outcome of every dependency rule, kept separate so a caller can show
/// which one failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub has_subject: bool,
    pub has_verb: bool,
    pub missing_prepositions: Vec<MissingPreposition>,
}

impl DependencyReport {
    pub fn is_valid(&self) -> bool {
        self.has_subject && self.has_verb && self.missing_prepositions.is_empty()
    }
}

pub fn check_dependencies(tokens: &[Token]) -> DependencyReport {
    let has_subject = tokens
        .iter()
        .any(|token| token.dep == "nsubj" || token.dep == "nsubjpass");
    let has_verb = tokens
        .iter()
        .any(|token| token.pos == "VERB" || token.pos == "AUX");

    let mut missing_prepositions = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        if token.pos != "VERB" {
            continue;
        }
        if !PREPOSITIONAL_VERBS.contains(token.lemma.to_lowercase().as_str()) {
            continue;
        }

        let object = children(tokens, index).find(|child| child.dep == "dobj");
        let has_preposition = children(tokens, index).any(|child| child.dep == "prep");
        if let Some(object) = object {
            if !has_preposition {
                missing_prepositions.push(MissingPreposition {
                    verb: token.text.clone(),
                    object: object.text.clone(),
                });
            }
        }
    }

    DependencyReport {
        has_subject,
        has_verb,
        missing_prepositions,
    }
}

// The sentence root has itself as head and must not count as its own child
fn children(tokens: &[Token], head: usize) -> impl Iterator<Item = &Token> {
    tokens
        .iter()
        .enumerate()
        .filter(move |(index, token)| token.head == head && *index != head)
        .map(|(_, token)| token)
}
