/*
    This module decides whether a sentence derives from the start symbol
*/

use tracing::debug;

use crate::annotate::Token;
use crate::categorize::terminal_stream;
use crate::grammar::{Grammar, Symbol};
use crate::matcher::{match_symbol, Memo};

// A match that leaves trailing terminals is a rejection; only a full
// consumption of the stream accepts. The memo table is fresh per call
// and dies with it.
pub fn is_structurally_valid(grammar: &Grammar, tokens: &[Token]) -> bool {
    let terminals = terminal_stream(tokens);
    let start = Symbol::Nonterminal(grammar.start_symbol.clone());

    let mut memo = Memo::new();
    let matched = match_symbol(grammar, &start, &terminals, 0, &mut memo);
    debug!(?terminals, ?matched, "structural match finished");

    matched == Some(terminals.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    fn token(text: &str, tag: &str, dep: &str) -> Token {
        Token {
            text: text.to_string(),
            tag: tag.to_string(),
            pos: String::new(),
            dep: dep.to_string(),
            head: 0,
            lemma: text.to_lowercase(),
        }
    }

    #[test]
    fn full_consumption_accepts() {
        let grammar = rules::parse_str("S = \"NN\" \"VB\" \".\"\n").unwrap();
        let tokens = vec![
            token("Birds", "NNS", "nsubj"),
            token("fly", "VBP", "ROOT"),
            token(".", ".", "punct"),
        ];

        assert!(is_structurally_valid(&grammar, &tokens));
    }

    #[test]
    fn prefix_match_is_not_acceptance() {
        // S matches the first terminal and stops; the trailing VB must
        // invalidate the sentence
        let grammar = rules::parse_str("S = \"NN\"\n").unwrap();
        let tokens = vec![token("birds", "NNS", "nsubj"), token("fly", "VBP", "ROOT")];

        assert!(!is_structurally_valid(&grammar, &tokens));
    }

    #[test]
    fn unmapped_tokens_vanish_from_the_stream() {
        // The numeral has no category, so the stream is NN VB and the
        // sentence passes despite the extra token
        let grammar = rules::parse_str("S = \"NN\" \"VB\"\n").unwrap();
        let tokens = vec![
            token("dogs", "NNS", "nsubj"),
            token("42", "CD", "nummod"),
            token("sleep", "VBP", "ROOT"),
        ];

        assert!(is_structurally_valid(&grammar, &tokens));
    }

    #[test]
    fn empty_stream_is_rejected() {
        let grammar = rules::parse_str("S = \"NN\"\n").unwrap();

        assert!(!is_structurally_valid(&grammar, &[]));
        // A sentence of only unmapped tokens degenerates to the same thing
        assert!(!is_structurally_valid(&grammar, &[token("42", "CD", "nummod")]));
    }

    #[test]
    fn validation_is_idempotent() {
        let grammar = rules::parse_str("S = \"NN\" \"VB\"\n").unwrap();
        let tokens = vec![token("dogs", "NNS", "nsubj"), token("sleep", "VBP", "ROOT")];

        let first = is_structurally_valid(&grammar, &tokens);
        let second = is_structurally_valid(&grammar, &tokens);

        assert_eq!(first, second);
        assert!(first);
    }
}
