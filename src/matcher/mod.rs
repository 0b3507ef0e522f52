/*
    This module matches terminal streams against a grammar

    The matcher is a memoized recursive descent over the grammar: the
    first alternative that matches in full wins, there is no backtracking
    past a memoized result and no longest-match preference.
*/

use std::collections::HashMap;

use crate::grammar::{Alternative, Grammar, Rewrite, Symbol};

// (symbol, start index) -> Some(end index) on success, None on failure.
// An absent key means the pair is unresolved; a stored None is a real
// failure. One table lives for exactly one matching run.
pub type Memo = HashMap<(Symbol, usize), Option<usize>>;

pub fn match_symbol(
    grammar: &Grammar,
    symbol: &Symbol,
    terminals: &[&str],
    index: usize,
    memo: &mut Memo,
) -> Option<usize> {
    let key = (symbol.clone(), index);
    if let Some(&resolved) = memo.get(&key) {
        return resolved;
    }

    let outcome = match symbol {
        Symbol::Terminal(name) => match_terminal(name, terminals, index),
        Symbol::Nonterminal(name) => {
            // Seed the entry with failure before expanding. A rewrite that
            // reaches this nonterminal again at the same index resolves to
            // the seed instead of recursing without end; this is the only
            // termination guard the matcher has.
            memo.insert(key.clone(), None);
            match grammar.rewrite(name) {
                Some(rewrite) => match_rewrite(grammar, rewrite, terminals, index, memo),
                None => None,
            }
        }
    };

    memo.insert(key, outcome);
    outcome
}

// Past the end of the stream every terminal fails
fn match_terminal(name: &str, terminals: &[&str], index: usize) -> Option<usize> {
    if terminals.get(index).copied() == Some(name) {
        Some(index + 1)
    } else {
        None
    }
}

// Alternatives are tried in declared order and the first full match is
// committed to
fn match_rewrite(
    grammar: &Grammar,
    rewrite: &Rewrite,
    terminals: &[&str],
    index: usize,
    memo: &mut Memo,
) -> Option<usize> {
    rewrite
        .iter()
        .find_map(|alternative| match_alternative(grammar, alternative, terminals, index, memo))
}

fn match_alternative(
    grammar: &Grammar,
    alternative: &Alternative,
    terminals: &[&str],
    index: usize,
    memo: &mut Memo,
) -> Option<usize> {
    let mut position = index;
    for symbol in alternative {
        position = match_symbol(grammar, symbol, terminals, position, memo)?;
    }
    Some(position)
}
