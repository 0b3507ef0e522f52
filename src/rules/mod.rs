/*
    This module parses grammar rule text into a Grammar

    The format is line oriented: `S = NP VP | NP VP "."`. Bare names are
    nonterminals, double-quoted names are terminal token categories. Blank
    lines and lines starting with `;` are skipped. The left-hand side of
    the first rule becomes the start symbol.
*/

mod lexer;
mod verifier;

use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

use crate::grammar::{Alternative, Grammar, Rewrite, Symbol};
use lexer::{lex_line, Token};
use verifier::verify_rules;

#[derive(Error, Debug, PartialEq)]
pub enum RuleErrorKind {
    // A line which should contain a rule does not
    #[error("expected `=` after nonterminal")]
    MissingEquals,
    // A rule has stray equals signs after the first
    #[error("unexpected `=` encountered")]
    UnexpectedEquals,
    // The line starts with something other than a nonterminal
    #[error("tried to define something other than a nonterminal")]
    MissingNonterminal,
    // There is an unclosed quote
    #[error("unmatched quotes")]
    UnmatchedQuote,
    // An alternative with no symbols, e.g. a trailing `|`
    #[error("empty alternative")]
    EmptyAlternative,
    // The same nonterminal is defined on two lines
    #[error("`{0}` is already defined")]
    DuplicateRule(String),
    // An undefined bare name was used on a right-hand side
    #[error("could not find definition for `{0}`")]
    UndefinedNonterminal(String),
    // The source contained no rules at all
    #[error("no rules defined")]
    EmptyGrammar,
}

#[derive(Error, Debug, PartialEq)]
#[error("line {line}: {kind}")]
pub struct RuleError {
    pub line: usize,
    pub kind: RuleErrorKind,
}

#[derive(Error, Debug, PartialEq)]
pub struct RuleErrors(pub Vec<RuleError>);

impl std::fmt::Display for RuleErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

type LineResult<T> = Result<T, RuleErrorKind>;

#[derive(PartialEq, Debug)]
struct Rule {
    symbol: String,
    rewrite: Rewrite,
    line: usize,
}

fn parse_alternative(tokens: &[Token]) -> LineResult<Alternative> {
    if tokens.is_empty() {
        return Err(RuleErrorKind::EmptyAlternative);
    }

    tokens
        .iter()
        .map(|t| match t {
            Token::Equals => Err(RuleErrorKind::UnexpectedEquals),
            Token::Or => unreachable!("alternatives are split on `|` before parsing"),
            Token::Nonterminal(s) => Ok(Symbol::Nonterminal(s.clone())),
            Token::Terminal(s) => Ok(Symbol::Terminal(s.clone())),
        })
        .collect()
}

fn parse_rewrite(tokens: &[Token]) -> LineResult<Rewrite> {
    tokens
        .split(|t| *t == Token::Or)
        .map(parse_alternative)
        .collect()
}

fn parse_rule(tokens: &[Token], line: usize) -> LineResult<Rule> {
    let symbol = match tokens.first() {
        Some(Token::Nonterminal(s)) => Ok(s.clone()),
        _ => Err(RuleErrorKind::MissingNonterminal),
    }?;

    if tokens.get(1) != Some(&Token::Equals) {
        return Err(RuleErrorKind::MissingEquals);
    }

    let rewrite = parse_rewrite(&tokens[2..])?;

    Ok(Rule {
        symbol,
        rewrite,
        line,
    })
}

fn parse_rule_line(line: &str, number: usize) -> Result<Rule, RuleError> {
    lex_line(line)
        .and_then(|tokens| parse_rule(&tokens, number))
        .map_err(|kind| RuleError { line: number, kind })
}

fn is_rule_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(';')
}

// Builds the rule hashmap, rejecting redefinitions and undefined names
fn grammar_from_rules(rule_list: Vec<Rule>) -> Result<Grammar, RuleErrors> {
    let start_symbol = match rule_list.first() {
        Some(rule) => rule.symbol.clone(),
        None => {
            return Err(RuleErrors(vec![RuleError {
                line: 0,
                kind: RuleErrorKind::EmptyGrammar,
            }]))
        }
    };

    let mut errors = Vec::new();
    let mut ruleset = HashMap::with_capacity(rule_list.len());
    for rule in rule_list {
        if ruleset.contains_key(&rule.symbol) {
            errors.push(RuleError {
                line: rule.line,
                kind: RuleErrorKind::DuplicateRule(rule.symbol),
            });
        } else {
            ruleset.insert(rule.symbol, (rule.rewrite, rule.line));
        }
    }

    errors.extend(verify_rules(&ruleset));
    if !errors.is_empty() {
        errors.sort_by_key(|e| e.line);
        return Err(RuleErrors(errors));
    }

    let rules = ruleset
        .into_iter()
        .map(|(symbol, (rewrite, _))| (symbol, rewrite))
        .collect();

    Ok(Grammar {
        start_symbol,
        rules,
    })
}

pub fn parse_str(source: &str) -> Result<Grammar, RuleErrors> {
    let parsed_lines = source
        .lines()
        .enumerate()
        .map(|(num, line)| (num + 1, line.trim()))
        .filter(|(_, line)| is_rule_line(line))
        .map(|(num, line)| parse_rule_line(line, num));

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition(Result::is_ok);
    if !errors.is_empty() {
        return Err(RuleErrors(
            errors.into_iter().map(Result::unwrap_err).collect_vec(),
        ));
    }
    let rules_unwrapped = rules.into_iter().map(Result::unwrap).collect_vec();

    grammar_from_rules(rules_unwrapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s_nonterminal(text: &str) -> Symbol {
        Symbol::Nonterminal(text.to_string())
    }

    fn s_terminal(text: &str) -> Symbol {
        Symbol::Terminal(text.to_string())
    }

    #[test]
    fn parse_normal_rule() {
        let lexed = lex_line("NP = \"DT\" \"NN\" | \"NN\" | \"DT\" \"NN\" PP").unwrap();

        let answer = Rule {
            symbol: "NP".to_string(),
            rewrite: vec![
                vec![s_terminal("DT"), s_terminal("NN")],
                vec![s_terminal("NN")],
                vec![s_terminal("DT"), s_terminal("NN"), s_nonterminal("PP")],
            ],
            line: 4,
        };

        assert_eq!(parse_rule(&lexed[..], 4), Ok(answer));
    }

    #[test]
    fn parse_malformed_rule() {
        let cases = vec![
            ("NP \"DT\" \"NN\"", RuleErrorKind::MissingEquals),
            ("\"NP\" = \"DT\"", RuleErrorKind::MissingNonterminal),
            ("| = \"DT\"", RuleErrorKind::MissingNonterminal),
            ("NP = \"DT\" = \"NN\"", RuleErrorKind::UnexpectedEquals),
            ("NP = \"DT\" |", RuleErrorKind::EmptyAlternative),
            ("NP = | \"DT\"", RuleErrorKind::EmptyAlternative),
            ("NP =", RuleErrorKind::EmptyAlternative),
        ];

        for (line, kind) in cases {
            let lexed = lex_line(line).unwrap();
            assert_eq!(parse_rule(&lexed[..], 1), Err(kind), "for line `{line}`");
        }
    }

    #[test]
    fn parse_normal_source() {
        let source = "\
; toy grammar
S = NP \"VB\" | NP \"VB\" \".\"

NP = \"DT\" \"NN\" | \"NN\"
";
        let grammar = parse_str(source).unwrap();

        assert_eq!(grammar.start_symbol, "S");
        assert_eq!(
            grammar.rewrite("S").unwrap(),
            &vec![
                vec![s_nonterminal("NP"), s_terminal("VB")],
                vec![s_nonterminal("NP"), s_terminal("VB"), s_terminal(".")],
            ]
        );
        assert_eq!(
            grammar.rewrite("NP").unwrap(),
            &vec![
                vec![s_terminal("DT"), s_terminal("NN")],
                vec![s_terminal("NN")],
            ]
        );
    }

    #[test]
    fn parse_reports_every_error_with_line_numbers() {
        let source = "\
S = NP \"VB\"
NP = \"NN\"
NP = \"DT\" \"NN\"
X = \"JJ\" = \"NN\"
";
        let errors = parse_str(source).unwrap_err();

        assert_eq!(
            errors.0,
            vec![RuleError {
                line: 4,
                kind: RuleErrorKind::UnexpectedEquals
            }]
        );
    }

    #[test]
    fn duplicate_and_undefined_are_both_reported() {
        let source = "\
S = NP VP
NP = \"NN\"
NP = \"DT\" \"NN\"
";
        let errors = parse_str(source).unwrap_err();

        assert_eq!(
            errors.0,
            vec![
                RuleError {
                    line: 1,
                    kind: RuleErrorKind::UndefinedNonterminal("VP".to_string())
                },
                RuleError {
                    line: 3,
                    kind: RuleErrorKind::DuplicateRule("NP".to_string())
                },
            ]
        );
    }

    #[test]
    fn empty_source_is_an_error() {
        let errors = parse_str("; nothing here\n").unwrap_err();
        assert_eq!(errors.0[0].kind, RuleErrorKind::EmptyGrammar);
    }

    #[test]
    fn errors_display_with_line_numbers() {
        let errors = parse_str("S = VP\n").unwrap_err();
        assert_eq!(
            errors.to_string(),
            "line 1: could not find definition for `VP`"
        );
    }
}
