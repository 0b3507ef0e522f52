use itertools::{Itertools, PeekingNext};

use super::RuleErrorKind;

#[derive(PartialEq, Debug)]
pub enum Token {
    Equals,
    Or,
    Nonterminal(String),
    Terminal(String),
}

type Result<T> = std::result::Result<T, RuleErrorKind>;

// Consumes a double-quoted token category, open quote included
fn lex_terminal(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    line.next();
    let token_text = line.peeking_take_while(|&c| c != '\"').collect();

    // The close quote must still be there
    if line.next() != Some('\"') {
        return Err(RuleErrorKind::UnmatchedQuote);
    }

    Ok(Token::Terminal(token_text))
}

fn lex_nonterminal(line: &mut impl PeekingNext<Item = char>) -> Token {
    Token::Nonterminal(
        line.peeking_take_while(|&c| !c.is_whitespace() && c != '=' && c != '|' && c != '\"')
            .collect(),
    )
}

pub fn lex_line(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(&c) = line_chars.peek() {
        match c {
            '=' => {
                line_chars.next();
                tokens.push(Token::Equals);
            }
            '|' => {
                line_chars.next();
                tokens.push(Token::Or);
            }
            '\"' => tokens.push(lex_terminal(&mut line_chars)?),
            c if c.is_whitespace() => {
                line_chars.next();
            }
            _ => tokens.push(lex_nonterminal(&mut line_chars)),
        }
    }

    Ok(tokens)
}
