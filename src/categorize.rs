/*
    This module maps annotated tokens to terminal token categories
*/

use tracing::debug;

use crate::annotate::Token;

// Fine tag to terminal category. Every verb inflection collapses to VB,
// singular and plural nouns to NN, modals to AUX.
fn tag_category(tag: &str) -> Option<&'static str> {
    match tag {
        "PRP" => Some("PRP"),
        "DT" => Some("DT"),
        "JJ" => Some("JJ"),
        "RB" => Some("RB"),
        "NN" | "NNS" => Some("NN"),
        "NNP" => Some("NNP"),
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => Some("VB"),
        "MD" => Some("AUX"),
        "IN" => Some("IN"),
        "TO" => Some("TO"),
        "WP" => Some("WP"),
        "WRB" => Some("WRB"),
        _ => None,
    }
}

// Literal sentence punctuation wins over everything, then the auxiliary
// dependency role, then the fine tag
pub fn categorize(token: &Token) -> Option<&'static str> {
    match token.text.as_str() {
        "." => return Some("."),
        "?" => return Some("?"),
        _ => {}
    }

    if token.dep == "aux" {
        return Some("AUX");
    }

    tag_category(&token.tag)
}

// Categorizes a whole sentence, dropping tokens with no category. The
// stream can therefore be shorter than the token sequence.
pub fn terminal_stream(tokens: &[Token]) -> Vec<&'static str> {
    tokens
        .iter()
        .filter_map(|token| {
            let category = categorize(token);
            if category.is_none() {
                debug!(
                    text = %token.text,
                    tag = %token.tag,
                    "token has no terminal category, dropping"
                );
            }
            category
        })
        .collect()
}
