//! Pedant - sentence grammar checking library
//!
//! Validates a sentence against a small hand-authored context-free grammar
//! over part-of-speech categories, runs a set of dependency well-formedness
//! rules, and merges both verdicts with the issues reported by an external
//! style checking service.

pub mod annotate;
pub mod categorize;
pub mod checker;
pub mod document;
pub mod grammar;
pub mod matcher;
pub mod rules;
pub mod validate;

pub use annotate::{AnnotateError, Annotator, Token};
pub use checker::{Checker, Report, StyleChecker, StyleError, StyleIssue, StyleVerdict};
pub use grammar::Grammar;
