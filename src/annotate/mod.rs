/*
    This module defines the interface to the external annotation pipeline

    Annotation itself (tokenization, tagging, dependency parsing,
    lemmatization) is someone else's job; this crate only consumes the
    result. Tag and role names follow the usual conventions of English
    NLP pipelines: Penn Treebank fine tags (`NN`, `VBD`, ...), coarse
    classes (`NOUN`, `VERB`, `AUX`, ...), and dependency roles such as
    `nsubj`, `dobj`, `prep` and `aux`.
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One annotated token of a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as written
    pub text: String,
    /// Fine-grained part-of-speech tag, e.g. `VBD`
    pub tag: String,
    /// Coarse part-of-speech class, e.g. `VERB`
    pub pos: String,
    /// Dependency role relative to the head token, e.g. `nsubj`
    pub dep: String,
    /// Index of the head token; the sentence root points at itself
    pub head: usize,
    /// Dictionary form of the surface text
    pub lemma: String,
}

// The annotator failing is not the same thing as the sentence being
// ungrammatical; callers must keep the two apart
#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("annotation service unavailable: {0}")]
    Unavailable(String),
    #[error("annotation failed: {0}")]
    Failed(String),
}

/// An external collaborator that turns raw text into annotated tokens.
/// Implementations own their model or connection; the checker only
/// borrows the capability.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotateError>;
}
