/*
    This module defines the pre-annotated sentence interchange format

    The annotator and the style service run out of process in practice,
    so one sentence travels with their outputs attached. The document
    stands in for both collaborators; it answers for the sentence it was
    built from and reports a service failure for anything else.
*/

use serde::{Deserialize, Serialize};

use crate::annotate::{AnnotateError, Annotator, Token};
use crate::checker::{StyleChecker, StyleError, StyleIssue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    pub sentence: String,
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub issues: Vec<StyleIssue>,
}

impl AnnotatedSentence {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl Annotator for AnnotatedSentence {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotateError> {
        if text != self.sentence {
            return Err(AnnotateError::Failed(format!(
                "no annotations on record for `{text}`"
            )));
        }
        Ok(self.tokens.clone())
    }
}

impl StyleChecker for AnnotatedSentence {
    fn check(&self, text: &str) -> Result<Vec<StyleIssue>, StyleError> {
        if text != self.sentence {
            return Err(StyleError::Failed(format!(
                "no style verdict on record for `{text}`"
            )));
        }
        Ok(self.issues.clone())
    }
}
