/*
    This module merges the three verdicts into one report
*/

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::annotate::{AnnotateError, Annotator};
use crate::grammar::{self, Grammar};
use crate::validate::{check_dependencies, is_structurally_valid, DependencyReport};

/// One issue reported by the external style service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleIssue {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("style service unreachable: {0}")]
    Unreachable(String),
    #[error("style check failed: {0}")]
    Failed(String),
}

/// An external collaborator that reports style and grammar issues for
/// raw text
pub trait StyleChecker {
    fn check(&self, text: &str) -> Result<Vec<StyleIssue>, StyleError>;
}

/// Outcome of the external style check. `Unavailable` is a degraded
/// verdict and never passes; it must not be mistaken for a clean,
/// empty issue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StyleVerdict {
    Checked(Vec<StyleIssue>),
    Unavailable { reason: String },
}

impl StyleVerdict {
    pub fn is_clean(&self) -> bool {
        matches!(self, StyleVerdict::Checked(issues) if issues.is_empty())
    }
}

/// The three verdicts for one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub structurally_valid: bool,
    pub dependency: DependencyReport,
    pub style: StyleVerdict,
}

impl Report {
    pub fn overall_pass(&self) -> bool {
        self.structurally_valid && self.dependency.is_valid() && self.style.is_clean()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Structure check: {}",
            if self.structurally_valid { "pass" } else { "fail" }
        )?;
        writeln!(
            f,
            "Dependency check: {}",
            if self.dependency.is_valid() { "pass" } else { "fail" }
        )?;
        match &self.style {
            StyleVerdict::Checked(issues) => writeln!(f, "Style issues: {}", issues.len())?,
            StyleVerdict::Unavailable { reason } => {
                writeln!(f, "Style check unavailable: {reason}")?
            }
        }

        if self.overall_pass() {
            return write!(f, "Sentence is grammatically correct");
        }

        write!(f, "Sentence has issues:")?;
        if !self.structurally_valid {
            write!(f, "\n- structure does not derive from the grammar")?;
        }
        if !self.dependency.has_subject {
            write!(f, "\n- no subject found")?;
        }
        if !self.dependency.has_verb {
            write!(f, "\n- no verb found")?;
        }
        for missing in &self.dependency.missing_prepositions {
            write!(
                f,
                "\n- `{}` needs a preposition before `{}`",
                missing.verb, missing.object
            )?;
        }
        match &self.style {
            StyleVerdict::Checked(issues) => {
                for issue in issues {
                    write!(f, "\n- {}", issue.message)?;
                }
            }
            StyleVerdict::Unavailable { .. } => {
                write!(f, "\n- the style service could not be consulted")?;
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum CheckError {
    // Failing to annotate is not a verdict about the sentence
    #[error(transparent)]
    Annotation(#[from] AnnotateError),
}

/// Runs the structural check, the dependency check and the external
/// style check over one sentence and aggregates the outcome. The
/// collaborators are injected at construction; their lifecycle belongs
/// to the caller.
pub struct Checker<'g, A, S> {
    grammar: &'g Grammar,
    annotator: A,
    style: S,
}

impl<A, S> Checker<'static, A, S>
where
    A: Annotator,
    S: StyleChecker,
{
    /// Checker over the built-in English grammar
    pub fn new(annotator: A, style: S) -> Self {
        Checker {
            grammar: grammar::english(),
            annotator,
            style,
        }
    }
}

impl<'g, A, S> Checker<'g, A, S>
where
    A: Annotator,
    S: StyleChecker,
{
    pub fn with_grammar(grammar: &'g Grammar, annotator: A, style: S) -> Self {
        Checker {
            grammar,
            annotator,
            style,
        }
    }

    /// Checks one sentence. All three checks run; none of them can
    /// short-circuit the others.
    pub fn check(&self, sentence: &str) -> Result<Report, CheckError> {
        let tokens = self.annotator.annotate(sentence)?;

        let structurally_valid = is_structurally_valid(self.grammar, &tokens);
        let dependency = check_dependencies(&tokens);
        let style = match self.style.check(sentence) {
            Ok(issues) => StyleVerdict::Checked(issues),
            Err(error) => {
                warn!(%error, "style service failed, verdict degraded");
                StyleVerdict::Unavailable {
                    reason: error.to_string(),
                }
            }
        };

        Ok(Report {
            structurally_valid,
            dependency,
            style,
        })
    }
}
