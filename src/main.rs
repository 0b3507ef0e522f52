mod cli;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pedant::checker::Checker;
use pedant::document::AnnotatedSentence;
use pedant::grammar::{self, Grammar};
use pedant::rules;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Cli::parse();

    let document = match load_document(&args.input) {
        Ok(document) => document,
        Err(message) => return fail(&message),
    };
    let grammar = match load_grammar(&args) {
        Ok(grammar) => grammar,
        Err(message) => return fail(&message),
    };

    let checker = Checker::with_grammar(&grammar, document.clone(), document.clone());
    let report = match checker.check(&document.sentence) {
        Ok(report) => report,
        Err(error) => return fail(&error.to_string()),
    };

    if args.quiet {
        println!("{}", if report.overall_pass() { "pass" } else { "fail" });
    } else {
        println!("{report}");
    }

    if report.overall_pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn fail(message: &str) -> ExitCode {
    eprintln!("{message}");
    ExitCode::FAILURE
}

fn load_document(path: &Path) -> Result<AnnotatedSentence, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {}", path.display(), e))?;
    AnnotatedSentence::from_json(&source)
        .map_err(|e| format!("could not parse {}: {}", path.display(), e))
}

fn load_grammar(args: &cli::Cli) -> Result<Grammar, String> {
    let mut grammar = match &args.grammar {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|e| format!("could not read {}: {}", path.display(), e))?;
            rules::parse_str(&source).map_err(|e| format!("{}:\n{}", path.display(), e))?
        }
        None => grammar::english().clone(),
    };

    if let Some(start) = &args.start {
        if !grammar.defines(start) {
            return Err(format!("no definition for start symbol `{start}`"));
        }
        grammar.start_symbol = start.clone();
    }

    Ok(grammar)
}
