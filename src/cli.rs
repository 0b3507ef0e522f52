use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// JSON file holding the sentence, its annotations, and any style issues
    pub input: PathBuf,

    /// Rule file overriding the built-in English grammar
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Start symbol (default: the grammar's own)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Print only the overall verdict
    #[arg(short, long)]
    pub quiet: bool,
}
