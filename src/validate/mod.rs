/*
    This module holds the sentence-level validators
*/

pub mod dependency;
pub mod structural;

pub use dependency::{check_dependencies, DependencyReport, MissingPreposition};
pub use structural::is_structurally_valid;
