//! `neuradiff` treats each input file as a set of lines, and reports which
//! lines are unique (found in just one file) and which are duplicates (found
//! in two or more). The `classify` module holds the kernel; the `args` module
//! parses the command line, and the `operands` module hides input details.
//!
//! A line is what's left of a line of text after trimming whitespace from
//! both ends; lines that trim to nothing are ignored. Lines are kept in the
//! order they're first seen, so reports and output files are predictable.

#![deny(unused_must_use)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

use anyhow::Result;
use tracing::debug;

pub mod args;
pub mod classify;
pub mod error;
pub mod operands;
pub mod progress;
pub mod report;
pub mod set;
mod styles;

pub use crate::classify::{classify, classify_with, write_output};
pub use crate::error::Error;
pub use crate::set::{Classification, Record, Status, Summary};

/// Runs the whole comparison described by `args`: checks there are at least
/// two files, classifies their lines, saves the output file, and prints the
/// report. Nothing is written unless every input was read successfully.
pub fn run(args: &args::Args) -> Result<Summary> {
    args.validate()?;
    let mut progress = progress::for_stderr(!args.no_progress);

    let classified = classify_with(&args.files, progress.as_mut())?;
    let summary = classified.summary();
    debug!(unique = summary.unique, duplicate = summary.duplicate, "classified lines");

    write_output(&classified, &args.output, args.save, progress.as_mut())?;
    report::print(&classified, args.color)?;
    Ok(summary)
}
