//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::Error;

/// Returns the parsed command line. Malformed or missing arguments make
/// `clap` print a usage message and exit.
#[must_use]
pub fn parsed() -> Args {
    Args::parse()
}

/// Which lines are written to the output file
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputPolicy {
    /// Every line found in any file, unique or duplicate
    #[default]
    All,
    /// Only the lines found in exactly one file
    Unique,
}

/// Whether the console report is colored
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal that supports it
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// `Args` contains the parsed command line.
#[derive(Debug, Parser)]
#[command(name = "neuradiff", version)]
#[command(about = "Compare multiple files and mark duplicate and unique lines.")]
pub struct Args {
    /// The files to compare (two or more)
    #[arg(short = 'f', long = "files", value_name = "FILE", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// The file to save the lines to
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", required = true)]
    pub output: PathBuf,

    /// Which lines to save in the output file
    #[arg(long, value_enum, default_value_t = OutputPolicy::All)]
    pub save: OutputPolicy,

    /// When to color the report
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Don't show progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Log more detail to stderr (repeat for even more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Comparing needs at least two files; anything less is an
    /// `Error::Validation`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.files.len() < 2 {
            return Err(Error::Validation(
                "At least two files are required for comparison.\nUse -h for help on usage."
                    .to_string(),
            ));
        }
        Ok(())
    }
}
