//! Error kinds for reading inputs, validating the command line, and writing
//! the output file. Every one of them ends the run.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `neuradiff`'s library operations
#[derive(Error, Debug)]
pub enum Error {
    /// An input file doesn't exist or couldn't be opened
    #[error("Can't open file: {}", path.display())]
    InputFileNotFound {
        /// The offending input path
        path: PathBuf,
        /// Why the open failed
        source: io::Error,
    },

    /// An input file was opened but reading it failed part way through
    #[error("Error reading file: {}", path.display())]
    InputRead {
        /// The offending input path
        path: PathBuf,
        /// Why the read failed
        source: io::Error,
    },

    /// The command line asked for something we can't do
    #[error("{0}")]
    Validation(String),

    /// The output file couldn't be created or written
    #[error("Can't write output file: {}", path.display())]
    OutputWrite {
        /// The destination path
        path: PathBuf,
        /// Why the write failed
        source: io::Error,
    },
}

impl Error {
    /// The process exit code for this error. Every failure is terminal, so
    /// they all map to 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InputFileNotFound { .. }
            | Error::InputRead { .. }
            | Error::Validation(_)
            | Error::OutputWrite { .. } => 1,
        }
    }
}
