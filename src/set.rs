//! Provides the `Classification` structure: the union of every input file's
//! lines, with each line marked as found in one file or in many.
use fxhash::FxBuildHasher;
use indexmap::{map::Entry, IndexMap};
use std::fmt;

use crate::args::OutputPolicy;
use crate::operands::LineSet;

/// A `Classification` holds the accumulated union of the lines seen so far,
/// each line a key of an `IndexMap`.
/// * Keys are kept in the order they were first seen, file by file, so
///   reports and output files come out in a predictable order.
/// * The value records whether the line has been found in one file or in
///   more than one. The duplicate set is just the keys marked `Many`, so it
///   can never hold a line the union lacks.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    set: CountedSet,
}
type CountedSet = IndexMap<Vec<u8>, FoundIn, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FoundIn {
    One,
    Many,
}

/// How a line of the union is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The line was found in exactly one input file
    Unique,
    /// The line was found in two or more input files
    Duplicate,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unique => f.write_str("UNIQUE"),
            Status::Duplicate => f.write_str("DUPLICATE"),
        }
    }
}

/// One line of the classification report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// The trimmed line
    pub line: &'a [u8],
    /// Whether it was found in one file or several
    pub status: Status,
}

/// The two summary counts of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Lines found in exactly one file
    pub unique: usize,
    /// Lines found in two or more files
    pub duplicate: usize,
}

impl Summary {
    /// Size of the union
    #[must_use]
    pub fn total(&self) -> usize {
        self.unique + self.duplicate
    }
}

impl Classification {
    /// An empty classification, as before any file is read
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in the lines of one more file. A line already in the union came
    /// from an earlier file, so it becomes a duplicate. `file_lines` is a set,
    /// so lines repeated within one file count only once.
    pub(crate) fn absorb(&mut self, file_lines: LineSet) {
        for line in file_lines {
            match self.set.entry(line) {
                Entry::Vacant(entry) => {
                    entry.insert(FoundIn::One);
                }
                Entry::Occupied(mut entry) => *entry.get_mut() = FoundIn::Many,
            }
        }
    }

    /// Number of lines in the union
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// True if no input file had a non-blank line
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Every distinct line, unique or duplicate
    pub fn all_lines(&self) -> impl Iterator<Item = &[u8]> {
        self.set.keys().map(Vec::as_slice)
    }

    /// Lines found in two or more files
    pub fn duplicates(&self) -> impl Iterator<Item = &[u8]> {
        self.with(FoundIn::Many)
    }

    /// Lines found in exactly one file
    pub fn unique_lines(&self) -> impl Iterator<Item = &[u8]> {
        self.with(FoundIn::One)
    }

    fn with(&self, wanted: FoundIn) -> impl Iterator<Item = &[u8]> {
        self.set.iter().filter(move |(_, found_in)| **found_in == wanted).map(|(k, _)| k.as_slice())
    }

    /// The status of `line`, or `None` if no input file contained it
    #[must_use]
    pub fn status(&self, line: &[u8]) -> Option<Status> {
        self.set.get(line).map(|found_in| found_in.status())
    }

    /// One record per line of the union
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.set.iter().map(|(line, found_in)| Record { line, status: found_in.status() })
    }

    /// The unique and duplicate counts
    #[must_use]
    pub fn summary(&self) -> Summary {
        let duplicate = self.duplicates().count();
        Summary { unique: self.len() - duplicate, duplicate }
    }

    /// The lines `policy` says belong in the output file
    #[must_use]
    pub fn lines_for(&self, policy: OutputPolicy) -> Box<dyn Iterator<Item = &[u8]> + '_> {
        match policy {
            OutputPolicy::All => Box::new(self.all_lines()),
            OutputPolicy::Unique => Box::new(self.unique_lines()),
        }
    }
}

impl FoundIn {
    fn status(self) -> Status {
        match self {
            FoundIn::One => Status::Unique,
            FoundIn::Many => Status::Duplicate,
        }
    }
}
