//! Provides `line_set_of`, which reads an input file into the set of its
//! trimmed, non-blank lines. UTF-16 files with a Byte Order Mark are decoded
//! to UTF-8 on the way in; anything else is passed through as bytes.
use bstr::{io::BufReadExt, ByteSlice};
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};
use tracing::debug;

use crate::error::Error;

/// The lines of a single file: trimmed, blank lines dropped, each distinct
/// line kept once, in the order of its first occurrence.
pub type LineSet = IndexSet<Vec<u8>, FxBuildHasher>;

/// Read the file at `path` and return its `LineSet`.
///
/// A file that can't be opened is reported as `Error::InputFileNotFound`; a
/// failure after the file is open (say, `path` is a directory) is reported as
/// `Error::InputRead`.
pub fn line_set_of(path: &Path) -> Result<LineSet, Error> {
    let file = File::open(path)
        .map_err(|source| Error::InputFileNotFound { path: path.to_owned(), source })?;
    let set = trimmed_line_set(decoding_reader(file))
        .map_err(|source| Error::InputRead { path: path.to_owned(), source })?;
    debug!(path = %path.display(), lines = set.len(), "read input file");
    Ok(set)
}

/// A buffered reader that looks at the BOM to detect UTF-16 and convert it to
/// UTF-8, and otherwise doesn't enforce any encoding.
fn decoding_reader<R: Read>(source: R) -> BufReader<DecodeReaderBytes<R, Vec<u8>>> {
    BufReader::with_capacity(
        32 * 1024,
        DecodeReaderBytesBuilder::new()
            .bom_sniffing(true)
            .strip_bom(true) // Remove the BOM before sending data to us
            .utf8_passthru(true)
            .build(source),
    )
}

/// Collect the trimmed, non-empty lines of `reader`. A lone `\r` ends a line
/// just as `\n` and `\r\n` do.
fn trimmed_line_set(mut reader: impl BufRead) -> io::Result<LineSet> {
    let mut set = LineSet::default();
    reader.for_byte_line(|byte_line| {
        for line in byte_line.split_str("\r") {
            let line = line.trim_with(is_blank);
            if !line.is_empty() && !set.contains(line) {
                set.insert(line.to_vec());
            }
        }
        Ok(true)
    })?;
    Ok(set)
}

/// Unicode whitespace, plus the ASCII file, group, record and unit separators
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}
