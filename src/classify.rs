//! Houses the `classify` and `write_output` functions
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::args::OutputPolicy;
use crate::error::Error;
use crate::operands::line_set_of;
use crate::progress::{Progress, Silent};
use crate::set::Classification;

/// Reads each file in `files`, in order, and classifies every trimmed,
/// non-blank line as unique (found in exactly one file) or duplicate (found
/// in two or more). Stops at the first file that can't be read; whatever was
/// gathered before that is dropped.
pub fn classify(files: &[PathBuf]) -> Result<Classification, Error> {
    classify_with(files, &mut Silent)
}

/// Like `classify`, but tells `progress` as each file is scanned. The result
/// doesn't depend on `progress` in any way.
pub fn classify_with(
    files: &[PathBuf],
    progress: &mut dyn Progress,
) -> Result<Classification, Error> {
    warn_about_repeats(files);
    let mut classified = Classification::new();
    progress.start("Scanning files for unique and duplicate lines...", files.len() as u64);
    for path in files {
        classified.absorb(line_set_of(path)?);
        progress.advance();
    }
    progress.finish();
    Ok(classified)
}

/// A path given twice is allowed, but it makes all of its lines duplicates.
fn warn_about_repeats(files: &[PathBuf]) {
    let mut seen = HashSet::new();
    for path in files {
        if !seen.insert(path) {
            warn!(path = %path.display(), "file given more than once; its lines will all be duplicates");
        }
    }
}

/// Writes the lines `policy` selects from `classified` to `destination`, one
/// per line, replacing whatever was there.
pub fn write_output(
    classified: &Classification,
    destination: &Path,
    policy: OutputPolicy,
    progress: &mut dyn Progress,
) -> Result<usize, Error> {
    let failed = |source: io::Error| Error::OutputWrite { path: destination.to_owned(), source };
    let file = File::create(destination).map_err(failed)?;
    let steps = match policy {
        OutputPolicy::All => classified.len(),
        OutputPolicy::Unique => classified.summary().unique,
    };
    progress.start(&format!("Saving lines to {}...", destination.display()), steps as u64);
    let written = output_to(classified, policy, BufWriter::new(file), progress).map_err(failed)?;
    progress.finish();
    info!(path = %destination.display(), lines = written, "wrote output file");
    Ok(written)
}

/// Output the selected lines, each followed by `\n`, and return how many
/// there were.
fn output_to(
    classified: &Classification,
    policy: OutputPolicy,
    mut out: impl Write,
    progress: &mut dyn Progress,
) -> io::Result<usize> {
    let mut written = 0;
    for line in classified.lines_for(policy) {
        out.write_all(line)?;
        out.write_all(b"\n")?;
        written += 1;
        progress.advance();
    }
    out.flush()?;
    Ok(written)
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::set::{Status, Summary};
    use assert_fs::{prelude::*, TempDir};
    use itertools::Itertools;
    use std::collections::BTreeSet;

    fn paths_for(temp: &TempDir, contents: &[&str]) -> Vec<PathBuf> {
        contents
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let file = temp.child(format!("operand{i}.txt"));
                file.write_str(text).unwrap();
                file.path().to_path_buf()
            })
            .collect()
    }

    fn set_of<'a>(lines: impl Iterator<Item = &'a [u8]>) -> BTreeSet<String> {
        lines.map(|line| String::from_utf8(line.to_vec()).unwrap()).collect()
    }

    fn strs(lines: &[&str]) -> BTreeSet<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }
    impl Progress for Recorder {
        fn start(&mut self, description: &str, steps: u64) {
            self.calls.push(format!("start {steps} {description}"));
        }
        fn advance(&mut self) {
            self.calls.push("advance".to_string());
        }
        fn finish(&mut self) {
            self.calls.push("finish".to_string());
        }
    }

    #[test]
    fn overlapping_files() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["x\ny\n", "y\nz\n"]);
        let c = classify(&files).unwrap();
        assert_eq!(set_of(c.all_lines()), strs(&["x", "y", "z"]));
        assert_eq!(set_of(c.duplicates()), strs(&["y"]));
        assert_eq!(c.summary(), Summary { unique: 2, duplicate: 1 });
    }

    #[test]
    fn blank_lines_are_dropped_and_repeats_within_a_file_collapse() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["a\n\n  \na\n", "b\n"]);
        let c = classify(&files).unwrap();
        assert_eq!(set_of(c.all_lines()), strs(&["a", "b"]));
        assert_eq!(c.duplicates().count(), 0);
        assert_eq!(c.summary(), Summary { unique: 2, duplicate: 0 });
    }

    #[test]
    fn a_line_in_three_files_is_one_duplicate() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["shared\n", "shared\n", "shared\n"]);
        let c = classify(&files).unwrap();
        assert_eq!(set_of(c.all_lines()), strs(&["shared"]));
        assert_eq!(set_of(c.duplicates()), strs(&["shared"]));
        assert_eq!(c.summary(), Summary { unique: 0, duplicate: 1 });
    }

    #[test]
    fn repeats_within_one_file_do_not_make_a_duplicate() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["r\nr\nr\n", "s\n"]);
        let c = classify(&files).unwrap();
        assert_eq!(c.status(b"r"), Some(Status::Unique));
    }

    #[test]
    fn permuting_the_files_gives_the_same_sets() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(
            &temp,
            &["xyz\nabc\nxy\nxz\nx\n", "xyz\nabc\nxy\nyz\ny\n", "xyz\nabc\nxz\nyz\nz\n\n  \n"],
        );
        let first = classify(&files).unwrap();
        let all = set_of(first.all_lines());
        let dups = set_of(first.duplicates());
        assert_eq!(set_of(first.unique_lines()), strs(&["x", "y", "z"]));
        for order in files.iter().cloned().permutations(files.len()) {
            let c = classify(&order).unwrap();
            assert_eq!(set_of(c.all_lines()), all, "for {order:?}");
            assert_eq!(set_of(c.duplicates()), dups, "for {order:?}");
        }
    }

    #[test]
    fn invariants_hold() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["a\n b\n\t\n", "b\nc\n", "c\r\nd\r\n", "   \n"]);
        let c = classify(&files).unwrap();
        let all = set_of(c.all_lines());
        let dups = set_of(c.duplicates());
        assert!(dups.is_subset(&all));
        let summary = c.summary();
        assert_eq!(summary.unique + summary.duplicate, all.len());
        assert!(all.iter().all(|line| !line.trim().is_empty() && line.trim() == line));
        assert_eq!(dups, strs(&["b", "c"]));
    }

    #[test]
    fn missing_file_stops_the_run() {
        let temp = TempDir::new().unwrap();
        let mut files = paths_for(&temp, &["a\n", "b\n"]);
        let missing = temp.child("missing.txt").path().to_path_buf();
        files.insert(1, missing.clone());
        let mut progress = Recorder::default();
        match classify_with(&files, &mut progress) {
            Err(Error::InputFileNotFound { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected InputFileNotFound, got {other:?}"),
        }
        // Only the first file was read before the failure
        assert_eq!(progress.calls.iter().filter(|c| *c == "advance").count(), 1);
    }

    #[test]
    fn a_directory_is_an_input_read_error() {
        let temp = TempDir::new().unwrap();
        let mut files = paths_for(&temp, &["a\n"]);
        let dir = temp.child("dir");
        dir.create_dir_all().unwrap();
        files.push(dir.path().to_path_buf());
        let result = classify(&files);
        assert!(
            matches!(result, Err(Error::InputRead { .. }) | Err(Error::InputFileNotFound { .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn progress_does_not_change_the_result() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["x\ny\n", "y\nz\n"]);
        let mut progress = Recorder::default();
        let recorded = classify_with(&files, &mut progress).unwrap();
        let silent = classify(&files).unwrap();
        assert_eq!(set_of(recorded.all_lines()), set_of(silent.all_lines()));
        assert_eq!(set_of(recorded.duplicates()), set_of(silent.duplicates()));
        assert_eq!(
            progress.calls,
            vec![
                "start 2 Scanning files for unique and duplicate lines...",
                "advance",
                "advance",
                "finish"
            ]
        );
    }

    #[test]
    fn output_holds_every_line_with_a_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["x\ny", "y\nz\n"]);
        let out = temp.child("out.txt");
        out.write_str("old contents that should disappear\n").unwrap();
        let c = classify(&files).unwrap();
        let written = write_output(&c, out.path(), OutputPolicy::All, &mut Silent).unwrap();
        assert_eq!(written, 3);
        let text = std::fs::read_to_string(out.path()).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().map(str::to_string).collect::<BTreeSet<_>>(), strs(&["x", "y", "z"]));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn unique_policy_writes_only_unique_lines() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["x\ny\n", "y\nz\n"]);
        let out = temp.child("out.txt");
        let c = classify(&files).unwrap();
        let written = write_output(&c, out.path(), OutputPolicy::Unique, &mut Silent).unwrap();
        assert_eq!(written, 2);
        let text = std::fs::read_to_string(out.path()).unwrap();
        assert_eq!(text.lines().map(str::to_string).collect::<BTreeSet<_>>(), strs(&["x", "z"]));
    }

    #[test]
    fn classifying_twice_writes_the_same_output() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["q\nr\n", "r\ns\n", "s\nt\n"]);
        let (one, two) = (temp.child("one.txt"), temp.child("two.txt"));
        write_output(&classify(&files).unwrap(), one.path(), OutputPolicy::All, &mut Silent)
            .unwrap();
        write_output(&classify(&files).unwrap(), two.path(), OutputPolicy::All, &mut Silent)
            .unwrap();
        let read = |p: &Path| -> BTreeSet<String> {
            std::fs::read_to_string(p).unwrap().lines().map(str::to_string).collect()
        };
        assert_eq!(read(one.path()), read(two.path()));
    }

    #[test]
    fn unwritable_destination_is_an_output_write_error() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["x\n", "y\n"]);
        let c = classify(&files).unwrap();
        let destination = temp.child("no/such/dir/out.txt");
        match write_output(&c, destination.path(), OutputPolicy::All, &mut Silent) {
            Err(Error::OutputWrite { path, .. }) => assert_eq!(path, destination.path()),
            other => panic!("expected OutputWrite, got {other:?}"),
        }
    }

    #[test]
    fn saving_reports_one_step_per_line() {
        let temp = TempDir::new().unwrap();
        let files = paths_for(&temp, &["x\ny\n", "y\nz\n"]);
        let out = temp.child("out.txt");
        let c = classify(&files).unwrap();
        let mut progress = Recorder::default();
        write_output(&c, out.path(), OutputPolicy::All, &mut progress).unwrap();
        assert!(progress.calls[0].starts_with("start 3 Saving lines to "));
        assert_eq!(progress.calls.iter().filter(|c| *c == "advance").count(), 3);
        assert_eq!(progress.calls.last().map(String::as_str), Some("finish"));
    }
}
