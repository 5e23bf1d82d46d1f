//! Prints the classification report: one line per classified line, then the
//! unique and duplicate counts. The layout is for people, not programs.
use anyhow::{bail, Result};
use bstr::ByteSlice;
use std::io::Write;

use crate::args::ColorChoice;
use crate::set::{Classification, Summary};
use crate::styles::{as_frame, as_line, as_marker, as_status, as_title};

/// Print the report for `classified` to stdout, colored per `color_choice`
pub fn print(classified: &Classification, color_choice: ColorChoice) -> Result<()> {
    let mut stdout = anstream::AutoStream::new(std::io::stdout().lock(), color_choice.into());
    match write_report(classified, &mut stdout) {
        Err(e) => bail!("failed printing to stdout: {e}"),
        Ok(()) => Ok(()),
    }
}

/// Write the report for `classified` to `out`
pub fn write_report(classified: &Classification, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", as_title("Comparison Result:"))?;
    for record in classified.records() {
        let line = record.line.to_str_lossy();
        writeln!(
            out,
            "{open}{marker}{left}{line}{right}{marker}{close}{lb} {status} {rb}",
            open = as_frame("["),
            marker = as_marker("+"),
            left = as_frame("]----| "),
            line = as_line(&line),
            right = as_frame(" |----["),
            close = as_frame("]"),
            lb = as_frame("["),
            status = as_status(record.status),
            rb = as_frame("]"),
        )?;
    }
    write_summary(classified.summary(), out)?;
    out.flush()
}

fn write_summary(summary: Summary, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", as_title("Unique lines:"), summary.unique)?;
    writeln!(out, "{} {}", as_title("Duplicate lines:"), summary.duplicate)
}
