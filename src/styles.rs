use anstyle::{AnsiColor, Color, Style};
use std::fmt;

use crate::args::ColorChoice;
use crate::set::Status;

const BLUE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
const GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const BOLD_GREEN: Style = GREEN.bold();
const BOLD_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold();
const BOLD: Style = Style::new().bold();
const YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

#[must_use]
pub(crate) fn as_frame(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: BLUE, content }
}
#[must_use]
pub(crate) fn as_marker(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: GREEN, content }
}
#[must_use]
pub(crate) fn as_line(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: BOLD, content }
}
#[must_use]
pub(crate) fn as_title(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: YELLOW, content }
}
#[must_use]
pub(crate) fn as_status(status: Status) -> StyledStr<'static> {
    match status {
        Status::Unique => StyledStr { prefix: BOLD_GREEN, content: "UNIQUE" },
        Status::Duplicate => StyledStr { prefix: BOLD_RED, content: "DUPLICATE" },
    }
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Auto => anstream::ColorChoice::Auto,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}

pub(crate) struct StyledStr<'a> {
    prefix: Style,
    content: &'a str,
}
impl fmt::Display for StyledStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix.render(), self.content, self.prefix.render_reset())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_wraps_content_in_escapes() {
        let shown = as_status(Status::Duplicate).to_string();
        assert!(shown.starts_with('\x1B'));
        assert!(shown.contains("DUPLICATE"));
        assert!(shown.ends_with("\x1B[0m"));
    }
}
