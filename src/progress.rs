//! Progress feedback for the slow parts of a run: scanning the input files and
//! saving the output file. The classifier reports to a `Progress` but never
//! depends on it, so `Silent` can stand in wherever no feedback is wanted.
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;

/// Something that shows how far a phase of work has got
pub trait Progress {
    /// Begin a phase described by `description`, made up of `steps` steps.
    /// Any phase still in progress is finished first.
    fn start(&mut self, description: &str, steps: u64);
    /// One more step of the current phase is done
    fn advance(&mut self);
    /// The current phase is done
    fn finish(&mut self);
}

/// A `Progress` that shows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn start(&mut self, _description: &str, _steps: u64) {}
    fn advance(&mut self) {}
    fn finish(&mut self) {}
}

const TEMPLATE: &str = "{msg}\n[{bar:40.cyan/blue}] {pos}/{len} ({percent}%)";

/// A `Progress` drawn on stderr with `indicatif`, one bar per phase
pub struct Bar {
    bar: Option<ProgressBar>,
    style: ProgressStyle,
}

impl Default for Bar {
    fn default() -> Self {
        Self::new()
    }
}

impl Bar {
    /// A bar with no phase started yet
    #[must_use]
    pub fn new() -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        Bar { bar: None, style }
    }
}

impl Progress for Bar {
    fn start(&mut self, description: &str, steps: u64) {
        self.finish();
        let bar = ProgressBar::new(steps)
            .with_style(self.style.clone())
            .with_message(description.to_owned());
        self.bar = Some(bar);
    }
    fn advance(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }
    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

/// The `Progress` to use for a run: a `Bar` if it's `wanted` and stderr is a
/// terminal, and `Silent` otherwise.
#[must_use]
pub fn for_stderr(wanted: bool) -> Box<dyn Progress> {
    if wanted && std::io::stderr().is_terminal() {
        Box::new(Bar::new())
    } else {
        Box::new(Silent)
    }
}
