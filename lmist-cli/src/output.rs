use std::io::{self, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use lmist_core::place::Progress;
use lmist_core::storage::Entry;

const TICK: Duration = Duration::from_millis(80);

/// Terminal spinner that doubles as the placement status sink
pub struct Spinner {
    bar: ProgressBar,
    done_style: ProgressStyle,
}

impl Spinner {
    pub fn start(message: &str) -> anyhow::Result<Self> {
        Self::with_draw_target(message, ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(message: &str, target: ProgressDrawTarget) -> anyhow::Result<Self> {
        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK);

        Ok(Self {
            bar,
            done_style: ProgressStyle::with_template("{msg}")?,
        })
    }

    pub fn succeed(&self, message: &str) {
        self.finish('✔', message);
    }

    pub fn info(&self, message: &str) {
        self.finish('ℹ', message);
    }

    /// Removes the spinner so the caller can report the failure itself.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }

    fn finish(&self, symbol: char, message: &str) {
        let _ = self.finish_to(&mut io::stderr(), symbol, message);
    }

    /// Leaves the result line on the spinner, or writes it to `out` when the
    /// spinner is not drawn (stderr redirected or not a terminal).
    fn finish_to(&self, out: &mut impl Write, symbol: char, message: &str) -> io::Result<()> {
        let line = format!("{symbol} {message}");
        if self.bar.is_hidden() {
            self.bar.finish_and_clear();
            return writeln!(out, "{line}");
        }

        self.bar.set_style(self.done_style.clone());
        self.bar.finish_with_message(line);
        Ok(())
    }
}

impl Progress for Spinner {
    fn status(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }
}

/// Writes one entry per line, marking directories with a trailing `/`.
pub fn write_entries(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        if entry.is_dir() {
            writeln!(out, "{}/", entry.name)?;
        } else {
            writeln!(out, "{}", entry.name)?;
        }
    }
    Ok(())
}
