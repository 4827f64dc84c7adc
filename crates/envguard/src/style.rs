//! Minimal styling capability for user-facing output.
//!
//! Responsibilities:
//! - Map semantic tones (heading, warning, success, ...) to terminal colors.
//! - Offer a plain-text fallback so core logic never depends on ANSI output.
//!
//! Does NOT handle:
//! - Writing to any sink (callers print the returned strings).
//! - Terminal capability detection beyond "is stdout a terminal".

use std::io::IsTerminal;

use crossterm::style::Stylize;

/// Semantic tone of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// "General information" section of the advanced report.
    General,
    /// "ENV file information" section of the advanced report.
    FileInfo,
    /// "Logging time" section of the advanced report.
    Timing,
    /// Soft-level log lines and non-fatal key warnings.
    Soft,
    /// Error-level log lines and write failures.
    Error,
    /// Passed checks.
    Success,
}

/// Something that can decorate text for display.
pub trait Styler: Send + Sync {
    /// Decorate a regular line or label.
    fn paint(&self, tone: Tone, text: &str) -> String;

    /// Decorate a section heading.
    fn heading(&self, tone: Tone, text: &str) -> String {
        self.paint(tone, text)
    }
}

/// ANSI colors via `crossterm::style`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::General => text.cyan().to_string(),
            Tone::FileInfo => text.yellow().to_string(),
            Tone::Timing | Tone::Success => text.green().to_string(),
            Tone::Soft => text.magenta().to_string(),
            Tone::Error => text.red().to_string(),
        }
    }

    fn heading(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::General => text.cyan().bold().to_string(),
            Tone::FileInfo => text.yellow().bold().to_string(),
            _ => text.green().bold().to_string(),
        }
    }
}

/// Passes text through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}

/// Pick ANSI output when stdout is a terminal, plain text otherwise.
pub fn detect() -> Box<dyn Styler> {
    if std::io::stdout().is_terminal() {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    }
}
