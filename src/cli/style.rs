//! Terminal styling for run output
//!
//! Every piece of styled output has a [`Tone`]. Color is applied only when
//! the stream the tone is checked against is a color-capable terminal, so
//! Actions logs with `NO_COLOR` stay plain.

use owo_colors::{OwoColorize, Style};
use std::fmt::{self, Display};

pub use owo_colors::Stream;

/// Visual role of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Branches, resources, PR numbers
    Accent,
    /// Finished steps
    Success,
    /// Failures
    Error,
    /// Steps that were skipped or did not work
    Warn,
    /// Plan lines and other secondary text
    Muted,
    /// Phase names and branch endpoints
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    /// Failures and warnings are checked against stderr
    const fn default_stream(self) -> Stream {
        match self {
            Self::Error | Self::Warn => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A value rendered in a [`Tone`]
#[derive(Debug, Clone)]
pub struct Painted<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Painted<T> {
    const fn new(value: T, tone: Tone) -> Self {
        Self {
            value,
            tone,
            stream: tone.default_stream(),
        }
    }

    /// Decide color support against `stream` instead of the tone's default
    #[must_use]
    pub const fn on(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Tone shortcuts for anything printable
pub trait Stylize: Display {
    /// Render in `tone`
    fn paint(&self, tone: Tone) -> Painted<&Self> {
        Painted::new(self, tone)
    }

    /// Cyan
    fn accent(&self) -> Painted<&Self> {
        self.paint(Tone::Accent)
    }

    /// Green
    fn success(&self) -> Painted<&Self> {
        self.paint(Tone::Success)
    }

    /// Red, checked against stderr
    fn error(&self) -> Painted<&Self> {
        self.paint(Tone::Error)
    }

    /// Yellow, checked against stderr
    fn warn(&self) -> Painted<&Self> {
        self.paint(Tone::Warn)
    }

    /// Dim
    fn muted(&self) -> Painted<&Self> {
        self.paint(Tone::Muted)
    }

    /// Bold
    fn emphasis(&self) -> Painted<&Self> {
        self.paint(Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// `✓` for a finished step
pub const fn check() -> Painted<&'static str> {
    Painted::new("✓", Tone::Success)
}

/// `✗` for a failed or skipped step
pub const fn cross() -> Painted<&'static str> {
    Painted::new("✗", Tone::Error)
}

/// `→` in front of a phase
pub const fn arrow() -> Painted<&'static str> {
    Painted::new("→", Tone::Accent)
}

/// `url` as an OSC 8 link when stdout supports it, plain text otherwise
pub fn link(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}
