//! Basic 16-color ANSI palette. Entries only ever need a foreground color, and the
//! standard SGR codes render on every terminal that renders color at all.

/// Foreground colors used by entry rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Cyan,
    BrightYellow,
    BrightCyan,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// SGR parameter for the foreground variant of this color.
    #[must_use]
    pub const fn sgr(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Yellow => 33,
            Self::Cyan => 36,
            Self::BrightYellow => 93,
            Self::BrightCyan => 96,
        }
    }

    /// Terminals need the raw `\x1b[<n>m` escape — callers shouldn't hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.sgr())
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
