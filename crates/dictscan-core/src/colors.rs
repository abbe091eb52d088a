//! Terminal palette for dump, trace and match output.
//!
//! Fields are named by what they paint, not by hue, so callers never pick
//! a color directly.

/// ANSI escape codes per output role. Empty strings when disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Node references (`N3`) and pattern indices in match listings.
    pub node: &'static str,
    /// Pattern bytes, prefixes, reported pattern ids.
    pub pattern: &'static str,
    /// Link keywords, scan positions, section headers, separators.
    pub meta: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        node: "\x1b[34m",
        pattern: "\x1b[32m",
        meta: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        node: "",
        pattern: "",
        meta: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
