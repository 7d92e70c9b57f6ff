#![forbid(unsafe_code)]

//! Terminal capability model consulted at render time.
//!
//! Rendering itself never talks to the terminal, but a few decisions depend
//! on how the output terminal behaves. The one that matters to the layout
//! core is cursor placement: focused elements move the terminal cursor to
//! their top-left corner so input-method popups appear next to the control.
//! Some terminals (Windows Terminal, conhost) draw a hidden cursor by hiding
//! the cell underneath it, which would blank focused content, so placement is
//! suppressed there.
//!
//! # Detection Strategy
//!
//! - `TESSEL_FOCUS_CURSOR`: explicit override (`0`/`false`/`off` or
//!   `1`/`true`/`on`); wins over everything else
//! - `WT_SESSION`: Windows Terminal
//! - `TERM_PROGRAM`: conhost-style hosts are reported as `conhost`
//!
//! Given the same environment, [`TerminalCapabilities::detect`] always
//! produces the same result.

use std::env;

#[derive(Debug, Clone, Default)]
struct DetectInputs {
    focus_cursor_override: Option<bool>,
    wt_session: bool,
    term_program: String,
}

impl DetectInputs {
    fn from_env() -> Self {
        Self {
            focus_cursor_override: env::var("TESSEL_FOCUS_CURSOR")
                .ok()
                .and_then(|v| parse_switch(&v)),
            wt_session: env::var("WT_SESSION").is_ok(),
            term_program: env::var("TERM_PROGRAM").unwrap_or_default(),
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Known terminal profile identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalProfile {
    /// Terminal that draws a real cursor indicator.
    Modern,
    /// Windows Terminal or conhost: hiding the cursor hides the cell under it.
    WindowsTerminal,
    /// Detected from the environment.
    Detected,
}

impl TerminalProfile {
    /// Get the profile name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::WindowsTerminal => "windows-terminal",
            Self::Detected => "detected",
        }
    }
}

impl std::str::FromStr for TerminalProfile {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "windows-terminal" | "windows" | "conhost" => Ok(Self::WindowsTerminal),
            "detected" | "auto" => Ok(Self::Detected),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TerminalProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output-terminal properties that influence rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    profile: TerminalProfile,
    /// Whether focused elements may move the terminal cursor.
    pub focus_cursor: bool,
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self::modern()
    }
}

impl TerminalCapabilities {
    /// A terminal that renders a cursor indicator on top of content.
    #[must_use]
    pub const fn modern() -> Self {
        Self {
            profile: TerminalProfile::Modern,
            focus_cursor: true,
        }
    }

    /// A terminal that hides the cell under a hidden cursor.
    #[must_use]
    pub const fn windows_terminal() -> Self {
        Self {
            profile: TerminalProfile::WindowsTerminal,
            focus_cursor: false,
        }
    }

    /// Detect capabilities from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from_inputs(&DetectInputs::from_env())
    }

    fn detect_from_inputs(env: &DetectInputs) -> Self {
        let windows = env.wt_session || env.term_program.eq_ignore_ascii_case("conhost");
        let focus_cursor = env.focus_cursor_override.unwrap_or(!windows);
        Self {
            profile: TerminalProfile::Detected,
            focus_cursor,
        }
    }

    /// Builder-style override of cursor placement.
    #[must_use]
    pub const fn with_focus_cursor(mut self, enabled: bool) -> Self {
        self.focus_cursor = enabled;
        self
    }

    /// Profile these capabilities came from.
    #[must_use]
    pub const fn profile(&self) -> TerminalProfile {
        self.profile
    }
}
