#![forbid(unsafe_code)]

//! tessel public facade crate.
//!
//! Re-exports the element tree, the screen, and the geometry they share,
//! plus a prelude for day-to-day usage.
//!
//! ```
//! use tessel::prelude::*;
//!
//! let mut root = xframe(focus(text("0123456789")));
//! let mut out = Vec::new();
//! tessel::write_element(&mut out, &mut root, Dimension::fixed(4)).unwrap();
//! assert_eq!(out, b"3456\n");
//! ```

use std::fmt;
use std::io::{self, Write};

// --- Core re-exports -------------------------------------------------------

pub use tessel_core::auto_reset::AutoReset;
pub use tessel_core::geometry::{Bounds, Position};
pub use tessel_core::terminal_capabilities::{TerminalCapabilities, TerminalProfile};

// --- Render re-exports -----------------------------------------------------

pub use tessel_render::{Color, Grapheme, Pixel, Screen, StyleFlags};

// --- Element re-exports ----------------------------------------------------

pub use tessel_dom::{
    Dimension, Element, FrameAxes, Leaf, Requirement, Selection, Text, container, create_screen,
    create_screen_from, focus, frame, leaf, render, scroll_offset, select, text, xframe, yframe,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tessel output.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing to the terminal.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for tessel APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- One-shot output -------------------------------------------------------

/// Lay out `element` at `width` columns and as many rows as it needs, then
/// write it to `w` followed by a newline.
pub fn write_element<W: Write>(w: &mut W, element: &mut Element, width: Dimension) -> Result<()> {
    let mut screen = create_screen(width, Dimension::fit(element));
    render(&mut screen, element);
    screen.write_ansi(w)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

/// Print `element` to stdout using the full terminal width.
pub fn print_element(element: &mut Element) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_element(&mut out, element, Dimension::full())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Bounds, Color, Dimension, Element, Error, Leaf, Pixel, Position, Requirement, Result,
        Screen, Selection, StyleFlags, Text, container, focus, frame, leaf, render, select, text,
        xframe, yframe,
    };

    pub use crate::{core, dom, grid};
}

pub use tessel_core as core;
pub use tessel_dom as dom;
pub use tessel_render as grid;
