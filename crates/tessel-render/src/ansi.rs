#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure byte-generation functions used when a [`Screen`](crate::Screen) is
//! serialized. No state tracking happens here; callers decide when a
//! transition is needed.
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ n m` | SGR (Select Graphic Rendition) |
//! | `ESC [ n A` | CUU (Cursor Up) |
//! | `ESC [ 2 K` | EL (Erase whole line) |

use std::io::{self, Write};

use crate::color::Color;
use crate::pixel::StyleFlags;

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// Write SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// SGR "on" code for each style flag, in emission order.
const FLAG_CODES: [(StyleFlags, u8); 5] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::UNDERLINED, 4),
    (StyleFlags::BLINK, 5),
    (StyleFlags::INVERTED, 7),
];

/// Get the SGR enable code for a single style flag.
#[must_use]
pub fn sgr_code_for_flag(flag: StyleFlags) -> Option<u8> {
    FLAG_CODES
        .iter()
        .find(|(f, _)| *f == flag)
        .map(|&(_, code)| code)
}

/// Write SGR sequence for style flags (all set flags).
///
/// Emits a single `CSI n ; n ; ... m`. Does not emit reset first.
pub fn sgr_flags<W: Write>(w: &mut W, flags: StyleFlags) -> io::Result<()> {
    if flags.is_empty() {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    let mut first = true;
    for (flag, code) in FLAG_CODES {
        if flags.contains(flag) {
            if !first {
                w.write_all(b";")?;
            }
            write!(w, "{code}")?;
            first = false;
        }
    }
    w.write_all(b"m")
}

/// Write SGR foreground color.
pub fn sgr_fg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    match color {
        Color::Default => w.write_all(b"\x1b[39m"),
        Color::Palette16(index) => {
            let code = if index < 8 { 30 + index } else { 90 + (index & 7) };
            write!(w, "\x1b[{code}m")
        }
        Color::Palette256(index) => write!(w, "\x1b[38;5;{index}m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

/// Write SGR background color.
pub fn sgr_bg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    match color {
        Color::Default => w.write_all(b"\x1b[49m"),
        Color::Palette16(index) => {
            let code = if index < 8 { 40 + index } else { 100 + (index & 7) };
            write!(w, "\x1b[{code}m")
        }
        Color::Palette256(index) => write!(w, "\x1b[48;5;{index}m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

/// Carriage return.
#[inline]
pub fn cr<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\r")
}

/// Move cursor up: `CSI n A`
pub fn cuu<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    match n {
        0 => Ok(()),
        1 => w.write_all(b"\x1b[1A"),
        _ => write!(w, "\x1b[{n}A"),
    }
}

/// Erase the entire current line: `CSI 2 K`
#[inline]
pub fn erase_line<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}
