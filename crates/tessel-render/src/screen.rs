#![forbid(unsafe_code)]

//! The pixel grid a render pass writes into.
//!
//! A `Screen` is created once per frame, filled by one render pass, read once
//! to produce output, then dropped.
//!
//! # Layout
//!
//! Pixels are stored in row-major order: `index = y * dimx + x`.
//!
//! # Invariants
//!
//! 1. `pixels.len() == dimx * dimy`
//! 2. Dimensions never change after creation
//! 3. [`Screen::set`] never writes outside the stencil or the grid
//! 4. A stencil installed with [`Screen::with_stencil`] is always contained in
//!    the stencil that was active before, and is restored when the guard drops

use std::fmt;
use std::io::{self, Write};

use tessel_core::auto_reset::AutoReset;
use tessel_core::geometry::{Bounds, Position};
use tessel_core::terminal_capabilities::TerminalCapabilities;

use crate::ansi;
use crate::box_drawing;
use crate::color::Color;
use crate::pixel::{Grapheme, Pixel, StyleFlags};

/// A rectangular grid of [`Pixel`]s plus the active clip rectangle and cursor.
///
/// # Example
///
/// ```
/// use tessel_render::{Pixel, Screen};
///
/// let mut screen = Screen::new(4, 1);
/// screen.set(0, 0, Pixel::from_char('H'));
/// screen.set(1, 0, Pixel::from_char('i'));
/// assert_eq!(screen.to_plain_string(), "Hi  ");
/// ```
#[derive(Debug, Clone)]
pub struct Screen {
    dimx: i32,
    dimy: i32,
    pixels: Vec<Pixel>,
    stencil: Bounds,
    cursor: Position,
    capabilities: TerminalCapabilities,
}

fn stencil_slot(screen: &mut Screen) -> &mut Bounds {
    &mut screen.stencil
}

impl Screen {
    /// Create a blank screen. Negative dimensions are treated as zero.
    ///
    /// Capabilities start as [`TerminalCapabilities::modern`], independent of
    /// the environment. Use [`Screen::with_capabilities`] with
    /// [`TerminalCapabilities::detect`] when writing to a real terminal.
    pub fn new(dimx: i32, dimy: i32) -> Self {
        let dimx = dimx.max(0);
        let dimy = dimy.max(0);
        let size = dimx as usize * dimy as usize;
        Self {
            dimx,
            dimy,
            pixels: vec![Pixel::default(); size],
            stencil: Bounds::from_size(dimx, dimy),
            cursor: Position::default(),
            capabilities: TerminalCapabilities::default(),
        }
    }

    /// Builder-style capability override.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: TerminalCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Width in cells.
    #[inline]
    pub const fn dimx(&self) -> i32 {
        self.dimx
    }

    /// Height in cells.
    #[inline]
    pub const fn dimy(&self) -> i32 {
        self.dimy
    }

    /// Bounding box of the whole grid.
    #[inline]
    pub const fn bounds(&self) -> Bounds {
        Bounds::from_size(self.dimx, self.dimy)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.dimx && y < self.dimy {
            Some(y as usize * self.dimx as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the pixel at (x, y). Returns `None` outside the grid.
    #[inline]
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<&Pixel> {
        self.index(x, y).map(|i| &self.pixels[i])
    }

    /// Get the pixel at (x, y) mutably, ignoring the stencil.
    #[inline]
    pub fn pixel_at_mut(&mut self, x: i32, y: i32) -> Option<&mut Pixel> {
        self.index(x, y).map(|i| &mut self.pixels[i])
    }

    /// Replace the pixel at (x, y).
    ///
    /// Writes outside the grid or the current stencil are dropped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) {
        if !self.stencil.contains(x, y) {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }

    /// One row of pixels.
    pub fn row(&self, y: i32) -> Option<&[Pixel]> {
        if y < 0 || y >= self.dimy {
            return None;
        }
        let start = y as usize * self.dimx as usize;
        Some(&self.pixels[start..start + self.dimx as usize])
    }

    /// Reset every pixel, the stencil, and the cursor.
    pub fn clear(&mut self) {
        self.pixels.fill(Pixel::default());
        self.stencil = self.bounds();
        self.cursor = Position::default();
    }

    /// Join neighbouring box-drawing glyphs after a render pass.
    ///
    /// Borders and separators drawn by different elements meet in adjacent
    /// cells: a `─` next to a `│` turns the `│` into `┤`, a `│` above a `─`
    /// turns the `─` into `┴`. Line weights carry over. Only cells holding a
    /// single box-drawing code point change, and only their grapheme. Runs
    /// over the whole grid regardless of the stencil.
    pub fn apply_shader(&mut self) {
        for y in 0..self.dimy {
            for x in 0..self.dimx {
                if x > 0 {
                    self.join_cells((x - 1, y), (x, y), box_drawing::join_horizontal);
                }
                if y > 0 {
                    self.join_cells((x, y - 1), (x, y), box_drawing::join_vertical);
                }
            }
        }
    }

    fn join_cells(
        &mut self,
        a: (i32, i32),
        b: (i32, i32),
        join: fn(char, char) -> (char, char),
    ) {
        let (Some(ia), Some(ib)) = (self.index(a.0, a.1), self.index(b.0, b.1)) else {
            return;
        };
        let (Some(ca), Some(cb)) = (
            self.pixels[ia].grapheme.as_char(),
            self.pixels[ib].grapheme.as_char(),
        ) else {
            return;
        };
        let (na, nb) = join(ca, cb);
        if na != ca {
            self.pixels[ia].grapheme = Grapheme::from_char(na);
        }
        if nb != cb {
            self.pixels[ib].grapheme = Grapheme::from_char(nb);
        }
    }

    // ========== Stencil ==========

    /// The active clip rectangle.
    #[inline]
    pub const fn stencil(&self) -> Bounds {
        self.stencil
    }

    /// Replace the clip rectangle outright.
    #[inline]
    pub fn set_stencil(&mut self, stencil: Bounds) {
        self.stencil = stencil;
    }

    /// Narrow the stencil to `bounds ∩ stencil` until the guard drops.
    ///
    /// The guard derefs to the screen, so the subtree renders through it:
    ///
    /// ```
    /// use tessel_core::geometry::Bounds;
    /// use tessel_render::{Pixel, Screen};
    ///
    /// let mut screen = Screen::new(4, 1);
    /// {
    ///     let mut clipped = screen.with_stencil(Bounds::new(1, 2, 0, 1));
    ///     for x in 0..4 {
    ///         clipped.set(x, 0, Pixel::from_char('#'));
    ///     }
    /// }
    /// assert_eq!(screen.to_plain_string(), " #  ");
    /// assert_eq!(screen.stencil(), screen.bounds());
    /// ```
    pub fn with_stencil(&mut self, bounds: Bounds) -> AutoReset<'_, Screen, Bounds> {
        let clipped = bounds.intersection(&self.stencil);
        AutoReset::new(self, stencil_slot, clipped)
    }

    // ========== Cursor ==========

    /// Where the terminal cursor should be left after output.
    #[inline]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    #[inline]
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Properties of the terminal this screen will be written to.
    #[inline]
    pub const fn capabilities(&self) -> TerminalCapabilities {
        self.capabilities
    }

    // ========== Serialization ==========

    /// Graphemes only, rows separated by `\n`. Continuation cells are skipped.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() + self.dimy as usize);
        for y in 0..self.dimy {
            if y > 0 {
                out.push('\n');
            }
            for pixel in self.row(y).unwrap_or_default() {
                if !pixel.is_continuation() {
                    out.extend(pixel.grapheme.chars());
                }
            }
        }
        out
    }

    /// Write the grid with SGR styling, rows separated by `\r\n`.
    ///
    /// Attributes are only re-emitted when they change, and every styled row
    /// ends with a reset so a trailing newline never inherits a background.
    pub fn write_ansi<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for y in 0..self.dimy {
            if y > 0 {
                w.write_all(b"\r\n")?;
            }
            let mut current = SgrState::default();
            for pixel in self.row(y).unwrap_or_default() {
                if pixel.is_continuation() {
                    continue;
                }
                let next = SgrState::of(pixel);
                if next != current {
                    next.write_transition(w, &current)?;
                    current = next;
                }
                write!(w, "{}", pixel.grapheme)?;
            }
            if current != SgrState::default() {
                ansi::sgr_reset(w)?;
            }
        }
        Ok(())
    }

    /// Escape string that moves the terminal cursor back to the first row
    /// of a previously printed screen of this height, optionally erasing
    /// each row on the way.
    pub fn reset_position(&self, clear: bool) -> String {
        let mut buf = Vec::new();
        // Writes into a Vec<u8> cannot fail.
        let _ = self.write_reset_position(&mut buf, clear);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_reset_position<W: Write>(&self, w: &mut W, clear: bool) -> io::Result<()> {
        ansi::cr(w)?;
        if clear {
            ansi::erase_line(w)?;
        }
        for _ in 1..self.dimy {
            ansi::cuu(w, 1)?;
            if clear {
                ansi::erase_line(w)?;
            }
        }
        Ok(())
    }

    /// Write the styled grid to stdout.
    pub fn print(&self) -> io::Result<()> {
        tessel_core::debug!(dimx = self.dimx, dimy = self.dimy, "printing screen");
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_ansi(&mut out)?;
        out.flush()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::with_capacity(self.pixels.len());
        self.write_ansi(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

/// The SGR-visible part of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SgrState {
    foreground: Color,
    background: Color,
    style: StyleFlags,
}

impl SgrState {
    fn of(pixel: &Pixel) -> Self {
        Self {
            foreground: pixel.foreground,
            background: pixel.background,
            style: pixel.style,
        }
    }

    fn write_transition<W: Write>(&self, w: &mut W, from: &SgrState) -> io::Result<()> {
        // Flags cannot be switched off individually without per-flag off
        // codes, so any removed flag forces a full reset.
        let from = if from.style.difference(self.style).is_empty() {
            *from
        } else {
            ansi::sgr_reset(w)?;
            SgrState::default()
        };
        ansi::sgr_flags(w, self.style.difference(from.style))?;
        if self.foreground != from.foreground {
            ansi::sgr_fg(w, self.foreground)?;
        }
        if self.background != from.background {
            ansi::sgr_bg(w, self.background)?;
        }
        Ok(())
    }
}
