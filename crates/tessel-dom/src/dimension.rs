#![forbid(unsafe_code)]

//! Resolving screen sizes.

use tessel_core::terminal_capabilities::TerminalCapabilities;
use tessel_render::Screen;

use crate::element::Element;

/// Size used by [`Dimension::full`] when no terminal is attached.
const FALLBACK_SIZE: (i32, i32) = (80, 24);

/// A resolved screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub dimx: i32,
    pub dimy: i32,
}

impl Dimension {
    /// The same fixed size on both axes.
    pub const fn fixed(n: i32) -> Self {
        Self { dimx: n, dimy: n }
    }

    /// The minimum size `element` needs.
    ///
    /// Runs the requirement pass on `element`.
    pub fn fit(element: &mut Element) -> Self {
        element.compute_requirement();
        let requirement = element.requirement();
        Self {
            dimx: requirement.min_x,
            dimy: requirement.min_y,
        }
    }

    /// The size of the attached terminal, or 80x24 without one.
    pub fn full() -> Self {
        let (dimx, dimy) = terminal_size().unwrap_or(FALLBACK_SIZE);
        Self { dimx, dimy }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn terminal_size() -> Option<(i32, i32)> {
    match crossterm::terminal::size() {
        Ok((0, _)) | Ok((_, 0)) => None,
        Ok((w, h)) => Some((i32::from(w), i32::from(h))),
        Err(_err) => {
            tessel_core::debug!(error = %_err, "terminal size unavailable, using fallback");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn terminal_size() -> Option<(i32, i32)> {
    None
}

/// Create a screen whose width comes from `width` and height from `height`.
///
/// The screen carries [`TerminalCapabilities::detect`], so focus cursor
/// placement follows the terminal the process is attached to.
pub fn create_screen(width: Dimension, height: Dimension) -> Screen {
    Screen::new(width.dimx, height.dimy).with_capabilities(TerminalCapabilities::detect())
}

/// Create a screen taking both axes from one dimension.
pub fn create_screen_from(dimension: Dimension) -> Screen {
    create_screen(dimension, dimension)
}
