#![forbid(unsafe_code)]

//! Render kernel: pixels, the screen grid, and ANSI serialization.

pub mod ansi;
mod box_drawing;
pub mod color;
pub mod pixel;
pub mod screen;

pub use color::Color;
pub use pixel::{Grapheme, Pixel, StyleFlags};
pub use screen::Screen;
