#![forbid(unsafe_code)]

//! Leaf elements.
//!
//! Concrete content (text, borders, gauges …) plugs into the tree through
//! [`Leaf`]. A leaf is an immutable descriptor: it reports a fixed
//! requirement and paints itself into whatever box it is given. The tree
//! keeps the per-pass state, so one leaf can back many elements.

use std::fmt;

use tessel_core::geometry::Bounds;
use tessel_render::{Color, Pixel, Screen, StyleFlags};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::element::{Element, leaf};
use crate::requirement::Requirement;

/// Content that takes part in the three passes without children.
pub trait Leaf: fmt::Debug + Send + Sync {
    /// Minimum size, and optionally a selection, for this content.
    fn requirement(&self) -> Requirement;

    /// Paint into `screen` within `bounds`.
    ///
    /// The stencil is already narrowed to `bounds`; writes outside it are
    /// dropped by [`Screen::set`].
    fn render(&self, bounds: Bounds, screen: &mut Screen);
}

/// A single line of text.
#[derive(Debug, Clone, Default)]
pub struct Text {
    content: String,
    style: Pixel,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: Pixel::default(),
        }
    }

    #[must_use]
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.style.foreground = color;
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background = color;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleFlags) -> Self {
        self.style.style = style;
        self
    }

    /// Display width in columns.
    pub fn width(&self) -> i32 {
        let w: usize = self
            .content
            .graphemes(true)
            .map(UnicodeWidthStr::width)
            .sum();
        i32::try_from(w).unwrap_or(i32::MAX)
    }
}

impl Leaf for Text {
    fn requirement(&self) -> Requirement {
        Requirement::fixed(self.width(), 1)
    }

    fn render(&self, bounds: Bounds, screen: &mut Screen) {
        if bounds.is_empty() {
            return;
        }

        let y = bounds.y_min;
        let mut x = bounds.x_min;
        for grapheme in self.content.graphemes(true) {
            if x >= bounds.x_max {
                break;
            }
            let w = UnicodeWidthStr::width(grapheme) as i32;
            if w == 0 {
                continue;
            }
            if i64::from(x) + i64::from(w) > i64::from(bounds.x_max) {
                break;
            }
            screen.set(x, y, self.style.clone().with_grapheme(grapheme));
            for tail in 1..w {
                screen.set(x + tail, y, Pixel::continuation());
            }
            x += w;
        }
    }
}

/// A single line of unstyled text.
pub fn text(content: impl Into<String>) -> Element {
    leaf(Text::new(content))
}
