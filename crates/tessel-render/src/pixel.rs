#![forbid(unsafe_code)]

//! Pixel types and invariants.
//!
//! A [`Pixel`] is one display cell: a single grapheme cluster plus colors and
//! style flags. Writes replace the whole pixel; partial updates go through
//! the explicit `with_*` builders.
//!
//! # Wide graphemes
//!
//! A grapheme that is two columns wide occupies its own cell and marks the
//! next cell as a *continuation* ([`Grapheme::CONTINUATION`]). Serializers skip
//! continuation cells so the row keeps its column alignment.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::color::Color;

bitflags::bitflags! {
    /// Independent text style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Blinking text.
        const BLINK      = 0b0000_0001;
        /// Bold / increased intensity.
        const BOLD       = 0b0000_0010;
        /// Dim / decreased intensity.
        const DIM        = 0b0000_0100;
        /// Reverse video (swap fg/bg).
        const INVERTED   = 0b0000_1000;
        /// Underlined text.
        const UNDERLINED = 0b0001_0000;
    }
}

/// One grapheme cluster, stored inline.
///
/// Combining sequences keep all their code points; four fit without
/// allocating. An empty cluster is reserved for [`Grapheme::CONTINUATION`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grapheme(SmallVec<[char; 4]>);

impl Grapheme {
    /// Placeholder for the cell covered by the right half of a wide grapheme.
    pub const CONTINUATION: Self = Self(SmallVec::new_const());

    /// Take the first extended grapheme cluster of `text`.
    ///
    /// Empty input yields a space.
    pub fn new(text: &str) -> Self {
        match text.graphemes(true).next() {
            Some(cluster) => Self(cluster.chars().collect()),
            None => Self::space(),
        }
    }

    /// A grapheme made of a single code point.
    pub fn from_char(c: char) -> Self {
        let mut chars = SmallVec::new();
        chars.push(c);
        Self(chars)
    }

    /// The blank grapheme.
    pub fn space() -> Self {
        Self::from_char(' ')
    }

    /// True for the wide-grapheme placeholder.
    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.0.is_empty()
    }

    /// Code points of the cluster.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// The code point of a single-code-point grapheme.
    #[inline]
    pub fn as_char(&self) -> Option<char> {
        match self.0.as_slice() {
            [c] => Some(*c),
            _ => None,
        }
    }

    /// Display width in columns: 0 for continuations and lone combining
    /// marks, 2 for wide base characters, 1 otherwise.
    pub fn width(&self) -> usize {
        self.0.first().and_then(|c| c.width()).unwrap_or(0)
    }
}

impl Default for Grapheme {
    fn default() -> Self {
        Self::space()
    }
}

impl From<char> for Grapheme {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<&str> for Grapheme {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for Grapheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for &c in &self.0 {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Grapheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_continuation() {
            f.write_str("Grapheme::CONTINUATION")
        } else {
            write!(f, "Grapheme({:?})", self.to_string())
        }
    }
}

/// A single display cell.
///
/// The default pixel is a space with default colors and no style flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Grapheme drawn in the cell.
    pub grapheme: Grapheme,
    /// Background color.
    pub background: Color,
    /// Foreground color.
    pub foreground: Color,
    /// Style flags.
    pub style: StyleFlags,
}

impl Pixel {
    /// A default-styled pixel showing `grapheme`.
    pub fn new(grapheme: impl Into<Grapheme>) -> Self {
        Self {
            grapheme: grapheme.into(),
            ..Self::default()
        }
    }

    /// A pixel showing a single character.
    pub fn from_char(c: char) -> Self {
        Self::new(c)
    }

    /// The pixel placed right of a wide grapheme.
    pub fn continuation() -> Self {
        Self::new(Grapheme::CONTINUATION)
    }

    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.grapheme.is_continuation()
    }

    /// Replace the grapheme, keeping colors and style.
    #[must_use]
    pub fn with_grapheme(mut self, grapheme: impl Into<Grapheme>) -> Self {
        self.grapheme = grapheme.into();
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Replace the style flags.
    #[must_use]
    pub fn with_style(mut self, style: StyleFlags) -> Self {
        self.style = style;
        self
    }

    /// Copy colors and style from `template`, keeping this pixel's grapheme.
    ///
    /// Non-default template colors win; style flags are unioned.
    pub fn merge_style(&mut self, template: &Pixel) {
        if !template.foreground.is_default() {
            self.foreground = template.foreground;
        }
        if !template.background.is_default() {
            self.background = template.background;
        }
        self.style |= template.style;
    }

    /// True if the pixel carries any color or style.
    pub fn is_styled(&self) -> bool {
        !self.foreground.is_default() || !self.background.is_default() || !self.style.is_empty()
    }
}
