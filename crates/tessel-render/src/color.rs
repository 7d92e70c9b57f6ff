#![forbid(unsafe_code)]

//! Terminal colors.
//!
//! Only the surface the pixel grid needs: which palette a color comes from
//! and its index or channels. Palette resolution and downgrading belong to
//! the output layer.

/// A foreground or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's own default color.
    #[default]
    Default,
    /// One of the 16 basic colors (8..16 are the bright variants).
    Palette16(u8),
    /// An entry of the 256-color palette.
    Palette256(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Palette16(0);
    pub const RED: Self = Self::Palette16(1);
    pub const GREEN: Self = Self::Palette16(2);
    pub const YELLOW: Self = Self::Palette16(3);
    pub const BLUE: Self = Self::Palette16(4);
    pub const MAGENTA: Self = Self::Palette16(5);
    pub const CYAN: Self = Self::Palette16(6);
    pub const WHITE: Self = Self::Palette16(7);

    /// Create a 24-bit color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// True for [`Color::Default`].
    #[inline]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}
