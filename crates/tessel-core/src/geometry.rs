#![forbid(unsafe_code)]

//! Geometric primitives.

/// An axis-aligned rectangle used for layout boxes and clip regions.
///
/// Both axes are half-open: a cell `(x, y)` is inside when
/// `x_min <= x < x_max` and `y_min <= y < y_max`. Coordinates are signed
/// because a scrolled child may start left of (or above) the screen origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// Left edge (inclusive).
    pub x_min: i32,
    /// Right edge (exclusive).
    pub x_max: i32,
    /// Top edge (inclusive).
    pub y_min: i32,
    /// Bottom edge (exclusive).
    pub y_max: i32,
}

impl Bounds {
    /// The canonical empty rectangle.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Create bounds from edges, in `x_min, x_max, y_min, y_max` order.
    #[inline]
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Create bounds anchored at the origin with the given size.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, width, 0, height)
    }

    /// Horizontal extent. Never negative, saturates at `i32::MAX`.
    #[inline]
    pub const fn width(&self) -> i32 {
        extent(self.x_min, self.x_max)
    }

    /// Vertical extent. Never negative, saturates at `i32::MAX`.
    #[inline]
    pub const fn height(&self) -> i32 {
        extent(self.y_min, self.y_max)
    }

    /// True when the rectangle covers no cell.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x < self.x_max && y >= self.y_min && y < self.y_max
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns [`Bounds::EMPTY`] if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Bounds) -> Bounds {
        self.intersection_opt(other).unwrap_or(Self::EMPTY)
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Bounds) -> Option<Bounds> {
        let x_min = self.x_min.max(other.x_min);
        let x_max = self.x_max.min(other.x_max);
        let y_min = self.y_min.max(other.y_min);
        let y_max = self.y_max.min(other.y_max);

        if x_min < x_max && y_min < y_max {
            Some(Bounds::new(x_min, x_max, y_min, y_max))
        } else {
            None
        }
    }

    /// Shift the rectangle by `(dx, dy)`.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Bounds {
        Bounds::new(
            self.x_min.saturating_add(dx),
            self.x_max.saturating_add(dx),
            self.y_min.saturating_add(dy),
            self.y_max.saturating_add(dy),
        )
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Position {
        Position::new(self.x_min, self.y_min)
    }
}

/// `max - min` clamped to `[0, i32::MAX]`.
#[inline]
const fn extent(min: i32, max: i32) -> i32 {
    let d = max as i64 - min as i64;
    if d <= 0 {
        0
    } else if d > i32::MAX as i64 {
        i32::MAX
    } else {
        d as i32
    }
}

/// A cell position, used for the terminal cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
