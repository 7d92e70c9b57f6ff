#![forbid(unsafe_code)]

//! Box-drawing glyphs as four weighted arms.
//!
//! Every glyph in the table is described by the weight of the line leaving
//! the cell to the left, up, right and down. Two neighbouring glyphs are
//! joined by growing the missing arm on one side to match the arm pointing at
//! it from the other side, when a glyph with the grown arm exists.

/// Weight of one arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Weight {
    None,
    Light,
    Heavy,
    Double,
}

use Weight::{Double as D, Heavy as H, Light as L, None as N};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Arms {
    pub(crate) left: Weight,
    pub(crate) up: Weight,
    pub(crate) right: Weight,
    pub(crate) down: Weight,
}

const fn arms(left: Weight, up: Weight, right: Weight, down: Weight) -> Arms {
    Arms {
        left,
        up,
        right,
        down,
    }
}

/// Glyphs that arms can be mapped back to. Each arm combination appears once.
const GLYPHS: &[(char, Arms)] = &[
    // Light
    ('─', arms(L, N, L, N)),
    ('│', arms(N, L, N, L)),
    ('┌', arms(N, N, L, L)),
    ('┐', arms(L, N, N, L)),
    ('└', arms(N, L, L, N)),
    ('┘', arms(L, L, N, N)),
    ('├', arms(N, L, L, L)),
    ('┤', arms(L, L, N, L)),
    ('┬', arms(L, N, L, L)),
    ('┴', arms(L, L, L, N)),
    ('┼', arms(L, L, L, L)),
    ('╴', arms(L, N, N, N)),
    ('╵', arms(N, L, N, N)),
    ('╶', arms(N, N, L, N)),
    ('╷', arms(N, N, N, L)),
    // Heavy
    ('━', arms(H, N, H, N)),
    ('┃', arms(N, H, N, H)),
    ('┏', arms(N, N, H, H)),
    ('┓', arms(H, N, N, H)),
    ('┗', arms(N, H, H, N)),
    ('┛', arms(H, H, N, N)),
    ('┣', arms(N, H, H, H)),
    ('┫', arms(H, H, N, H)),
    ('┳', arms(H, N, H, H)),
    ('┻', arms(H, H, H, N)),
    ('╋', arms(H, H, H, H)),
    ('╸', arms(H, N, N, N)),
    ('╹', arms(N, H, N, N)),
    ('╺', arms(N, N, H, N)),
    ('╻', arms(N, N, N, H)),
    // Light and heavy
    ('┍', arms(N, N, H, L)),
    ('┎', arms(N, N, L, H)),
    ('┑', arms(H, N, N, L)),
    ('┒', arms(L, N, N, H)),
    ('┕', arms(N, L, H, N)),
    ('┖', arms(N, H, L, N)),
    ('┙', arms(H, L, N, N)),
    ('┚', arms(L, H, N, N)),
    ('┝', arms(N, L, H, L)),
    ('┠', arms(N, H, L, H)),
    ('┥', arms(H, L, N, L)),
    ('┨', arms(L, H, N, H)),
    ('┯', arms(H, N, H, L)),
    ('┰', arms(L, N, L, H)),
    ('┷', arms(H, L, H, N)),
    ('┸', arms(L, H, L, N)),
    ('┿', arms(H, L, H, L)),
    ('╂', arms(L, H, L, H)),
    // Double
    ('═', arms(D, N, D, N)),
    ('║', arms(N, D, N, D)),
    ('╔', arms(N, N, D, D)),
    ('╗', arms(D, N, N, D)),
    ('╚', arms(N, D, D, N)),
    ('╝', arms(D, D, N, N)),
    ('╠', arms(N, D, D, D)),
    ('╣', arms(D, D, N, D)),
    ('╦', arms(D, N, D, D)),
    ('╩', arms(D, D, D, N)),
    ('╬', arms(D, D, D, D)),
    // Light and double
    ('╒', arms(N, N, D, L)),
    ('╓', arms(N, N, L, D)),
    ('╕', arms(D, N, N, L)),
    ('╖', arms(L, N, N, D)),
    ('╘', arms(N, L, D, N)),
    ('╙', arms(N, D, L, N)),
    ('╛', arms(D, L, N, N)),
    ('╜', arms(L, D, N, N)),
    ('╞', arms(N, L, D, L)),
    ('╟', arms(N, D, L, D)),
    ('╡', arms(D, L, N, L)),
    ('╢', arms(L, D, N, D)),
    ('╤', arms(D, N, D, L)),
    ('╥', arms(L, N, L, D)),
    ('╧', arms(D, L, D, N)),
    ('╨', arms(L, D, L, N)),
    ('╪', arms(D, L, D, L)),
    ('╫', arms(L, D, L, D)),
];

/// Rounded corners join like square ones but are never produced.
const ROUNDED: &[(char, Arms)] = &[
    ('╭', arms(N, N, L, L)),
    ('╮', arms(L, N, N, L)),
    ('╯', arms(L, L, N, N)),
    ('╰', arms(N, L, L, N)),
];

pub(crate) fn arms_of(c: char) -> Option<Arms> {
    GLYPHS
        .iter()
        .chain(ROUNDED)
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, a)| *a)
}

pub(crate) fn glyph_for(a: Arms) -> Option<char> {
    GLYPHS
        .iter()
        .find(|(_, candidate)| *candidate == a)
        .map(|(glyph, _)| *glyph)
}

/// Join `left` with the glyph to its right.
pub(crate) fn join_horizontal(left: char, right: char) -> (char, char) {
    let (Some(l), Some(r)) = (arms_of(left), arms_of(right)) else {
        return (left, right);
    };
    let mut out = (left, right);
    if l.right == N && r.left != N {
        out.0 = glyph_for(Arms { right: r.left, ..l }).unwrap_or(left);
    }
    if r.left == N && l.right != N {
        out.1 = glyph_for(Arms { left: l.right, ..r }).unwrap_or(right);
    }
    out
}

/// Join `top` with the glyph below it.
pub(crate) fn join_vertical(top: char, bottom: char) -> (char, char) {
    let (Some(t), Some(b)) = (arms_of(top), arms_of(bottom)) else {
        return (top, bottom);
    };
    let mut out = (top, bottom);
    if t.down == N && b.up != N {
        out.0 = glyph_for(Arms { down: b.up, ..t }).unwrap_or(top);
    }
    if b.up == N && t.down != N {
        out.1 = glyph_for(Arms { up: t.down, ..b }).unwrap_or(bottom);
    }
    out
}
