#![forbid(unsafe_code)]

//! Scrollable viewports.
//!
//! A frame gives its child the child's full size along each framed axis,
//! even when the frame itself is smaller, then clips rendering to the frame's
//! own box. The child is shifted so its selected region stays visible:
//! centered when there is room, pinned to an edge otherwise.
//!
//! # Scroll offset
//!
//! For one axis with external (visible) size `E`, internal (child) size
//! `I = max(required, E)` and a selected interval `[s_min, s_max)`:
//!
//! ```text
//! d = s_min - E/2 + (s_max - s_min)/2        (truncating division)
//! d = clamp(d, 0, max(0, I - E - 1))
//! child = [box_min - d, box_min + I - d)
//! ```
//!
//! The upper clamp stops one cell short of scrolling the child's last column
//! to the frame's last column.

use tessel_core::geometry::Bounds;
use tessel_render::Screen;

use crate::element::{Element, Kind};
use crate::requirement::Requirement;

bitflags::bitflags! {
    /// Axes along which a frame scrolls.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FrameAxes: u8 {
        /// Horizontal scrolling.
        const X = 0b01;
        /// Vertical scrolling.
        const Y = 0b10;
        /// Both axes.
        const BOTH = Self::X.bits() | Self::Y.bits();
    }
}

/// Offset `d` by which a child of size `internal` is shifted inside a
/// window of size `external` so that `[selected_min, selected_max)` is
/// visible.
///
/// Always in `[0, max(0, internal - external - 1)]`.
///
/// ```
/// use tessel_dom::scroll_offset;
///
/// // Selection at the far end of a 20-wide child seen through 5 cells.
/// assert_eq!(scroll_offset(5, 20, 12, 20), 14);
/// // No slack, no scroll.
/// assert_eq!(scroll_offset(8, 8, 5, 7), 0);
/// ```
pub fn scroll_offset(external: i32, internal: i32, selected_min: i32, selected_max: i32) -> i32 {
    let focused = selected_max.saturating_sub(selected_min);
    let d = selected_min
        .saturating_sub(external / 2)
        .saturating_add(focused / 2);
    let limit = internal.saturating_sub(external).saturating_sub(1).max(0);
    d.clamp(0, limit)
}

/// Place one axis of the child box. Returns `(child_min, child_max)`.
fn scroll_axis(
    box_min: i32,
    external: i32,
    required: i32,
    selected_min: i32,
    selected_max: i32,
) -> (i32, i32) {
    let internal = required.max(external);
    let d = scroll_offset(external, internal, selected_min, selected_max);
    tessel_core::trace!(external, internal, offset = d, "frame axis scrolled");
    let min = i64::from(box_min) - i64::from(d);
    (clamp_to_i32(min), clamp_to_i32(min + i64::from(internal)))
}

fn clamp_to_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[derive(Debug, Clone)]
pub(crate) struct FrameNode {
    child: Box<Element>,
    axes: FrameAxes,
}

impl FrameNode {
    pub(crate) fn child(&self) -> &Element {
        &self.child
    }

    /// Framing never changes how much room the content wants.
    pub(crate) fn compute_requirement(&mut self) -> Requirement {
        self.child.compute_requirement();
        *self.child.requirement()
    }

    pub(crate) fn set_box(&mut self, bounds: Bounds, requirement: &Requirement) {
        let selected = requirement.selected_region();
        let mut child_box = bounds;

        if self.axes.contains(FrameAxes::X) {
            (child_box.x_min, child_box.x_max) = scroll_axis(
                bounds.x_min,
                bounds.width(),
                requirement.min_x,
                selected.x_min,
                selected.x_max,
            );
        }

        if self.axes.contains(FrameAxes::Y) {
            (child_box.y_min, child_box.y_max) = scroll_axis(
                bounds.y_min,
                bounds.height(),
                requirement.min_y,
                selected.y_min,
                selected.y_max,
            );
        }

        self.child.set_box(child_box);
    }

    pub(crate) fn render(&self, bounds: Bounds, screen: &mut Screen) {
        let mut clipped = screen.with_stencil(bounds);
        self.child.render(&mut clipped);
    }
}

fn framed(child: Element, axes: FrameAxes) -> Element {
    Element::from_kind(Kind::Frame(FrameNode {
        child: Box::new(child),
        axes,
    }))
}

/// Show `child` through a viewport that scrolls on both axes to keep the
/// focused or selected descendant visible.
pub fn frame(child: Element) -> Element {
    framed(child, FrameAxes::BOTH)
}

/// Like [`frame`], scrolling horizontally only.
pub fn xframe(child: Element) -> Element {
    framed(child, FrameAxes::X)
}

/// Like [`frame`], scrolling vertically only.
pub fn yframe(child: Element) -> Element {
    framed(child, FrameAxes::Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::container;
    use crate::leaf::{Leaf, text};
    use crate::select::{focus, select};
    use tessel_core::geometry::Position;
    use tessel_render::Pixel;

    /// A block of `size`, with row `r` drawn using `rows[r % rows.len()]`.
    #[derive(Debug)]
    struct Rows {
        size: (i32, i32),
        rows: &'static [&'static str],
    }

    impl Leaf for Rows {
        fn requirement(&self) -> Requirement {
            Requirement::fixed(self.size.0, self.size.1)
        }

        fn render(&self, bounds: Bounds, screen: &mut Screen) {
            for (i, y) in (bounds.y_min..bounds.y_max).enumerate() {
                let line = self.rows[i % self.rows.len()];
                for (x, c) in (bounds.x_min..bounds.x_max).zip(line.chars()) {
                    screen.set(x, y, Pixel::from_char(c));
                }
            }
        }
    }

    fn layout(mut e: Element, bounds: Bounds) -> Element {
        e.compute_requirement();
        e.set_box(bounds);
        e
    }

    #[test]
    fn offset_centers_selection_when_room() {
        // 30 wide child, 10 wide window, selection [14, 16).
        assert_eq!(scroll_offset(10, 30, 14, 16), 10);
    }

    #[test]
    fn offset_clamps_to_zero_at_start() {
        assert_eq!(scroll_offset(10, 30, 1, 2), 0);
    }

    #[test]
    fn offset_clamps_one_short_of_end() {
        assert_eq!(scroll_offset(5, 20, 12, 20), 14);
        assert_eq!(scroll_offset(5, 20, 19, 20), 14);
    }

    #[test]
    fn offset_zero_without_slack() {
        assert_eq!(scroll_offset(7, 7, 6, 7), 0);
        assert_eq!(scroll_offset(7, 8, 6, 7), 0);
    }

    #[test]
    fn offset_handles_degenerate_windows() {
        assert_eq!(scroll_offset(0, 10, 9, 10), 9);
        assert_eq!(scroll_offset(0, 0, 0, 0), 0);
        assert_eq!(scroll_offset(0, 10, i32::MIN, i32::MAX), 0);
    }

    #[test]
    fn requirement_passes_through() {
        let mut e = frame(focus(text("abcdef")));
        e.compute_requirement();
        let mut inner = focus(text("abcdef"));
        inner.compute_requirement();
        assert_eq!(e.requirement(), inner.requirement());
    }

    #[test]
    fn wide_focus_scenario() {
        // Window of 5x1 over a 20x1 child whose focus covers [12, 20).
        let child = container([
            leaf_rows(20, 1, &["abcdefghijklmnopqrst"]),
            focus_target(12, 8),
        ]);
        let e = layout(frame(child), Bounds::new(3, 8, 0, 1));

        assert_eq!(e.children()[0].bounds(), Bounds::new(3 - 14, 3 + 6, 0, 1));

        let mut screen = Screen::new(10, 1);
        e.render(&mut screen);
        assert_eq!(screen.to_plain_string(), "   opqrs  ");
        assert_eq!(screen.stencil(), screen.bounds());
    }

    /// An invisible leaf whose focus covers `[start, start + len)` on row 0.
    fn focus_target(start: i32, len: i32) -> Element {
        #[derive(Debug)]
        struct Target {
            start: i32,
            len: i32,
        }
        impl Leaf for Target {
            fn requirement(&self) -> Requirement {
                Requirement {
                    selection: crate::Selection::Focused,
                    selected_box: Bounds::new(self.start, self.start + self.len, 0, 1),
                    ..Requirement::fixed(self.start + self.len, 1)
                }
            }
            fn render(&self, _bounds: Bounds, _screen: &mut Screen) {}
        }

        crate::leaf(Target { start, len })
    }

    fn leaf_rows(w: i32, h: i32, rows: &'static [&'static str]) -> Element {
        crate::leaf(Rows { size: (w, h), rows })
    }

    #[test]
    fn no_selection_keeps_child_at_origin() {
        let e = layout(frame(leaf_rows(20, 10, &["x"])), Bounds::new(2, 7, 1, 4));
        assert_eq!(e.children()[0].bounds(), Bounds::new(2, 22, 1, 11));
    }

    #[test]
    fn child_never_smaller_than_window() {
        let e = layout(frame(leaf_rows(2, 1, &["x"])), Bounds::new(0, 6, 0, 4));
        assert_eq!(e.children()[0].bounds(), Bounds::new(0, 6, 0, 4));
    }

    #[test]
    fn xframe_leaves_y_untouched() {
        let e = layout(
            xframe(focus(leaf_rows(20, 9, &["x"]))),
            Bounds::new(0, 5, 2, 4),
        );
        let child = e.children()[0].bounds();
        assert_eq!((child.y_min, child.y_max), (2, 4));
        assert_eq!(child.width(), 20);
    }

    #[test]
    fn yframe_leaves_x_untouched() {
        let e = layout(
            yframe(focus(leaf_rows(20, 9, &["x"]))),
            Bounds::new(1, 6, 0, 3),
        );
        let child = e.children()[0].bounds();
        assert_eq!((child.x_min, child.x_max), (1, 6));
        assert_eq!(child.height(), 9);
    }

    #[test]
    fn yframe_scrolls_to_selected_row() {
        // Ten rows, the selected one is row 6; window shows three rows.
        let rows = container([
            leaf_rows(3, 10, &["000", "111", "222", "333", "444", "555", "666", "777", "888", "999"]),
            y_target(6),
        ]);
        let e = layout(yframe(rows), Bounds::new(0, 3, 0, 3));
        // d = 6 - 1 + 0 = 5, limit = 10 - 3 - 1 = 6.
        assert_eq!(e.children()[0].bounds(), Bounds::new(0, 3, -5, 5));

        let mut screen = Screen::new(3, 3);
        e.render(&mut screen);
        assert_eq!(screen.to_plain_string(), "555\n666\n777");
    }

    fn y_target(row: i32) -> Element {
        #[derive(Debug)]
        struct RowFocus(i32);
        impl Leaf for RowFocus {
            fn requirement(&self) -> Requirement {
                Requirement {
                    selection: crate::Selection::Selected,
                    selected_box: Bounds::new(0, 1, self.0, self.0 + 1),
                    ..Requirement::fixed(1, self.0 + 1)
                }
            }
            fn render(&self, _bounds: Bounds, _screen: &mut Screen) {}
        }
        crate::leaf(RowFocus(row))
    }

    #[test]
    fn render_clips_to_frame_box() {
        let mut screen = Screen::new(6, 1);
        let e = layout(xframe(text("abcdefgh")), Bounds::new(1, 4, 0, 1));
        e.render(&mut screen);
        assert_eq!(screen.to_plain_string(), " abc  ");
    }

    #[test]
    fn nested_frames_restore_stencil() {
        let mut screen = Screen::new(8, 3);
        screen.set_stencil(Bounds::new(0, 7, 0, 3));
        let e = layout(
            frame(container([frame(text("inner text")), select(text("x"))])),
            Bounds::new(1, 5, 1, 2),
        );
        e.render(&mut screen);
        assert_eq!(screen.stencil(), Bounds::new(0, 7, 0, 3));
    }

    #[test]
    fn empty_frame_box_writes_nothing() {
        let mut screen = Screen::new(6, 2);
        let e = layout(frame(focus(text("hello"))), Bounds::new(2, 2, 0, 2));
        e.render(&mut screen);
        assert_eq!(screen.to_plain_string(), "      \n      ");
    }

    /// A 1-row leaf of `i32::MAX` columns, optionally focused on its last two.
    #[derive(Debug)]
    struct Huge {
        focus_tail: bool,
    }

    impl Leaf for Huge {
        fn requirement(&self) -> Requirement {
            let mut r = Requirement::fixed(i32::MAX, 1);
            if self.focus_tail {
                r.selection = crate::Selection::Focused;
                r.selected_box = Bounds::new(i32::MAX - 2, i32::MAX, 0, 1);
            }
            r
        }

        fn render(&self, bounds: Bounds, screen: &mut Screen) {
            screen.set(bounds.x_max - 2, bounds.y_min, Pixel::from_char('#'));
        }
    }

    #[test]
    fn huge_child_box_saturates() {
        let e = layout(
            xframe(crate::leaf(Huge { focus_tail: false })),
            Bounds::new(1, 5, 0, 1),
        );
        assert_eq!(e.children()[0].bounds(), Bounds::new(1, i32::MAX, 0, 1));
    }

    #[test]
    fn huge_child_scrolls_to_its_tail() {
        let e = layout(
            xframe(crate::leaf(Huge { focus_tail: true })),
            Bounds::new(1, 5, 0, 1),
        );
        // d = (MAX - 2) - 2 + 1, clamped to MAX - 4 - 1.
        assert_eq!(
            e.children()[0].bounds(),
            Bounds::new(6 - i32::MAX, 6, 0, 1)
        );

        let mut screen = Screen::new(6, 1);
        e.render(&mut screen);
        assert_eq!(screen.to_plain_string(), "    # ");
    }

    #[test]
    fn focus_inside_frame_reports_scrolled_origin() {
        let mut screen = Screen::new(5, 1);
        let e = layout(xframe(focus(text("0123456789"))), Bounds::new(0, 5, 0, 1));
        e.render(&mut screen);
        // d = 0 - 2 + 5 = 3, limit = 10 - 5 - 1 = 4.
        assert_eq!(screen.to_plain_string(), "34567");
        assert_eq!(screen.cursor(), Position::new(-3, 0));
    }
}
