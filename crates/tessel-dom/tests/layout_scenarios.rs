//! End-to-end layout scenarios: requirement, box assignment, and render
//! against a real screen.

use tessel_core::geometry::{Bounds, Position};
use tessel_core::terminal_capabilities::TerminalCapabilities;
use tessel_dom::{
    Dimension, Element, Leaf, Requirement, Selection, container, create_screen, focus, frame,
    leaf, render, select, text, xframe, yframe,
};
use tessel_render::{Pixel, Screen};

/// A fixed-size block painted with one character.
#[derive(Debug)]
struct Block {
    c: char,
    w: i32,
    h: i32,
}

impl Leaf for Block {
    fn requirement(&self) -> Requirement {
        Requirement::fixed(self.w, self.h)
    }

    fn render(&self, bounds: Bounds, screen: &mut Screen) {
        for y in bounds.y_min..bounds.y_max {
            for x in bounds.x_min..bounds.x_max {
                screen.set(x, y, Pixel::from_char(self.c));
            }
        }
    }
}

fn block(c: char, w: i32, h: i32) -> Element {
    leaf(Block { c, w, h })
}

/// Focus over `[start, start + len)` of a 1-row strip of `width` cells.
#[derive(Debug)]
struct Strip {
    width: i32,
    start: i32,
    len: i32,
}

impl Leaf for Strip {
    fn requirement(&self) -> Requirement {
        Requirement {
            selection: Selection::Focused,
            selected_box: Bounds::new(self.start, self.start + self.len, 0, 1),
            ..Requirement::fixed(self.width, 1)
        }
    }

    fn render(&self, bounds: Bounds, screen: &mut Screen) {
        for (i, x) in (bounds.x_min..bounds.x_max).enumerate() {
            let digit = char::from_digit((i % 10) as u32, 10).unwrap_or('?');
            screen.set(x, bounds.y_min, Pixel::from_char(digit));
        }
    }
}

#[test]
fn select_wraps_small_leaf() {
    let mut e = select(block('#', 3, 1));
    e.compute_requirement();
    assert_eq!(
        *e.requirement(),
        Requirement {
            min_x: 3,
            min_y: 1,
            selection: Selection::Selected,
            selected_box: Bounds::new(0, 3, 0, 1),
        }
    );
}

#[test]
fn frame_scrolls_focused_tail_into_view() {
    let mut e = frame(leaf(Strip {
        width: 20,
        start: 12,
        len: 8,
    }));
    e.compute_requirement();
    e.set_box(Bounds::new(0, 5, 0, 1));
    assert_eq!(e.children()[0].bounds(), Bounds::new(-14, 6, 0, 1));

    let mut screen = Screen::new(5, 1);
    e.render(&mut screen);
    // Columns 14..19 of the child are visible.
    assert_eq!(screen.to_plain_string(), "45678");
}

#[test]
fn empty_root_box_writes_no_cells() {
    let mut screen = Screen::new(4, 2);
    for mut e in [
        text("abc"),
        select(text("abc")),
        focus(text("abc")),
        frame(text("abc")),
        xframe(block('#', 9, 9)),
        yframe(block('#', 9, 9)),
        container([block('#', 2, 2), text("x")]),
    ] {
        e.compute_requirement();
        e.set_box(Bounds::new(1, 1, 0, 2));
        e.render(&mut screen);
    }
    assert_eq!(screen.to_plain_string(), "    \n    ");
}

#[test]
fn render_driver_uses_whole_screen() {
    let mut screen = Screen::new(6, 2);
    let mut root = container([block('.', 1, 1), focus(text("ok"))]);
    render(&mut screen, &mut root);
    assert_eq!(root.bounds(), screen.bounds());
    assert_eq!(screen.to_plain_string(), "ok....\n......");
    assert_eq!(screen.cursor(), Position::new(0, 0));
}

#[test]
fn list_in_yframe_follows_focus() {
    // A 3-row window over twelve 1-row items stacked by hand, the ninth focused.
    #[derive(Debug)]
    struct Rows;
    impl Leaf for Rows {
        fn requirement(&self) -> Requirement {
            Requirement {
                selection: Selection::Focused,
                selected_box: Bounds::new(0, 4, 8, 9),
                ..Requirement::fixed(4, 12)
            }
        }
        fn render(&self, bounds: Bounds, screen: &mut Screen) {
            for (i, y) in (bounds.y_min..bounds.y_max).enumerate() {
                let label = format!("r{i:02}");
                for (x, c) in (bounds.x_min..).zip(label.chars()) {
                    screen.set(x, y, Pixel::from_char(c));
                }
            }
        }
    }

    let mut screen = Screen::new(4, 3);
    let mut root = yframe(leaf(Rows));
    render(&mut screen, &mut root);
    // d = 8 - 1 + 0 = 7, limit = 12 - 3 - 1 = 8.
    assert_eq!(screen.to_plain_string(), "r07 \nr08 \nr09 ");
}

#[test]
fn focus_cursor_respects_capabilities() {
    let mut root = container([text("----"), focus(text("x"))]);

    let mut screen = Screen::new(4, 1);
    screen.set_cursor(Position::new(3, 0));
    render(&mut screen, &mut root);
    assert_eq!(screen.cursor(), Position::new(0, 0));

    let mut screen =
        Screen::new(4, 1).with_capabilities(TerminalCapabilities::windows_terminal());
    screen.set_cursor(Position::new(3, 0));
    render(&mut screen, &mut root);
    assert_eq!(screen.cursor(), Position::new(3, 0));
}

#[test]
fn same_tree_renders_identically_twice() {
    let mut root = frame(container([block('a', 8, 3), focus(block('b', 2, 1))]));
    let mut first = Screen::new(5, 2);
    render(&mut first, &mut root);
    let mut second = Screen::new(5, 2);
    render(&mut second, &mut root);
    assert_eq!(first.to_plain_string(), second.to_plain_string());
    assert_eq!(first.cursor(), second.cursor());
}

#[test]
fn fit_screen_holds_whole_tree() {
    let mut root = select(container([block('#', 2, 3), text("hello")]));
    let width = Dimension::fit(&mut root);
    let mut screen = create_screen(width, width);
    render(&mut screen, &mut root);
    assert_eq!((screen.dimx(), screen.dimy()), (5, 3));
    assert_eq!(screen.to_plain_string(), "hello\n#####\n#####");
}

/// Rows drawn from the box origin. Spaces leave the cell untouched.
#[derive(Debug)]
struct Sketch(&'static [&'static str]);

impl Leaf for Sketch {
    fn requirement(&self) -> Requirement {
        let width = self.0.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        Requirement::fixed(width as i32, self.0.len() as i32)
    }

    fn render(&self, bounds: Bounds, screen: &mut Screen) {
        for (y, row) in (bounds.y_min..).zip(self.0) {
            for (x, c) in (bounds.x_min..).zip(row.chars()) {
                if c != ' ' {
                    screen.set(x, y, Pixel::from_char(c));
                }
            }
        }
    }
}

#[test]
fn render_joins_separately_drawn_lines() {
    let mut screen = Screen::new(3, 3);
    let mut root = container([
        leaf(Sketch(&["│", "│", "│"])),
        leaf(Sketch(&[" ──"])),
    ]);
    render(&mut screen, &mut root);
    assert_eq!(screen.to_plain_string(), "├──\n│  \n│  ");
}

#[test]
fn element_render_alone_leaves_glyphs_as_drawn() {
    let mut screen = Screen::new(2, 1);
    let mut root = container([leaf(Sketch(&["│"])), leaf(Sketch(&[" ─"]))]);
    root.compute_requirement();
    root.set_box(screen.bounds());
    root.render(&mut screen);
    assert_eq!(screen.to_plain_string(), "│─");
}
