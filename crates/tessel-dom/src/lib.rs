#![forbid(unsafe_code)]

//! Element tree and the three per-frame passes.
//!
//! A frame is produced by walking an [`Element`] tree three times:
//!
//! 1. [`Element::compute_requirement`] bottom-up: every node reports the
//!    minimum size it needs and where its selected descendant sits.
//! 2. [`Element::set_box`] top-down: every node receives the rectangle it
//!    must render within and hands sub-rectangles to its children.
//! 3. [`Element::render`] top-down: every node paints into the [`Screen`]
//!    inside the active stencil.
//!
//! [`render`] runs all three against a screen, then joins adjacent
//! box-drawing glyphs with [`Screen::apply_shader`].
//!
//! ```
//! use tessel_dom::{focus, render, text, xframe};
//! use tessel_render::Screen;
//!
//! // The focused text is wider than the screen, so the frame scrolls to
//! // center it.
//! let mut root = xframe(focus(text("0123456789")));
//! let mut screen = Screen::new(4, 1);
//! render(&mut screen, &mut root);
//! assert_eq!(screen.to_plain_string(), "3456");
//! ```

pub mod dimension;
pub mod element;
pub mod frame;
pub mod leaf;
pub mod requirement;
pub mod select;

pub use dimension::{Dimension, create_screen, create_screen_from};
pub use element::{Element, container, leaf};
pub use frame::{FrameAxes, frame, scroll_offset, xframe, yframe};
pub use leaf::{Leaf, Text, text};
pub use requirement::{Requirement, Selection};
pub use select::{focus, select};

use tessel_render::Screen;

/// Lay out `element` over the whole screen, paint it, and join box-drawing
/// glyphs.
pub fn render(screen: &mut Screen, element: &mut Element) {
    let _span = tessel_core::debug_span!(
        "render_frame",
        dimx = screen.dimx(),
        dimy = screen.dimy()
    )
    .entered();

    element.compute_requirement();
    element.set_box(screen.bounds());
    element.render(screen);
    screen.apply_shader();
}
