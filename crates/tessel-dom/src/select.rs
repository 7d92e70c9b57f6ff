#![forbid(unsafe_code)]

//! Selection and keyboard focus decorators.

use tessel_core::geometry::Bounds;
use tessel_render::Screen;

use crate::element::{Element, Kind};

/// Mark `child` as one selectable unit.
///
/// The requirement is the child's, with the selected box widened to the
/// child's whole minimum rectangle and the selection kind forced to
/// [`Selection::Selected`](crate::Selection::Selected). Finer selections
/// deeper in the child are deliberately forgotten.
pub fn select(child: Element) -> Element {
    Element::from_kind(Kind::Select(Box::new(child)))
}

/// Like [`select`], but marks the unit as keyboard focused.
///
/// After rendering, the terminal cursor is moved to the top-left corner of
/// this element's box so input-method popups appear next to the focused
/// control. Placement is skipped when the screen's capabilities say the
/// terminal hides the cell under the cursor.
pub fn focus(child: Element) -> Element {
    Element::from_kind(Kind::Focus(Box::new(child)))
}

pub(crate) fn place_cursor(bounds: Bounds, screen: &mut Screen) {
    if screen.capabilities().focus_cursor {
        screen.set_cursor(bounds.origin());
    } else {
        tessel_core::trace!(
            x = bounds.x_min,
            y = bounds.y_min,
            "focus cursor placement suppressed"
        );
    }
}
