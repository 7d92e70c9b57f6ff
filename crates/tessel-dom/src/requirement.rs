#![forbid(unsafe_code)]

//! Bottom-up sizing results.

use tessel_core::geometry::Bounds;

/// How interactive a subtree is.
///
/// Ordered so that the strongest kind compares greatest:
/// `None < Selected < Focused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Selection {
    /// Nothing selectable below this node.
    #[default]
    None,
    /// A selectable unit exists below this node.
    Selected,
    /// The keyboard-focused unit exists below this node.
    Focused,
}

/// What a node needs, computed from its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirement {
    /// Minimum width to render without loss.
    pub min_x: i32,
    /// Minimum height to render without loss.
    pub min_y: i32,
    /// Strongest selection kind in the subtree.
    pub selection: Selection,
    /// Selected region, relative to this node's own box.
    ///
    /// Only meaningful when `selection` is not [`Selection::None`].
    pub selected_box: Bounds,
}

impl Requirement {
    /// A fixed-size, non-interactive requirement.
    #[inline]
    pub const fn fixed(min_x: i32, min_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            selection: Selection::None,
            selected_box: Bounds::EMPTY,
        }
    }

    /// The selected region, or the zero rectangle when nothing is selected.
    #[inline]
    pub fn selected_region(&self) -> Bounds {
        match self.selection {
            Selection::None => Bounds::EMPTY,
            Selection::Selected | Selection::Focused => self.selected_box,
        }
    }

    /// Mark the whole minimum rectangle as the selected unit.
    #[must_use]
    pub fn selected_as_unit(mut self, selection: Selection) -> Self {
        self.selected_box = Bounds::from_size(self.min_x, self.min_y);
        self.selection = selection;
        self
    }

    /// Fold in the requirement of a child that shares this node's box.
    ///
    /// Minimums take the per-axis maximum. A strictly stronger child
    /// selection replaces ours along with its selected box, so among equally
    /// strong children the first one wins.
    pub fn absorb(&mut self, child: &Requirement) {
        self.min_x = self.min_x.max(child.min_x);
        self.min_y = self.min_y.max(child.min_y);
        if child.selection > self.selection {
            self.selection = child.selection;
            self.selected_box = child.selected_box;
        }
    }

    /// Clamp negative minimums to zero.
    #[must_use]
    pub(crate) fn sanitized(mut self) -> Self {
        self.min_x = self.min_x.max(0);
        self.min_y = self.min_y.max(0);
        self
    }
}
