#![forbid(unsafe_code)]

//! The element tree.
//!
//! An [`Element`] is one node: a closed set of kinds plus the two values
//! each pass leaves behind (its [`Requirement`] and its box). Decorators own
//! exactly one child, so a childless decorator cannot be built.
//!
//! Leaves are shared immutable descriptors behind an `Arc`, which makes
//! cloning a tree cheap. A clone gets its own per-pass state, so reusing a
//! subtree in several trees never lets one layout overwrite another.

use std::sync::Arc;

use tessel_core::geometry::Bounds;
use tessel_render::Screen;

use crate::frame::FrameNode;
use crate::leaf::Leaf;
use crate::requirement::{Requirement, Selection};
use crate::select;

#[derive(Debug, Clone)]
pub(crate) enum Kind {
    /// Children stacked on top of each other in the same box.
    Container(Vec<Element>),
    Select(Box<Element>),
    Focus(Box<Element>),
    Frame(FrameNode),
    Leaf(Arc<dyn Leaf>),
}

/// A node of the layout tree.
#[derive(Debug, Clone)]
pub struct Element {
    kind: Kind,
    requirement: Requirement,
    bounds: Bounds,
}

impl Element {
    pub(crate) fn from_kind(kind: Kind) -> Self {
        Self {
            kind,
            requirement: Requirement::default(),
            bounds: Bounds::EMPTY,
        }
    }

    /// Requirement computed by the last [`compute_requirement`](Self::compute_requirement).
    #[inline]
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Box assigned by the last [`set_box`](Self::set_box).
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Direct children, in render order.
    pub fn children(&self) -> &[Element] {
        match &self.kind {
            Kind::Container(children) => children,
            Kind::Select(child) | Kind::Focus(child) => std::slice::from_ref(child.as_ref()),
            Kind::Frame(frame) => std::slice::from_ref(frame.child()),
            Kind::Leaf(_) => &[],
        }
    }

    /// Bottom-up pass: compute this node's requirement from its children.
    pub fn compute_requirement(&mut self) {
        self.requirement = match &mut self.kind {
            Kind::Container(children) => {
                let mut requirement = Requirement::default();
                for child in children.iter_mut() {
                    child.compute_requirement();
                    requirement.absorb(child.requirement());
                }
                requirement
            }
            Kind::Select(child) => {
                child.compute_requirement();
                child.requirement.selected_as_unit(Selection::Selected)
            }
            Kind::Focus(child) => {
                child.compute_requirement();
                child.requirement.selected_as_unit(Selection::Focused)
            }
            Kind::Frame(frame) => frame.compute_requirement(),
            Kind::Leaf(leaf) => leaf.requirement().sanitized(),
        };
    }

    /// Top-down pass: accept `bounds` and hand sub-rectangles to children.
    pub fn set_box(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        match &mut self.kind {
            Kind::Container(children) => {
                for child in children.iter_mut() {
                    child.set_box(bounds);
                }
            }
            Kind::Select(child) | Kind::Focus(child) => child.set_box(bounds),
            Kind::Frame(frame) => frame.set_box(bounds, &self.requirement),
            Kind::Leaf(_) => {}
        }
    }

    /// Paint this subtree into `screen` within the active stencil.
    pub fn render(&self, screen: &mut Screen) {
        match &self.kind {
            Kind::Container(children) => {
                for child in children {
                    child.render(screen);
                }
            }
            Kind::Select(child) => child.render(screen),
            Kind::Focus(child) => {
                child.render(screen);
                select::place_cursor(self.bounds, screen);
            }
            Kind::Frame(frame) => frame.render(self.bounds, screen),
            Kind::Leaf(leaf) => {
                if self.bounds.is_empty() {
                    return;
                }
                // Leaves come from outside this crate; keep them inside their box.
                let mut clipped = screen.with_stencil(self.bounds);
                leaf.render(self.bounds, &mut clipped);
            }
        }
    }
}

/// Stack `children` in one shared box.
///
/// The container needs as much room as its largest child on each axis and
/// reports the strongest selection among them (the first one on ties).
pub fn container(children: impl IntoIterator<Item = Element>) -> Element {
    Element::from_kind(Kind::Container(children.into_iter().collect()))
}

/// Wrap an externally defined leaf.
pub fn leaf(leaf: impl Leaf + 'static) -> Element {
    Element::from_kind(Kind::Leaf(Arc::new(leaf)))
}

impl<L: Leaf + 'static> From<L> for Element {
    fn from(value: L) -> Self {
        leaf(value)
    }
}
