#![forbid(unsafe_code)]

//! Scoped overrides of shared state.
//!
//! [`AutoReset`] writes a new value into a slot and puts the previous value
//! back when the guard is dropped. The restore runs on every exit path,
//! including early returns and panic unwinding.
//!
//! The guard borrows the *owner* of the slot mutably and derefs to it, so the
//! owner stays usable for the whole scope:
//!
//! ```
//! use tessel_core::auto_reset::AutoReset;
//!
//! struct Pen {
//!     width: u8,
//!     strokes: Vec<u8>,
//! }
//!
//! fn width(pen: &mut Pen) -> &mut u8 {
//!     &mut pen.width
//! }
//!
//! let mut pen = Pen { width: 1, strokes: Vec::new() };
//! {
//!     let mut pen = AutoReset::new(&mut pen, width, 4);
//!     let w = pen.width;
//!     pen.strokes.push(w);
//! }
//! assert_eq!(pen.width, 1);
//! assert_eq!(pen.strokes, vec![4]);
//! ```

use std::ops::{Deref, DerefMut};

/// Guard that restores a projected field of `S` when dropped.
#[must_use = "the override is undone as soon as the guard is dropped"]
pub struct AutoReset<'a, S: ?Sized, T> {
    owner: &'a mut S,
    project: fn(&mut S) -> &mut T,
    saved: Option<T>,
}

impl<'a, S: ?Sized, T> AutoReset<'a, S, T> {
    /// Store `value` in the slot selected by `project`, remembering the old value.
    pub fn new(owner: &'a mut S, project: fn(&mut S) -> &mut T, value: T) -> Self {
        let saved = std::mem::replace(project(owner), value);
        Self {
            owner,
            project,
            saved: Some(saved),
        }
    }

    /// The value that will be restored on drop.
    pub fn saved(&self) -> Option<&T> {
        self.saved.as_ref()
    }
}

fn identity<T>(slot: &mut T) -> &mut T {
    slot
}

impl<'a, T> AutoReset<'a, T, T> {
    /// Override a plain slot for the lifetime of the guard.
    pub fn replace(slot: &'a mut T, value: T) -> Self {
        Self::new(slot, identity::<T>, value)
    }
}

impl<S: ?Sized, T> Deref for AutoReset<'_, S, T> {
    type Target = S;

    fn deref(&self) -> &S {
        self.owner
    }
}

impl<S: ?Sized, T> DerefMut for AutoReset<'_, S, T> {
    fn deref_mut(&mut self) -> &mut S {
        self.owner
    }
}

impl<S: ?Sized, T> Drop for AutoReset<'_, S, T> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            *(self.project)(self.owner) = saved;
        }
    }
}

impl<S: ?Sized, T: std::fmt::Debug> std::fmt::Debug for AutoReset<'_, S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoReset")
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}
