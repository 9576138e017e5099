// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

use crate::PointerId;

/// The set of contacts currently pressed on a surface.
///
/// Each entry maps a [`PointerId`] to its last known global position. Entries
/// keep the order in which they were pressed, so "the first two pointers" is
/// well defined.
#[derive(Clone, Debug, Default)]
pub struct PointerSet {
    entries: SmallVec<[(PointerId, Point); 4]>,
}

impl PointerSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pointer is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is tracked.
    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.get(id).is_some()
    }

    /// Last known position of `id`.
    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<Point> {
        self.entries.iter().find(|(p, _)| *p == id).map(|(_, pos)| *pos)
    }

    /// Tracks `id` at `position`, or moves it there if it is already tracked.
    ///
    /// Returns `true` if the pointer was not tracked before.
    pub fn insert(&mut self, id: PointerId, position: Point) -> bool {
        if self.update(id, position) {
            return false;
        }
        self.entries.push((id, position));
        true
    }

    /// Moves a tracked pointer. Returns `false` if `id` is not tracked.
    pub fn update(&mut self, id: PointerId, position: Point) -> bool {
        match self.entries.iter_mut().find(|(p, _)| *p == id) {
            Some((_, pos)) => {
                *pos = position;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `id`, returning its last position.
    pub fn remove(&mut self, id: PointerId) -> Option<Point> {
        let index = self.entries.iter().position(|(p, _)| *p == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Stops tracking every pointer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The only tracked pointer, if exactly one is tracked.
    #[must_use]
    pub fn single(&self) -> Option<(PointerId, Point)> {
        match self.entries.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Positions of the two tracked pointers, if exactly two are tracked.
    #[must_use]
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.entries.as_slice() {
            [(_, a), (_, b)] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Distance between the two tracked pointers, if exactly two are tracked.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        self.pair().map(|(a, b)| (b - a).hypot())
    }

    /// Midpoint of the two tracked pointers, if exactly two are tracked.
    #[must_use]
    pub fn pinch_center(&self) -> Option<Point> {
        self.pair().map(|(a, b)| a.midpoint(b))
    }

    /// Tracked pointers in press order.
    pub fn iter(&self) -> impl Iterator<Item = (PointerId, Point)> + '_ {
        self.entries.iter().copied()
    }
}
