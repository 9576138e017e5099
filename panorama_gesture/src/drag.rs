// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer drag tracking: per-sample deltas and the total offset.
//!
//! ## Usage
//!
//! 1) Arm a drag with [`DragState::start`], naming the pointer and its position.
//! 2) On each move of that pointer, call [`DragState::update`] to get the delta
//!    since the previous sample. Summing these deltas reconstructs the path.
//! 3) Optionally call [`DragState::total_offset`] for the offset from the arm
//!    position.
//! 4) Disarm with [`DragState::end`].
//!
//! Re-arming with [`DragState::start`] while already armed restarts from the
//! new position; this is how a pinch that loses one finger hands over to a
//! drag without a jump.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use panorama_gesture::{DragState, PointerId};
//!
//! let mut drag = DragState::default();
//! drag.start(PointerId(1), Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(PointerId(1), Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(PointerId(1), Point::new(15.0, 30.0)), Some(Vec2::new(0.0, 5.0)));
//!
//! // Moves of other pointers are not part of this drag.
//! assert_eq!(drag.update(PointerId(2), Point::new(0.0, 0.0)), None);
//!
//! assert_eq!(drag.total_offset(), Some(Vec2::new(5.0, 10.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::PointerId;

/// Tracks the pointer that drives a drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    pointer: Option<PointerId>,
    start_pos: Point,
    last_pos: Point,
}

impl DragState {
    /// Arms a drag for `pointer` at `pos`, replacing any previous one.
    pub fn start(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = pos;
        self.last_pos = pos;
    }

    /// Records a new position for `pointer` and returns the delta since the
    /// previous sample.
    ///
    /// Returns `None` (and records nothing) if no drag is armed or `pointer`
    /// is not the one driving it.
    pub fn update(&mut self, pointer: PointerId, pos: Point) -> Option<Vec2> {
        if self.pointer != Some(pointer) {
            return None;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        Some(delta)
    }

    /// Offset of the last sample from the arm position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        self.pointer.map(|_| self.last_pos - self.start_pos)
    }

    /// Disarms the drag.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// The pointer driving the drag, if one is armed.
    #[must_use]
    pub fn pointer(&self) -> Option<PointerId> {
        self.pointer
    }

    /// Returns `true` while a drag is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pointer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: PointerId = PointerId(1);

    #[test]
    fn new_drag_state_is_not_armed() {
        let drag = DragState::default();
        assert!(!drag.is_armed());
        assert_eq!(drag.pointer(), None);
        assert_eq!(drag.total_offset(), None);
    }

    #[test]
    fn update_returns_none_when_not_armed() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(P, Point::new(15.0, 25.0)), None);
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(P, Point::new(0.0, 0.0));

        assert_eq!(drag.update(P, Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(P, Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.update(P, Point::new(10.0, 10.0)),
            Some(Vec2::new(2.0, 3.0))
        );
        assert_eq!(drag.total_offset(), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn foreign_pointer_moves_are_ignored() {
        let mut drag = DragState::default();
        drag.start(P, Point::new(0.0, 0.0));

        assert_eq!(drag.update(PointerId(2), Point::new(50.0, 50.0)), None);
        assert_eq!(drag.update(P, Point::new(1.0, 1.0)), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn restart_rebases_on_the_new_position() {
        let mut drag = DragState::default();
        drag.start(P, Point::new(0.0, 0.0));
        drag.update(P, Point::new(10.0, 10.0));

        // Hand over to a different pointer somewhere else.
        drag.start(PointerId(2), Point::new(50.0, 60.0));
        assert_eq!(drag.total_offset(), Some(Vec2::ZERO));
        assert_eq!(drag.update(P, Point::new(11.0, 11.0)), None);
        assert_eq!(
            drag.update(PointerId(2), Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn zero_movement_delta() {
        let mut drag = DragState::default();
        let start = Point::new(50.0, 50.0);
        drag.start(P, start);
        assert_eq!(drag.update(P, start), Some(Vec2::ZERO));
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(P, Point::new(10.0, 20.0));
        drag.update(P, Point::new(15.0, 25.0));

        drag.end();

        assert!(!drag.is_armed());
        assert_eq!(drag.update(P, Point::new(20.0, 30.0)), None);
    }
}
