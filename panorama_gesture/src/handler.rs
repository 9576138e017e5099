// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::{ContextMenuEvent, PointerEvent, PointerId, WheelEvent};

/// Per-drag-sample controls handed to [`GestureHandler::on_drag`].
#[derive(Clone, Copy, Debug)]
pub struct DragContext {
    pointer: PointerId,
    capture_requested: bool,
    propagation_stopped: bool,
}

impl DragContext {
    /// Creates a context for a drag sample of `pointer`.
    #[must_use]
    pub fn new(pointer: PointerId) -> Self {
        Self {
            pointer,
            capture_requested: false,
            propagation_stopped: false,
        }
    }

    /// The pointer driving the drag.
    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Binds further input from this pointer to the surface, so the drag
    /// keeps going when the pointer leaves its bounds.
    pub fn request_capture(&mut self) {
        self.capture_requested = true;
    }

    /// Returns `true` if a handler asked for pointer capture.
    #[must_use]
    pub fn capture_requested(&self) -> bool {
        self.capture_requested
    }

    /// Marks this drag sample as consumed; handlers composed after the
    /// current one should leave it alone.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Returns `true` if a handler consumed this drag sample.
    #[must_use]
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Receives the gestures a [`GestureRecognizer`](crate::GestureRecognizer)
/// classifies.
///
/// Every method has an empty default, so implementors only write the
/// callbacks they care about. All points are in global space.
pub trait GestureHandler {
    /// A primary press.
    fn on_pointer_down(&mut self, _event: &PointerEvent, _point: Point) {}

    /// A primary release.
    fn on_pointer_up(&mut self, _event: &PointerEvent, _point: Point) {}

    /// A middle mouse button press. Never part of a drag or pinch.
    fn on_middle_down(&mut self, _event: &PointerEvent, _point: Point) {}

    /// A middle mouse button release.
    fn on_middle_up(&mut self, _event: &PointerEvent, _point: Point) {}

    /// A right mouse button press. Never part of a drag or pinch.
    fn on_right_down(&mut self, _event: &PointerEvent, _point: Point) {}

    /// A right mouse button release.
    fn on_right_up(&mut self, _event: &PointerEvent, _point: Point) {}

    /// A press and release with no drag in between.
    fn on_click(&mut self, _event: &PointerEvent, _point: Point) {}

    /// A move while exactly one pointer is down.
    ///
    /// `delta` is relative to the previous drag sample (or the press), so
    /// summing the deltas of a drag reconstructs its path.
    fn on_drag(&mut self, _event: &PointerEvent, _delta: Vec2, _cx: &mut DragContext) {}

    /// A move while exactly two pointers are down.
    ///
    /// `distance_delta` is the signed change of the distance between the two
    /// pointers since the previous sample (positive when spreading), and
    /// `center` is their current midpoint.
    fn on_pinch(&mut self, _event: &PointerEvent, _distance_delta: f64, _center: Point) {}

    /// Wheel input, independent of pointer state.
    fn on_scroll(&mut self, _event: &WheelEvent, _delta_y: f64, _point: Point) {}

    /// A context menu request. Return `true` to suppress the platform menu.
    fn on_context_menu(&mut self, _event: &ContextMenuEvent) -> bool {
        false
    }
}

/// Ignores every gesture.
impl GestureHandler for () {}

impl<T: GestureHandler + ?Sized> GestureHandler for &mut T {
    fn on_pointer_down(&mut self, event: &PointerEvent, point: Point) {
        (**self).on_pointer_down(event, point);
    }

    fn on_pointer_up(&mut self, event: &PointerEvent, point: Point) {
        (**self).on_pointer_up(event, point);
    }

    fn on_middle_down(&mut self, event: &PointerEvent, point: Point) {
        (**self).on_middle_down(event, point);
    }

    fn on_middle_up(&mut self, event: &PointerEvent, point: Point) {
        (**self).on_middle_up(event, point);
    }

    fn on_right_down(&mut self, event: &PointerEvent, point: Point) {
        (**self).on_right_down(event, point);
    }

    fn on_right_up(&mut self, event: &PointerEvent, point: Point) {
        (**self).on_right_up(event, point);
    }

    fn on_click(&mut self, event: &PointerEvent, point: Point) {
        (**self).on_click(event, point);
    }

    fn on_drag(&mut self, event: &PointerEvent, delta: Vec2, cx: &mut DragContext) {
        (**self).on_drag(event, delta, cx);
    }

    fn on_pinch(&mut self, event: &PointerEvent, distance_delta: f64, center: Point) {
        (**self).on_pinch(event, distance_delta, center);
    }

    fn on_scroll(&mut self, event: &WheelEvent, delta_y: f64, point: Point) {
        (**self).on_scroll(event, delta_y, point);
    }

    fn on_context_menu(&mut self, event: &ContextMenuEvent) -> bool {
        (**self).on_context_menu(event)
    }
}
