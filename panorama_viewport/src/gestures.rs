// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use panorama_gesture::{
    ContextMenuEvent, DragContext, GestureHandler, GestureRecognizer, InputEvent, PointerEvent,
    Response, Surface, WheelEvent,
};

use crate::{Host, ViewportController};

/// Turns recognized gestures into viewport mutations.
///
/// | Gesture           | Effect                                                    |
/// |-------------------|-----------------------------------------------------------|
/// | drag              | [`move_delta`], capturing the pointer                     |
/// | pinch             | [`zoom_to`] `scale + distance_delta / sensitivity`, anchored at the pinch center |
/// | wheel up / down   | [`zoom_in`] / [`zoom_out`] anchored at the cursor         |
/// | middle click      | [`center_on_global_point`]                                |
///
/// Every callback is forwarded to the delegate `D` first. A delegate can
/// claim a drag (for example to move a selected overlay instead of panning)
/// by calling [`DragContext::stop_propagation`].
///
/// [`move_delta`]: ViewportController::move_delta
/// [`zoom_to`]: ViewportController::zoom_to
/// [`zoom_in`]: ViewportController::zoom_in
/// [`zoom_out`]: ViewportController::zoom_out
/// [`center_on_global_point`]: ViewportController::center_on_global_point
#[derive(Debug)]
pub struct ViewportGestures<'a, H: Host, D = ()> {
    controller: &'a mut ViewportController<H>,
    delegate: D,
}

impl<'a, H: Host, D: GestureHandler> ViewportGestures<'a, H, D> {
    /// Wires `controller` up behind `delegate`.
    pub fn new(controller: &'a mut ViewportController<H>, delegate: D) -> Self {
        Self {
            controller,
            delegate,
        }
    }

    /// The controller being driven.
    #[must_use]
    pub fn controller(&self) -> &ViewportController<H> {
        self.controller
    }
}

impl<H: Host, D: GestureHandler> GestureHandler for ViewportGestures<'_, H, D> {
    fn on_pointer_down(&mut self, event: &PointerEvent, point: Point) {
        self.delegate.on_pointer_down(event, point);
    }

    fn on_pointer_up(&mut self, event: &PointerEvent, point: Point) {
        self.delegate.on_pointer_up(event, point);
    }

    fn on_middle_down(&mut self, event: &PointerEvent, point: Point) {
        self.delegate.on_middle_down(event, point);
        self.controller.center_on_global_point(point);
    }

    fn on_middle_up(&mut self, event: &PointerEvent, point: Point) {
        self.delegate.on_middle_up(event, point);
    }

    fn on_right_down(&mut self, event: &PointerEvent, point: Point) {
        self.delegate.on_right_down(event, point);
    }

    fn on_right_up(&mut self, event: &PointerEvent, point: Point) {
        self.delegate.on_right_up(event, point);
    }

    fn on_click(&mut self, event: &PointerEvent, point: Point) {
        self.delegate.on_click(event, point);
    }

    fn on_drag(&mut self, event: &PointerEvent, delta: Vec2, cx: &mut DragContext) {
        self.delegate.on_drag(event, delta, cx);
        if cx.propagation_stopped() {
            return;
        }
        cx.request_capture();
        self.controller.move_delta(delta);
    }

    fn on_pinch(&mut self, event: &PointerEvent, distance_delta: f64, center: Point) {
        self.delegate.on_pinch(event, distance_delta, center);
        let sensitivity = self.controller.config().pinch_sensitivity;
        let target = self.controller.scale() + distance_delta / sensitivity;
        self.controller.zoom_to(target, center);
    }

    fn on_scroll(&mut self, event: &WheelEvent, delta_y: f64, point: Point) {
        self.delegate.on_scroll(event, delta_y, point);
        if delta_y < 0.0 {
            self.controller.zoom_in(point);
        } else if delta_y > 0.0 {
            self.controller.zoom_out(point);
        }
    }

    fn on_context_menu(&mut self, event: &ContextMenuEvent) -> bool {
        self.delegate.on_context_menu(event)
    }
}

/// A [`ViewportController`] driven by a [`GestureRecognizer`] on the
/// container's surface.
///
/// ```
/// use kurbo::{Point, Rect, Size, Vec2};
/// use panorama_gesture::{HeadlessSurface, InputEvent, PointerEvent, PointerId, PointerType};
/// use panorama_viewport::{
///     HeadlessHost, HeadlessNode, Viewport, ViewportConfig, ViewportController,
/// };
///
/// let host = HeadlessHost::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(2000.0, 2000.0));
/// let controller = ViewportController::new(
///     host,
///     HeadlessNode::Container,
///     HeadlessNode::Content,
///     ViewportConfig::default(),
/// )?;
/// let mut viewport = Viewport::new(controller, HeadlessSurface::new());
///
/// let at = |x, y| PointerEvent::primary(PointerId(1), PointerType::Touch, Point::new(x, y));
/// viewport.dispatch(&InputEvent::PointerDown(at(100.0, 100.0)));
/// viewport.dispatch(&InputEvent::PointerMove(at(60.0, 70.0)));
/// viewport.dispatch(&InputEvent::PointerUp(at(60.0, 70.0)));
/// assert_eq!(viewport.controller().translate(), Vec2::new(-40.0, -30.0));
///
/// let (_controller, surface) = viewport.dispose();
/// assert!(surface.attached().is_empty());
/// # Ok::<(), panorama_viewport::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Viewport<H: Host, S: Surface> {
    controller: ViewportController<H>,
    recognizer: GestureRecognizer<S>,
}

impl<H: Host, S: Surface> Viewport<H, S> {
    /// Attaches a gesture recognizer for `controller` to `surface`.
    pub fn new(controller: ViewportController<H>, surface: S) -> Self {
        Self {
            controller,
            recognizer: GestureRecognizer::attach(surface),
        }
    }

    /// Feeds one input event through the gesture wiring.
    pub fn dispatch(&mut self, event: &InputEvent) -> Response {
        self.dispatch_with(event, ())
    }

    /// Feeds one input event through the gesture wiring, offering every
    /// gesture to `delegate` before the viewport acts on it.
    pub fn dispatch_with<D: GestureHandler>(&mut self, event: &InputEvent, delegate: D) -> Response {
        let mut gestures = ViewportGestures::new(&mut self.controller, delegate);
        self.recognizer.handle(event, &mut gestures)
    }

    /// Forwards a container geometry change to the controller.
    pub fn container_resized(&mut self) {
        self.controller.container_resized();
    }

    /// The controller.
    #[must_use]
    pub fn controller(&self) -> &ViewportController<H> {
        &self.controller
    }

    /// Mutable access to the controller, for programmatic pans and zooms.
    pub fn controller_mut(&mut self) -> &mut ViewportController<H> {
        &mut self.controller
    }

    /// The gesture recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &GestureRecognizer<S> {
        &self.recognizer
    }

    /// Detaches every gesture listener and returns the controller and the
    /// surface.
    pub fn dispose(self) -> (ViewportController<H>, S) {
        let surface = self.recognizer.dispose();
        (self.controller, surface)
    }
}
