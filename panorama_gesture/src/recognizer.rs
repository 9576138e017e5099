// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    ContextMenuEvent, DragContext, DragState, GestureHandler, InputEvent, Listeners, PointerButton,
    PointerEvent, PointerSet, Surface, WheelEvent,
};

/// Which kind of pointer movement the recognizer is currently listening for.
///
/// Determined solely by the number of tracked pointers: none for zero, drag
/// for one, pinch for two or more. Only one mode is ever active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureMode {
    /// No pointer is down.
    #[default]
    Idle,
    /// One pointer is down; its moves are drags.
    Dragging,
    /// Two or more pointers are down; moves are pinch samples while exactly
    /// two of them remain.
    Pinching,
}

impl GestureMode {
    fn for_count(count: usize) -> Self {
        match count {
            0 => Self::Idle,
            1 => Self::Dragging,
            _ => Self::Pinching,
        }
    }

    /// The move listener this mode keeps attached.
    #[must_use]
    pub fn move_listener(self) -> Listeners {
        match self {
            Self::Idle => Listeners::empty(),
            Self::Dragging => Listeners::DRAG_MOVE,
            Self::Pinching => Listeners::PINCH_MOVE,
        }
    }
}

/// What happened to an event passed to [`GestureRecognizer::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Response {
    /// `false` if no attached listener covers the event, so it was dropped.
    pub handled: bool,
    /// `true` if the platform's default action (e.g. a context menu) should
    /// be suppressed.
    pub prevent_default: bool,
}

impl Response {
    const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };
    const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };
}

/// Classifies the raw input of one surface into clicks, drags, pinches,
/// scrolls, and button taps.
///
/// The recognizer owns its [`Surface`] binding for its whole lifetime:
/// [`attach`](Self::attach) registers the base listeners, mode changes swap
/// the move listener (always detaching the outgoing one before attaching the
/// incoming one), and [`dispose`](Self::dispose) removes everything still
/// attached and hands the surface back.
///
/// ## State machine
///
/// - 0 → 1 pointers: arm the drag at the press position and arm the click.
/// - 1 → 2 pointers: disarm the click and sample the pinch distance.
/// - 2 → 1 pointers: re-arm the drag at the surviving pointer's *current*
///   position; the click stays disarmed.
/// - n → 2 pointers (n > 2): re-sample the pinch distance.
/// - any → 0 pointers: idle.
/// - cancel: forget every pointer and go idle, without firing anything.
///
/// A drag sample disarms the pending click, so a press-move-release never
/// produces [`on_click`](GestureHandler::on_click).
///
/// ## Example
///
/// ```
/// use kurbo::{Point, Vec2};
/// use panorama_gesture::{
///     DragContext, GestureHandler, GestureRecognizer, HeadlessSurface, InputEvent, PointerEvent,
///     PointerId, PointerType,
/// };
///
/// #[derive(Default)]
/// struct Pan(Vec2);
///
/// impl GestureHandler for Pan {
///     fn on_drag(&mut self, _event: &PointerEvent, delta: Vec2, _cx: &mut DragContext) {
///         self.0 += delta;
///     }
/// }
///
/// let mut recognizer = GestureRecognizer::attach(HeadlessSurface::new());
/// let mut pan = Pan::default();
/// let id = PointerId(1);
///
/// let down = PointerEvent::primary(id, PointerType::Touch, Point::new(10.0, 10.0));
/// recognizer.handle(&InputEvent::PointerDown(down), &mut pan);
/// for x in [12.0, 20.0, 35.0] {
///     let mv = PointerEvent::motion(id, PointerType::Touch, Point::new(x, 10.0));
///     recognizer.handle(&InputEvent::PointerMove(mv), &mut pan);
/// }
/// assert_eq!(pan.0, Vec2::new(25.0, 0.0));
///
/// let surface = recognizer.dispose();
/// assert!(surface.attached().is_empty());
/// ```
#[derive(Debug)]
pub struct GestureRecognizer<S: Surface> {
    surface: S,
    attached: Listeners,
    pointers: PointerSet,
    mode: GestureMode,
    drag: DragState,
    pinch_distance: f64,
}

impl<S: Surface> GestureRecognizer<S> {
    /// Attaches a recognizer to `surface`, registering the base listeners.
    pub fn attach(surface: S) -> Self {
        let mut recognizer = Self {
            surface,
            attached: Listeners::empty(),
            pointers: PointerSet::new(),
            mode: GestureMode::Idle,
            drag: DragState::default(),
            pinch_distance: 0.0,
        };
        recognizer.listen(Listeners::BASE);
        recognizer
    }

    /// Removes every listener this recognizer attached and returns the surface.
    pub fn dispose(mut self) -> S {
        let attached = self.attached;
        if !attached.is_empty() {
            self.unlisten(attached);
        }
        tracing::debug!(listeners = ?attached, "gesture recognizer disposed");
        self.surface
    }

    /// The current gesture mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// The pointers currently pressed on the surface.
    #[must_use]
    pub fn pointers(&self) -> &PointerSet {
        &self.pointers
    }

    /// Listeners currently attached to the surface.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.attached
    }

    /// Returns `true` if releasing the current pointer would produce a click.
    #[must_use]
    pub fn is_click_armed(&self) -> bool {
        self.attached.contains(Listeners::CLICK)
    }

    /// The surface this recognizer is attached to.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    ///
    /// Attaching or detaching listeners through this reference bypasses the
    /// recognizer's bookkeeping.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Feeds one input event through the recognizer, calling into `handler`
    /// for every gesture it produces.
    ///
    /// Events are expected in arrival order; all callbacks for one event run
    /// before this returns.
    pub fn handle<H>(&mut self, event: &InputEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        match event {
            InputEvent::PointerDown(e) if self.attached.contains(Listeners::POINTER_DOWN) => {
                self.pointer_down(e, handler)
            }
            InputEvent::PointerUp(e) if self.attached.contains(Listeners::POINTER_UP) => {
                self.pointer_up(e, handler)
            }
            InputEvent::PointerMove(e) => self.pointer_move(e, handler),
            InputEvent::PointerCancel(e) if self.attached.contains(Listeners::POINTER_CANCEL) => {
                self.pointer_cancel(e)
            }
            InputEvent::Wheel(e) if self.attached.contains(Listeners::WHEEL) => {
                self.wheel(e, handler)
            }
            InputEvent::ContextMenu(e) if self.attached.contains(Listeners::CONTEXT_MENU) => {
                self.context_menu(e, handler)
            }
            _ => Response::IGNORED,
        }
    }

    fn pointer_down<H>(&mut self, event: &PointerEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        let point = event.position;
        match event.mouse_tap_button() {
            Some(PointerButton::Middle) => handler.on_middle_down(event, point),
            Some(_) => handler.on_right_down(event, point),
            None => {
                if self.pointers.insert(event.pointer_id, point) {
                    self.pointer_added(event);
                }
                handler.on_pointer_down(event, point);
            }
        }
        Response::HANDLED
    }

    fn pointer_up<H>(&mut self, event: &PointerEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        let point = event.position;
        match event.mouse_tap_button() {
            Some(PointerButton::Middle) => handler.on_middle_up(event, point),
            Some(_) => handler.on_right_up(event, point),
            None => {
                let tracked = self.pointers.remove(event.pointer_id).is_some();
                let click = tracked && self.is_click_armed() && self.pointers.is_empty();
                if tracked {
                    self.pointer_removed();
                }
                handler.on_pointer_up(event, point);
                if click {
                    self.arm_click(false);
                    handler.on_click(event, point);
                }
            }
        }
        Response::HANDLED
    }

    fn pointer_move<H>(&mut self, event: &PointerEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        if self.attached.contains(Listeners::DRAG_MOVE) {
            self.drag_move(event, handler)
        } else if self.attached.contains(Listeners::PINCH_MOVE) {
            self.pinch_move(event, handler)
        } else {
            Response::IGNORED
        }
    }

    fn drag_move<H>(&mut self, event: &PointerEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        let id = event.pointer_id;
        if !self.pointers.update(id, event.position) {
            return Response::IGNORED;
        }
        let Some(delta) = self.drag.update(id, event.position) else {
            return Response::IGNORED;
        };
        self.arm_click(false);

        let mut cx = DragContext::new(id);
        handler.on_drag(event, delta, &mut cx);
        if cx.capture_requested() {
            self.surface.capture_pointer(id);
        }
        tracing::trace!(pointer = id.0, dx = delta.x, dy = delta.y, "drag");
        Response::HANDLED
    }

    fn pinch_move<H>(&mut self, event: &PointerEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        if !self.pointers.update(event.pointer_id, event.position) {
            return Response::IGNORED;
        }
        // With more than two contacts the pinch is suspended; positions are
        // still tracked so the pinch resumes from where the fingers are.
        let (Some(distance), Some(center)) =
            (self.pointers.pinch_distance(), self.pointers.pinch_center())
        else {
            return Response::HANDLED;
        };
        let distance_delta = distance - self.pinch_distance;
        self.pinch_distance = distance;

        handler.on_pinch(event, distance_delta, center);
        tracing::trace!(distance_delta, cx = center.x, cy = center.y, "pinch");
        Response::HANDLED
    }

    fn pointer_cancel(&mut self, event: &PointerEvent) -> Response {
        tracing::debug!(
            pointer = event.pointer_id.0,
            tracked = self.pointers.len(),
            "pointer cancelled, resetting gestures"
        );
        self.pointers.clear();
        self.drag.end();
        self.arm_click(false);
        self.transition(GestureMode::Idle);
        Response::HANDLED
    }

    fn wheel<H>(&mut self, event: &WheelEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        handler.on_scroll(event, event.delta_y, event.position);
        Response::HANDLED
    }

    fn context_menu<H>(&mut self, event: &ContextMenuEvent, handler: &mut H) -> Response
    where
        H: GestureHandler + ?Sized,
    {
        Response {
            handled: true,
            prevent_default: handler.on_context_menu(event),
        }
    }

    fn pointer_added(&mut self, event: &PointerEvent) {
        match self.pointers.len() {
            1 => {
                self.drag.start(event.pointer_id, event.position);
                self.transition(GestureMode::Dragging);
                self.arm_click(true);
            }
            n => {
                self.drag.end();
                self.arm_click(false);
                if n == 2 {
                    self.sample_pinch();
                }
                self.transition(GestureMode::Pinching);
            }
        }
    }

    fn pointer_removed(&mut self) {
        match self.pointers.single() {
            Some((id, position)) => {
                // Continue from where the surviving pointer is now.
                self.drag.start(id, position);
            }
            None => {
                self.drag.end();
                self.sample_pinch();
            }
        }
        self.transition(GestureMode::for_count(self.pointers.len()));
    }

    fn sample_pinch(&mut self) {
        if let Some(distance) = self.pointers.pinch_distance() {
            self.pinch_distance = distance;
        }
    }

    fn transition(&mut self, next: GestureMode) {
        let prev = self.mode;
        if prev == next {
            return;
        }
        let outgoing = prev.move_listener();
        let incoming = next.move_listener();
        if !outgoing.is_empty() {
            self.unlisten(outgoing);
        }
        if !incoming.is_empty() {
            self.listen(incoming);
        }
        self.mode = next;
        tracing::debug!(from = ?prev, to = ?next, pointers = self.pointers.len(), "gesture mode changed");
    }

    fn arm_click(&mut self, armed: bool) {
        match (armed, self.is_click_armed()) {
            (true, false) => self.listen(Listeners::CLICK),
            (false, true) => self.unlisten(Listeners::CLICK),
            _ => {}
        }
    }

    fn listen(&mut self, listeners: Listeners) {
        let fresh = listeners - self.attached;
        if !fresh.is_empty() {
            self.surface.attach(fresh);
            self.attached |= fresh;
        }
    }

    fn unlisten(&mut self, listeners: Listeners) {
        let present = listeners & self.attached;
        if !present.is_empty() {
            self.surface.detach(present);
            self.attached -= present;
        }
    }
}
