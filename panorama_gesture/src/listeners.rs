// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::PointerId;

bitflags! {
    /// Low-level listeners a [`GestureRecognizer`](crate::GestureRecognizer)
    /// keeps registered on its [`Surface`].
    ///
    /// The first five are attached for the recognizer's whole lifetime. The
    /// others come and go with the gesture mode: at most one of
    /// [`DRAG_MOVE`](Self::DRAG_MOVE) and [`PINCH_MOVE`](Self::PINCH_MOVE) is
    /// attached at any time.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Listeners: u8 {
        /// Pointer presses.
        const POINTER_DOWN = 1 << 0;
        /// Pointer releases.
        const POINTER_UP = 1 << 1;
        /// Platform pointer cancellation.
        const POINTER_CANCEL = 1 << 2;
        /// Wheel input.
        const WHEEL = 1 << 3;
        /// Context menu requests.
        const CONTEXT_MENU = 1 << 4;
        /// Moves while one pointer is down.
        const DRAG_MOVE = 1 << 5;
        /// Moves while two pointers are down.
        const PINCH_MOVE = 1 << 6;
        /// The release that completes a click.
        const CLICK = 1 << 7;

        /// Listeners attached from construction until disposal.
        const BASE = Self::POINTER_DOWN.bits()
            | Self::POINTER_UP.bits()
            | Self::POINTER_CANCEL.bits()
            | Self::WHEEL.bits()
            | Self::CONTEXT_MENU.bits();
        /// Listeners that consume pointer moves.
        const MOVE = Self::DRAG_MOVE.bits() | Self::PINCH_MOVE.bits();
    }
}

/// The interactive surface a recognizer is attached to.
///
/// Implementations translate listener sets into whatever the host platform
/// uses (event listener registration, an interest mask, ...). The recognizer
/// never attaches a listener that is already attached, and never detaches one
/// that is not.
pub trait Surface {
    /// Starts delivering the given event kinds to the recognizer.
    fn attach(&mut self, listeners: Listeners);

    /// Stops delivering the given event kinds to the recognizer.
    fn detach(&mut self, listeners: Listeners);

    /// Binds all further events of `pointer` to this surface until the
    /// pointer is released or cancelled, even if it leaves the surface.
    ///
    /// The platform releases the capture; there is no explicit release call.
    fn capture_pointer(&mut self, pointer: PointerId);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn attach(&mut self, listeners: Listeners) {
        (**self).attach(listeners);
    }

    fn detach(&mut self, listeners: Listeners) {
        (**self).detach(listeners);
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        (**self).capture_pointer(pointer);
    }
}

/// One registration change recorded by [`HeadlessSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceOp {
    /// Listeners were attached.
    Attach(Listeners),
    /// Listeners were detached.
    Detach(Listeners),
    /// A pointer was captured.
    Capture(PointerId),
}

/// A [`Surface`] with no platform behind it.
///
/// It records the currently attached listeners and a log of every change,
/// which makes it useful for tests and for replaying recorded input.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    attached: Listeners,
    log: Vec<SurfaceOp>,
}

impl HeadlessSurface {
    /// Creates a surface with nothing attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently attached.
    #[must_use]
    pub fn attached(&self) -> Listeners {
        self.attached
    }

    /// Every attach, detach and capture so far, oldest first.
    #[must_use]
    pub fn log(&self) -> &[SurfaceOp] {
        &self.log
    }

    /// Pointers captured so far, oldest first.
    pub fn captures(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.log.iter().filter_map(|op| match op {
            SurfaceOp::Capture(id) => Some(*id),
            _ => None,
        })
    }

    /// Forgets the change log, keeping the attached set.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl Surface for HeadlessSurface {
    fn attach(&mut self, listeners: Listeners) {
        debug_assert!(
            !self.attached.intersects(listeners),
            "listener attached twice: {listeners:?}"
        );
        self.attached |= listeners;
        self.log.push(SurfaceOp::Attach(listeners));
    }

    fn detach(&mut self, listeners: Listeners) {
        debug_assert!(
            self.attached.contains(listeners),
            "detaching a listener that is not attached: {listeners:?}"
        );
        self.attached &= !listeners;
        self.log.push(SurfaceOp::Detach(listeners));
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.log.push(SurfaceOp::Capture(pointer));
    }
}
