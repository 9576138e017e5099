// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Low-level input events fed into a [`GestureRecognizer`](crate::GestureRecognizer).
//!
//! All positions are in global (screen) space.

use kurbo::Point;

/// Stable identity of one input contact (a mouse, a pen, or one finger).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// The kind of device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerType {
    /// A mouse or trackpad cursor.
    #[default]
    Mouse,
    /// A stylus.
    Pen,
    /// A finger on a touch screen.
    Touch,
}

/// The button whose state changed in a press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen tip, or touch contact.
    Primary,
    /// Middle mouse button (wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
    /// Any other button, by platform index.
    Other(u8),
}

/// A pointer press, move, release, or cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which contact this event belongs to.
    pub pointer_id: PointerId,
    /// Device kind.
    pub pointer_type: PointerType,
    /// The button that changed; `None` for moves and cancels.
    pub button: Option<PointerButton>,
    /// Position in global space.
    pub position: Point,
}

impl PointerEvent {
    /// A primary-button event for `pointer_id` at `position`.
    #[must_use]
    pub fn primary(pointer_id: PointerId, pointer_type: PointerType, position: Point) -> Self {
        Self {
            pointer_id,
            pointer_type,
            button: Some(PointerButton::Primary),
            position,
        }
    }

    /// A button-less event (a move or a cancel) for `pointer_id` at `position`.
    #[must_use]
    pub fn motion(pointer_id: PointerId, pointer_type: PointerType, position: Point) -> Self {
        Self {
            pointer_id,
            pointer_type,
            button: None,
            position,
        }
    }

    /// Returns the non-primary mouse button this event reports, if any.
    ///
    /// Only mice report middle/secondary taps separately. A pen's barrel
    /// button or an unusual touch report is treated as an ordinary contact.
    #[must_use]
    pub fn mouse_tap_button(&self) -> Option<PointerButton> {
        match (self.pointer_type, self.button) {
            (PointerType::Mouse, Some(b @ (PointerButton::Middle | PointerButton::Secondary))) => {
                Some(b)
            }
            _ => None,
        }
    }
}

/// A wheel (scroll) event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Cursor position in global space.
    pub position: Point,
    /// Vertical scroll amount; negative values scroll up.
    pub delta_y: f64,
}

/// A request to open the platform's context menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextMenuEvent {
    /// Cursor position in global space.
    pub position: Point,
}

/// Any event a [`GestureRecognizer`](crate::GestureRecognizer) understands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A contact was pressed.
    PointerDown(PointerEvent),
    /// A contact moved.
    PointerMove(PointerEvent),
    /// A contact was released.
    PointerUp(PointerEvent),
    /// The platform took the contact away (e.g. it started a system gesture).
    PointerCancel(PointerEvent),
    /// The wheel was turned.
    Wheel(WheelEvent),
    /// A context menu was requested.
    ContextMenu(ContextMenuEvent),
}
