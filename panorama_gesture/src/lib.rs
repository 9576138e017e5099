// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Gesture: multi-pointer gesture recognition for one surface.
//!
//! A [`GestureRecognizer`] consumes raw pointer, wheel, and context-menu
//! events and turns them into a small, non-overlapping set of callbacks on a
//! [`GestureHandler`]:
//!
//! - press / release of the primary button ([`on_pointer_down`], [`on_pointer_up`]),
//! - middle and right mouse taps, which never take part in drags or pinches,
//! - [`on_click`]: a press and release with no drag in between,
//! - [`on_drag`]: moves while exactly one pointer is down, as deltas since
//!   the previous sample,
//! - [`on_pinch`]: moves while exactly two pointers are down, as the change of
//!   their distance plus their midpoint,
//! - [`on_scroll`] and [`on_context_menu`].
//!
//! The recognizer tracks pressed pointers in a [`PointerSet`] and derives a
//! single [`GestureMode`] from their count. It owns its [`Surface`] binding:
//! which low-level [`Listeners`] are attached is part of its state, the move
//! listener is swapped on every mode change, and [`GestureRecognizer::dispose`]
//! detaches everything in one call.
//!
//! The crate does not assume any particular windowing or event system. Hosts
//! translate their native events into [`InputEvent`]s and implement
//! [`Surface`] over their listener registration; [`HeadlessSurface`] is a
//! ready-made implementation for tests and replay.
//!
//! ## Click vs. drag
//!
//! ```rust
//! use kurbo::Point;
//! use panorama_gesture::{
//!     GestureHandler, GestureRecognizer, HeadlessSurface, InputEvent, PointerEvent, PointerId,
//!     PointerType,
//! };
//!
//! #[derive(Default)]
//! struct Clicks(u32);
//!
//! impl GestureHandler for Clicks {
//!     fn on_click(&mut self, _event: &PointerEvent, _point: Point) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut recognizer = GestureRecognizer::attach(HeadlessSurface::new());
//! let mut clicks = Clicks::default();
//! let at = |x: f64| PointerEvent::primary(PointerId(1), PointerType::Mouse, Point::new(x, 0.0));
//!
//! // Press and release in place: a click.
//! recognizer.handle(&InputEvent::PointerDown(at(0.0)), &mut clicks);
//! recognizer.handle(&InputEvent::PointerUp(at(0.0)), &mut clicks);
//! assert_eq!(clicks.0, 1);
//!
//! // Press, drag, release: no click.
//! recognizer.handle(&InputEvent::PointerDown(at(0.0)), &mut clicks);
//! recognizer.handle(&InputEvent::PointerMove(at(5.0)), &mut clicks);
//! recognizer.handle(&InputEvent::PointerUp(at(5.0)), &mut clicks);
//! assert_eq!(clicks.0, 1);
//! ```
//!
//! [`on_pointer_down`]: GestureHandler::on_pointer_down
//! [`on_pointer_up`]: GestureHandler::on_pointer_up
//! [`on_click`]: GestureHandler::on_click
//! [`on_drag`]: GestureHandler::on_drag
//! [`on_pinch`]: GestureHandler::on_pinch
//! [`on_scroll`]: GestureHandler::on_scroll
//! [`on_context_menu`]: GestureHandler::on_context_menu
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod drag;
mod event;
mod handler;
mod listeners;
mod pointers;
mod recognizer;

pub use drag::DragState;
pub use event::{
    ContextMenuEvent, InputEvent, PointerButton, PointerEvent, PointerId, PointerType, WheelEvent,
};
pub use handler::{DragContext, GestureHandler};
pub use listeners::{HeadlessSurface, Listeners, Surface, SurfaceOp};
pub use pointers::PointerSet;
pub use recognizer::{GestureMode, GestureRecognizer, Response};
