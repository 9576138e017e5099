// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Viewport: pan and zoom state for a content layer inside a
//! fixed-size container.
//!
//! A [`ViewportController`] owns the committed [`Transform`] (a uniform scale
//! plus a translation in container units) of one content layer. It:
//! - Clamps every commit: the scale into the configured zoom range and,
//!   optionally, the translation so the content never reveals empty space
//!   past its edges ([`ClampMode::Edges`]).
//! - Zooms around an anchor so the content under the anchor stays put.
//! - Projects each commit onto its [`Host`] and then notifies transform
//!   subscribers with exactly the committed values.
//!
//! [`Viewport`] composes a controller with a
//! [`GestureRecognizer`](panorama_gesture::GestureRecognizer): drags pan,
//! pinches and the wheel zoom, and a middle click centers the clicked point.
//!
//! The crate does not own any display. Hosts implement [`Host`] (node
//! geometry plus the transform write) over whatever they render with;
//! [`HeadlessHost`] is a ready-made implementation for tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use panorama_viewport::{HeadlessHost, HeadlessNode, ViewportConfig, ViewportController};
//!
//! let host = HeadlessHost::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(4000.0, 3000.0));
//! let mut viewport = ViewportController::new(
//!     host,
//!     HeadlessNode::Container,
//!     HeadlessNode::Content,
//!     ViewportConfig::default().with_edge_clamping(true),
//! )?;
//!
//! // A ruler that follows the content.
//! let ruler_scale = Rc::new(Cell::new(0.0));
//! let sink = Rc::clone(&ruler_scale);
//! viewport.on_transform(move |t| sink.set(t.scale));
//!
//! viewport.zoom_out(Point::new(400.0, 300.0));
//! assert_eq!(ruler_scale.get(), 0.5);
//! assert_eq!(viewport.host().applied(), Some(viewport.transform()));
//! # Ok::<(), panorama_viewport::ConfigError>(())
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod gestures;
mod headless;
mod subscribers;
mod transform;

pub use config::{
    ClampMode, ConfigError, DEFAULT_PINCH_SENSITIVITY, ExponentialCurve, ViewportConfig,
    ZoomCurve,
};
pub use controller::{Host, ViewportController, ViewportDebugInfo};
pub use gestures::{Viewport, ViewportGestures};
pub use headless::{HeadlessHost, HeadlessNode};
pub use subscribers::{SubscriberId, Subscribers, TransformCallback};
pub use transform::Transform;
