// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Space: point conversion between a container and its children.
//!
//! A pannable, zoomable surface involves three coordinate spaces:
//! - **global** (screen) space, where input arrives,
//! - **container** space, relative to the fixed-size viewport,
//! - **child** space, relative to a node positioned inside the container
//!   (typically the content layer).
//!
//! [`CoordinateSpace`] converts points between them, plus percentage
//! conversions and a few composite "delta to center" helpers. It owns no
//! geometry: each call measures what it needs through a [`Layout`], so it
//! never serves a stale rectangle after a resize.
//!
//! Points are plain [`kurbo::Point`]s. The space a point lives in is named by
//! the method that produces or consumes it (`global_to_container_point`,
//! `child_to_global_point`, ...); there is no helper that silently accepts a
//! point from "any" space.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use panorama_space::{CoordinateSpace, Layout, delta};
//!
//! struct Fixed;
//!
//! impl Layout for Fixed {
//!     type Node = u32;
//!
//!     fn bounding_rect(&self, node: u32) -> Rect {
//!         if node == 0 {
//!             Rect::new(0.0, 0.0, 800.0, 600.0)
//!         } else {
//!             Rect::new(0.0, 0.0, 800.0, 800.0)
//!         }
//!     }
//!
//!     fn offset(&self, _node: u32) -> Vec2 {
//!         Vec2::ZERO
//!     }
//! }
//!
//! let mut space = CoordinateSpace::new(0_u32);
//! space.add_child(1);
//!
//! // How far the child's center is from the container's center.
//! let d = space.delta_child_center_to_container_center(&Fixed, 1);
//! assert_eq!(d, Vec2::new(0.0, -100.0));
//! assert_eq!(delta(Point::ZERO, Point::new(0.0, -100.0)), d);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod layout;
mod space;

pub use layout::Layout;
pub use space::{CoordinateSpace, delta, scale_point};
