// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use kurbo::{Rect, Vec2};

/// Read access to the live geometry of a set of nodes.
///
/// A `Layout` is the bridge between the coordinate math in this crate and
/// whatever actually lays nodes out (a DOM, a retained scene, a test double).
/// Every query is expected to reflect the node's geometry *at the time of the
/// call*; callers of [`CoordinateSpace`](crate::CoordinateSpace) never cache
/// the results across calls.
///
/// Queries must only be made for nodes that are attached and laid out. A
/// detached node has no meaningful geometry, and implementations are free to
/// return anything for it; this crate does not attempt to detect or recover
/// from that case.
pub trait Layout {
    /// Identity of a node. Stored by value, so it should be a cheap handle.
    type Node: Copy + PartialEq + Debug;

    /// Returns the node's current bounding rectangle in global (screen) space.
    ///
    /// For a scaled node this is the *rendered* rectangle, i.e. its unscaled
    /// size multiplied by its scale.
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    /// Returns the node's inline offset relative to its container's origin.
    ///
    /// For a content layer this is its translation, expressed in container
    /// units (not divided by the layer's scale).
    fn offset(&self, node: Self::Node) -> Vec2;
}

impl<L: Layout + ?Sized> Layout for &L {
    type Node = L::Node;

    fn bounding_rect(&self, node: Self::Node) -> Rect {
        (**self).bounding_rect(node)
    }

    fn offset(&self, node: Self::Node) -> Vec2 {
        (**self).offset(node)
    }
}

impl<L: Layout + ?Sized> Layout for &mut L {
    type Node = L::Node;

    fn bounding_rect(&self, node: Self::Node) -> Rect {
        (**self).bounding_rect(node)
    }

    fn offset(&self, node: Self::Node) -> Vec2 {
        (**self).offset(node)
    }
}
