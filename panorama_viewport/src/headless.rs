// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};
use panorama_space::Layout;

use crate::{Host, Transform};

/// The two nodes of a [`HeadlessHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadlessNode {
    /// The fixed-size container.
    Container,
    /// The pannable, zoomable content layer.
    Content,
}

/// A [`Host`] with no display behind it.
///
/// The container is a plain rectangle; the content layer's geometry is the
/// projection of the last transform applied to it, exactly as a real display
/// would lay it out. Useful for tests and for driving a viewport from
/// recorded input.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    container: Rect,
    content_size: Size,
    applied: Option<Transform>,
    apply_count: usize,
}

impl HeadlessHost {
    /// Creates a host with a container at `container` (global space) and
    /// unscaled content of `content_size`.
    #[must_use]
    pub fn new(container: Rect, content_size: Size) -> Self {
        Self {
            container,
            content_size,
            applied: None,
            apply_count: 0,
        }
    }

    /// The container rectangle.
    #[must_use]
    pub fn container_rect(&self) -> Rect {
        self.container
    }

    /// Moves or resizes the container.
    pub fn set_container_rect(&mut self, rect: Rect) {
        self.container = rect;
    }

    /// The unscaled content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Changes the unscaled content size.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// The last transform applied to the content layer, if any.
    #[must_use]
    pub fn applied(&self) -> Option<Transform> {
        self.applied
    }

    /// How many times a transform was applied.
    #[must_use]
    pub fn apply_count(&self) -> usize {
        self.apply_count
    }

    fn placement(&self) -> Transform {
        self.applied.unwrap_or(Transform::IDENTITY)
    }
}

impl Layout for HeadlessHost {
    type Node = HeadlessNode;

    fn bounding_rect(&self, node: HeadlessNode) -> Rect {
        match node {
            HeadlessNode::Container => self.container,
            HeadlessNode::Content => {
                let t = self.placement();
                Rect::from_origin_size(
                    self.container.origin() + t.translate,
                    self.content_size * t.scale,
                )
            }
        }
    }

    fn offset(&self, node: HeadlessNode) -> Vec2 {
        match node {
            HeadlessNode::Container => Vec2::ZERO,
            HeadlessNode::Content => self.placement().translate,
        }
    }
}

impl Host for HeadlessHost {
    fn apply_transform(&mut self, content: HeadlessNode, transform: &Transform) {
        debug_assert_eq!(
            content,
            HeadlessNode::Content,
            "only the content layer is transformed"
        );
        self.applied = Some(*transform);
        self.apply_count += 1;
    }
}
