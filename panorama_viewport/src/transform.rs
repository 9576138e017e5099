// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// The placement of the content layer inside its container.
///
/// `translate` is the offset of the content's top-left corner from the
/// container's origin, in container units; `scale` is applied about the
/// content's top-left corner. A content point `p` therefore lands at
/// `p * scale + translate` in container space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in container units.
    pub translate: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// The content → container mapping as an affine.
    ///
    /// ```
    /// use kurbo::{Point, Vec2};
    /// use panorama_viewport::Transform;
    ///
    /// let t = Transform::new(2.0, Vec2::new(10.0, -5.0));
    /// assert_eq!(t.to_affine() * Point::new(3.0, 4.0), Point::new(16.0, 3.0));
    /// ```
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Maps an unscaled content point into container space.
    #[must_use]
    pub fn content_to_container(&self, point: Point) -> Point {
        (point.to_vec2() * self.scale + self.translate).to_point()
    }

    /// Maps a container point back into unscaled content space.
    #[must_use]
    pub fn container_to_content(&self, point: Point) -> Point {
        ((point.to_vec2() - self.translate) / self.scale).to_point()
    }
}
