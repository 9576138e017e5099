// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::Layout;

/// Returns the vector that moves `from` onto `to`.
///
/// Both points must be in the same space.
#[must_use]
pub fn delta(from: Point, to: Point) -> Vec2 {
    to - from
}

/// Multiplies both coordinates of `point` by `factor`.
#[must_use]
pub fn scale_point(factor: f64, point: Point) -> Point {
    Point::new(point.x * factor, point.y * factor)
}

/// The fractional position of a node's center, for the percentage helpers.
const CENTER: Point = Point::new(0.5, 0.5);

/// Conversions between the global, container, and child coordinate spaces of
/// one container node.
///
/// There are three spaces:
/// - **Global**: screen space, the space pointer events arrive in.
/// - **Container**: relative to the container's top-left corner.
/// - **Child**: relative to a child's top-left corner. A child sits inside the
///   container at its [`Layout::offset`], so a child point and a container
///   point differ by exactly that offset. The child's scale does not enter the
///   conversion because the offset is stored in container units.
///
/// The converter only stores node identities. Every operation re-reads the
/// geometry it needs from the [`Layout`] passed to it, so results are never
/// stale after a resize or a transform change.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect, Vec2};
/// use panorama_space::{CoordinateSpace, Layout};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Node {
///     Container,
///     Map,
/// }
///
/// struct Page;
///
/// impl Layout for Page {
///     type Node = Node;
///
///     fn bounding_rect(&self, node: Node) -> Rect {
///         match node {
///             Node::Container => Rect::new(100.0, 50.0, 900.0, 650.0),
///             Node::Map => Rect::new(80.0, 50.0, 880.0, 850.0),
///         }
///     }
///
///     fn offset(&self, node: Node) -> Vec2 {
///         match node {
///             Node::Container => Vec2::ZERO,
///             Node::Map => Vec2::new(-20.0, 0.0),
///         }
///     }
/// }
///
/// let mut space = CoordinateSpace::new(Node::Container);
/// space.add_child(Node::Map);
///
/// let global = Point::new(150.0, 60.0);
/// assert_eq!(space.global_to_container_point(&Page, global), Point::new(50.0, 10.0));
/// assert_eq!(space.global_to_child_point(&Page, Node::Map, global), Point::new(70.0, 10.0));
/// ```
#[derive(Clone, Debug)]
pub struct CoordinateSpace<N> {
    container: N,
    children: SmallVec<[N; 4]>,
}

impl<N: Copy + PartialEq> CoordinateSpace<N> {
    /// Creates a coordinate space rooted at `container`, with no children.
    #[must_use]
    pub fn new(container: N) -> Self {
        Self {
            container,
            children: SmallVec::new(),
        }
    }

    /// Returns the container node.
    #[must_use]
    pub fn container(&self) -> N {
        self.container
    }

    /// Registers `child` as a node positioned inside the container.
    ///
    /// Returns `false` if it was already registered.
    pub fn add_child(&mut self, child: N) -> bool {
        if self.contains_child(child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Unregisters `child`. Returns `false` if it was not registered.
    pub fn remove_child(&mut self, child: N) -> bool {
        match self.children.iter().position(|c| *c == child) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `child` is registered.
    #[must_use]
    pub fn contains_child(&self, child: N) -> bool {
        self.children.contains(&child)
    }

    /// Registered children, in registration order.
    #[must_use]
    pub fn children(&self) -> &[N] {
        &self.children
    }

    // Global <-> container

    /// Converts a global point into container space.
    pub fn global_to_container_point<L>(&self, layout: &L, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        let origin = layout.bounding_rect(self.container).origin();
        point - origin.to_vec2()
    }

    /// Converts a container point into global space.
    pub fn container_to_global_point<L>(&self, layout: &L, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        let origin = layout.bounding_rect(self.container).origin();
        point + origin.to_vec2()
    }

    // Container <-> child

    /// Converts a container point into `child`'s space.
    pub fn container_to_child_point<L>(&self, layout: &L, child: N, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        self.debug_assert_child(child);
        point - layout.offset(child)
    }

    /// Converts a point in `child`'s space into container space.
    pub fn child_to_container_point<L>(&self, layout: &L, child: N, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        self.debug_assert_child(child);
        point + layout.offset(child)
    }

    // Global <-> child

    /// Converts a global point into `child`'s space.
    pub fn global_to_child_point<L>(&self, layout: &L, child: N, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        let container = self.global_to_container_point(layout, point);
        self.container_to_child_point(layout, child, container)
    }

    /// Converts a point in `child`'s space into global space.
    pub fn child_to_global_point<L>(&self, layout: &L, child: N, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        let container = self.child_to_container_point(layout, child, point);
        self.container_to_global_point(layout, container)
    }

    // Percentages
    //
    // These divide by the measured size; a zero-sized node yields non-finite
    // coordinates.

    /// Expresses a container point as fractions of the container's size.
    pub fn container_point_to_percentages<L>(&self, layout: &L, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        let size = layout.bounding_rect(self.container).size();
        Point::new(point.x / size.width, point.y / size.height)
    }

    /// Converts fractions of the container's size into a container point.
    pub fn container_percentages_to_point<L>(&self, layout: &L, percentages: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        let size = layout.bounding_rect(self.container).size();
        Point::new(percentages.x * size.width, percentages.y * size.height)
    }

    /// Expresses a point in `child`'s space as fractions of its rendered size.
    pub fn child_point_to_percentages<L>(&self, layout: &L, child: N, point: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        self.debug_assert_child(child);
        let size = layout.bounding_rect(child).size();
        Point::new(point.x / size.width, point.y / size.height)
    }

    /// Converts fractions of `child`'s rendered size into a point in its space.
    pub fn child_percentages_to_point<L>(&self, layout: &L, child: N, percentages: Point) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        self.debug_assert_child(child);
        let size = layout.bounding_rect(child).size();
        Point::new(percentages.x * size.width, percentages.y * size.height)
    }

    // Composite helpers

    /// The container's visual center, in container space.
    pub fn container_center<L>(&self, layout: &L) -> Point
    where
        L: Layout<Node = N> + ?Sized,
    {
        self.container_percentages_to_point(layout, CENTER)
    }

    /// The offset that would move `child`'s visual center onto the container's.
    pub fn delta_child_center_to_container_center<L>(&self, layout: &L, child: N) -> Vec2
    where
        L: Layout<Node = N> + ?Sized,
    {
        let child_center = self.child_percentages_to_point(layout, child, CENTER);
        self.delta_child_point_to_container_center(layout, child, child_center)
    }

    /// The offset that would move `point` (in `child`'s space) onto the
    /// container's visual center.
    pub fn delta_child_point_to_container_center<L>(&self, layout: &L, child: N, point: Point) -> Vec2
    where
        L: Layout<Node = N> + ?Sized,
    {
        delta(
            self.child_to_container_point(layout, child, point),
            self.container_center(layout),
        )
    }

    /// The offset that would move a global point onto the container's visual
    /// center.
    pub fn delta_global_point_to_container_center<L>(&self, layout: &L, point: Point) -> Vec2
    where
        L: Layout<Node = N> + ?Sized,
    {
        delta(
            self.global_to_container_point(layout, point),
            self.container_center(layout),
        )
    }

    /// The offset that would move a global point onto `container_point`.
    pub fn delta_global_point_to_container_point<L>(
        &self,
        layout: &L,
        global_point: Point,
        container_point: Point,
    ) -> Vec2
    where
        L: Layout<Node = N> + ?Sized,
    {
        delta(
            global_point,
            self.container_to_global_point(layout, container_point),
        )
    }

    fn debug_assert_child(&self, child: N) {
        debug_assert!(
            self.contains_child(child),
            "child node is not registered with this coordinate space"
        );
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{CoordinateSpace, delta, scale_point};
    use crate::Layout;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Node {
        Container,
        Content,
        Legend,
    }

    /// A container at (10, 20) sized 800x600, with an 8000x8000 content layer
    /// shown at `scale` and offset by `offset`.
    struct Fixture {
        offset: Vec2,
        scale: f64,
    }

    impl Layout for Fixture {
        type Node = Node;

        fn bounding_rect(&self, node: Node) -> Rect {
            let container = Rect::new(10.0, 20.0, 810.0, 620.0);
            match node {
                Node::Container => container,
                Node::Content => Rect::from_origin_size(
                    container.origin() + self.offset,
                    (8000.0 * self.scale, 8000.0 * self.scale),
                ),
                Node::Legend => Rect::new(20.0, 30.0, 120.0, 80.0),
            }
        }

        fn offset(&self, node: Node) -> Vec2 {
            match node {
                Node::Container => Vec2::ZERO,
                Node::Content => self.offset,
                Node::Legend => Vec2::new(10.0, 10.0),
            }
        }
    }

    fn space() -> CoordinateSpace<Node> {
        let mut space = CoordinateSpace::new(Node::Container);
        space.add_child(Node::Content);
        space
    }

    #[test]
    fn delta_and_scale_are_pure() {
        assert_eq!(
            delta(Point::new(1.0, 2.0), Point::new(4.0, 0.0)),
            Vec2::new(3.0, -2.0)
        );
        assert_eq!(
            scale_point(0.5, Point::new(10.0, -4.0)),
            Point::new(5.0, -2.0)
        );
    }

    #[test]
    fn children_have_set_semantics() {
        let mut space = CoordinateSpace::new(Node::Container);
        assert!(space.add_child(Node::Content));
        assert!(!space.add_child(Node::Content));
        assert!(space.add_child(Node::Legend));
        assert_eq!(space.children(), &[Node::Content, Node::Legend]);

        assert!(space.remove_child(Node::Content));
        assert!(!space.remove_child(Node::Content));
        assert_eq!(space.children(), &[Node::Legend]);
        assert_eq!(space.container(), Node::Container);
    }

    #[test]
    fn global_container_roundtrip() {
        let layout = Fixture {
            offset: Vec2::ZERO,
            scale: 1.0,
        };
        let space = space();
        let global = Point::new(110.0, 70.0);
        let container = space.global_to_container_point(&layout, global);
        assert_eq!(container, Point::new(100.0, 50.0));
        assert_eq!(space.container_to_global_point(&layout, container), global);
    }

    #[test]
    fn child_offset_is_not_divided_by_scale() {
        let layout = Fixture {
            offset: Vec2::new(-300.0, -150.0),
            scale: 0.25,
        };
        let space = space();
        let child = space.container_to_child_point(&layout, Node::Content, Point::new(0.0, 0.0));
        assert_eq!(child, Point::new(300.0, 150.0));

        let global = Point::new(60.0, 45.0);
        let local = space.global_to_child_point(&layout, Node::Content, global);
        assert_eq!(local, Point::new(350.0, 175.0));
        assert_eq!(space.child_to_global_point(&layout, Node::Content, local), global);
    }

    #[test]
    fn percentages_use_measured_rects() {
        let layout = Fixture {
            offset: Vec2::ZERO,
            scale: 0.1,
        };
        let space = space();

        let pct = space.container_point_to_percentages(&layout, Point::new(200.0, 300.0));
        assert_eq!(pct, Point::new(0.25, 0.5));
        assert_eq!(
            space.container_percentages_to_point(&layout, pct),
            Point::new(200.0, 300.0)
        );

        // Rendered content is 800x800 at scale 0.1.
        let pct = space.child_point_to_percentages(&layout, Node::Content, Point::new(400.0, 200.0));
        assert_eq!(pct, Point::new(0.5, 0.25));
        assert_eq!(
            space.child_percentages_to_point(&layout, Node::Content, Point::new(1.0, 1.0)),
            Point::new(800.0, 800.0)
        );
    }

    #[test]
    fn child_center_delta_centers_content() {
        let layout = Fixture {
            offset: Vec2::ZERO,
            scale: 0.1,
        };
        let space = space();
        assert_eq!(space.container_center(&layout), Point::new(400.0, 300.0));
        assert_eq!(
            space.delta_child_center_to_container_center(&layout, Node::Content),
            Vec2::new(0.0, -100.0)
        );
    }

    #[test]
    fn global_point_deltas_convert_spaces_first() {
        let layout = Fixture {
            offset: Vec2::ZERO,
            scale: 1.0,
        };
        let space = space();

        // The container center is (410, 320) in global space.
        let d = space.delta_global_point_to_container_center(&layout, Point::new(110.0, 20.0));
        assert_eq!(d, Vec2::new(300.0, 300.0));

        let d = space.delta_global_point_to_container_point(
            &layout,
            Point::new(10.0, 20.0),
            Point::new(5.0, 5.0),
        );
        assert_eq!(d, Vec2::new(5.0, 5.0));

        let d = space.delta_child_point_to_container_center(
            &layout,
            Node::Content,
            Point::new(400.0, 300.0),
        );
        assert_eq!(d, Vec2::ZERO);
    }

    #[test]
    fn geometry_is_reread_on_every_call() {
        let space = space();
        let before = Fixture {
            offset: Vec2::ZERO,
            scale: 1.0,
        };
        let after = Fixture {
            offset: Vec2::new(50.0, 0.0),
            scale: 1.0,
        };
        let p = Point::new(100.0, 100.0);
        let a = space.global_to_child_point(&before, Node::Content, p);
        let b = space.global_to_child_point(&after, Node::Content, p);
        assert_eq!(a - b, Vec2::new(50.0, 0.0));
    }
}
