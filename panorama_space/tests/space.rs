// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `panorama_space` crate.
//!
//! These drive `CoordinateSpace` through a small mutable layout, checking that
//! conversions follow the geometry as it changes between calls.

use kurbo::{Point, Rect, Vec2};
use panorama_space::{CoordinateSpace, Layout, scale_point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(u8);

const CONTAINER: NodeId = NodeId(0);
const MAP: NodeId = NodeId(1);

struct Page {
    container: Rect,
    map_offset: Vec2,
    map_size: (f64, f64),
}

impl Layout for Page {
    type Node = NodeId;

    fn bounding_rect(&self, node: NodeId) -> Rect {
        if node == CONTAINER {
            self.container
        } else {
            Rect::from_origin_size(self.container.origin() + self.map_offset, self.map_size)
        }
    }

    fn offset(&self, node: NodeId) -> Vec2 {
        if node == CONTAINER {
            Vec2::ZERO
        } else {
            self.map_offset
        }
    }
}

fn page() -> Page {
    Page {
        container: Rect::new(0.0, 56.0, 1024.0, 768.0),
        map_offset: Vec2::new(-200.0, -100.0),
        map_size: (2000.0, 2000.0),
    }
}

#[test]
fn every_path_between_spaces_agrees() {
    let layout = page();
    let mut space = CoordinateSpace::new(CONTAINER);
    space.add_child(MAP);

    let global = Point::new(300.0, 400.0);
    let direct = space.global_to_child_point(&layout, MAP, global);
    let via_container = space.container_to_child_point(
        &layout,
        MAP,
        space.global_to_container_point(&layout, global),
    );
    assert_eq!(direct, via_container);
    assert_eq!(direct, Point::new(500.0, 444.0));
}

#[test]
fn conversions_follow_a_moved_container() {
    let mut layout = page();
    let mut space = CoordinateSpace::new(CONTAINER);
    space.add_child(MAP);

    let global = Point::new(300.0, 400.0);
    let before = space.global_to_container_point(&layout, global);

    // The host relayouts: the container moves down by the height of a toolbar.
    layout.container = Rect::new(0.0, 100.0, 1024.0, 768.0);
    let after = space.global_to_container_point(&layout, global);
    assert_eq!(before - after, Vec2::new(0.0, 44.0));
}

#[test]
fn scaled_child_point_maps_back_through_percentages() {
    let layout = page();
    let mut space = CoordinateSpace::new(CONTAINER);
    space.add_child(MAP);

    let pct = Point::new(0.25, 0.75);
    let child = space.child_percentages_to_point(&layout, MAP, pct);
    assert_eq!(child, Point::new(500.0, 1500.0));
    assert_eq!(space.child_point_to_percentages(&layout, MAP, child), pct);

    // Doubling a child point doubles its percentage.
    let doubled = scale_point(2.0, Point::new(100.0, 100.0));
    assert_eq!(
        space.child_point_to_percentages(&layout, MAP, doubled),
        Point::new(0.1, 0.1)
    );
}

#[test]
fn centering_delta_accounts_for_the_current_offset() {
    let layout = page();
    let mut space = CoordinateSpace::new(CONTAINER);
    space.add_child(MAP);

    // Map center in container space: (-200 + 1000, -100 + 1000) = (800, 900).
    // Container center: (512, 356).
    let d = space.delta_child_center_to_container_center(&layout, MAP);
    assert_eq!(d, Vec2::new(-288.0, -544.0));
}
