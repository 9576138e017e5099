// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use kurbo::{Point, Rect, Size, Vec2};
use panorama_space::{CoordinateSpace, Layout, delta, scale_point};

use crate::{ClampMode, ConfigError, SubscriberId, Subscribers, Transform, ViewportConfig};

/// The display side of a viewport: node geometry plus the ability to place
/// the content layer.
///
/// [`apply_transform`](Self::apply_transform) is a pure projection of the
/// controller's committed [`Transform`] onto the display. The controller
/// never reads the content layer's placement back from the host.
pub trait Host: Layout {
    /// Positions and scales `content` according to `transform`.
    fn apply_transform(&mut self, content: Self::Node, transform: &Transform);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn apply_transform(&mut self, content: Self::Node, transform: &Transform) {
        (**self).apply_transform(content, transform);
    }
}

/// The authoritative pan/zoom state of one content layer inside a container.
///
/// Every mutation goes through a single commit path that clamps the scale to
/// the configured zoom range and the translation to the edge clamping policy,
/// projects the result onto the [`Host`], and then notifies subscribers with
/// exactly the committed values.
///
/// ## Example
///
/// ```
/// use kurbo::{Point, Rect, Size, Vec2};
/// use panorama_viewport::{HeadlessHost, HeadlessNode, ViewportConfig, ViewportController};
///
/// let host = HeadlessHost::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(8000.0, 8000.0));
/// let mut viewport = ViewportController::new(
///     host,
///     HeadlessNode::Container,
///     HeadlessNode::Content,
///     ViewportConfig::default(),
/// )?;
///
/// viewport.set_scale(0.1);
/// viewport.center_child();
/// assert_eq!(viewport.translate(), Vec2::new(0.0, -100.0));
///
/// // Zooming keeps the content under the anchor in place.
/// viewport.zoom_to(0.2, Point::new(400.0, 300.0));
/// assert_eq!(viewport.translate(), Vec2::new(-400.0, -500.0));
/// # Ok::<(), panorama_viewport::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ViewportController<H: Host> {
    host: H,
    space: CoordinateSpace<H::Node>,
    content: H::Node,
    content_size: Size,
    container_size: Size,
    config: ViewportConfig,
    transform: Transform,
    subscribers: Subscribers,
}

impl<H: Host> ViewportController<H> {
    /// Creates a controller for `content` inside `container`.
    ///
    /// The content's unscaled size is measured from the host, which is
    /// expected to present the content unscaled at this point. The initial
    /// transform (scale `1.0` clamped into the zoom range, no translation) is
    /// committed to the host before this returns.
    pub fn new(
        host: H,
        container: H::Node,
        content: H::Node,
        config: ViewportConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut space = CoordinateSpace::new(container);
        space.add_child(content);
        let content_size = host.bounding_rect(content).size();
        let container_size = host.bounding_rect(container).size();

        let mut controller = Self {
            host,
            space,
            content,
            content_size,
            container_size,
            config,
            transform: Transform::IDENTITY,
            subscribers: Subscribers::new(),
        };
        controller.reset();
        Ok(controller)
    }

    /// The committed transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The committed scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// The committed translation.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.transform.translate
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// The content layer's unscaled size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Replaces the content layer's unscaled size and re-commits the current
    /// transform so clamping reflects the new size.
    pub fn set_content_size(&mut self, size: Size) {
        tracing::debug!(
            width = size.width,
            height = size.height,
            "content size changed"
        );
        self.content_size = size;
        self.set_transform(self.transform.scale, self.transform.translate);
    }

    /// The coordinate space spanned by the container, with the content layer
    /// registered as its child.
    #[must_use]
    pub fn space(&self) -> &CoordinateSpace<H::Node> {
        &self.space
    }

    /// The content layer node.
    #[must_use]
    pub fn content(&self) -> H::Node {
        self.content
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// After changing the container's geometry through this, call
    /// [`container_resized`](Self::container_resized).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller and returns the host.
    pub fn into_host(self) -> H {
        self.host
    }

    // Commit path

    /// Commits a new transform.
    ///
    /// `scale` is clamped to the zoom range and `translate` to the edge
    /// clamping policy. The host and then every subscriber see the clamped
    /// values. A non-finite `scale` or `translate` is ignored.
    pub fn set_transform(&mut self, scale: f64, translate: Vec2) {
        if !scale.is_finite() || !translate.is_finite() {
            tracing::debug!(
                scale,
                x = translate.x,
                y = translate.y,
                "non-finite transform ignored"
            );
            return;
        }
        let scale = self.config.clamp_scale(scale);
        let translate = self.clamp_translation(scale, translate);
        self.transform = Transform::new(scale, translate);
        self.host.apply_transform(self.content, &self.transform);
        tracing::trace!(scale, x = translate.x, y = translate.y, "transform committed");
        self.subscribers.notify(&self.transform);
    }

    /// Commits `scale`, clamped to the zoom range, keeping the translation.
    pub fn set_scale(&mut self, scale: f64) {
        self.set_transform(scale, self.transform.translate);
    }

    /// Commits `translate` at the current scale.
    pub fn move_to(&mut self, translate: Vec2) {
        self.set_transform(self.transform.scale, translate);
    }

    /// Same as [`move_to`](Self::move_to).
    pub fn set_position(&mut self, translate: Vec2) {
        self.move_to(translate);
    }

    /// Shifts the translation by `delta`.
    pub fn move_delta(&mut self, delta: Vec2) {
        self.set_transform(self.transform.scale, self.transform.translate + delta);
    }

    /// Commits scale `1.0` (clamped) and no translation.
    pub fn reset(&mut self) {
        self.set_transform(1.0, Vec2::ZERO);
    }

    // Zoom

    /// Zooms to `target` while keeping the content under the global point
    /// `anchor` where it is on screen.
    ///
    /// The target scale is clamped first, so the anchor holds for the scale
    /// that is actually committed. Only edge clamping can move the anchor.
    /// A non-finite `target` or `anchor` is ignored.
    pub fn zoom_to(&mut self, target: f64, anchor: Point) {
        if !target.is_finite() || !anchor.is_finite() {
            tracing::debug!(target, x = anchor.x, y = anchor.y, "non-finite zoom ignored");
            return;
        }
        let current = self.transform.scale;
        let target = self.config.clamp_scale(target);
        let projected = {
            let layout = self.projected();
            let content_point = self
                .space
                .global_to_child_point(&layout, self.content, anchor);
            let scaled = scale_point(target / current, content_point);
            self.space
                .child_to_global_point(&layout, self.content, scaled)
        };
        let correction = delta(projected, anchor);
        self.set_transform(target, self.transform.translate + correction);
    }

    /// Size of one zoom step at `scale`, according to the zoom curve.
    #[must_use]
    pub fn zoom_step_at(&self, scale: f64) -> f64 {
        self.config.zoom_curve.step(scale, self.config.zoom_step)
    }

    /// Zooms in by one step, anchored at the global point `anchor`.
    pub fn zoom_in(&mut self, anchor: Point) {
        let scale = self.transform.scale;
        self.zoom_to(scale + self.zoom_step_at(scale), anchor);
    }

    /// Zooms out by one step, anchored at the global point `anchor`.
    pub fn zoom_out(&mut self, anchor: Point) {
        let scale = self.transform.scale;
        self.zoom_to(scale - self.zoom_step_at(scale), anchor);
    }

    // Centering

    /// Moves the content so its visual center sits on the container's.
    ///
    /// The centering offset is added to the current translation, so the
    /// result is centered whatever the translation was before.
    pub fn center_child(&mut self) {
        let offset = self
            .space
            .delta_child_center_to_container_center(&self.projected(), self.content);
        self.move_delta(offset);
    }

    /// Moves the content so that whatever is under the global point `point`
    /// lands on the container's center.
    pub fn center_on_global_point(&mut self, point: Point) {
        let offset = self
            .space
            .delta_global_point_to_container_center(&self.projected(), point);
        self.move_delta(offset);
    }

    /// Keeps the content's relation to the container's center after the
    /// container changed size.
    ///
    /// Call this whenever the host reports new container geometry.
    pub fn container_resized(&mut self) {
        let size = self
            .host
            .bounding_rect(self.space.container())
            .size();
        let old = self.container_size;
        if size == old {
            return;
        }
        self.container_size = size;
        let shift = Vec2::new(size.width - old.width, size.height - old.height) * 0.5;
        tracing::debug!(
            width = size.width,
            height = size.height,
            dx = shift.x,
            dy = shift.y,
            "container resized"
        );
        self.move_delta(shift);
    }

    /// Applies the edge clamping policy to `translate` at `scale`.
    ///
    /// On each axis where the rendered content is larger than the container,
    /// the translation is clamped to `[container - content, 0]`; on each axis
    /// where it is not, the content is centered.
    #[must_use]
    pub fn clamp_translation(&self, scale: f64, translate: Vec2) -> Vec2 {
        match self.config.edge_clamping {
            ClampMode::None => translate,
            ClampMode::Edges => {
                let container = self
                    .host
                    .bounding_rect(self.space.container())
                    .size();
                let rendered = self.content_size * scale;
                Vec2::new(
                    clamp_axis(translate.x, container.width, rendered.width),
                    clamp_axis(translate.y, container.height, rendered.height),
                )
            }
        }
    }

    /// The part of the unscaled content currently visible in the container.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let container = self
            .host
            .bounding_rect(self.space.container())
            .size();
        let min = self.transform.container_to_content(Point::ZERO);
        let max = self
            .transform
            .container_to_content(Point::new(container.width, container.height));
        Rect::from_points(min, max)
    }

    // Subscribers

    /// Registers `callback` to be called with every committed transform.
    ///
    /// Callbacks run synchronously inside the commit, after the host has been
    /// updated. They cannot reach back into the controller.
    ///
    /// Closures have no identity to compare, so every call registers a new
    /// subscriber with its own [`SubscriberId`], even for the same callback.
    /// Keep the id to unsubscribe.
    pub fn on_transform(&mut self, callback: impl FnMut(&Transform) + 'static) -> SubscriberId {
        let id = self.subscribers.add(Box::new(callback));
        tracing::debug!(count = self.subscribers.len(), "transform subscriber added");
        id
    }

    /// Removes a subscriber. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let removed = self.subscribers.remove(id);
        if removed {
            tracing::debug!(count = self.subscribers.len(), "transform subscriber removed");
        }
        removed
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container_rect: self.host.bounding_rect(self.space.container()),
            content_size: self.content_size,
            rendered_size: self.content_size * self.transform.scale,
            visible_content_rect: self.visible_content_rect(),
            transform: self.transform,
            zoom_min: self.config.zoom_min,
            zoom_max: self.config.zoom_max,
            clamp_mode: self.config.edge_clamping,
            subscribers: self.subscribers.len(),
        }
    }

    fn projected(&self) -> Projected<'_, H> {
        Projected {
            host: &self.host,
            container: self.space.container(),
            content: self.content,
            content_size: self.content_size,
            transform: self.transform,
        }
    }
}

fn clamp_axis(translate: f64, container: f64, content: f64) -> f64 {
    if content > container {
        translate.clamp(container - content, 0.0)
    } else {
        0.5 * (container - content)
    }
}

/// The host's geometry with the content layer placed by the committed
/// transform instead of by whatever the host last displayed.
struct Projected<'a, H: Host> {
    host: &'a H,
    container: H::Node,
    content: H::Node,
    content_size: Size,
    transform: Transform,
}

impl<H: Host> Layout for Projected<'_, H> {
    type Node = H::Node;

    fn bounding_rect(&self, node: Self::Node) -> Rect {
        if node == self.content {
            let origin = self.host.bounding_rect(self.container).origin() + self.transform.translate;
            Rect::from_origin_size(origin, self.content_size * self.transform.scale)
        } else {
            self.host.bounding_rect(node)
        }
    }

    fn offset(&self, node: Self::Node) -> Vec2 {
        if node == self.content {
            self.transform.translate
        } else {
            self.host.offset(node)
        }
    }
}

/// Debug snapshot of a [`ViewportController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Container rectangle in global space.
    pub container_rect: Rect,
    /// Unscaled content size.
    pub content_size: Size,
    /// Content size at the committed scale.
    pub rendered_size: Size,
    /// Unscaled content region visible through the container.
    pub visible_content_rect: Rect,
    /// Committed transform.
    pub transform: Transform,
    /// Minimum scale.
    pub zoom_min: f64,
    /// Maximum scale.
    pub zoom_max: f64,
    /// Edge clamping policy.
    pub clamp_mode: ClampMode,
    /// Number of transform subscribers.
    pub subscribers: usize,
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::ViewportController;
    use crate::{ClampMode, HeadlessHost, HeadlessNode, Transform, ViewportConfig, ZoomCurve};

    fn controller(config: ViewportConfig) -> ViewportController<HeadlessHost> {
        let host = HeadlessHost::new(
            Rect::new(10.0, 20.0, 810.0, 620.0),
            Size::new(8000.0, 8000.0),
        );
        let Ok(c) = ViewportController::new(
            host,
            HeadlessNode::Container,
            HeadlessNode::Content,
            config,
        ) else {
            panic!("default config is valid");
        };
        c
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn construction_commits_initial_transform() {
        let c = controller(ViewportConfig::default());
        assert_eq!(c.transform(), Transform::IDENTITY);
        assert_eq!(c.host().applied(), Some(Transform::IDENTITY));
        assert_eq!(c.content_size(), Size::new(8000.0, 8000.0));

        // A zoom range that excludes 1.0 clamps the initial scale.
        let c = controller(ViewportConfig::default().with_zoom_range(0.1, 0.5));
        assert_eq!(c.scale(), 0.5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let host = HeadlessHost::new(Rect::new(0.0, 0.0, 1.0, 1.0), Size::new(1.0, 1.0));
        let result = ViewportController::new(
            host,
            HeadlessNode::Container,
            HeadlessNode::Content,
            ViewportConfig::default().with_zoom_step(0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn set_scale_clamps_and_keeps_translation() {
        let mut c = controller(ViewportConfig::default());
        c.move_to(Vec2::new(-30.0, -40.0));
        c.set_scale(5.0);
        assert_eq!(c.scale(), 2.0);
        assert_eq!(c.translate(), Vec2::new(-30.0, -40.0));
        c.set_scale(0.0);
        assert_eq!(c.scale(), 0.1);
    }

    #[test]
    fn center_child_centers_vertically_only() {
        let mut c = controller(ViewportConfig::default());
        c.set_scale(0.1);
        c.center_child();
        assert!(close(c.translate(), Vec2::new(0.0, -100.0)));

        // Centering does not depend on where the content was.
        c.move_to(Vec2::new(123.0, 456.0));
        c.center_child();
        assert!(close(c.translate(), Vec2::new(0.0, -100.0)));
    }

    #[test]
    fn zoom_to_keeps_anchor_fixed() {
        let mut c = controller(ViewportConfig::default());
        c.move_to(Vec2::new(-250.0, -75.0));
        let anchor = Point::new(300.0, 200.0);
        let before = c.transform().container_to_content(anchor - Vec2::new(10.0, 20.0));

        c.zoom_to(1.7, anchor);
        assert_eq!(c.scale(), 1.7);
        let after = c.transform().content_to_container(before) + Vec2::new(10.0, 20.0);
        assert!((after - anchor).hypot() < 1e-9);
    }

    #[test]
    fn zoom_steps_follow_the_curve() {
        let mut c = controller(ViewportConfig::default());
        c.zoom_in(Point::new(10.0, 20.0));
        assert_eq!(c.scale(), 1.5);
        c.zoom_in(Point::new(10.0, 20.0));
        assert_eq!(c.scale(), 2.0);
        c.zoom_out(Point::new(10.0, 20.0));
        assert_eq!(c.scale(), 1.5);

        let mut c = controller(
            ViewportConfig::default().with_zoom_curve(ZoomCurve::custom(|s| s * 0.5)),
        );
        c.zoom_out(Point::ZERO);
        assert!((c.scale() - 0.5).abs() < 1e-12);
        assert!((c.zoom_step_at(0.5) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn edge_clamping_bounds_and_centers() {
        let mut c = controller(ViewportConfig::default().with_edge_clamping(true));
        // Rendered 8000x8000 in an 800x600 container.
        c.move_to(Vec2::new(100.0, -10_000.0));
        assert_eq!(c.translate(), Vec2::new(0.0, -7400.0));

        // Clamped to 0.1: 800x800, as wide as the container and taller.
        c.set_scale(0.05);
        assert_eq!(c.scale(), 0.1);
        assert!(close(c.translate(), Vec2::new(0.0, -200.0)));

        // Smaller than the container on both axes: centered on both.
        let mut c = controller(
            ViewportConfig::default()
                .with_edge_clamping(true)
                .with_zoom_range(0.05, 2.0),
        );
        c.set_scale(0.05);
        assert!(close(c.translate(), Vec2::new(200.0, 100.0)));
    }

    #[test]
    fn non_finite_input_leaves_transform_untouched() {
        let mut c = controller(ViewportConfig::default());
        c.set_transform(0.5, Vec2::new(-10.0, 20.0));
        let committed = c.transform();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.on_transform(move |t| sink.borrow_mut().push(*t));

        c.set_scale(f64::NAN);
        c.set_transform(f64::INFINITY, Vec2::ZERO);
        c.move_to(Vec2::new(f64::NAN, 0.0));
        c.zoom_to(f64::NAN, Point::new(100.0, 100.0));
        c.zoom_to(1.0, Point::new(f64::NAN, 0.0));
        assert_eq!(c.transform(), committed);
        assert!(seen.borrow().is_empty());

        let mut c = controller(
            ViewportConfig::default().with_zoom_curve(ZoomCurve::custom(|_| f64::NAN)),
        );
        c.zoom_in(Point::new(100.0, 100.0));
        c.move_delta(Vec2::new(5.0, 5.0));
        assert_eq!(c.transform(), Transform::new(1.0, Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn content_size_change_recommits_with_clamping() {
        let mut c = controller(ViewportConfig::default().with_edge_clamping(true));
        c.move_to(Vec2::new(-7000.0, -7000.0));
        c.set_content_size(Size::new(1000.0, 1000.0));
        assert_eq!(c.translate(), Vec2::new(-200.0, -400.0));
        assert_eq!(c.host().applied().map(|t| t.translate), Some(c.translate()));
    }

    #[test]
    fn container_resize_keeps_center_offset() {
        let mut c = controller(ViewportConfig::default());
        c.move_to(Vec2::new(-100.0, -100.0));
        c.host_mut()
            .set_container_rect(Rect::new(10.0, 20.0, 1010.0, 720.0));
        c.container_resized();
        assert_eq!(c.translate(), Vec2::new(0.0, -50.0));

        // No change, no commit.
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.on_transform(move |t| sink.borrow_mut().push(*t));
        c.container_resized();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn middle_click_centering_uses_container_space() {
        let mut c = controller(ViewportConfig::default());
        // Container origin is (10, 20); its center is (410, 320) globally.
        c.center_on_global_point(Point::new(110.0, 120.0));
        assert_eq!(c.translate(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn subscribers_see_clamped_values() {
        let mut c = controller(ViewportConfig::default().with_edge_clamping(true));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = c.on_transform(move |t| sink.borrow_mut().push(*t));
        c.set_transform(9.0, Vec2::new(50.0, 50.0));
        assert_eq!(
            seen.borrow().as_slice(),
            &[Transform::new(2.0, Vec2::ZERO)]
        );
        assert!(c.unsubscribe(id));
        assert_eq!(c.subscriber_count(), 0);
        c.reset();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn debug_info_reports_visible_region() {
        let mut c = controller(ViewportConfig::default());
        c.set_transform(0.5, Vec2::new(-100.0, -50.0));
        let info = c.debug_info();
        assert_eq!(info.rendered_size, Size::new(4000.0, 4000.0));
        assert_eq!(info.clamp_mode, ClampMode::None);
        assert_eq!(
            info.visible_content_rect,
            Rect::new(200.0, 100.0, 1800.0, 1300.0)
        );
        assert_eq!(info.container_rect, Rect::new(10.0, 20.0, 810.0, 620.0));
    }
}
