// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`

/// Pixels of inter-pointer distance change that make up one unit of scale
/// during a pinch.
pub const DEFAULT_PINCH_SENSITIVITY: f64 = 250.0;

/// Edge behavior for the content layer's translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the content may be panned past its edges.
    #[default]
    None,
    /// Keep the content's edges outside the container on every axis where
    /// the content is larger, and center it on every axis where it is
    /// smaller.
    Edges,
}

/// How far a single zoom-in or zoom-out step moves the scale.
///
/// The curve is consulted with the *current* scale, so steps can grow or
/// shrink as the user zooms.
#[derive(Clone, Default)]
pub enum ZoomCurve {
    /// Always step by [`ViewportConfig::zoom_step`].
    #[default]
    Constant,
    /// Step sizes that shrink smoothly as the content gets smaller.
    Exponential(ExponentialCurve),
    /// A caller-supplied monotonic function from scale to step size.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl ZoomCurve {
    /// Wraps a caller-supplied step function, which may capture state.
    #[must_use]
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Step size at `scale`, given the configured constant `zoom_step`.
    #[must_use]
    pub fn step(&self, scale: f64, zoom_step: f64) -> f64 {
        match self {
            Self::Constant => zoom_step,
            Self::Exponential(curve) => curve.step(scale),
            Self::Custom(f) => f(scale),
        }
    }
}

impl fmt::Debug for ZoomCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => f.write_str("Constant"),
            Self::Exponential(curve) => f.debug_tuple("Exponential").field(curve).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// An exponential mapping from an input scale range to an output step range.
///
/// With base `b`, the step at scale `s` is
///
/// ```text
/// out_min + (out_max - out_min) * (b^s - b^in_min) / (b^in_max - b^in_min)
/// ```
///
/// floored at `out_min`. With a base below one, the step grows from `out_min`
/// at `in_min` to `out_max` at `in_max`, so zooming slows down as the content
/// gets smaller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialCurve {
    /// Base of the exponential.
    pub base: f64,
    /// Lower end of the input scale range.
    pub in_min: f64,
    /// Upper end of the input scale range.
    pub in_max: f64,
    /// Smallest step produced.
    pub out_min: f64,
    /// Step produced at the far end of the input range.
    pub out_max: f64,
}

impl Default for ExponentialCurve {
    fn default() -> Self {
        Self {
            base: 0.5,
            in_min: 0.1,
            in_max: 2.0,
            out_min: 0.01,
            out_max: 0.5,
        }
    }
}

impl ExponentialCurve {
    /// Step size at `scale`.
    #[must_use]
    pub fn step(&self, scale: f64) -> f64 {
        let lo = self.base.powf(self.in_min);
        let hi = self.base.powf(self.in_max);
        let t = (self.base.powf(scale) - lo) / (hi - lo);
        let step = self.out_min + (self.out_max - self.out_min) * t;
        step.max(self.out_min)
    }
}

/// Construction-time configuration of a
/// [`ViewportController`](crate::ViewportController).
///
/// ```
/// use panorama_viewport::{ClampMode, ViewportConfig};
///
/// let config = ViewportConfig::default()
///     .with_edge_clamping(true)
///     .with_zoom_range(0.25, 4.0);
/// assert_eq!(config.edge_clamping, ClampMode::Edges);
/// assert!(config.validate().is_ok());
///
/// assert!(ViewportConfig::default().with_zoom_range(2.0, 1.0).validate().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ViewportConfig {
    /// Edge clamping policy. Defaults to [`ClampMode::None`].
    pub edge_clamping: ClampMode,
    /// Smallest allowed scale. Defaults to `0.1`.
    pub zoom_min: f64,
    /// Largest allowed scale. Defaults to `2.0`.
    pub zoom_max: f64,
    /// Step used by [`ZoomCurve::Constant`]. Defaults to `0.5`.
    pub zoom_step: f64,
    /// How zoom steps vary with scale. Defaults to [`ZoomCurve::Constant`].
    pub zoom_curve: ZoomCurve,
    /// Pinch distance, in pixels, per unit of scale. Defaults to
    /// [`DEFAULT_PINCH_SENSITIVITY`].
    pub pinch_sensitivity: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            edge_clamping: ClampMode::None,
            zoom_min: 0.1,
            zoom_max: 2.0,
            zoom_step: 0.5,
            zoom_curve: ZoomCurve::Constant,
            pinch_sensitivity: DEFAULT_PINCH_SENSITIVITY,
        }
    }
}

impl ViewportConfig {
    /// Turns edge clamping on or off.
    #[must_use]
    pub fn with_edge_clamping(mut self, enabled: bool) -> Self {
        self.edge_clamping = if enabled {
            ClampMode::Edges
        } else {
            ClampMode::None
        };
        self
    }

    /// Sets the allowed scale range.
    #[must_use]
    pub fn with_zoom_range(mut self, min: f64, max: f64) -> Self {
        self.zoom_min = min;
        self.zoom_max = max;
        self
    }

    /// Sets the constant zoom step.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = step;
        self
    }

    /// Sets the zoom step curve.
    #[must_use]
    pub fn with_zoom_curve(mut self, curve: ZoomCurve) -> Self {
        self.zoom_curve = curve;
        self
    }

    /// Sets the pinch sensitivity divisor.
    #[must_use]
    pub fn with_pinch_sensitivity(mut self, sensitivity: f64) -> Self {
        self.pinch_sensitivity = sensitivity;
        self
    }

    /// Checks that the configuration describes a usable viewport.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.zoom_min, self.zoom_max);
        if !(is_positive(min) && is_positive(max) && min <= max) {
            return Err(ConfigError::InvalidZoomRange { min, max });
        }
        if !is_positive(self.zoom_step) {
            return Err(ConfigError::InvalidZoomStep {
                step: self.zoom_step,
            });
        }
        if !is_positive(self.pinch_sensitivity) {
            return Err(ConfigError::InvalidPinchSensitivity {
                sensitivity: self.pinch_sensitivity,
            });
        }
        Ok(())
    }

    /// Clamps `scale` into `[zoom_min, zoom_max]`.
    ///
    /// A NaN `scale` stays NaN; callers committing a scale reject
    /// non-finite values first.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.zoom_min, self.zoom_max)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// A [`ViewportConfig`] that cannot drive a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The zoom bounds are not finite and positive, or `min > max`.
    InvalidZoomRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The constant zoom step is not finite and positive.
    InvalidZoomStep {
        /// Configured step.
        step: f64,
    },
    /// The pinch sensitivity is not finite and positive.
    InvalidPinchSensitivity {
        /// Configured sensitivity.
        sensitivity: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomRange { min, max } => {
                write!(f, "invalid zoom range [{min}, {max}]")
            }
            Self::InvalidZoomStep { step } => write!(f, "invalid zoom step {step}"),
            Self::InvalidPinchSensitivity { sensitivity } => {
                write!(f, "invalid pinch sensitivity {sensitivity}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ViewportConfig::default();
        assert_eq!(config.edge_clamping, ClampMode::None);
        assert_eq!(config.zoom_min, 0.1);
        assert_eq!(config.zoom_max, 2.0);
        assert_eq!(config.zoom_step, 0.5);
        assert_eq!(config.pinch_sensitivity, 250.0);
        assert!(matches!(config.zoom_curve, ZoomCurve::Constant));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let base = ViewportConfig::default;
        assert_eq!(
            base().with_zoom_range(0.0, 1.0).validate(),
            Err(ConfigError::InvalidZoomRange { min: 0.0, max: 1.0 })
        );
        assert!(base().with_zoom_range(1.0, f64::INFINITY).validate().is_err());
        assert!(base().with_zoom_range(f64::NAN, 1.0).validate().is_err());
        assert_eq!(
            base().with_zoom_step(-0.5).validate(),
            Err(ConfigError::InvalidZoomStep { step: -0.5 })
        );
        assert_eq!(
            base().with_pinch_sensitivity(0.0).validate(),
            Err(ConfigError::InvalidPinchSensitivity { sensitivity: 0.0 })
        );
        // A degenerate but ordered range is fine.
        assert!(base().with_zoom_range(1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn constant_curve_uses_configured_step() {
        let config = ViewportConfig::default().with_zoom_step(0.25);
        assert_eq!(config.zoom_curve.step(1.7, config.zoom_step), 0.25);
    }

    #[test]
    fn custom_curve_is_called_with_scale() {
        let curve = ZoomCurve::custom(|s| s / 10.0);
        assert!((curve.step(1.5, 0.5) - 0.15).abs() < 1e-12);
        assert_eq!(alloc::format!("{curve:?}"), "Custom(..)");
    }

    #[test]
    fn custom_curve_can_capture_state() {
        let factor = 0.2;
        let config =
            ViewportConfig::default().with_zoom_curve(ZoomCurve::custom(move |s| s * factor));
        let copy = config.clone();
        assert!((config.zoom_curve.step(2.0, config.zoom_step) - 0.4).abs() < 1e-12);
        assert!((copy.zoom_curve.step(1.0, copy.zoom_step) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn exponential_curve_spans_its_output_range() {
        let curve = ExponentialCurve::default();
        // At the ends of the input range the step hits the ends of the output
        // range.
        assert!((curve.step(curve.in_min) - curve.out_min).abs() < 1e-12);
        assert!((curve.step(curve.in_max) - curve.out_max).abs() < 1e-12);
        // Below the input range it never drops under `out_min`.
        assert_eq!(curve.step(0.0), curve.out_min);
        // Monotonic in between.
        let mut prev = curve.step(curve.in_min);
        for i in 1..=19 {
            let s = curve.in_min + f64::from(i) * 0.1;
            let step = curve.step(s);
            assert!(step >= prev);
            prev = step;
        }
    }

    #[test]
    fn errors_display() {
        let err = ConfigError::InvalidZoomRange { min: 2.0, max: 1.0 };
        assert_eq!(alloc::format!("{err}"), "invalid zoom range [2, 1]");
    }
}
