// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Zoom scale bounds. The zoom widget reads these directly; they are not
/// user configurable.
pub mod scale_bounds {
    /// Scale of the unzoomed thumbnail; nothing below it is representable.
    pub const BASE: f32 = 1.0;
    /// Scale at which the backdrop is fully opaque.
    pub const SATURATION: f32 = 3.0;

    const _: () = assert!(SATURATION > BASE);
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale factor, guaranteed to be finite and at least 1.0.
///
/// Pinch factors below 1.0 do not produce a `ZoomScale`: the widget never
/// shrinks an image below its inline size.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The unzoomed scale (1.0).
    pub const BASE: Self = Self(scale_bounds::BASE);

    /// Accepts a raw pinch factor if it is finite and not below the base scale.
    #[must_use]
    pub fn from_pinch(factor: f32) -> Option<Self> {
        (factor.is_finite() && factor >= scale_bounds::BASE).then_some(Self(factor))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is strictly above the base scale.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > scale_bounds::BASE
    }

    /// Backdrop dimming for this scale: `min(9, scale²) / 9`.
    ///
    /// Grows quadratically and saturates at 1.0 once the scale reaches 3.
    #[must_use]
    pub fn backdrop_opacity(self) -> Opacity {
        let ceiling = scale_bounds::SATURATION * scale_bounds::SATURATION;
        Opacity::new((self.0 * self.0).min(ceiling) / ceiling)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::BASE
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// View opacity, guaranteed to be within 0.0 (hidden) to 1.0 (opaque).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const HIDDEN: Self = Self(0.0);
    /// Fully opaque.
    pub const VISIBLE: Self = Self(1.0);

    /// Creates a new opacity, clamping to the valid range. NaN maps to hidden.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::HIDDEN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw opacity value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns this opacity capped at `cap`.
    #[must_use]
    pub fn capped(self, cap: f32) -> Self {
        Self::new(self.0.min(cap))
    }

    /// Linear interpolation towards `to`; `t` is clamped to 0..=1.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(self.0 + (to.0 - self.0) * t)
    }

    /// Returns true if nothing would be drawn.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        self.0 <= 0.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // ZoomScale tests
    // -------------------------------------------------------------------------

    #[test]
    fn zoom_scale_rejects_shrink_and_non_finite() {
        assert!(ZoomScale::from_pinch(0.99).is_none());
        assert!(ZoomScale::from_pinch(f32::NAN).is_none());
        assert!(ZoomScale::from_pinch(f32::INFINITY).is_none());
        assert_eq!(ZoomScale::from_pinch(1.0), Some(ZoomScale::BASE));
    }

    #[test]
    fn zoom_scale_base_is_not_zoomed() {
        assert!(!ZoomScale::BASE.is_zoomed());
        assert!(ZoomScale::from_pinch(1.01).is_some_and(ZoomScale::is_zoomed));
    }

    #[test]
    fn backdrop_opacity_saturates_from_three() {
        for factor in [3.0_f32, 3.5, 10.0, 1000.0] {
            let scale = ZoomScale::from_pinch(factor).unwrap();
            assert!((scale.backdrop_opacity().value() - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn backdrop_opacity_follows_scale_bounds() {
        let base = scale_bounds::BASE / scale_bounds::SATURATION;
        assert!((ZoomScale::BASE.backdrop_opacity().value() - base * base).abs() < 1e-6);
        let saturated = ZoomScale::from_pinch(scale_bounds::SATURATION).unwrap();
        assert_eq!(saturated.backdrop_opacity(), Opacity::VISIBLE);
        assert_eq!(ZoomScale::BASE.value(), scale_bounds::BASE);
    }

    #[test]
    fn backdrop_opacity_is_quadratic_below_three() {
        for factor in [1.0_f32, 1.5, 2.0, 2.5, 2.99] {
            let scale = ZoomScale::from_pinch(factor).unwrap();
            let expected = factor * factor / 9.0;
            assert!((scale.backdrop_opacity().value() - expected).abs() < 1e-6);
        }
    }

    // -------------------------------------------------------------------------
    // Opacity tests
    // -------------------------------------------------------------------------

    #[test]
    fn opacity_clamps() {
        assert_eq!(Opacity::new(-0.5), Opacity::HIDDEN);
        assert_eq!(Opacity::new(1.5), Opacity::VISIBLE);
        assert_eq!(Opacity::new(f32::NAN), Opacity::HIDDEN);
    }

    #[test]
    fn opacity_cap_only_lowers() {
        assert_eq!(Opacity::new(0.8).capped(0.5), Opacity::new(0.5));
        assert_eq!(Opacity::new(0.2).capped(0.5), Opacity::new(0.2));
    }

    #[test]
    fn opacity_lerp_hits_endpoints() {
        let from = Opacity::new(0.5);
        assert_eq!(from.lerp(Opacity::HIDDEN, 0.0), from);
        assert_eq!(from.lerp(Opacity::HIDDEN, 1.0), Opacity::HIDDEN);
        assert!((from.lerp(Opacity::HIDDEN, 0.5).value() - 0.25).abs() < f32::EPSILON);
    }
}
