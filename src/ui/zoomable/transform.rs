// SPDX-License-Identifier: MPL-2.0
//! Transform engine.
//!
//! Maps an interaction scale and pan offset to the overlay transform and the
//! opacities of the overlay, backdrop and thumbnail.

use super::ZoomableImage;
use crate::domain::ui::{Opacity, ZoomScale};
use iced::{Rectangle, Vector};

/// Uniform scale about a view's center followed by a translation in the
/// scaled space. The on-screen offset is therefore `scale * translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub translation: Vector,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vector::ZERO,
    };

    #[must_use]
    pub fn new(scale: f32, translation: Vector) -> Self {
        Self { scale, translation }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Where a view with this transform and the given frame is drawn.
    #[must_use]
    pub fn apply_to(&self, frame: Rectangle) -> Rectangle {
        let center = frame.center();
        let width = frame.width * self.scale;
        let height = frame.height * self.scale;
        let center_x = center.x + self.translation.x * self.scale;
        let center_y = center.y + self.translation.y * self.scale;

        Rectangle {
            x: center_x - width / 2.0,
            y: center_y - height / 2.0,
            width,
            height,
        }
    }

    /// Component-wise interpolation towards `to`; `t` is clamped to 0..=1.
    #[must_use]
    pub fn interpolate(&self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            scale: self.scale + (to.scale - self.scale) * t,
            translation: Vector::new(
                self.translation.x + (to.translation.x - self.translation.x) * t,
                self.translation.y + (to.translation.y - self.translation.y) * t,
            ),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Property values produced for one (scale, translation) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOutput {
    /// Applied to both the overlay and the (hidden) thumbnail.
    pub transform: Transform,
    pub backdrop_opacity: Opacity,
    pub overlay_opacity: Opacity,
    pub thumbnail_opacity: Opacity,
}

/// Computes the zoomed presentation for `scale` and `translation`.
#[must_use]
pub fn apply(scale: ZoomScale, translation: Vector) -> TransformOutput {
    TransformOutput {
        transform: Transform::new(scale.value(), translation),
        backdrop_opacity: scale.backdrop_opacity(),
        overlay_opacity: Opacity::VISIBLE,
        thumbnail_opacity: Opacity::HIDDEN,
    }
}

impl ZoomableImage {
    /// Applies the current scale with `translation` to the thumbnail and its
    /// overlay. Cancels a running release animation.
    pub(super) fn apply_transform(&mut self, translation: Vector) {
        let output = apply(self.interaction.scale, translation);

        if self.transition.take().is_some() {
            tracing::trace!("release animation interrupted by a new gesture");
        }

        self.transform = output.transform;
        self.opacity = output.thumbnail_opacity;

        if let Some(layer) = self.overlay.as_mut() {
            layer.image.transform = output.transform;
            layer.image.opacity = output.overlay_opacity;
            layer.backdrop.opacity = output.backdrop_opacity;
        }
    }
}
