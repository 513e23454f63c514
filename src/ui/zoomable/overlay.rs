// SPDX-License-Identifier: MPL-2.0
//! Overlay lifecycle.
//!
//! The overlay image and its backdrop are created once, on the first
//! `enable_zoom`, and then only hidden between gestures. `reset` brings a
//! zoomed thumbnail back: some properties change immediately, the rest fade
//! through a [`Transition`].

use super::animation::{
    AnimatedProperty, PropertyValue, RunningTransition, Transition, TransitionStatus,
};
use super::host::TopLevelWindow;
use super::transform::Transform;
use super::ZoomableImage;
use crate::config::BACKDROP_RELEASE_CAP;
use crate::domain::ui::Opacity;
use crate::media::ImageData;
use iced::{ContentFit, Rectangle};
use std::time::Instant;

/// Full-window copy of the thumbnail shown while zoomed.
#[derive(Debug, Clone)]
pub struct OverlayImage {
    pub picture: Option<ImageData>,
    pub content_fit: ContentFit,
    /// Window-space frame, matching the thumbnail when the gesture began.
    pub frame: Rectangle,
    pub transform: Transform,
    pub opacity: Opacity,
}

/// Dimming layer behind the overlay image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub frame: Rectangle,
    pub opacity: Opacity,
}

/// The overlay pair owned by one thumbnail.
#[derive(Debug, Clone)]
pub struct OverlayLayer {
    pub image: OverlayImage,
    pub backdrop: Backdrop,
    /// False when no window existed at creation; nothing is ever drawn then.
    pub attached: bool,
}

impl OverlayLayer {
    pub(super) fn new(
        picture: Option<ImageData>,
        frame: Rectangle,
        window: Option<TopLevelWindow>,
    ) -> Self {
        Self {
            image: OverlayImage {
                picture,
                content_fit: ContentFit::Cover,
                frame,
                transform: Transform::IDENTITY,
                opacity: Opacity::HIDDEN,
            },
            backdrop: Backdrop {
                frame: window.map_or(Rectangle::default(), |w| w.bounds),
                opacity: Opacity::HIDDEN,
            },
            attached: window.is_some(),
        }
    }
}

/// Values to draw for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub thumbnail_opacity: Opacity,
    pub thumbnail_transform: Transform,
    /// `None` when the overlay was never created or is not attached.
    pub overlay: Option<OverlayPresentation>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPresentation {
    /// Untransformed overlay frame.
    pub frame: Rectangle,
    pub transform: Transform,
    pub opacity: Opacity,
    pub backdrop_frame: Rectangle,
    pub backdrop_opacity: Opacity,
}

impl OverlayPresentation {
    /// The overlay's on-screen rectangle after its transform.
    #[must_use]
    pub fn drawn_frame(&self) -> Rectangle {
        self.transform.apply_to(self.frame)
    }

    /// Whether either layer is visible at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.opacity.is_hidden() || !self.backdrop_opacity.is_hidden()
    }
}

impl ZoomableImage {
    /// Returns the thumbnail to its inline state.
    ///
    /// Immediately: scale 1.0, thumbnail opacity 1, backdrop capped at 0.5,
    /// container scrolling re-enabled. Then over 0.3 s: overlay and thumbnail
    /// transforms to identity, backdrop and overlay opacity to 0.
    pub fn reset(&mut self) {
        let current = self.presentation();

        self.interaction.reset();
        self.opacity = Opacity::VISIBLE;

        self.with_container(|container| {
            if container.is_scrollable_list() {
                container.set_scroll_enabled(true);
            }
        });

        let mut transition = Transition::release().animate(
            AnimatedProperty::ThumbnailTransform,
            PropertyValue::Transform(current.thumbnail_transform),
            PropertyValue::Transform(Transform::IDENTITY),
        );
        self.transform = Transform::IDENTITY;

        if let Some(layer) = self.overlay.as_mut() {
            let (overlay_transform, overlay_opacity, backdrop_opacity) = current
                .overlay
                .map_or(
                    (layer.image.transform, layer.image.opacity, layer.backdrop.opacity),
                    |o| (o.transform, o.opacity, o.backdrop_opacity),
                );
            let backdrop_opacity = backdrop_opacity.capped(BACKDROP_RELEASE_CAP);

            transition = transition
                .animate(
                    AnimatedProperty::OverlayTransform,
                    PropertyValue::Transform(overlay_transform),
                    PropertyValue::Transform(Transform::IDENTITY),
                )
                .animate(
                    AnimatedProperty::BackdropOpacity,
                    PropertyValue::Opacity(backdrop_opacity),
                    PropertyValue::Opacity(Opacity::HIDDEN),
                )
                .animate(
                    AnimatedProperty::OverlayOpacity,
                    PropertyValue::Opacity(overlay_opacity),
                    PropertyValue::Opacity(Opacity::HIDDEN),
                );

            layer.image.transform = Transform::IDENTITY;
            layer.image.opacity = Opacity::HIDDEN;
            layer.backdrop.opacity = Opacity::HIDDEN;
        }

        tracing::debug!(duration = ?transition.duration, "releasing zoom");
        self.transition = Some(RunningTransition::new(transition));
    }

    /// Advances the release animation. `Completed` is returned once, on the
    /// tick that reaches the targets.
    pub fn tick(&mut self, now: Instant) -> TransitionStatus {
        let Some(running) = self.transition.as_mut() else {
            return TransitionStatus::Idle;
        };

        let status = running.tick(now);
        if status == TransitionStatus::Completed {
            self.transition = None;
            tracing::trace!("release animation finished");
        }
        status
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The release animation in flight, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&RunningTransition> {
        self.transition.as_ref()
    }

    /// Values to draw now: model values, overridden by a running transition.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        let running = self.transition.as_ref();
        let transform_of = |property: AnimatedProperty, model: Transform| {
            match running.and_then(|r| r.value(property)) {
                Some(PropertyValue::Transform(value)) => value,
                _ => model,
            }
        };
        let opacity_of = |property: AnimatedProperty, model: Opacity| {
            match running.and_then(|r| r.value(property)) {
                Some(PropertyValue::Opacity(value)) => value,
                _ => model,
            }
        };

        let overlay = self
            .overlay
            .as_ref()
            .filter(|layer| layer.attached)
            .map(|layer| OverlayPresentation {
                frame: layer.image.frame,
                transform: transform_of(AnimatedProperty::OverlayTransform, layer.image.transform),
                opacity: opacity_of(AnimatedProperty::OverlayOpacity, layer.image.opacity),
                backdrop_frame: layer.backdrop.frame,
                backdrop_opacity: opacity_of(
                    AnimatedProperty::BackdropOpacity,
                    layer.backdrop.opacity,
                ),
            });

        Presentation {
            thumbnail_opacity: self.opacity,
            thumbnail_transform: transform_of(AnimatedProperty::ThumbnailTransform, self.transform),
            overlay,
        }
    }

    /// Re-anchors the overlay on the thumbnail's current window position and
    /// locks container scrolling. Leaves everything untouched when the
    /// thumbnail's bounds cannot be converted.
    pub(super) fn refresh_overlay_frame(&mut self) {
        let Some(frame) = self.window_frame() else {
            tracing::debug!("no container to convert thumbnail bounds; overlay frame unchanged");
            return;
        };

        let window = self.window;
        if let Some(layer) = self.overlay.as_mut() {
            layer.image.frame = frame;
            if let Some(window) = window {
                layer.backdrop.frame = window.bounds;
            }
        }

        self.with_container(|container| {
            if container.is_scrollable_list() {
                container.set_scroll_enabled(false);
            }
        });
    }
}
