// SPDX-License-Identifier: MPL-2.0
//! Zoom interaction state
//!
//! Tracks the scale and pan offset of an in-progress pinch/pan sequence.
//! Every gesture sequence ends by returning to the idle state at scale 1.0.

use crate::domain::ui::ZoomScale;
use iced::Vector;

/// Lifecycle of a zoom interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    /// No gesture is driving the overlay.
    #[default]
    Idle,
    /// A pinch or pan is driving the overlay transform.
    Zooming,
}

/// Scale and translation of the current gesture sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Current zoom scale (never below 1.0).
    pub scale: ZoomScale,

    /// Pan offset in the overlay's own coordinate space.
    /// Only applied while `scale` is above 1.0.
    pub translation: Vector,

    pub phase: ZoomPhase,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            scale: ZoomScale::BASE,
            translation: Vector::ZERO,
            phase: ZoomPhase::Idle,
        }
    }
}

impl InteractionState {
    /// Records a new pinch scale. Pinching resets any pan offset.
    pub fn pinch_to(&mut self, scale: ZoomScale) {
        self.scale = scale;
        self.translation = Vector::ZERO;
        self.phase = ZoomPhase::Zooming;
    }

    /// Records a pan offset; ignored unless zoomed past 1.0.
    /// Returns whether the offset was accepted.
    pub fn pan_to(&mut self, translation: Vector) -> bool {
        if !self.scale.is_zoomed() {
            return false;
        }
        self.translation = translation;
        self.phase = ZoomPhase::Zooming;
        true
    }

    /// Returns to scale 1.0 with no offset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.phase == ZoomPhase::Zooming
    }
}
