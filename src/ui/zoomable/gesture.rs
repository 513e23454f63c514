// SPDX-License-Identifier: MPL-2.0
//! Gesture interpretation.
//!
//! Pinch and pan events drive the interaction state and the overlay transform.
//! Any finished phase (ended or cancelled) returns the widget to idle.

use super::ZoomableImage;
use crate::domain::ui::ZoomScale;
use iced::Vector;

/// Lifecycle stage of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// Returns true once the gesture is no longer active.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// Two-finger scale report. `scale` is relative to the finger span at `Began`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchEvent {
    pub phase: GesturePhase,
    pub scale: f32,
}

/// Pan report. `translation` is cumulative since the pan began, in window
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: GesturePhase,
    pub translation: Vector,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Pinch(PinchEvent),
    Pan(PanEvent),
}

impl GestureEvent {
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Pinch(_) => GestureKind::Pinch,
            Self::Pan(_) => GestureKind::Pan,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::Pinch(pinch) => pinch.phase,
            Self::Pan(pan) => pan.phase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Pinch,
    Pan,
}

/// Whether a recognizer may run while other recognizers are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimultaneousRecognition {
    /// Recognize alongside every other recognizer in the hierarchy.
    #[default]
    Always,
    /// Yield to whichever recognizer started first.
    Never,
}

/// A gesture recognizer registered on a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognizer {
    pub kind: GestureKind,
    pub simultaneous: SimultaneousRecognition,
}

impl Recognizer {
    #[must_use]
    pub fn pinch() -> Self {
        Self {
            kind: GestureKind::Pinch,
            simultaneous: SimultaneousRecognition::Always,
        }
    }

    #[must_use]
    pub fn pan() -> Self {
        Self {
            kind: GestureKind::Pan,
            simultaneous: SimultaneousRecognition::Always,
        }
    }

    /// Whether this recognizer may fire while `other` is already active.
    #[must_use]
    pub fn recognizes_with(&self, other: GestureKind) -> bool {
        other == self.kind || self.simultaneous == SimultaneousRecognition::Always
    }
}

impl ZoomableImage {
    /// Dispatches a recognized gesture to the matching handler.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Pinch(pinch) => self.on_pinch(pinch),
            GestureEvent::Pan(pan) => self.on_pan(pan),
        }
    }

    /// Handles a pinch report.
    ///
    /// Scales below 1.0 leave the state untouched but keep the gesture alive.
    pub fn on_pinch(&mut self, event: PinchEvent) {
        if !self.accepts(GestureKind::Pinch) {
            return;
        }

        if event.phase == GesturePhase::Began {
            self.refresh_overlay_frame();
        }

        if let Some(scale) = ZoomScale::from_pinch(event.scale) {
            self.interaction.pinch_to(scale);
            self.apply_transform(Vector::ZERO);
        }

        if event.phase.is_finished() {
            self.reset();
        }
    }

    /// Handles a pan report. Panning only moves the overlay while zoomed in.
    pub fn on_pan(&mut self, event: PanEvent) {
        if !self.accepts(GestureKind::Pan) {
            return;
        }

        let scale = self.interaction.scale.value();
        let translation = Vector::new(event.translation.x / scale, event.translation.y / scale);
        if self.interaction.pan_to(translation) {
            self.apply_transform(translation);
        }

        if event.phase.is_finished() {
            self.reset();
        }
    }

    fn accepts(&self, kind: GestureKind) -> bool {
        self.is_zoom_enabled() && self.recognizers.iter().any(|r| r.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_phases() {
        assert!(!GesturePhase::Began.is_finished());
        assert!(!GesturePhase::Changed.is_finished());
        assert!(GesturePhase::Ended.is_finished());
        assert!(GesturePhase::Cancelled.is_finished());
    }

    #[test]
    fn default_recognizers_are_permissive() {
        assert!(Recognizer::pinch().recognizes_with(GestureKind::Pan));
        assert!(Recognizer::pan().recognizes_with(GestureKind::Pinch));
    }

    #[test]
    fn exclusive_recognizer_yields_to_others() {
        let pan = Recognizer {
            simultaneous: SimultaneousRecognition::Never,
            ..Recognizer::pan()
        };
        assert!(!pan.recognizes_with(GestureKind::Pinch));
        assert!(pan.recognizes_with(GestureKind::Pan));
    }

    #[test]
    fn event_accessors() {
        let event = GestureEvent::Pan(PanEvent {
            phase: GesturePhase::Changed,
            translation: Vector::new(1.0, 2.0),
        });
        assert_eq!(event.kind(), GestureKind::Pan);
        assert_eq!(event.phase(), GesturePhase::Changed);
    }
}
