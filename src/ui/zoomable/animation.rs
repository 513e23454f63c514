// SPDX-License-Identifier: MPL-2.0
//! Declarative property transitions.
//!
//! A [`Transition`] lists which properties move from which value to which
//! target over a duration. The host drives it with [`RunningTransition::tick`]
//! on every frame; [`TransitionStatus::Completed`] is reported exactly once.

use super::transform::Transform;
use crate::config::RESET_ANIMATION_MS;
use crate::domain::ui::Opacity;
use std::time::{Duration, Instant};

/// Timing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    Linear,
    /// Smoothstep easing; the toolkit default for implicit animations.
    #[default]
    EaseInOut,
}

impl Curve {
    /// Maps linear progress (0..=1) to eased progress (0..=1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    OverlayTransform,
    ThumbnailTransform,
    BackdropOpacity,
    OverlayOpacity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Transform(Transform),
    Opacity(Opacity),
}

impl PropertyValue {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        match (self, to) {
            (Self::Transform(from), Self::Transform(to)) => {
                Self::Transform(from.interpolate(to, t))
            }
            (Self::Opacity(from), Self::Opacity(to)) => Self::Opacity(from.lerp(*to, t)),
            // Mismatched kinds cannot be blended; jump at the end.
            (from, to) => {
                if t >= 1.0 {
                    *to
                } else {
                    *from
                }
            }
        }
    }
}

/// One property moving between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAnimation {
    pub property: AnimatedProperty,
    pub from: PropertyValue,
    pub to: PropertyValue,
}

/// Properties animated together over a shared duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub curve: Curve,
    pub animations: Vec<PropertyAnimation>,
}

impl Transition {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            curve: Curve::default(),
            animations: Vec::new(),
        }
    }

    /// The release animation used when a gesture ends.
    #[must_use]
    pub fn release() -> Self {
        Self::new(Duration::from_millis(RESET_ANIMATION_MS))
    }

    #[must_use]
    pub fn animate(mut self, property: AnimatedProperty, from: PropertyValue, to: PropertyValue) -> Self {
        self.animations.retain(|a| a.property != property);
        self.animations.push(PropertyAnimation { property, from, to });
        self
    }

    /// Value of `property` at linear `progress`, if this transition animates it.
    #[must_use]
    pub fn value_at(&self, property: AnimatedProperty, progress: f32) -> Option<PropertyValue> {
        let eased = self.curve.apply(progress);
        self.animations
            .iter()
            .find(|a| a.property == property)
            .map(|a| a.from.interpolate(&a.to, eased))
    }

    /// Starting value of `property`, if animated.
    #[must_use]
    pub fn start_value(&self, property: AnimatedProperty) -> Option<PropertyValue> {
        self.value_at(property, 0.0)
    }

    /// Target value of `property`, if animated.
    #[must_use]
    pub fn target(&self, property: AnimatedProperty) -> Option<PropertyValue> {
        self.value_at(property, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    /// Nothing is animating.
    Idle,
    Running,
    /// The transition reached its targets on this tick.
    Completed,
}

/// A transition in flight. The first tick anchors its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningTransition {
    transition: Transition,
    started_at: Option<Instant>,
    progress: f32,
}

impl RunningTransition {
    #[must_use]
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            started_at: None,
            progress: 0.0,
        }
    }

    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Linear progress in 0..=1.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advances to `now` and reports whether the transition just finished.
    pub fn tick(&mut self, now: Instant) -> TransitionStatus {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        self.progress = if self.transition.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.transition.duration.as_secs_f32()).min(1.0)
        };

        if self.progress >= 1.0 {
            TransitionStatus::Completed
        } else {
            TransitionStatus::Running
        }
    }

    /// Current value of `property`, if animated.
    #[must_use]
    pub fn value(&self, property: AnimatedProperty) -> Option<PropertyValue> {
        self.transition.value_at(property, self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn fade() -> Transition {
        Transition::new(Duration::from_millis(300)).animate(
            AnimatedProperty::BackdropOpacity,
            PropertyValue::Opacity(Opacity::new(0.5)),
            PropertyValue::Opacity(Opacity::HIDDEN),
        )
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let curve = Curve::EaseInOut;
        assert_abs_diff_eq!(curve.apply(0.0), 0.0);
        assert_abs_diff_eq!(curve.apply(0.5), 0.5);
        assert_abs_diff_eq!(curve.apply(1.0), 1.0);
        assert!(curve.apply(0.25) < 0.25);
    }

    #[test]
    fn release_lasts_three_tenths_of_a_second() {
        assert_eq!(Transition::release().duration, Duration::from_millis(300));
    }

    #[test]
    fn animate_replaces_same_property() {
        let transition = fade().animate(
            AnimatedProperty::BackdropOpacity,
            PropertyValue::Opacity(Opacity::VISIBLE),
            PropertyValue::Opacity(Opacity::HIDDEN),
        );
        assert_eq!(transition.animations.len(), 1);
        assert_eq!(
            transition.start_value(AnimatedProperty::BackdropOpacity),
            Some(PropertyValue::Opacity(Opacity::VISIBLE))
        );
    }

    #[test]
    fn unanimated_property_has_no_value() {
        assert!(fade().value_at(AnimatedProperty::OverlayOpacity, 0.5).is_none());
    }

    #[test]
    fn first_tick_anchors_start() {
        let start = Instant::now();
        let mut running = RunningTransition::new(fade());

        assert_eq!(running.tick(start), TransitionStatus::Running);
        assert_abs_diff_eq!(running.progress(), 0.0);

        assert_eq!(
            running.tick(start + Duration::from_millis(150)),
            TransitionStatus::Running
        );
        assert_abs_diff_eq!(running.progress(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn completes_after_duration() {
        let start = Instant::now();
        let mut running = RunningTransition::new(fade());
        running.tick(start);

        assert_eq!(
            running.tick(start + Duration::from_millis(400)),
            TransitionStatus::Completed
        );
        assert_eq!(
            running.value(AnimatedProperty::BackdropOpacity),
            Some(PropertyValue::Opacity(Opacity::HIDDEN))
        );
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut running = RunningTransition::new(Transition::new(Duration::ZERO));
        assert_eq!(running.tick(Instant::now()), TransitionStatus::Completed);
    }
}
