// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a left-button mouse drag. Desktop users have no touch screen, so a
//! plain drag stands in for a one-finger pan and Shift+drag for a pinch.

use iced::{Point, Vector};

/// What a mouse drag emulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Pan,
    /// Vertical travel drives the pinch scale.
    Pinch,
}

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    pub mode: DragMode,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, mode: DragMode) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.mode = mode;
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.mode = DragMode::default();
    }

    /// Cursor travel since the drag started.
    #[must_use]
    pub fn delta(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start = self.start_position?;
        Some(current_position - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert_eq!(state.mode, DragMode::Pan);
    }

    #[test]
    fn start_drag_sets_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), DragMode::Pinch);

        assert!(state.is_dragging);
        assert_eq!(state.start_position, Some(Point::new(100.0, 50.0)));
        assert_eq!(state.mode, DragMode::Pinch);
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), DragMode::Pinch);
        state.stop();

        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert_eq!(state.mode, DragMode::Pan);
    }

    #[test]
    fn delta_is_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.delta(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn delta_follows_the_cursor() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), DragMode::Pan);

        assert_eq!(
            state.delta(Point::new(180.0, 170.0)),
            Some(Vector::new(-20.0, 20.0))
        );
    }
}
