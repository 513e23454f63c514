// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the gallery's scrollable viewport: the scroll offset and the
//! scroll lock engaged while a thumbnail is zoomed. It is the container the
//! zoomable thumbnails convert their bounds through.

use crate::ui::zoomable::Container;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Whether the user may scroll the list
    pub scroll_enabled: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            scroll_enabled: true,
        }
    }
}

impl ViewportState {
    /// Records the scroll offset reported by the gallery.
    pub fn scroll_to(&mut self, offset: AbsoluteOffset) {
        self.offset = offset;
    }
}

impl Container for ViewportState {
    /// Content-space bounds minus the scroll offset give window coordinates.
    fn convert_to_window(&self, bounds: Rectangle) -> Option<Rectangle> {
        Some(Rectangle {
            x: bounds.x - self.offset.x,
            y: bounds.y - self.offset.y,
            ..bounds
        })
    }

    fn is_scrollable_list(&self) -> bool {
        true
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    #[test]
    fn default_viewport_has_zero_offset_and_scrolls() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.offset.x, 0.0);
        assert_abs_diff_eq!(state.offset.y, 0.0);
        assert!(state.scroll_enabled);
    }

    #[test]
    fn conversion_subtracts_scroll_offset() {
        let mut state = ViewportState::default();
        state.scroll_to(AbsoluteOffset { x: 0.0, y: 120.0 });

        let thumbnail = Rectangle::new(Point::new(16.0, 300.0), Size::new(200.0, 100.0));
        let converted = state.convert_to_window(thumbnail).unwrap();

        assert_abs_diff_eq!(converted.x, 16.0);
        assert_abs_diff_eq!(converted.y, 180.0);
        assert_abs_diff_eq!(converted.width, 200.0);
        assert_abs_diff_eq!(converted.height, 100.0);
    }

    #[test]
    fn scroll_flag_toggles() {
        let mut state = ViewportState::default();
        assert!(state.is_scrollable_list());

        state.set_scroll_enabled(false);
        assert!(!state.scroll_enabled);

        state.set_scroll_enabled(true);
        assert!(state.scroll_enabled);
    }
}
