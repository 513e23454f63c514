// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes keep every thumbnail's backdrop sized to the window.
//! Animation frames are only requested while a release animation runs.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window resizes. Touch and mouse input reaches the thumbnails
/// through their gesture areas, not through this subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Redraw ticks for the release animation.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
