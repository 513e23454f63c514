// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Release animation**: Timing and opacity cap used when a gesture ends
//! - **Gestures**: Desktop mouse emulation of pinch
//! - **Gallery**: Thumbnail sizing of the demo application

// ==========================================================================
// Release Animation Defaults
// ==========================================================================

/// Duration of the animation back to the inline thumbnail (in milliseconds).
pub const RESET_ANIMATION_MS: u64 = 300;

/// Backdrop opacity is capped to this value before the release fade starts.
pub const BACKDROP_RELEASE_CAP: f32 = 0.5;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Vertical drag distance (in pixels) that adds 1.0 to the emulated pinch scale.
pub const MOUSE_PINCH_PIXELS_PER_UNIT: f32 = 200.0;

/// Minimum finger distance (in pixels) for a two-finger pinch to start.
pub const MIN_PINCH_SPAN: f32 = 1.0;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default thumbnail height in the gallery list.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 220.0;

/// Minimum thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 64.0;

/// Maximum thumbnail height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 1024.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(BACKDROP_RELEASE_CAP > 0.0);
    assert!(BACKDROP_RELEASE_CAP <= 1.0);
    assert!(RESET_ANIMATION_MS > 0);
    assert!(MOUSE_PINCH_PIXELS_PER_UNIT > 0.0);

    assert!(MIN_THUMBNAIL_HEIGHT > 0.0);
    assert!(MAX_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
};
