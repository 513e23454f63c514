// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! # Zoom core
//!
//! - [`zoomable`] - Pinch-and-pan zoomable thumbnail with its overlay lifecycle
//! - [`gestures`] - Pinch and pan recognition from touch and mouse events
//! - [`state`] - Interaction, viewport and drag state
//!
//! # Host layer
//!
//! - [`widgets`] - Custom Iced widgets binding the core to input and rendering
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gestures;
pub mod state;
pub mod widgets;
pub mod zoomable;
