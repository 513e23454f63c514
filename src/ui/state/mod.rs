// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state structs kept apart from the widgets that drive them.

pub mod drag;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::{DragMode, DragState};
pub use viewport::ViewportState;
pub use zoom::{InteractionState, ZoomPhase};
