// SPDX-License-Identifier: MPL-2.0
pub mod gesture_area;
pub mod scroll_lock;
pub mod thumbnail_image;
pub mod zoom_layer;

pub use gesture_area::{gesture_area, GestureArea};
pub use scroll_lock::{scroll_lock, ScrollLock};
pub use thumbnail_image::ThumbnailImage;
pub use zoom_layer::ZoomLayer;
