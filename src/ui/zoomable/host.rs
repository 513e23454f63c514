// SPDX-License-Identifier: MPL-2.0
//! Host collaborators: the parent container and the top-level window.

use iced::{Point, Rectangle, Size};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The view a zoomable thumbnail lives in.
pub trait Container {
    /// Converts `bounds`, expressed in this container's coordinate space,
    /// into window coordinates. `None` when the container cannot tell.
    fn convert_to_window(&self, bounds: Rectangle) -> Option<Rectangle>;

    /// Whether this container is a scrollable list whose scrolling must be
    /// suspended while one of its thumbnails is zoomed.
    fn is_scrollable_list(&self) -> bool {
        false
    }

    fn set_scroll_enabled(&mut self, _enabled: bool) {}
}

/// Non-owning back-reference to a container.
pub type ContainerRef = Weak<RefCell<dyn Container>>;

/// Downgrades a shared container into the back-reference a thumbnail keeps.
#[must_use]
pub fn container_ref<C: Container + 'static>(container: &Rc<RefCell<C>>) -> ContainerRef {
    let shared: Rc<RefCell<dyn Container>> = container.clone();
    Rc::downgrade(&shared)
}

/// The application window the overlay layer is attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopLevelWindow {
    pub bounds: Rectangle,
}

impl TopLevelWindow {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Rectangle::new(Point::ORIGIN, size),
        }
    }
}

/// A container that sits at the window origin and never scrolls.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContainer;

impl Container for StaticContainer {
    fn convert_to_window(&self, bounds: Rectangle) -> Option<Rectangle> {
        Some(bounds)
    }
}
