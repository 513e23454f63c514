// SPDX-License-Identifier: MPL-2.0
//! Pinch-and-pan zoomable thumbnail.
//!
//! A [`ZoomableImage`] is an inline picture that, once [`enable_zoom`] has been
//! called, reacts to pinch and pan gestures by showing an enlarged copy of
//! itself above the whole window with a dimming backdrop. When the gesture
//! ends the copy animates back onto the thumbnail.
//!
//! The type is toolkit-agnostic apart from iced's geometry types: the host
//! feeds it [`GestureEvent`]s, calls [`tick`] on animation frames, and draws
//! whatever [`presentation`] returns.
//!
//! ```
//! use pinch_lens::ui::zoomable::{
//!     GesturePhase, PinchEvent, StaticContainer, TopLevelWindow, ZoomableImage, container_ref,
//! };
//! use iced::{Point, Rectangle, Size};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let container = Rc::new(RefCell::new(StaticContainer));
//! let mut thumbnail = ZoomableImage::new(None);
//! thumbnail.set_bounds(Rectangle::new(Point::new(10.0, 10.0), Size::new(100.0, 100.0)));
//! thumbnail.enable_zoom(
//!     Some(container_ref(&container)),
//!     Some(TopLevelWindow::new(Size::new(800.0, 600.0))),
//! );
//!
//! thumbnail.on_pinch(PinchEvent { phase: GesturePhase::Began, scale: 1.0 });
//! thumbnail.on_pinch(PinchEvent { phase: GesturePhase::Changed, scale: 2.0 });
//! assert!(thumbnail.interaction().is_zooming());
//!
//! thumbnail.on_pinch(PinchEvent { phase: GesturePhase::Ended, scale: 2.0 });
//! assert!(!thumbnail.interaction().is_zooming());
//! assert!(thumbnail.is_animating());
//! ```
//!
//! [`enable_zoom`]: ZoomableImage::enable_zoom
//! [`tick`]: ZoomableImage::tick
//! [`presentation`]: ZoomableImage::presentation

pub mod animation;
pub mod gesture;
pub mod host;
pub mod overlay;
pub mod transform;


pub use animation::{
    AnimatedProperty, Curve, PropertyValue, RunningTransition, Transition, TransitionStatus,
};
pub use gesture::{
    GestureEvent, GestureKind, GesturePhase, PanEvent, PinchEvent, Recognizer,
    SimultaneousRecognition,
};
pub use host::{container_ref, Container, ContainerRef, StaticContainer, TopLevelWindow};
pub use overlay::{Backdrop, OverlayImage, OverlayLayer, OverlayPresentation, Presentation};
pub use transform::{Transform, TransformOutput};

use crate::domain::ui::Opacity;
use crate::media::ImageData;
use crate::ui::state::InteractionState;
use iced::{ContentFit, Rectangle};
use std::rc::Weak;

/// An inline picture that can be pinched into a full-window overlay.
#[derive(Debug)]
pub struct ZoomableImage {
    picture: Option<ImageData>,
    content_fit: ContentFit,
    /// Bounds in the container's coordinate space.
    bounds: Rectangle,
    zoom_enabled: bool,

    opacity: Opacity,
    transform: Transform,
    interaction: InteractionState,

    /// Created on the first `enable_zoom` and kept for the widget's lifetime.
    overlay: Option<OverlayLayer>,
    container: Option<ContainerRef>,
    window: Option<TopLevelWindow>,
    recognizers: Vec<Recognizer>,
    transition: Option<RunningTransition>,
}

impl ZoomableImage {
    #[must_use]
    pub fn new(picture: Option<ImageData>) -> Self {
        Self {
            picture,
            content_fit: ContentFit::Cover,
            bounds: Rectangle::default(),
            zoom_enabled: false,
            opacity: Opacity::VISIBLE,
            transform: Transform::IDENTITY,
            interaction: InteractionState::default(),
            overlay: None,
            container: None,
            window: None,
            recognizers: Vec::new(),
            transition: None,
        }
    }

    #[must_use]
    pub fn with_content_fit(mut self, content_fit: ContentFit) -> Self {
        self.content_fit = content_fit;
        self
    }

    /// Makes the thumbnail zoomable.
    ///
    /// Records `container` as the coordinate space of [`bounds`](Self::bounds)
    /// and, the first time, builds the overlay pair on `window`. Without a
    /// window the overlay is never attached: gestures still update state but
    /// nothing is drawn. Each call copies the thumbnail's content fit to the
    /// overlay.
    pub fn enable_zoom(&mut self, container: Option<ContainerRef>, window: Option<TopLevelWindow>) {
        self.container = container;
        if window.is_some() {
            self.window = window;
        }

        if self.overlay.is_none() {
            let frame = self.window_frame().unwrap_or_else(|| {
                tracing::debug!("thumbnail bounds not convertible; overlay starts at the origin");
                Rectangle::default()
            });
            if window.is_none() {
                tracing::warn!("no top-level window; zoom overlay will not be attached");
            }
            self.overlay = Some(OverlayLayer::new(self.picture.clone(), frame, window));
        }

        if self.recognizers.is_empty() {
            self.recognizers = vec![Recognizer::pinch(), Recognizer::pan()];
        }
        self.zoom_enabled = true;

        if let Some(layer) = self.overlay.as_mut() {
            layer.image.content_fit = self.content_fit;
        }
    }

    /// Unregisters the gesture recognizers. The overlay pair is kept.
    pub fn disable_zoom(&mut self) {
        if self.interaction.is_zooming() {
            self.reset();
        }
        self.recognizers.clear();
        self.zoom_enabled = false;
    }

    /// Replaces the picture; the overlay always shows the same picture.
    pub fn set_image(&mut self, picture: Option<ImageData>) {
        if let Some(layer) = self.overlay.as_mut() {
            layer.image.picture.clone_from(&picture);
        }
        self.picture = picture;
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.picture.as_ref()
    }

    #[must_use]
    pub fn content_fit(&self) -> ContentFit {
        self.content_fit
    }

    pub fn set_content_fit(&mut self, content_fit: ContentFit) {
        self.content_fit = content_fit;
    }

    /// Updates the thumbnail's bounds in its container's coordinate space.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Tracks window resizes; the backdrop picks them up on the next pinch.
    pub fn set_window(&mut self, window: TopLevelWindow) {
        self.window = Some(window);
    }

    #[must_use]
    pub fn is_zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    #[must_use]
    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Thumbnail opacity (model value).
    #[must_use]
    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    /// Thumbnail transform (model value).
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayLayer> {
        self.overlay.as_ref()
    }

    /// The thumbnail's bounds in window coordinates, if the container is
    /// still alive and can convert them.
    fn window_frame(&self) -> Option<Rectangle> {
        let container = self.container.as_ref().and_then(Weak::upgrade)?;
        let container = container.try_borrow().ok()?;
        container.convert_to_window(self.bounds)
    }

    fn with_container(&self, f: impl FnOnce(&mut dyn Container)) {
        let Some(container) = self.container.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        match container.try_borrow_mut() {
            Ok(mut container) => f(&mut *container),
            Err(_) => tracing::warn!("container busy; scroll state unchanged"),
        };
    }
}
