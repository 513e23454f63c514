// SPDX-License-Identifier: MPL-2.0
//! Full-window layer that draws a zoomed thumbnail's overlay.
//!
//! The layer is meant for the top of a `stack!` covering the whole window.
//! It draws the dimming backdrop and the enlarged picture from the
//! thumbnail's current [`OverlayPresentation`] and never reacts to input, so
//! events fall through to the gallery below.

use crate::media::ImageData;
use crate::ui::design_tokens::palette;
use crate::ui::zoomable::{OverlayPresentation, ZoomableImage};
use iced::advanced::image::{self as advanced_image, Renderer as ImageRenderer};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::widget::image;
use iced::{mouse, Border, Color, ContentFit, Element, Length, Rectangle, Shadow, Size, Theme};

pub struct ZoomLayer {
    picture: Option<(image::Handle, Size)>,
    content_fit: ContentFit,
    presentation: Option<OverlayPresentation>,
}

impl ZoomLayer {
    /// Snapshots what `thumbnail` wants drawn right now.
    #[must_use]
    pub fn new(thumbnail: &ZoomableImage) -> Self {
        let layer = thumbnail.overlay();
        Self {
            picture: layer
                .and_then(|l| l.image.picture.as_ref())
                .map(|data: &ImageData| (data.handle.clone(), data.size())),
            content_fit: layer.map_or(ContentFit::Cover, |l| l.image.content_fit),
            presentation: thumbnail.presentation().overlay,
        }
    }

    /// A layer that draws nothing. Keeps the widget tree stable while no
    /// thumbnail is zoomed.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            picture: None,
            content_fit: ContentFit::Cover,
            presentation: None,
        }
    }

    /// Whether anything would be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.presentation.is_some_and(|p| p.is_visible())
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for ZoomLayer {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let Some(presentation) = self.presentation.filter(OverlayPresentation::is_visible) else {
            return;
        };
        let bounds = layout.bounds();

        renderer.with_layer(bounds, |renderer| {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: presentation.backdrop_frame,
                    border: Border::default(),
                    shadow: Shadow::default(),
                    snap: true,
                },
                Color {
                    a: presentation.backdrop_opacity.value(),
                    ..palette::BACKDROP
                },
            );

            let Some((handle, image_size)) = &self.picture else {
                return;
            };

            let frame = presentation.drawn_frame();
            let image_bounds = fit_within(*image_size, frame, self.content_fit);
            let image = advanced_image::Image {
                handle: handle.clone(),
                filter_method: advanced_image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: presentation.opacity.value(),
                snap: true,
                border_radius: iced::border::Radius::default(),
            };

            renderer.draw_image(image, image_bounds, frame);
        });
    }
}

impl<'a, Message: 'a> From<ZoomLayer> for Element<'a, Message, Theme, iced::Renderer> {
    fn from(layer: ZoomLayer) -> Self {
        Self::new(layer)
    }
}

/// Picture rectangle inside `frame`, centered, sized by `content_fit`.
/// With `Cover` the result overflows `frame` and must be clipped to it.
pub(super) fn fit_within(image_size: Size, frame: Rectangle, content_fit: ContentFit) -> Rectangle {
    let fitted = content_fit.fit(image_size, frame.size());
    let center = frame.center();
    Rectangle {
        x: center.x - fitted.width / 2.0,
        y: center.y - fitted.height / 2.0,
        width: fitted.width,
        height: fitted.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::zoomable::{container_ref, GesturePhase, PinchEvent, StaticContainer, TopLevelWindow};
    use iced::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn contain_letterboxes_wide_picture() {
        let frame = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));
        let fitted = fit_within(Size::new(200.0, 100.0), frame, ContentFit::Contain);

        assert_abs_diff_eq!(fitted.width, 100.0);
        assert_abs_diff_eq!(fitted.height, 50.0);
        assert_abs_diff_eq!(fitted.y, 25.0);
    }

    #[test]
    fn cover_overflows_frame() {
        let frame = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));
        let fitted = fit_within(Size::new(200.0, 100.0), frame, ContentFit::Cover);

        assert_abs_diff_eq!(fitted.width, 200.0);
        assert_abs_diff_eq!(fitted.height, 100.0);
        assert_abs_diff_eq!(fitted.x, -50.0);
    }

    #[test]
    fn layer_is_visible_only_while_zoomed() {
        let container = Rc::new(RefCell::new(StaticContainer));
        let mut thumbnail = ZoomableImage::new(Some(ImageData::from_rgba(1, 1, vec![0; 4])));
        thumbnail.set_bounds(Rectangle::new(Point::ORIGIN, Size::new(50.0, 50.0)));
        thumbnail.enable_zoom(
            Some(container_ref(&container)),
            Some(TopLevelWindow::new(Size::new(400.0, 400.0))),
        );
        assert!(!ZoomLayer::new(&thumbnail).is_visible());
        assert!(!ZoomLayer::hidden().is_visible());

        thumbnail.on_pinch(PinchEvent {
            phase: GesturePhase::Began,
            scale: 1.5,
        });
        let layer = ZoomLayer::new(&thumbnail);
        assert!(layer.is_visible());
        assert!(layer.picture.is_some());
    }
}
