// SPDX-License-Identifier: MPL-2.0
//! Inline picture of a zoomable thumbnail.
//!
//! Lays out like a fixed-height image but draws through the thumbnail's
//! presented transform and opacity, so the picture grows back into place
//! while a release animation runs.

use super::zoom_layer::fit_within;
use crate::media::ImageData;
use crate::ui::zoomable::{Transform, ZoomableImage};
use iced::advanced::image::{self as advanced_image, Renderer as ImageRenderer};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::widget::image;
use iced::{mouse, ContentFit, Element, Length, Rectangle, Size, Theme};

pub struct ThumbnailImage {
    handle: image::Handle,
    image_size: Size,
    content_fit: ContentFit,
    height: f32,
    opacity: f32,
    transform: Transform,
}

impl ThumbnailImage {
    /// Snapshots how `thumbnail` wants `picture` drawn right now.
    #[must_use]
    pub fn new(picture: &ImageData, thumbnail: &ZoomableImage, height: f32) -> Self {
        let presentation = thumbnail.presentation();
        Self {
            handle: picture.handle.clone(),
            image_size: picture.size(),
            content_fit: thumbnail.content_fit(),
            height,
            opacity: presentation.thumbnail_opacity.value(),
            transform: presentation.thumbnail_transform,
        }
    }

    /// Where the picture's frame lands for layout `bounds`.
    fn drawn_frame(&self, bounds: Rectangle) -> Rectangle {
        self.transform.apply_to(bounds)
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for ThumbnailImage {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fixed(self.height))
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.resolve(Length::Fill, Length::Fixed(self.height), Size::ZERO))
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if self.opacity <= 0.0 {
            return;
        }

        let frame = self.drawn_frame(layout.bounds());
        let image = advanced_image::Image {
            handle: self.handle.clone(),
            filter_method: advanced_image::FilterMethod::Linear,
            rotation: iced::Radians(0.0),
            opacity: self.opacity,
            snap: true,
            border_radius: iced::border::Radius::default(),
        };
        let image_bounds = fit_within(self.image_size, frame, self.content_fit);

        if self.transform.is_identity() {
            renderer.draw_image(image, image_bounds, frame);
        } else {
            // A scaled picture overlaps its neighbours; keep it above them.
            renderer.with_layer(*viewport, |renderer| {
                renderer.draw_image(image, image_bounds, frame);
            });
        }
    }
}

impl<'a, Message: 'a> From<ThumbnailImage> for Element<'a, Message, Theme, iced::Renderer> {
    fn from(picture: ThumbnailImage) -> Self {
        Self::new(picture)
    }
}
