// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery scrollable sits under a full-window [`ZoomLayer`]. The layer
//! is always present so the scrollable keeps its state when a zoom starts.

use super::{App, Message, Thumbnail};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::{gesture_area, scroll_lock, ThumbnailImage, ZoomLayer};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{column, container, text, Column, Container, Scrollable, Stack};
use iced::{Background, Element, Length, Theme, Vector};

/// Renders the gallery, or an explanation when there is nothing to show.
pub fn view(app: &App) -> Element<'_, Message> {
    if let Some(error) = &app.error {
        return empty_state(format!("Cannot open gallery: {error}"));
    }
    if app.thumbnails.is_empty() {
        return empty_state("No images in this folder".to_string());
    }

    let (offset, locked) = {
        let viewport = app.viewport.borrow();
        (
            Vector::new(viewport.offset.x, viewport.offset.y),
            !viewport.scroll_enabled,
        )
    };
    let height = app.config.thumbnail_height();

    let gallery = Column::with_children(
        app.thumbnails
            .iter()
            .enumerate()
            .map(|(index, thumbnail)| view_thumbnail(index, thumbnail, height, offset, locked)),
    )
    .spacing(spacing::MD)
    .padding(spacing::MD)
    .width(Length::Fill);

    let list = Scrollable::new(gallery)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            offset: viewport.absolute_offset(),
        });

    let layer = app
        .zoomed()
        .map_or_else(ZoomLayer::hidden, |thumbnail| ZoomLayer::new(&thumbnail.image));

    Stack::new()
        .push(scroll_lock(list).locked(locked))
        .push(layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_thumbnail(
    index: usize,
    thumbnail: &Thumbnail,
    height: f32,
    scroll_offset: Vector,
    locked: bool,
) -> Element<'_, Message> {
    let name = thumbnail
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let caption = text(name)
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    let picture: Element<'_, Message> = match thumbnail.image.image() {
        Some(data) => {
            let picture = ThumbnailImage::new(data, &thumbnail.image, height);

            gesture_area(picture, move |bounds, event| Message::Gesture {
                index,
                bounds,
                event,
            })
            .scroll_offset(scroll_offset)
            .capture(locked)
            .into()
        }
        None => {
            let label = if thumbnail.failed {
                "Unreadable image"
            } else {
                "Loading…"
            };
            Container::new(text(label).color(palette::GRAY_400))
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(palette::GRAY_900)),
                    ..Default::default()
                })
                .into()
        }
    };

    column![picture, caption].spacing(spacing::XS).into()
}

fn empty_state<'a>(message: String) -> Element<'a, Message> {
    Container::new(
        text(message)
            .size(typography::TITLE_SM)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}
