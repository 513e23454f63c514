// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Thumbnail};
use crate::config;
use crate::directory_scanner::ImageList;
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::zoomable::{container_ref, TopLevelWindow, ZoomableImage};
use iced::{ContentFit, Task};
use std::path::PathBuf;

/// Scans `directory` off the UI thread.
pub(super) fn scan(directory: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = ImageList::scan_directory(&directory);
            (directory, result)
        },
        |(directory, result)| Message::DirectoryScanned { directory, result },
    )
}

/// Decodes one picture on the blocking pool to keep the UI responsive.
fn load(index: usize, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_image(&path))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        move |result| Message::ImageLoaded { index, result },
    )
}

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::DirectoryScanned { directory, result } => {
            handle_directory_scanned(app, directory, result)
        }
        Message::ImageLoaded { index, result } => {
            handle_image_loaded(app, index, result);
            Task::none()
        }
        Message::Gesture {
            index,
            bounds,
            event,
        } => {
            if let Some(thumbnail) = app.thumbnails.get_mut(index) {
                thumbnail.image.set_bounds(bounds);
                thumbnail.image.handle_gesture(event);
            }
            Task::none()
        }
        Message::ViewportChanged { offset } => {
            app.viewport.borrow_mut().scroll_to(offset);
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window = TopLevelWindow::new(size);
            for thumbnail in &mut app.thumbnails {
                thumbnail.image.set_window(app.window);
            }
            Task::none()
        }
        Message::Frame(now) => {
            for thumbnail in &mut app.thumbnails {
                thumbnail.image.tick(now);
            }
            Task::none()
        }
    }
}

fn handle_directory_scanned(
    app: &mut App,
    directory: PathBuf,
    result: Result<ImageList, Error>,
) -> Task<Message> {
    let list = match result {
        Ok(list) => list,
        Err(err) => {
            tracing::error!(directory = %directory.display(), %err, "cannot open gallery");
            app.error = Some(err.to_string());
            return Task::none();
        }
    };

    if list.is_empty() {
        tracing::info!(directory = %directory.display(), "no images to show");
    }

    app.error = None;
    app.thumbnails = list
        .paths()
        .iter()
        .map(|path| {
            let mut image = ZoomableImage::new(None).with_content_fit(ContentFit::Cover);
            image.enable_zoom(Some(container_ref(&app.viewport)), Some(app.window));
            Thumbnail {
                path: path.clone(),
                image,
                failed: false,
            }
        })
        .collect();

    app.config.last_directory = Some(directory.clone());
    if let Some(path) = &app.config_path {
        if let Err(err) = config::save_to_path(&app.config, path) {
            tracing::warn!(%err, "could not persist last directory");
        }
    }
    app.directory = Some(directory);

    Task::batch(
        app.thumbnails
            .iter()
            .enumerate()
            .map(|(index, thumbnail)| load(index, thumbnail.path.clone())),
    )
}

fn handle_image_loaded(app: &mut App, index: usize, result: Result<ImageData, Error>) {
    let Some(thumbnail) = app.thumbnails.get_mut(index) else {
        return;
    };

    match result {
        Ok(data) => thumbnail.image.set_image(Some(data)),
        Err(err) => {
            tracing::warn!(path = %thumbnail.path.display(), %err, "skipping unreadable image");
            thumbnail.failed = true;
        }
    }
}
