// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::directory_scanner::ImageList;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::zoomable::GestureEvent;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result from async directory scanning.
    DirectoryScanned {
        directory: PathBuf,
        result: Result<ImageList, Error>,
    },
    /// Result from decoding one gallery picture.
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// A pinch or pan report from thumbnail `index`, with its bounds in the
    /// gallery's content coordinates.
    Gesture {
        index: usize,
        bounds: Rectangle,
        event: GestureEvent,
    },
    /// The gallery scrolled to `offset`.
    ViewportChanged { offset: AbsoluteOffset },
    WindowResized(Size),
    /// Animation frame while a release animation runs.
    Frame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory to show; falls back to the last opened one.
    pub directory: Option<PathBuf>,
    /// Settings file override; defaults to the platform config dir.
    pub config_path: Option<PathBuf>,
}
