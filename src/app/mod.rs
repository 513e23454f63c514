// SPDX-License-Identifier: MPL-2.0
//! Demo gallery: a scrollable column of zoomable thumbnails.
//!
//! The `App` struct owns the thumbnails and the shared viewport state they
//! convert their bounds through, and translates messages into side effects
//! like directory scanning, image decoding and config persistence.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::state::ViewportState;
use crate::ui::zoomable::{TopLevelWindow, ZoomableImage};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

/// One gallery entry.
#[derive(Debug)]
pub struct Thumbnail {
    pub path: PathBuf,
    pub image: ZoomableImage,
    /// Decoding failed; the entry shows a placeholder.
    pub failed: bool,
}

/// Root Iced application state.
pub struct App {
    config: Config,
    config_path: Option<PathBuf>,
    directory: Option<PathBuf>,
    thumbnails: Vec<Thumbnail>,
    /// Shared with every thumbnail as its container.
    viewport: Rc<RefCell<ViewportState>>,
    window: TopLevelWindow,
    /// Last scan error, shown instead of the gallery.
    error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.directory)
            .field("thumbnails", &self.thumbnails.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 240;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires the boot function to be `Fn`; flags are consumed
    // on the single call it receives.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            config_path: None,
            directory: None,
            thumbnails: Vec::new(),
            viewport: Rc::new(RefCell::new(ViewportState::default())),
            window: TopLevelWindow::new(default_window_size()),
            error: None,
        }
    }
}

impl App {
    /// Loads the config and kicks off scanning of the gallery directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_path = flags.config_path.or_else(config::default_path);
        let config = match config_path.as_deref().filter(|path| path.exists()) {
            Some(path) => config::load_from_path(path).unwrap_or_else(|err| {
                tracing::warn!(%err, "could not read settings, using defaults");
                Config::default()
            }),
            None => Config::default(),
        };

        let directory = flags
            .directory
            .or_else(|| config.last_directory.clone())
            .or_else(|| std::env::current_dir().ok());

        let app = App {
            config,
            config_path,
            ..Self::default()
        };

        let task = match directory {
            Some(directory) => update::scan(directory),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.directory.as_ref().and_then(|d| d.file_name()) {
            Some(name) => format!("{} - Pinch Lens", name.to_string_lossy()),
            None => "Pinch Lens".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.is_animating()),
        ])
    }

    /// Whether any thumbnail is running its release animation.
    fn is_animating(&self) -> bool {
        self.thumbnails.iter().any(|t| t.image.is_animating())
    }

    /// The thumbnail whose overlay should be drawn, if any. A thumbnail
    /// under a live gesture wins over one still animating back.
    fn zoomed(&self) -> Option<&Thumbnail> {
        self.thumbnails
            .iter()
            .find(|t| t.image.interaction().is_zooming())
            .or_else(|| self.thumbnails.iter().find(|t| t.image.is_animating()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory_scanner::ImageList;
    use crate::media::ImageData;
    use crate::ui::widgets::ZoomLayer;
    use crate::ui::zoomable::{container_ref, GestureEvent, GesturePhase, PinchEvent};
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Point, Rectangle};
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn app_with_thumbnails(count: usize) -> App {
        let mut app = App::default();
        for index in 0..count {
            let mut image = ZoomableImage::new(Some(ImageData::from_rgba(1, 1, vec![0; 4])));
            image.enable_zoom(Some(container_ref(&app.viewport)), Some(app.window));
            app.thumbnails.push(Thumbnail {
                path: PathBuf::from(format!("{index}.png")),
                image,
                failed: false,
            });
        }
        app
    }

    fn pinch(index: usize, phase: GesturePhase, scale: f32) -> Message {
        Message::Gesture {
            index,
            bounds: Rectangle::new(Point::new(16.0, 400.0), Size::new(300.0, 200.0)),
            event: GestureEvent::Pinch(PinchEvent { phase, scale }),
        }
    }

    #[test]
    fn title_shows_app_name_without_directory() {
        assert_eq!(App::default().title(), "Pinch Lens");
    }

    #[test]
    fn title_shows_directory_name() {
        let app = App {
            directory: Some(PathBuf::from("/home/user/holidays")),
            ..App::default()
        };
        assert_eq!(app.title(), "holidays - Pinch Lens");
    }

    #[test]
    fn pinch_locks_gallery_until_release_completes() {
        let mut app = app_with_thumbnails(2);
        let _ = app.update(Message::ViewportChanged {
            offset: AbsoluteOffset { x: 0.0, y: 150.0 },
        });

        let _ = app.update(pinch(1, GesturePhase::Began, 1.0));
        let _ = app.update(pinch(1, GesturePhase::Changed, 2.0));

        assert!(!app.viewport.borrow().scroll_enabled);
        let zoomed = app.zoomed().expect("thumbnail 1 is zoomed");
        assert_eq!(zoomed.path, PathBuf::from("1.png"));
        let frame = zoomed.image.overlay().unwrap().image.frame;
        assert_eq!(frame.y, 250.0);

        let _ = app.update(pinch(1, GesturePhase::Ended, 2.0));
        assert!(app.viewport.borrow().scroll_enabled);
        assert!(app.is_animating());
        assert!(app.zoomed().is_some());

        let start = Instant::now();
        let _ = app.update(Message::Frame(start));
        let _ = app.update(Message::Frame(start + Duration::from_secs(1)));
        assert!(!app.is_animating());
        assert!(app.zoomed().is_none());
    }

    #[test]
    fn live_pinch_wins_over_a_thumbnail_still_releasing() {
        let mut app = app_with_thumbnails(2);

        let _ = app.update(pinch(0, GesturePhase::Began, 1.0));
        let _ = app.update(pinch(0, GesturePhase::Changed, 2.0));
        let _ = app.update(pinch(0, GesturePhase::Ended, 2.0));
        assert!(app.thumbnails[0].image.is_animating());

        let _ = app.update(pinch(1, GesturePhase::Began, 1.0));
        let _ = app.update(pinch(1, GesturePhase::Changed, 2.0));

        let zoomed = app.zoomed().expect("thumbnail 1 is zoomed");
        assert_eq!(zoomed.path, PathBuf::from("1.png"));
        assert!(ZoomLayer::new(&zoomed.image).is_visible());

        let start = Instant::now();
        let _ = app.update(Message::Frame(start));
        let _ = app.update(Message::Frame(start + Duration::from_secs(1)));
        let zoomed = app.zoomed().expect("thumbnail 1 is still zoomed");
        assert_eq!(zoomed.path, PathBuf::from("1.png"));
    }

    #[test]
    fn gesture_for_unknown_thumbnail_is_ignored() {
        let mut app = app_with_thumbnails(1);
        let _ = app.update(pinch(5, GesturePhase::Began, 2.0));
        assert!(app.zoomed().is_none());
    }

    #[test]
    fn window_resize_reaches_the_backdrop() {
        let mut app = app_with_thumbnails(1);
        let _ = app.update(Message::WindowResized(Size::new(1000.0, 800.0)));
        let _ = app.update(pinch(0, GesturePhase::Began, 1.0));

        let backdrop = app.thumbnails[0].image.overlay().unwrap().backdrop.frame;
        assert_eq!(backdrop.size(), Size::new(1000.0, 800.0));
    }

    #[test]
    fn loaded_image_reaches_thumbnail_and_overlay() {
        let mut app = app_with_thumbnails(1);
        app.thumbnails[0].image.set_image(None);

        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Ok(ImageData::from_rgba(3, 2, vec![0; 24])),
        });

        let image = &app.thumbnails[0].image;
        assert_eq!(image.image().map(|d| d.width), Some(3));
        assert!(image.overlay().unwrap().image.picture.is_some());
    }

    #[test]
    fn failed_image_is_marked() {
        let mut app = app_with_thumbnails(1);
        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Err(crate::error::Error::Image("broken".into())),
        });
        assert!(app.thumbnails[0].failed);
    }

    #[test]
    fn scanned_directory_builds_zoomable_gallery_and_remembers_it() {
        let pictures = tempdir().expect("failed to create temp dir");
        fs::write(pictures.path().join("b.png"), b"").unwrap();
        fs::write(pictures.path().join("a.jpg"), b"").unwrap();
        fs::write(pictures.path().join("notes.txt"), b"").unwrap();
        let settings = tempdir().expect("failed to create temp dir");
        let config_path = settings.path().join("settings.toml");

        let mut app = App {
            config_path: Some(config_path.clone()),
            ..App::default()
        };
        let result = ImageList::scan_directory(pictures.path());
        let _ = app.update(Message::DirectoryScanned {
            directory: pictures.path().to_path_buf(),
            result,
        });

        assert_eq!(app.thumbnails.len(), 2);
        assert!(app.thumbnails[0].path.ends_with("a.jpg"));
        assert!(app.thumbnails.iter().all(|t| t.image.is_zoom_enabled()));

        let saved = config::load_from_path(&config_path).expect("settings were written");
        assert_eq!(saved.last_directory.as_deref(), Some(pictures.path()));
    }

    #[test]
    fn empty_directory_shows_no_thumbnails_without_error() {
        let pictures = tempdir().expect("failed to create temp dir");
        let mut app = app_with_thumbnails(1);

        let result = ImageList::scan_directory(pictures.path());
        assert!(result.as_ref().is_ok_and(ImageList::is_empty));
        let _ = app.update(Message::DirectoryScanned {
            directory: pictures.path().to_path_buf(),
            result,
        });

        assert!(app.thumbnails.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn scan_error_is_shown() {
        let mut app = App::default();
        let _ = app.update(Message::DirectoryScanned {
            directory: PathBuf::from("/does/not/exist"),
            result: Err(crate::error::Error::Io("missing".into())),
        });
        assert!(app.error.is_some());
        assert!(app.thumbnails.is_empty());
    }
}
