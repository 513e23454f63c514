// SPDX-License-Identifier: MPL-2.0
//! `pinch_lens` is a pinch-and-pan zoomable image widget for the Iced GUI
//! framework, with a small gallery application that demonstrates it.
//!
//! The zoom core lives in [`ui::zoomable`] and only depends on Iced's geometry
//! types; [`ui::gestures`] and [`ui::widgets`] bind it to real input and
//! rendering.

#![doc(html_root_url = "https://docs.rs/pinch_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
