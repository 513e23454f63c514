// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It only uses
//! `std`.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::newtypes::ZoomScale),
//!   [`Opacity`](ui::newtypes::Opacity))

pub mod ui;
