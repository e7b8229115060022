// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photo gallery built with the Iced GUI framework.
//!
//! The gallery reads a line-oriented manifest of image URLs and captions,
//! falls back to a bundled demo collection when the manifest is unusable, and
//! presents the images in a responsive masonry grid with a keyboard-driven
//! lightbox.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod manifest;
pub mod media;
pub mod ui;
