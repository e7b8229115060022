// SPDX-License-Identifier: MPL-2.0
//! User interface views and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each takes a
//! borrowed context and returns an element emitting its own message type,
//! which the application maps into its top-level message.
//!
//! # Views
//!
//! - [`chrome`] - Header, hero, footer and back-to-top button
//! - [`grid`] - Masonry grid of gallery items
//! - [`lightbox`] - Full-screen overlay for a single photograph
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod chrome;
pub mod components;
pub mod design_tokens;
pub mod grid;
pub mod icons;
pub mod lightbox;
pub mod styles;
pub mod widgets;
