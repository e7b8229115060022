// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Full-page failure panel with reload and
//!   expandable technical details

pub mod error_display;
