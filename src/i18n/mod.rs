// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Uses the Fluent localization system with `.ftl` bundles embedded at build
//! time. The locale is picked from the CLI, then the config file, then the OS
//! settings, and falls back to `en-US`.

pub mod fluent;
