// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

// ==========================================================================
// Site Defaults
// ==========================================================================

pub const DEFAULT_SITE_TITLE: &str = "IITG AI CONFLUENCE PHOTO GALLERY";
pub const DEFAULT_SITE_SUBTITLE: &str = "GALLERY";
pub const DEFAULT_SITE_TAGLINE: &str = "Capturing moments suspended in time.";
pub const DEFAULT_SITE_DESCRIPTION: &str =
    "A curated collection of high-fidelity imagery. Updated dynamically from external sources.";
pub const DEFAULT_WINDOW_TITLE: &str = "IITG Gallery | Fine Art Photography";
pub const DEFAULT_FOOTER_TEXT: &str = "© 2025 SAURAV B. Photography. All rights reserved.";
pub const DEFAULT_BADGE: &str = "OPEN FOR SUBMISSIONS";

// ==========================================================================
// Manifest Defaults
// ==========================================================================

/// Manifest read when neither the CLI nor the config names one.
pub const DEFAULT_MANIFEST_SOURCE: &str = "images1.txt";

pub const DEFAULT_USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Length of the one-time fade-in when an image becomes ready.
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 700;
pub const MAX_REVEAL_DURATION_MS: u64 = 5_000;

/// Scroll offset (logical pixels) past which "back to top" is offered.
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f32 = 400.0;
pub const MAX_BACK_TO_TOP_THRESHOLD: f32 = 10_000.0;

pub const DEFAULT_MAX_COLUMNS: usize = 3;
pub const MIN_MAX_COLUMNS: usize = 1;
pub const MAX_MAX_COLUMNS: usize = 3;

/// Lightbox image cache budget in megabytes.
pub const DEFAULT_IMAGE_CACHE_MB: u32 = 96;
pub const MIN_IMAGE_CACHE_MB: u32 = 8;
pub const MAX_IMAGE_CACHE_MB: u32 = 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_bounds() {
        assert!(DEFAULT_REVEAL_DURATION_MS <= MAX_REVEAL_DURATION_MS);
        assert!(DEFAULT_BACK_TO_TOP_THRESHOLD <= MAX_BACK_TO_TOP_THRESHOLD);
        assert!((MIN_MAX_COLUMNS..=MAX_MAX_COLUMNS).contains(&DEFAULT_MAX_COLUMNS));
        assert!((MIN_IMAGE_CACHE_MB..=MAX_IMAGE_CACHE_MB).contains(&DEFAULT_IMAGE_CACHE_MB));
    }

    #[test]
    fn user_agent_names_the_app() {
        assert!(DEFAULT_USER_AGENT.starts_with("IcedFolio/"));
    }
}
