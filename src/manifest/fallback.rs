// SPDX-License-Identifier: MPL-2.0
//! Bundled demo collection shown when the manifest cannot be used.

use super::ImageRecord;

/// Fixed `(url, description)` pairs, in display order.
pub const FALLBACK_IMAGES: &[(&str, &str)] = &[
    (
        "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?q=80&w=1000&auto=format&fit=crop",
        "Mountain Peak at Dawn by Alex S.",
    ),
    (
        "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?q=80&w=1000&auto=format&fit=crop",
        "Misty Forest • Captured in Oregon",
    ),
    (
        "https://images.unsplash.com/photo-1447752875215-b2761acb3c5d?q=80&w=1000&auto=format&fit=crop",
        "Silence of Nature",
    ),
    (
        "https://images.unsplash.com/photo-1469334031218-e382a71b716b?q=80&w=1000&auto=format&fit=crop",
        "The Long Road Home",
    ),
    (
        "https://images.unsplash.com/photo-1501854140884-074bf86ee91c?q=80&w=1000&auto=format&fit=crop",
        "Morning Light",
    ),
    (
        "https://images.unsplash.com/photo-1505144808419-1957a94ca61e?q=80&w=1000&auto=format&fit=crop",
        "Deep Woods • 2024",
    ),
    (
        "https://images.unsplash.com/photo-1510784722466-f2aa9c52fff6?q=80&w=1000&auto=format&fit=crop",
        "Winter Solstice",
    ),
    (
        "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1000&auto=format&fit=crop",
        "Coastal Dreams",
    ),
    (
        "https://images.unsplash.com/photo-1500964757637-c85e8a162699?q=80&w=1000&auto=format&fit=crop",
        "Golden Hour",
    ),
    (
        "https://images.unsplash.com/photo-1533201357341-8d79b10dd0f0?q=80&w=1000&auto=format&fit=crop",
        "Urban Reflections",
    ),
    (
        "https://images.unsplash.com/photo-1552083831-71f085340317?q=80&w=1000&auto=format&fit=crop",
        "The Boatman",
    ),
    (
        "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1000&auto=format&fit=crop",
        "Starry Night",
    ),
];

/// Returns the demo collection as records.
#[must_use]
pub fn fallback_images() -> Vec<ImageRecord> {
    FALLBACK_IMAGES
        .iter()
        .map(|(url, description)| ImageRecord::new(*url, Some((*description).to_string())))
        .collect()
}
