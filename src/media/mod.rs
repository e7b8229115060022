// SPDX-License-Identifier: MPL-2.0
//! Remote image handling: download, decode and caching.
//!
//! Gallery items request a thumbnail-width decode through a bounded
//! [`LoadQueue`], the lightbox requests the full image and keeps recent ones
//! in an [`ImageCache`].

pub mod cache;
pub mod image;
pub mod queue;
pub mod remote;

pub use cache::{CacheStats, ImageCache};
pub use image::ImageData;
pub use queue::LoadQueue;
pub use remote::{build_client, load_image};

/// Width grid thumbnails are decoded to.
pub const THUMBNAIL_WIDTH: u32 = 640;
