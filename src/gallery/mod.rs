// SPDX-License-Identifier: MPL-2.0
//! Gallery state machines: the settled image list, per-item load tracking,
//! the lightbox session and the masonry layout projections.
//!
//! Nothing in here touches the renderer; the UI layer reads these values to
//! pick affordances and feeds user input back through the public mutators.

pub mod item_load;
pub mod layout;
pub mod lightbox;
pub mod state;

pub use item_load::{ItemLoadState, ItemLoadTracker, ItemTrackers};
pub use lightbox::{LightboxController, LightboxKey, Position};
pub use state::{GalleryState, Summary};
