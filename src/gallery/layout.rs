// SPDX-License-Identifier: MPL-2.0
//! Masonry layout arithmetic and the back-to-top projection.

/// Window width below which the grid collapses to one column.
pub const SINGLE_COLUMN_BELOW: f32 = 768.0;

/// Window width below which the grid uses at most two columns.
pub const TWO_COLUMNS_BELOW: f32 = 1024.0;

/// Number of masonry columns for a window `width`, capped by `max_columns`.
#[must_use]
pub fn column_count(width: f32, max_columns: usize) -> usize {
    let responsive = if width < SINGLE_COLUMN_BELOW {
        1
    } else if width < TWO_COLUMNS_BELOW {
        2
    } else {
        3
    };
    responsive.min(max_columns.max(1))
}

/// Splits `len` items into `columns` contiguous, balanced runs.
///
/// Items fill the first column top to bottom, then the second, keeping grid
/// order equal to manifest order when read column by column. Earlier columns
/// take the remainder.
#[must_use]
pub fn distribute(len: usize, columns: usize) -> Vec<std::ops::Range<usize>> {
    let columns = columns.max(1);
    let base = len / columns;
    let extra = len % columns;

    let mut start = 0;
    (0..columns)
        .map(|column| {
            let size = base + usize::from(column < extra);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

/// Whether the page has scrolled far enough to offer "back to top".
#[must_use]
pub fn is_scrolled(offset_y: f32, threshold: f32) -> bool {
    offset_y > threshold
}
