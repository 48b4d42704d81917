//! # tilegrid
//!
//! Row-major 2D grids for tilemaps and in-place raster edits.
//!
//! One [`Grid`] trait covers two storage strategies:
//!
//! - [`View`] borrows a caller's contiguous slice (a decoded image, a
//!   framebuffer) and edits it in place without copying.
//! - [`Buffer`] owns its tiles and can be [`reset`](ResizableGrid::reset) to
//!   a new size.
//!
//! On top of the trait sit the shape operations ([`Grid::flip`],
//! [`Grid::draw_line`], [`Grid::fill_area`]) and the region moves in
//! [`chunk`] ([`get_chunk`], [`set_chunk`], [`rot90`]), all of which work the
//! same whichever storage they are handed.
//!
//! ```rust
//! use tilegrid::{Buffer, Grid, Point, Rect, View, get_chunk};
//!
//! let mut pixels = vec![0u8; 16];
//! let mut view = View::new(&mut pixels, 4, 4);
//! view.draw_line(Point::new(0, 3), Point::new(3, 3), |g, x, y| g.set(x, y, 1));
//! view.fill_area(Point::new(0, 0), |&t| t == 0, 2);
//!
//! let mut corner = Buffer::new();
//! get_chunk(&mut corner, &view, Rect::new(2, 2, 2, 2));
//! assert_eq!(corner.data(), &[2, 2, 1, 1]);
//! ```
//!
//! ## Bounds
//!
//! [`Grid::tile`] and [`Grid::tile_mut`] index the backing slice directly
//! for hot loops; the caller keeps coordinates in range. [`Grid::get`],
//! [`Grid::set`] and everything in [`chunk`] never fail: out-of-range reads
//! give the default tile, writes are dropped, regions are clipped.
//!
//! ## Feature flags
//!
//! - **`rgb`** — Helpers for [`rgb`] pixel types (`Rgba<u8>` views over
//!   decoded bytes, transparency fills).
//! - **`imgref`** — Conversions between grids and [`imgref`] images.
//!   Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
pub mod chunk;
mod geometry;
mod grid;
mod shape;
mod view;

pub use buffer::Buffer;
pub use chunk::{Turn, get_chunk, rot90, set_chunk};
pub use geometry::{Point, Rect};
pub use grid::{Grid, ResizableGrid, Tile};
pub use view::View;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

/// A buffer's length, alignment or layout doesn't fit the requested grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// Byte length or alignment isn't a whole number of tiles.
    NotPixelAligned,
    /// Fewer tiles than `width * height`.
    PixelCountMismatch,
    /// Rows are not packed back to back (stride differs from width).
    InvalidStride,
}

impl core::fmt::Display for SizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SizeError::NotPixelAligned => f.write_str("buffer is not a whole number of tiles"),
            SizeError::PixelCountMismatch => {
                f.write_str("buffer holds fewer than width * height tiles")
            }
            SizeError::InvalidStride => f.write_str("image rows are not contiguous"),
        }
    }
}

impl core::error::Error for SizeError {}
