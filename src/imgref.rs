//! Conversions between grids and [`imgref`] images.
//!
//! `imgref` images may be strided (rows padded past `width`); grids are
//! always packed. Borrowing a strided image as a [`View`] is refused with
//! [`SizeError::InvalidStride`], while copying into a [`Buffer`] repacks rows.
//!
//! ```rust
//! use ::imgref::{ImgRefMut, ImgVec};
//! use tilegrid::{Grid, Turn, rot90};
//! use tilegrid::imgref;
//!
//! let mut buf = vec![1u8, 2, 3, 4, 5, 6];
//! let view = imgref::view_from_imgref(ImgRefMut::new(&mut buf, 3, 2)).unwrap();
//!
//! let mut turned = tilegrid::Buffer::new();
//! rot90(&mut turned, &view, Turn::Right);
//! let out: ImgVec<u8> = imgref::buffer_into_imgvec(turned);
//! assert_eq!((out.width(), out.height()), (2, 3));
//! assert_eq!(out.buf(), &[4, 1, 5, 2, 6, 3]);
//! ```

use alloc::vec::Vec;

use ::imgref::{ImgRef, ImgRefMut, ImgVec};

use crate::{Buffer, Grid, SizeError, Tile, View};

/// Borrow a packed image as a [`View`].
pub fn view_from_imgref<T: Tile>(img: ImgRefMut<'_, T>) -> Result<View<'_, T>, SizeError> {
    let (width, height) = (img.width(), img.height());
    if img.stride() != width {
        return Err(SizeError::InvalidStride);
    }
    View::try_new(img.into_buf(), width, height)
}

/// Copy an image, strided or not, into a packed [`Buffer`].
pub fn buffer_from_imgref<T: Tile>(img: ImgRef<'_, T>) -> Buffer<T> {
    let (width, height) = (img.width(), img.height());
    let mut tiles = Vec::with_capacity(width * height);
    for row in img.rows() {
        tiles.extend_from_slice(row);
    }
    Buffer::from_tiles(&tiles, width, height)
}

/// Hand a [`Buffer`]'s store to an [`ImgVec`] without copying.
pub fn buffer_into_imgvec<T: Tile>(buffer: Buffer<T>) -> ImgVec<T> {
    let (width, height) = (buffer.width(), buffer.height());
    ImgVec::new(buffer.into_vec(), width, height)
}

impl<T: Tile> From<ImgRef<'_, T>> for Buffer<T> {
    fn from(img: ImgRef<'_, T>) -> Self {
        buffer_from_imgref(img)
    }
}

impl<T: Tile> From<Buffer<T>> for ImgVec<T> {
    fn from(buffer: Buffer<T>) -> Self {
        buffer_into_imgvec(buffer)
    }
}
