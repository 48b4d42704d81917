//! A grid over memory owned by someone else.

use crate::{Grid, SizeError, Tile};

/// A non-owning grid over a caller's row-major slice.
///
/// The view borrows `data` for `'a`, so the backing memory cannot be freed,
/// moved or resized while the view is alive. It never allocates.
///
/// [`View::new`] does not check that `data` holds `width * height` tiles; use
/// [`View::try_new`] when the sizes come from untrusted input.
///
/// ```rust
/// use tilegrid::{Grid, View};
///
/// let mut pixels = vec![0u32; 6];
/// let mut view = View::new(&mut pixels, 3, 2);
/// view.set(2, 1, 0xff00_00ff);
/// assert_eq!(pixels[5], 0xff00_00ff);
/// ```
#[derive(Debug, Default)]
pub struct View<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
}

impl<'a, T: Tile> View<'a, T> {
    pub fn new(data: &'a mut [T], width: usize, height: usize) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Like [`View::new`], but fails if `data` is shorter than
    /// `width * height`.
    pub fn try_new(data: &'a mut [T], width: usize, height: usize) -> Result<Self, SizeError> {
        let needed = width
            .checked_mul(height)
            .ok_or(SizeError::PixelCountMismatch)?;
        if data.len() < needed {
            return Err(SizeError::PixelCountMismatch);
        }
        Ok(Self::new(data, width, height))
    }

    /// The wrapped slice, including any tiles past `width * height`.
    #[inline]
    pub fn data(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Give the borrowed slice back.
    pub fn into_inner(self) -> &'a mut [T] {
        self.data
    }
}

impl<'a, T: Tile + bytemuck::Pod> View<'a, T> {
    /// View a decoded byte buffer as tiles of `T` without copying, e.g. RGBA8
    /// bytes as `u32`.
    ///
    /// Fails with [`SizeError::NotPixelAligned`] if the bytes are misaligned
    /// for `T` or not a whole number of tiles, and with
    /// [`SizeError::PixelCountMismatch`] if there are fewer than
    /// `width * height` of them.
    pub fn from_bytes(
        bytes: &'a mut [u8],
        width: usize,
        height: usize,
    ) -> Result<Self, SizeError> {
        let tiles: &mut [T] =
            bytemuck::try_cast_slice_mut(bytes).map_err(|_| SizeError::NotPixelAligned)?;
        Self::try_new(tiles, width, height)
    }
}

impl<T: Tile> Grid for View<'_, T> {
    type Elem = T;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn tiles(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    fn tiles_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn writes_land_in_borrowed_memory() {
        let mut data = vec![0u8; 6];
        {
            let mut v = View::new(&mut data, 3, 2);
            v.set(0, 1, 4);
            *v.tile_mut(2, 0) = 9;
            assert_eq!(v.get(0, 1), 4);
            assert_eq!(v.get(3, 0), 0);
        }
        assert_eq!(data, [0, 0, 9, 4, 0, 0]);
    }

    #[test]
    fn default_view_is_empty() {
        let v: View<'_, u16> = View::default();
        assert_eq!((v.width(), v.height()), (0, 0));
        assert!(v.data().is_empty());
        assert_eq!(v.get(0, 0), 0);
    }

    #[test]
    fn try_new_checks_length() {
        let mut data = vec![1u8; 5];
        assert_eq!(
            View::try_new(&mut data, 3, 2).unwrap_err(),
            SizeError::PixelCountMismatch
        );
        assert!(View::try_new(&mut data, 2, 2).is_ok());
        assert!(View::try_new(&mut data, usize::MAX, 2).is_err());
    }

    #[test]
    fn from_bytes_reinterprets() {
        let mut words: Vec<u32> = vec![0; 4];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        let mut v = View::<u32>::from_bytes(bytes, 2, 2).unwrap();
        v.set(1, 1, u32::from_ne_bytes([1, 2, 3, 4]));
        let bytes = v.into_inner();
        assert_eq!(bytemuck::cast_slice::<u32, u8>(bytes)[12..], [1, 2, 3, 4]);
    }

    #[test]
    fn from_bytes_rejects_partial_tiles() {
        let mut words: Vec<u32> = vec![0; 2];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        assert_eq!(
            View::<u32>::from_bytes(&mut bytes[..7], 1, 1).unwrap_err(),
            SizeError::NotPixelAligned
        );
        assert_eq!(
            View::<u32>::from_bytes(bytes, 3, 1).unwrap_err(),
            SizeError::PixelCountMismatch
        );
    }
}
