//! A grid that owns its tiles.

use alloc::vec;
use alloc::vec::Vec;

use crate::{Grid, ResizableGrid, Tile, View};

/// An owning, resizable row-major grid. The store always holds exactly
/// `width * height` tiles.
///
/// ```rust
/// use tilegrid::{Buffer, Grid, ResizableGrid};
///
/// let mut map = Buffer::filled(4, 3, b'.');
/// map.set(1, 1, b'#');
/// assert_eq!(map.row(1), b".#..");
///
/// map.reset(2, 2, b'~');
/// assert_eq!(map.data(), b"~~~~");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buffer<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Tile> Buffer<T> {
    /// An empty 0×0 buffer.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// A `width × height` buffer with every tile set to `elem`.
    pub fn filled(width: usize, height: usize, elem: T) -> Self {
        Self {
            data: vec![elem; width * height],
            width,
            height,
        }
    }

    /// A `width × height` buffer of default tiles.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Build from row-major `tiles`. Tiles past `width * height` are ignored;
    /// missing ones are left at the default.
    pub fn from_tiles(tiles: &[T], width: usize, height: usize) -> Self {
        let mut buf = Self::with_size(width, height);
        let n = tiles.len().min(buf.data.len());
        buf.data[..n].clone_from_slice(&tiles[..n]);
        buf
    }

    /// Copy the current contents of a view.
    pub fn from_view(view: &View<'_, T>) -> Self {
        let len = view.width() * view.height();
        Self {
            data: view.data()[..len].to_vec(),
            width: view.width(),
            height: view.height(),
        }
    }

    /// Borrow this buffer as a [`View`].
    pub fn as_view(&mut self) -> View<'_, T> {
        View::new(&mut self.data, self.width, self.height)
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Hand the row-major store over, e.g. to an image encoder.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Tile + bytemuck::NoUninit> Buffer<T> {
    /// The store as raw bytes, for writers that want a flat byte buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl<T: Tile> From<&View<'_, T>> for Buffer<T> {
    fn from(view: &View<'_, T>) -> Self {
        Self::from_view(view)
    }
}

impl<T: Tile> Grid for Buffer<T> {
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
        &self.data
    }

    #[inline]
    fn tiles_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Tile> ResizableGrid for Buffer<T> {
    fn reset(&mut self, width: usize, height: usize, padding: T) {
        log::trace!(
            "reset {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
        self.data = vec![padding; width * height];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tiles_truncates_and_pads() {
        let long = Buffer::from_tiles(&[1u8, 2, 3, 4, 5, 6, 7], 3, 2);
        assert_eq!(long.data(), &[1, 2, 3, 4, 5, 6]);

        let short = Buffer::from_tiles(&[1u8, 2], 2, 2);
        assert_eq!(short.data(), &[1, 2, 0, 0]);
    }

    #[test]
    fn from_view_copies() {
        let mut backing = alloc::vec![1u16, 2, 3, 4, 5, 6, 99];
        let view = View::new(&mut backing, 3, 2);
        let copy = Buffer::from(&view);
        assert_eq!((copy.width(), copy.height()), (3, 2));
        assert_eq!(copy.data(), &[1, 2, 3, 4, 5, 6]);

        backing[0] = 42;
        assert_eq!(copy.get(0, 0), 1);
    }

    #[test]
    fn reset_discards_content() {
        let mut b = Buffer::from_tiles(&[1u8, 2, 3, 4], 2, 2);
        b.reset(3, 1, 7);
        assert_eq!((b.width(), b.height()), (3, 1));
        assert_eq!(b.data(), &[7, 7, 7]);

        b.reset(0, 5, 1);
        assert!(b.data().is_empty());
        assert_eq!(b.get(0, 0), 0);
    }

    #[test]
    fn new_is_empty() {
        let b = Buffer::<u32>::new();
        assert_eq!((b.width(), b.height()), (0, 0));
        assert_eq!(b, Buffer::default());
    }

    #[test]
    fn as_view_writes_through() {
        let mut b = Buffer::with_size(2, 2);
        b.as_view().set(1, 0, 5u8);
        assert_eq!(b.data(), &[0, 5, 0, 0]);
    }

    #[test]
    fn as_bytes_is_native_layout() {
        let b = Buffer::filled(2, 1, 0x0102_0304u32);
        assert_eq!(b.as_bytes().len(), 8);
        assert_eq!(&b.as_bytes()[..4], &0x0102_0304u32.to_ne_bytes());
    }
}
