//! Grids of [`rgb`] crate pixels over decoded image bytes.
//!
//! A decoder typically hands back a flat `Vec<u8>` of RGBA8 plus a width and
//! height. [`rgba_view`] reinterprets that in place via bytemuck, so edits
//! land directly in the buffer the encoder will later read.
//!
//! ```rust
//! use rgb::Rgba;
//! use tilegrid::{Grid, Point};
//! use tilegrid::typed_rgb;
//!
//! // 2×2 RGBA8, fully transparent except the bottom-right pixel.
//! let mut bytes = vec![0u8; 16];
//! bytes[12..].copy_from_slice(&[9, 9, 9, 255]);
//!
//! let mut view = typed_rgb::rgba_view(&mut bytes, 2, 2).unwrap();
//! typed_rgb::fill_transparent(&mut view, Point::new(0, 0), Rgba::new(0, 0, 0, 255));
//! assert_eq!(view.get(1, 0), Rgba::new(0, 0, 0, 255));
//! assert_eq!(view.get(1, 1), Rgba::new(9, 9, 9, 255));
//! ```

use rgb::{Bgra, Rgba};

use crate::{Grid, Point, SizeError, View};

/// View RGBA8 bytes as a `width × height` grid of [`Rgba<u8>`].
///
/// `Rgba<u8>` has alignment 1, so only the length can be wrong.
pub fn rgba_view(
    bytes: &mut [u8],
    width: usize,
    height: usize,
) -> Result<View<'_, Rgba<u8>>, SizeError> {
    View::from_bytes(bytes, width, height)
}

/// View BGRA8 bytes as a `width × height` grid of [`Bgra<u8>`].
pub fn bgra_view(
    bytes: &mut [u8],
    width: usize,
    height: usize,
) -> Result<View<'_, Bgra<u8>>, SizeError> {
    View::from_bytes(bytes, width, height)
}

/// Fill rule matching pixels with zero alpha.
#[inline]
pub fn is_transparent(px: &Rgba<u8>) -> bool {
    px.a == 0
}

/// Flood fill the fully transparent region connected to `seed` with `color`.
///
/// The seed pixel itself is always painted. An out-of-bounds seed does
/// nothing.
pub fn fill_transparent<G>(grid: &mut G, seed: Point, color: Rgba<u8>)
where
    G: Grid<Elem = Rgba<u8>>,
{
    grid.fill_area(seed, is_transparent, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Buffer;
    use alloc::vec;

    #[test]
    fn rgba_view_length_checks() {
        let mut bytes = vec![0u8; 15];
        assert_eq!(
            rgba_view(&mut bytes, 2, 2).unwrap_err(),
            SizeError::NotPixelAligned
        );
        assert_eq!(
            rgba_view(&mut bytes[..12], 2, 2).unwrap_err(),
            SizeError::PixelCountMismatch
        );
        assert!(rgba_view(&mut bytes[..12], 3, 1).is_ok());
    }

    #[test]
    fn bgra_view_channel_order() {
        let mut bytes = vec![1u8, 2, 3, 4];
        let view = bgra_view(&mut bytes, 1, 1).unwrap();
        assert_eq!(view.get(0, 0), Bgra { b: 1, g: 2, r: 3, a: 4 });
    }

    #[test]
    fn fill_transparent_respects_opaque_border() {
        let clear = Rgba::new(0u8, 0, 0, 0);
        let wall = Rgba::new(255u8, 255, 255, 255);
        let red = Rgba::new(255u8, 0, 0, 255);
        #[rustfmt::skip]
        let mut img = Buffer::from_tiles(&[
            clear, wall, clear,
            clear, wall, clear,
            clear, wall, clear,
        ], 3, 3);
        fill_transparent(&mut img, Point::new(0, 2), red);
        for y in 0..3 {
            assert_eq!(img.get(0, y), red);
            assert_eq!(img.get(1, y), wall);
            assert_eq!(img.get(2, y), clear);
        }
    }
}
