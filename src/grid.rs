//! The grid capability traits shared by [`View`](crate::View) and
//! [`Buffer`](crate::Buffer).
//!
//! Every grid is a contiguous row-major store: the tile at `(x, y)` lives at
//! index `x + width * y`. Two access paths exist:
//!
//! - [`Grid::tile`] / [`Grid::tile_mut`] index the backing slice directly.
//!   Coordinates outside `width × height` are a caller error: they either
//!   land on an unrelated tile or panic on the slice bound.
//! - [`Grid::get`] / [`Grid::set`] check bounds first and quietly return the
//!   default tile or do nothing.

use crate::Point;
use crate::shape;

/// A grid element. The [`Default`] value is the canonical "empty" tile,
/// returned by out-of-bounds reads and used to pad fresh storage.
pub trait Tile: Clone + Default {}

impl<T: Clone + Default> Tile for T {}

/// Uniform access to a row-major grid, regardless of who owns the memory.
pub trait Grid {
    type Elem: Tile;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// The row-major backing store. Holds at least `width * height` tiles.
    fn tiles(&self) -> &[Self::Elem];
    fn tiles_mut(&mut self) -> &mut [Self::Elem];

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x + self.width() * y
    }

    #[inline]
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Direct access, no bounds check against `width`/`height`.
    #[inline]
    fn tile(&self, x: usize, y: usize) -> &Self::Elem {
        &self.tiles()[self.index(x, y)]
    }

    /// Direct mutable access, no bounds check against `width`/`height`.
    #[inline]
    fn tile_mut(&mut self, x: usize, y: usize) -> &mut Self::Elem {
        let i = self.index(x, y);
        &mut self.tiles_mut()[i]
    }

    /// The tile at `(x, y)`, or the default tile when out of bounds.
    fn get(&self, x: usize, y: usize) -> Self::Elem {
        if self.contains(x, y) {
            self.tile(x, y).clone()
        } else {
            Self::Elem::default()
        }
    }

    /// Write `value` at `(x, y)`. Out-of-bounds writes are ignored.
    fn set(&mut self, x: usize, y: usize, value: Self::Elem) {
        if self.contains(x, y) {
            *self.tile_mut(x, y) = value;
        }
    }

    /// Row `y`. Panics if `y >= height`.
    fn row(&self, y: usize) -> &[Self::Elem] {
        let w = self.width();
        &self.tiles()[y * w..(y + 1) * w]
    }

    /// Row `y`, mutably. Panics if `y >= height`.
    fn row_mut(&mut self, y: usize) -> &mut [Self::Elem] {
        let w = self.width();
        &mut self.tiles_mut()[y * w..(y + 1) * w]
    }

    /// Overwrite every tile with `elem`.
    fn fill(&mut self, elem: Self::Elem) {
        let len = self.width() * self.height();
        self.tiles_mut()[..len].fill(elem);
    }

    /// Mirror the grid in place.
    ///
    /// `horizontal` swaps column `x` with column `width - 1 - x`; `vertical`
    /// swaps row `y` with row `height - 1 - y`. Flipping both ways is the
    /// same as rotating by 90° twice in one direction.
    fn flip(&mut self, horizontal: bool, vertical: bool) {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return;
        }
        let tiles = &mut self.tiles_mut()[..w * h];
        if horizontal {
            for row in tiles.chunks_exact_mut(w) {
                row.reverse();
            }
        }
        if vertical {
            for y in 0..h / 2 {
                let (top, bottom) = tiles.split_at_mut((h - 1 - y) * w);
                top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
            }
        }
    }

    /// Rasterize the segment `p1`–`p2`, calling `draw(grid, x, y)` once per
    /// sample. Both endpoints are sampled; `p1 == p2` yields one sample.
    ///
    /// Nothing is clipped: `draw` sees raw coordinates and should go through
    /// [`Grid::set`] unless it knows they are in bounds.
    fn draw_line<F>(&mut self, p1: Point, p2: Point, draw: F)
    where
        Self: Sized,
        F: FnMut(&mut Self, usize, usize),
    {
        shape::draw_line(self, p1, p2, draw);
    }

    /// 4-connected flood fill from `center`.
    ///
    /// `center` is always overwritten with `elem`; from there the fill spreads
    /// to every axis neighbour whose current value satisfies `rule`. An
    /// out-of-bounds `center` leaves the grid untouched.
    ///
    /// `rule` is also called once with `elem` itself before any tile is
    /// written, to decide whether visited cells need tracking.
    fn fill_area<R>(&mut self, center: Point, rule: R, elem: Self::Elem)
    where
        Self: Sized,
        R: FnMut(&Self::Elem) -> bool,
    {
        shape::fill_area(self, center, rule, elem);
    }
}

/// A grid that owns its storage and can be reallocated.
pub trait ResizableGrid: Grid {
    /// Drop all content and reallocate to `width × height`, every tile set to
    /// `padding`. Nothing from the old store is preserved.
    fn reset(&mut self, width: usize, height: usize, padding: Self::Elem);
}
