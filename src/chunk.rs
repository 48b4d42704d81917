//! Moving rectangular regions between two grids.
//!
//! Every function here takes distinct `output` and `input` grids, which may
//! be any mix of [`View`](crate::View) and [`Buffer`](crate::Buffer). The
//! borrow checker rules out using one grid as both.

use crate::{Grid, Rect, ResizableGrid};

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

#[inline]
fn extent<G: Grid + ?Sized>(grid: &G) -> Rect {
    Rect::with_size(grid.width(), grid.height())
}

/// Copy `src_area` of `input` into `output`, which is reset to the size of
/// `src_area` first.
///
/// The part of `src_area` outside `input` is left at the default tile, so an
/// area entirely outside `input` yields a fully default grid of the requested
/// size. With `src_area` anchored at the origin this doubles as a crop/pad
/// resize.
pub fn get_chunk<O, I>(output: &mut O, input: &I, src_area: Rect)
where
    O: ResizableGrid + ?Sized,
    I: Grid<Elem = O::Elem> + ?Sized,
{
    output.reset(src_area.width, src_area.height, O::Elem::default());
    let clip = src_area.intersection(&extent(input));
    if clip != src_area {
        log::trace!("get_chunk: {src_area:?} clipped to {clip:?}");
    }
    copy_rect(output, 0, 0, input, clip);
}

/// Paste `src_area` of `input` into `output` with its top-left corner at
/// `(x, y)`.
///
/// A `src_area` of exactly [`Rect::ZERO`] means all of `input`. The area is
/// clipped to `input`, and the placement to `output`; tiles of `output`
/// outside the pasted region are left alone.
pub fn set_chunk<O, I>(output: &mut O, input: &I, x: usize, y: usize, src_area: Rect)
where
    O: Grid + ?Sized,
    I: Grid<Elem = O::Elem> + ?Sized,
{
    let src_area = if src_area == Rect::ZERO {
        extent(input)
    } else {
        src_area
    };
    let src = src_area.intersection(&extent(input));
    let dst = Rect::new(x, y, src.width, src.height).intersection(&extent(output));
    if dst.width != src_area.width || dst.height != src_area.height {
        log::trace!("set_chunk: {src_area:?} at ({x}, {y}) clipped to {dst:?}");
    }
    copy_rect(
        output,
        dst.x,
        dst.y,
        input,
        Rect::new(src.x, src.y, dst.width, dst.height),
    );
}

/// Row-wise copy of `src` (already clipped to `input`) into `output` at
/// `(x, y)` (already clipped to `output`).
fn copy_rect<O, I>(output: &mut O, x: usize, y: usize, input: &I, src: Rect)
where
    O: Grid + ?Sized,
    I: Grid<Elem = O::Elem> + ?Sized,
{
    if src.is_empty() {
        return;
    }
    for row in 0..src.height {
        let from = &input.row(src.y + row)[src.x..src.x + src.width];
        output.row_mut(y + row)[x..x + src.width].clone_from_slice(from);
    }
}

/// Write `input` rotated by a quarter turn into `output`, which is reset to
/// `input.height() × input.width()`.
pub fn rot90<O, I>(output: &mut O, input: &I, turn: Turn)
where
    O: ResizableGrid + ?Sized,
    I: Grid<Elem = O::Elem> + ?Sized,
{
    output.reset(input.height(), input.width(), O::Elem::default());
    let (w, h) = (output.width(), output.height());
    for y in 0..h {
        for x in 0..w {
            let (sx, sy) = match turn {
                Turn::Left => (h - 1 - y, x),
                Turn::Right => (y, w - 1 - x),
            };
            *output.tile_mut(x, y) = input.tile(sx, sy).clone();
        }
    }
}
