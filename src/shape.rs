// ---------------------------------------------------------------------------
// Shape rasterization over any Grid: line sampling and flood fill.
//
// Both are reached through the Grid trait's provided methods.
// ---------------------------------------------------------------------------

use alloc::collections::VecDeque;
use alloc::vec;

use crate::{Grid, Point};

/// Round a non-negative sample to the nearest cell, halves away from zero.
#[inline(always)]
fn nearest(v: f64) -> usize {
    (v + 0.5) as usize
}

pub(crate) fn draw_line<G, F>(grid: &mut G, p1: Point, p2: Point, mut draw: F)
where
    G: Grid,
    F: FnMut(&mut G, usize, usize),
{
    let steps = p1.x.abs_diff(p2.x).max(p1.y.abs_diff(p2.y));
    if steps == 0 {
        draw(grid, p1.x, p1.y);
        return;
    }

    let (x0, y0) = (p1.x as f64, p1.y as f64);
    let step_x = (p2.x as f64 - x0) / steps as f64;
    let step_y = (p2.y as f64 - y0) / steps as f64;

    for i in 0..=steps {
        let t = i as f64;
        draw(grid, nearest(x0 + step_x * t), nearest(y0 + step_y * t));
    }
}

/// In-bounds axis neighbours of `p`. Neighbours left of column 0 or above
/// row 0 are rejected rather than wrapped.
#[inline]
fn neighbors(p: Point, width: usize, height: usize) -> [Option<Point>; 4] {
    [
        p.x.checked_sub(1).map(|x| Point::new(x, p.y)),
        (p.x + 1 < width).then(|| Point::new(p.x + 1, p.y)),
        p.y.checked_sub(1).map(|y| Point::new(p.x, y)),
        (p.y + 1 < height).then(|| Point::new(p.x, p.y + 1)),
    ]
}

pub(crate) fn fill_area<G, R>(grid: &mut G, center: Point, mut rule: R, elem: G::Elem)
where
    G: Grid,
    R: FnMut(&G::Elem) -> bool,
{
    if !grid.contains(center.x, center.y) {
        return;
    }
    let (w, h) = (grid.width(), grid.height());

    // Cells are overwritten as they are queued, so a cell that fails `rule`
    // afterwards is never queued twice. If `elem` itself satisfies `rule` that
    // no longer holds and queued cells must be tracked explicitly.
    let mut queued = rule(&elem).then(|| vec![false; w * h]);

    let mut frontier = VecDeque::new();
    if let Some(seen) = queued.as_mut() {
        seen[center.x + w * center.y] = true;
    }
    *grid.tile_mut(center.x, center.y) = elem.clone();
    frontier.push_back(center);

    while let Some(current) = frontier.pop_front() {
        for next in neighbors(current, w, h).into_iter().flatten() {
            if queued.as_ref().is_some_and(|seen| seen[next.x + w * next.y]) {
                continue;
            }
            if !rule(grid.tile(next.x, next.y)) {
                continue;
            }
            if let Some(seen) = queued.as_mut() {
                seen[next.x + w * next.y] = true;
            }
            *grid.tile_mut(next.x, next.y) = elem.clone();
            frontier.push_back(next);
        }
    }

    log::trace!("fill_area from ({}, {}) done", center.x, center.y);
}
