//! Planar rotation and anchor normalization for puzzle tiles.
//!
//! A tile's cell set is always expressed relative to its anchor: the
//! leftmost cell of its lowest row sits at (0, 0). Rotating a cell set
//! moves the anchor, so every rotation is followed by a translation that
//! restores the invariant. The translation is reported back to the caller
//! because the anchor's checkerboard color shifts with it.

use crate::pieces::Cell;

/// Returns the leftmost cell of the lowest row: minimum y, tie-broken by
/// minimum x.
///
/// Panics if `cells` is empty.
pub fn leftmost_lowest(cells: &[Cell]) -> Cell {
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap();
    let min_x = cells
        .iter()
        .filter(|&&(_, y)| y == min_y)
        .map(|&(x, _)| x)
        .min()
        .unwrap();
    (min_x, min_y)
}

/// Rotates a cell set 90 degrees clockwise and renormalizes to its anchor.
///
/// Each cell (x, y) maps to (y, -x); the rotated set is then translated so
/// its new leftmost-lowest cell is (0, 0). Returns the translated cells and
/// the translation that was applied; the anchor flips color once per unit of
/// parity in that translation.
pub fn rotate_cw(cells: &[Cell]) -> (Vec<Cell>, Cell) {
    let rotated: Vec<Cell> = cells.iter().map(|&(x, y)| (y, -x)).collect();
    let (anchor_x, anchor_y) = leftmost_lowest(&rotated);
    let offset = (-anchor_x, -anchor_y);
    let normalized = rotated
        .iter()
        .map(|&(x, y)| (x + offset.0, y + offset.1))
        .collect();
    (normalized, offset)
}
