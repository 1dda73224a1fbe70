//! The 8x8 board: free cells, committed placements, anchor queries.
//!
//! Occupancy is a `u64` bitmask where bit `y * 8 + x` covers cell (x, y).
//! Ascending bit order is exactly leftmost-lowest order (rows bottom-up,
//! cells left to right within a row), so the current anchor is the lowest
//! zero bit of the mask.

use thiserror::Error;

use crate::pieces::{Catalog, Cell, Color, MAX_SQUARES};

/// Board edge length.
pub const BOARD_DIM: i32 = 8;

/// Total number of board cells.
pub const BOARD_CELLS: usize = 64;

/// Bitmask with every board cell occupied.
const ALL_CELLS_FILLED: u64 = u64::MAX;

/// Converts a board cell to its bit index.
#[inline(always)]
pub const fn cell_to_idx((x, y): Cell) -> usize {
    (y * BOARD_DIM + x) as usize
}

/// Converts a bit index back to a board cell.
#[inline(always)]
pub const fn idx_to_cell(idx: usize) -> Cell {
    (idx as i32 % BOARD_DIM, idx as i32 / BOARD_DIM)
}

/// A validated placement recorded on the board.
#[derive(Clone, Copy, Debug)]
pub struct Commit {
    pub piece_id: usize,
    pub orientation_id: u8,
    /// Board cell the orientation's anchor landed on.
    pub anchor: Cell,
    cells: [Cell; MAX_SQUARES],
    len: u8,
    mask: u64,
}

impl Commit {
    /// Absolute board cells covered by this placement.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.len as usize]
    }
}

/// Precondition violations on board operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("undo requested with no committed placements")]
    NothingToUndo,
}

/// Free cells plus the ordered log of committed placements.
///
/// The free mask and the union of all commit masks are disjoint and
/// together cover the 64-cell board at every point between operations.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    occupied: u64,
    placed_ids: u32,
    placed: Vec<Commit>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First free cell in leftmost-lowest order, or None when the board is
    /// complete.
    #[inline]
    pub fn anchor_cell(&self) -> Option<Cell> {
        if self.occupied == ALL_CELLS_FILLED {
            None
        } else {
            // the number of trailing 1s equals the index of the first 0 bit
            Some(idx_to_cell(self.occupied.trailing_ones() as usize))
        }
    }

    /// Checkerboard color of the current anchor cell, None when complete.
    pub fn required_anchor_color(&self) -> Option<Color> {
        self.anchor_cell().map(Color::of_cell)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.occupied == ALL_CELLS_FILLED
    }

    /// Committed placements, oldest first.
    pub fn placed(&self) -> &[Commit] {
        &self.placed
    }

    /// Bitmask of piece ids currently on the board.
    #[inline]
    pub fn placed_ids(&self) -> u32 {
        self.placed_ids
    }

    /// Free cells in leftmost-lowest order.
    pub fn free_cells(&self) -> Vec<Cell> {
        (0..BOARD_CELLS)
            .filter(|&idx| self.occupied & (1 << idx) == 0)
            .map(idx_to_cell)
            .collect()
    }

    /// Attempts to place an orientation with its anchor on the current
    /// anchor cell.
    ///
    /// Succeeds and records the commit iff every covered cell is on the
    /// board and free; otherwise the board is unchanged. Cell containment
    /// is the only check needed: a tile whose anchor color matches the
    /// anchor cell always agrees with the board coloring on every square.
    pub fn try_commit(&mut self, catalog: &Catalog, piece_id: usize, orientation_id: u8) -> bool {
        let Some(anchor) = self.anchor_cell() else {
            return false;
        };
        let orientation = catalog.piece(piece_id).orientation(orientation_id);

        let mut mask = 0u64;
        let mut cells = [(0, 0); MAX_SQUARES];
        for (i, &(dx, dy)) in orientation.cells().iter().enumerate() {
            let cell = (anchor.0 + dx, anchor.1 + dy);
            if !(0..BOARD_DIM).contains(&cell.0) || !(0..BOARD_DIM).contains(&cell.1) {
                return false;
            }
            mask |= 1 << cell_to_idx(cell);
            cells[i] = cell;
        }
        if self.occupied & mask != 0 {
            return false;
        }

        self.occupied |= mask;
        self.placed_ids |= 1 << piece_id;
        self.placed.push(Commit {
            piece_id,
            orientation_id,
            anchor,
            cells,
            len: orientation.cells().len() as u8,
            mask,
        });
        true
    }

    /// Reverts the most recent commit, returning its cells to the free set.
    pub fn undo_last(&mut self) -> Result<Commit, BoardError> {
        let commit = self.placed.pop().ok_or(BoardError::NothingToUndo)?;
        self.occupied &= !commit.mask;
        self.placed_ids &= !(1 << commit.piece_id);
        Ok(commit)
    }

    /// Formats the board as rows from y = 7 down to y = 0. Free cells show
    /// as '.', covered cells as the 1-based piece number (hex from 10 up).
    pub fn format_board(&self) -> String {
        let mut grid = [0u8; BOARD_CELLS];
        for commit in &self.placed {
            let piece_number = (commit.piece_id + 1) as u8;
            for &cell in commit.cells() {
                grid[cell_to_idx(cell)] = piece_number;
            }
        }

        let mut output = String::new();
        for y in (0..BOARD_DIM).rev() {
            for x in 0..BOARD_DIM {
                let piece_number = grid[cell_to_idx((x, y))];
                let display_char = if piece_number == 0 {
                    '.'
                } else if piece_number < 10 {
                    char::from(b'0' + piece_number)
                } else {
                    char::from(b'A' + piece_number - 10)
                };
                output.push(display_char);
            }
            output.push('\n');
        }
        output
    }
}
