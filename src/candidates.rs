//! Candidate enumeration for one backtracking frame.

use crate::pieces::{Catalog, Color, NUM_ORIENTATIONS};

/// A resumable cursor over the piece-orientation matrix.
///
/// Bound at creation to the anchor color the next placement must carry.
/// Pulls scan the fixed total order (ascending piece id, then ascending
/// orientation id) and yield each pair at most once, iff its orientation
/// anchor color matches and its piece is not on the board at pull time.
/// The placed set is passed in live by the caller, so a frame always
/// filters against the board state at its own depth. Exhaustion is the
/// normal "no options left at this depth" signal, not an error.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    required: Color,
    next: usize,
}

impl Frame {
    pub fn new(required: Color) -> Self {
        Self { required, next: 0 }
    }

    pub fn required_color(&self) -> Color {
        self.required
    }

    /// Yields the next matching (piece id, orientation id), or None once
    /// the frame is exhausted.
    pub fn pull(&mut self, catalog: &Catalog, placed_ids: u32) -> Option<(usize, u8)> {
        let total = catalog.len() * NUM_ORIENTATIONS;
        while self.next < total {
            let index = self.next;
            self.next += 1;

            let piece_id = index / NUM_ORIENTATIONS;
            let oid = (index % NUM_ORIENTATIONS) as u8;
            if placed_ids & (1 << piece_id) != 0 {
                continue;
            }
            if catalog.piece(piece_id).orientation(oid).anchor_color == self.required {
                return Some((piece_id, oid));
            }
        }
        None
    }
}
