//! Tile definitions, checkerboard colors, and orientation expansion.
//!
//! Each tile is defined by its base cell set, relative to the tile's anchor
//! (the leftmost cell of its lowest row), and the checkerboard color under
//! that anchor. At catalog construction every tile is expanded into its four
//! clockwise orientations; the catalog is immutable afterwards.

use thiserror::Error;

use crate::geometry::{leftmost_lowest, rotate_cw};

/// A board or tile cell position.
pub type Cell = (i32, i32);

/// Maximum number of squares in any tile (the cross-shaped tile has 8).
pub const MAX_SQUARES: usize = 8;

/// Number of tiles in the standard puzzle.
pub const NUM_PIECES: usize = 12;

/// Number of orientations per tile: 90 degree clockwise turns, no
/// reflections.
pub const NUM_ORIENTATIONS: usize = 4;

/// The two checkerboard colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    /// Checkerboard color of board cell (x, y): black when x + y is even.
    #[inline]
    pub fn of_cell((x, y): Cell) -> Self {
        Self::from_parity(x + y)
    }

    /// Maps an integer to a color by parity. Uses `rem_euclid` since offset
    /// sums go negative.
    #[inline]
    pub fn from_parity(n: i32) -> Self {
        if n.rem_euclid(2) == 0 {
            Color::Black
        } else {
            Color::Red
        }
    }

    /// 0 for black, 1 for red.
    #[inline]
    pub fn index(self) -> i32 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
        }
    }
}

/// One rotation variant of a tile.
///
/// `cells` are relative to the orientation's own anchor, which sits at
/// (0, 0). `offset` accumulates the translations applied by successive
/// rotations; a renderer needs it to position a turned sprite, the search
/// itself never reads it. `anchor_color` is the checkerboard color under
/// the anchor square and drives the candidate filter.
#[derive(Clone, Copy, Debug)]
pub struct Orientation {
    cells: [Cell; MAX_SQUARES],
    len: u8,
    pub offset: Cell,
    pub anchor_color: Color,
}

impl Orientation {
    /// The cell set of this orientation.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.len as usize]
    }
}

/// A tile with its four expanded orientations.
#[derive(Clone, Debug)]
pub struct Piece {
    pub id: usize,
    orientations: [Orientation; NUM_ORIENTATIONS],
}

impl Piece {
    #[inline]
    pub fn orientation(&self, oid: u8) -> &Orientation {
        &self.orientations[oid as usize]
    }

    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }
}

/// Catalog construction failures. All are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceError {
    #[error("piece {id}: base shape anchor is at {found:?}, expected (0, 0)")]
    AnchorNotAtOrigin { id: usize, found: Cell },
    #[error("piece {id}: {len} squares exceeds the tile maximum")]
    TooManySquares { id: usize, len: usize },
    #[error("{len} pieces exceeds the maximum of 32")]
    TooManyPieces { len: usize },
}

/// The twelve tile shapes with the checkerboard color of each anchor
/// square. Cells are relative to the anchor; several shapes extend into
/// negative x above the anchor row.
pub const BASE_SHAPES: [(&[Cell], Color); NUM_PIECES] = [
    (&[(0, 0), (0, 1), (0, 2), (1, 2)], Color::Red),
    (&[(0, 0), (0, 1), (0, 2), (0, 3), (-1, 3)], Color::Red),
    (&[(0, 0), (0, 1), (0, 2), (1, 2), (0, 3)], Color::Red),
    (&[(0, 0), (0, 1), (0, 2), (1, 2), (1, 3)], Color::Black),
    (&[(0, 0), (0, 1), (0, 2), (-1, 2), (-1, 3)], Color::Red),
    (&[(0, 0), (0, 1), (0, 2), (0, 3), (-1, 2), (-1, 1)], Color::Black),
    (&[(0, 0), (0, 1), (0, 2), (-1, 2), (1, 0)], Color::Red),
    (&[(0, 0), (0, 1), (0, 2), (0, 3), (-1, 3)], Color::Black),
    (&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0)], Color::Red),
    (
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (-1, 1),
            (-1, 2),
            (1, 1),
            (1, 2),
        ],
        Color::Red,
    ),
    (&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 1)], Color::Red),
    (&[(0, 0), (0, 1), (0, 2), (-1, 2), (1, 0)], Color::Red),
];

/// Expands a base shape into its four orientations.
///
/// Orientation 0 is the base shape itself. Each further orientation rotates
/// the previous one clockwise; its anchor color flips once per unit of
/// parity in the renormalization offset, and the accumulated offset tracks
/// where the original anchor ended up for consumers that place rotated
/// sprites.
fn build_orientations(
    id: usize,
    base: &[Cell],
    base_color: Color,
) -> Result<[Orientation; NUM_ORIENTATIONS], PieceError> {
    if base.len() > MAX_SQUARES {
        return Err(PieceError::TooManySquares {
            id,
            len: base.len(),
        });
    }
    let anchor = leftmost_lowest(base);
    if anchor != (0, 0) {
        return Err(PieceError::AnchorNotAtOrigin { id, found: anchor });
    }

    let mut cells = [(0, 0); MAX_SQUARES];
    cells[..base.len()].copy_from_slice(base);
    let mut orientations = [Orientation {
        cells,
        len: base.len() as u8,
        offset: (0, 0),
        anchor_color: base_color,
    }; NUM_ORIENTATIONS];

    for oid in 1..NUM_ORIENTATIONS {
        let prev = orientations[oid - 1];
        let (rotated, partial) = rotate_cw(prev.cells());

        // the previously accumulated offset turns with the tile, then the
        // fresh renormalization shift lands on top
        let offset = (prev.offset.1 + partial.0, -prev.offset.0 + partial.1);
        let anchor_color =
            Color::from_parity(prev.anchor_color.index() + partial.0 + partial.1);

        let mut cells = [(0, 0); MAX_SQUARES];
        cells[..rotated.len()].copy_from_slice(&rotated);
        orientations[oid] = Orientation {
            cells,
            len: rotated.len() as u8,
            offset,
            anchor_color,
        };
    }

    Ok(orientations)
}

/// The full set of tiles, expanded into their orientations.
///
/// An owned value rather than a global: every engine instance carries its
/// own catalog, so independent runs and tests cannot interfere.
#[derive(Clone, Debug)]
pub struct Catalog {
    pieces: Vec<Piece>,
}

impl Catalog {
    /// Builds a catalog from base shapes, validating every anchor.
    pub fn new(shapes: &[(&[Cell], Color)]) -> Result<Self, PieceError> {
        if shapes.len() > 32 {
            return Err(PieceError::TooManyPieces { len: shapes.len() });
        }
        let pieces = shapes
            .iter()
            .enumerate()
            .map(|(id, &(cells, color))| {
                Ok(Piece {
                    id,
                    orientations: build_orientations(id, cells, color)?,
                })
            })
            .collect::<Result<Vec<_>, PieceError>>()?;
        Ok(Self { pieces })
    }

    /// The standard twelve-tile draughtboard puzzle.
    pub fn standard() -> Result<Self, PieceError> {
        Self::new(&BASE_SHAPES)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[inline]
    pub fn piece(&self, id: usize) -> &Piece {
        &self.pieces[id]
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(cells: &[Cell]) -> Vec<Cell> {
        let mut cells = cells.to_vec();
        cells.sort();
        cells
    }

    #[test]
    fn test_standard_catalog_has_twelve_pieces() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.len(), NUM_PIECES);
    }

    #[test]
    fn test_standard_catalog_covers_the_board() {
        let catalog = Catalog::standard().unwrap();
        let total: usize = catalog
            .pieces()
            .iter()
            .map(|p| p.orientation(0).cells().len())
            .sum();
        assert_eq!(total, 64);
    }

    #[test]
    fn test_l_tile_orientation_cells() {
        let catalog = Catalog::standard().unwrap();
        let piece = catalog.piece(0);
        assert_eq!(
            sorted(piece.orientation(0).cells()),
            vec![(0, 0), (0, 1), (0, 2), (1, 2)]
        );
        assert_eq!(
            sorted(piece.orientation(1).cells()),
            vec![(-2, 1), (-1, 1), (0, 0), (0, 1)]
        );
        assert_eq!(
            sorted(piece.orientation(2).cells()),
            vec![(0, 0), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(
            sorted(piece.orientation(3).cells()),
            vec![(0, 0), (0, 1), (1, 0), (2, 0)]
        );
    }

    #[test]
    fn test_l_tile_anchor_colors_and_offsets() {
        let catalog = Catalog::standard().unwrap();
        let piece = catalog.piece(0);
        let colors: Vec<Color> = piece
            .orientations()
            .iter()
            .map(|o| o.anchor_color)
            .collect();
        assert_eq!(colors, vec![Color::Red, Color::Black, Color::Black, Color::Red]);

        let offsets: Vec<Cell> = piece.orientations().iter().map(|o| o.offset).collect();
        assert_eq!(offsets, vec![(0, 0), (-2, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_every_orientation_is_anchor_normalized() {
        let catalog = Catalog::standard().unwrap();
        for piece in catalog.pieces() {
            for orientation in piece.orientations() {
                assert_eq!(
                    crate::geometry::leftmost_lowest(orientation.cells()),
                    (0, 0),
                    "piece {} not anchor-normalized",
                    piece.id
                );
            }
        }
    }

    #[test]
    fn test_square_coloring_is_rotation_invariant() {
        // the number of black squares in a tile cannot change as it turns
        let catalog = Catalog::standard().unwrap();
        for piece in catalog.pieces() {
            let black_count = |o: &Orientation| {
                o.cells()
                    .iter()
                    .filter(|&&(dx, dy)| {
                        Color::from_parity(o.anchor_color.index() + dx + dy) == Color::Black
                    })
                    .count()
            };
            let base = black_count(piece.orientation(0));
            for oid in 1..NUM_ORIENTATIONS as u8 {
                assert_eq!(
                    black_count(piece.orientation(oid)),
                    base,
                    "piece {} oid {} changed color balance",
                    piece.id,
                    oid
                );
            }
        }
    }

    #[test]
    fn test_bad_anchor_is_a_construction_error() {
        // lowest row starts at x = 1, so the anchor is (1, 0), not (0, 0)
        let shapes: [(&[Cell], Color); 1] = [(&[(1, 0), (1, 1), (2, 1)], Color::Red)];
        assert_eq!(
            Catalog::new(&shapes).unwrap_err(),
            PieceError::AnchorNotAtOrigin {
                id: 0,
                found: (1, 0)
            }
        );
    }

    #[test]
    fn test_oversized_shape_is_a_construction_error() {
        let cells: Vec<Cell> = (0..9).map(|y| (0, y)).collect();
        let shapes: [(&[Cell], Color); 1] = [(&cells, Color::Black)];
        assert!(matches!(
            Catalog::new(&shapes),
            Err(PieceError::TooManySquares { id: 0, len: 9 })
        ));
    }
}
