//! Draughtboard Puzzle Solver Library
//!
//! Core search engine for the classic draughtboard puzzle: an 8x8
//! checkerboard cut into twelve irregular tiles is reassembled by a
//! step-wise backtracking search. Provides the tile catalog, the board
//! state, and the engine that advances or rewinds one placement per step.

pub mod board;
pub mod candidates;
pub mod geometry;
pub mod pieces;
pub mod solver;

pub use board::{BoardError, BoardState, Commit};
pub use pieces::{Catalog, Cell, Color, PieceError};
pub use solver::{Engine, SearchOutcome, Status};
