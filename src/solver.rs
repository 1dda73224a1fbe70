//! The step-wise backtracking search engine.
//!
//! An explicit stack of candidate frames mirrors the recursion of a
//! depth-first search: one frame per committed placement, plus the frame
//! currently being searched. Each external `step` advances the search by
//! exactly one placement attempt, one backtrack, or one terminal
//! transition, so a caller can drive the solve at any pace and observe
//! every intermediate state.

use crate::board::{BoardState, Commit};
use crate::candidates::Frame;
use crate::pieces::{Catalog, Cell, Color};

/// Attempts between progress log lines.
const LOG_INTERVAL: u64 = 1000;

/// The result of a single search step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A tile was committed with its anchor on `anchor`.
    Placed {
        piece_id: usize,
        orientation_id: u8,
        anchor: Cell,
    },
    /// The candidate did not fit; the next step pulls the next candidate
    /// from the same frame.
    Rejected { piece_id: usize, orientation_id: u8 },
    /// The top frame ran dry; its placement was undone.
    Backtrack { piece_id: usize },
    /// Every tile is on the board.
    Solved,
    /// The root frame ran dry with nothing placed; no solution is
    /// reachable from the initial state.
    Exhausted,
}

/// Engine state between steps. `Solved` and `Exhausted` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Solved,
    Exhausted,
}

/// The search engine. Owns its catalog, board, and frame stack; multiple
/// engines run independently.
pub struct Engine {
    catalog: Catalog,
    board: BoardState,
    stack: Vec<Frame>,
    status: Status,
    attempts: u64,
}

impl Engine {
    /// Creates an engine at the initial configuration.
    pub fn new(catalog: Catalog) -> Self {
        let mut engine = Self {
            catalog,
            board: BoardState::new(),
            stack: Vec::new(),
            status: Status::Idle,
            attempts: 0,
        };
        engine.reset();
        engine
    }

    /// Returns the engine to the initial configuration: empty board, a
    /// single root frame, attempt counter at zero.
    pub fn reset(&mut self) {
        self.board = BoardState::new();
        self.stack.clear();
        // a fresh board's anchor is its corner
        self.stack.push(Frame::new(Color::of_cell((0, 0))));
        self.status = Status::Idle;
        self.attempts = 0;
    }

    /// Advances the search by one placement attempt or one backtrack.
    ///
    /// Terminal states are absorbing: stepping a solved or exhausted
    /// engine is a no-op that reports the terminal outcome.
    pub fn step(&mut self) -> SearchOutcome {
        match self.status {
            Status::Solved => return SearchOutcome::Solved,
            Status::Exhausted => return SearchOutcome::Exhausted,
            Status::Idle => {}
        }

        let Some(anchor) = self.board.anchor_cell() else {
            self.status = Status::Solved;
            return SearchOutcome::Solved;
        };

        let placed_ids = self.board.placed_ids();
        let frame = self
            .stack
            .last_mut()
            .expect("stack always holds the root frame");

        match frame.pull(&self.catalog, placed_ids) {
            Some((piece_id, orientation_id)) => {
                self.attempts += 1;
                if self.attempts % LOG_INTERVAL == 0 {
                    log::debug!("attempts: {}", self.attempts);
                }

                if self.board.try_commit(&self.catalog, piece_id, orientation_id) {
                    if self.board.is_complete() {
                        self.status = Status::Solved;
                        log::info!("solved after {} attempts", self.attempts);
                    } else {
                        // the next frame binds to the color of the anchor
                        // this commit just exposed
                        let color = self
                            .board
                            .required_anchor_color()
                            .expect("incomplete board has an anchor");
                        self.stack.push(Frame::new(color));
                    }
                    SearchOutcome::Placed {
                        piece_id,
                        orientation_id,
                        anchor,
                    }
                } else {
                    SearchOutcome::Rejected {
                        piece_id,
                        orientation_id,
                    }
                }
            }
            None => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                    let commit = self
                        .board
                        .undo_last()
                        .expect("each non-root frame has a matching commit");
                    SearchOutcome::Backtrack {
                        piece_id: commit.piece_id,
                    }
                } else {
                    self.status = Status::Exhausted;
                    log::info!("search exhausted after {} attempts", self.attempts);
                    SearchOutcome::Exhausted
                }
            }
        }
    }

    /// Steps until a terminal state or the cap, whichever comes first.
    pub fn run_to_completion(&mut self, max_steps: u64) -> Status {
        for _ in 0..max_steps {
            self.step();
            if self.status != Status::Idle {
                break;
            }
        }
        self.status
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Candidate pulls so far (accepted and rejected placements).
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Anchor of the next placement, None once the board is complete.
    pub fn current_anchor_cell(&self) -> Option<Cell> {
        self.board.anchor_cell()
    }

    /// Color the next placement's anchor must carry, None once complete.
    pub fn current_required_color(&self) -> Option<Color> {
        self.board.required_anchor_color()
    }

    /// Committed placements and remaining free cells, for rendering or
    /// debugging.
    pub fn snapshot(&self) -> (&[Commit], Vec<Cell>) {
        (self.board.placed(), self.board.free_cells())
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Frames on the stack; one more than the number of placements while
    /// the engine is idle.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }
}
