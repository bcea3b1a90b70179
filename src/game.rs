//! Game state engine: board, frontier and turn management
//!
//! [`Game`] owns the full mutable state of one Othello game. Besides the
//! disc grid and the side to move it keeps the *frontier*: the set of
//! empty cells adjacent to at least one disc. Every legal move must be a
//! frontier cell (a capture needs an adjacent opponent disc), so legality
//! scans stay on the frontier instead of the whole grid. Membership is a
//! candidate filter only; the capture test decides actual legality.

use std::collections::HashSet;

use thiserror::Error;

use crate::board::{Board, Disc, Pos, TOTAL_CELLS};
use crate::rules;

/// Rejection returned by [`Game::apply_move`].
///
/// Raised when the target is not a frontier cell or captures nothing.
/// Always recoverable: the game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid move at {0}")]
pub struct InvalidMove(pub Pos);

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Disc),
    Draw,
}

/// Othello game state: disc grid, move frontier and side to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    frontier: HashSet<Pos>,
    turn: Disc,
}

impl Game {
    /// Create a game with the standard opening, Black to move
    pub fn new() -> Self {
        Self::with_position(Board::standard(), Disc::Black)
    }

    /// Create a game from an arbitrary position.
    ///
    /// The frontier is a derived cache, so it is rebuilt here from the
    /// board: every empty cell with at least one occupied neighbor.
    pub fn with_position(board: Board, turn: Disc) -> Self {
        debug_assert!(turn != Disc::Empty);

        let mut frontier = HashSet::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if board.is_empty(pos) && has_occupied_neighbor(&board, pos) {
                frontier.insert(pos);
            }
        }

        Self {
            board,
            frontier,
            turn,
        }
    }

    /// Attempt to play the current side's disc at `pos`.
    ///
    /// The full flip set across all 8 directions is computed before the
    /// board is touched; a move that captures nothing is rejected with
    /// zero writes. After a legal move the turn passes to the opponent
    /// only if the opponent has a legal reply, otherwise the same side
    /// moves again (the pass rule).
    pub fn apply_move(&mut self, pos: Pos) -> Result<(), InvalidMove> {
        if !self.frontier.contains(&pos) {
            return Err(InvalidMove(pos));
        }

        let flipped = rules::captured_positions(&self.board, pos, self.turn);
        if flipped.is_empty() {
            return Err(InvalidMove(pos));
        }

        for p in flipped {
            self.board.flip(p);
        }
        self.board.set(pos, self.turn);
        self.update_frontier(pos);

        let opponent = self.turn.opponent();
        if self.can_move(opponent) {
            self.turn = opponent;
        }

        Ok(())
    }

    /// Remove the played cell from the frontier and add its empty neighbors
    fn update_frontier(&mut self, pos: Pos) {
        self.frontier.remove(&pos);
        for &(dr, dc) in &rules::DIRECTIONS {
            if let Some(p) = pos.offset(dr, dc) {
                if self.board.is_empty(p) {
                    self.frontier.insert(p);
                }
            }
        }
    }

    /// Check whether `side` has at least one legal move
    pub fn can_move(&self, side: Disc) -> bool {
        self.frontier
            .iter()
            .any(|&p| rules::has_capture(&self.board, p, side))
    }

    /// Check whether `pos` is a legal move for the side to move
    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.frontier.contains(&pos) && rules::has_capture(&self.board, pos, self.turn)
    }

    /// All legal moves for `side`, sorted by board index
    pub fn legal_moves(&self, side: Disc) -> Vec<Pos> {
        let mut moves: Vec<Pos> = self
            .frontier
            .iter()
            .copied()
            .filter(|&p| rules::has_capture(&self.board, p, side))
            .collect();
        moves.sort();
        moves
    }

    /// True once neither side has a legal move
    pub fn is_game_over(&self) -> bool {
        !self.can_move(Disc::Black) && !self.can_move(Disc::White)
    }

    /// Final result by disc majority.
    ///
    /// Must only be called once [`Game::is_game_over`] returns true.
    pub fn outcome(&self) -> GameOutcome {
        debug_assert!(self.is_game_over());
        match rules::check_winner(&self.board) {
            Some(disc) => GameOutcome::Winner(disc),
            None => GameOutcome::Draw,
        }
    }

    /// Current board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Disc {
        self.turn
    }

    /// Disc count for one color
    #[inline]
    pub fn count(&self, side: Disc) -> usize {
        self.board.count(side)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether any of the 8 neighbors of `pos` holds a disc
fn has_occupied_neighbor(board: &Board, pos: Pos) -> bool {
    rules::DIRECTIONS
        .iter()
        .any(|&(dr, dc)| pos.offset(dr, dc).map_or(false, |p| !board.is_empty(p)))
}
