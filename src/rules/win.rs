//! Terminal scoring for Othello
//!
//! Once neither side can move the game is scored by disc majority.

use std::cmp::Ordering;

use crate::board::{Board, Disc};

/// Count the discs of both colors, black first
pub fn score(board: &Board) -> (usize, usize) {
    (board.count(Disc::Black), board.count(Disc::White))
}

/// Winner by disc majority, `None` for a tie
pub fn check_winner(board: &Board) -> Option<Disc> {
    let (black, white) = score(board);
    match black.cmp(&white) {
        Ordering::Greater => Some(Disc::Black),
        Ordering::Less => Some(Disc::White),
        Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_empty_board_is_tied() {
        let board = Board::new();
        assert_eq!(score(&board), (0, 0));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_majority_wins() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Disc::Black);
        assert_eq!(check_winner(&board), Some(Disc::Black));

        board.set(Pos::new(0, 1), Disc::White);
        board.set(Pos::new(0, 2), Disc::White);
        assert_eq!(check_winner(&board), Some(Disc::White));
    }

    #[test]
    fn test_equal_counts_tie() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Disc::Black);
        board.set(Pos::new(7, 7), Disc::White);
        assert_eq!(score(&board), (1, 1));
        assert_eq!(check_winner(&board), None);
    }
}
