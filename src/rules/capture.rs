//! Capture rules for Othello (directional sandwich capture)
//!
//! A move captures along a direction when the cells next to it hold a run
//! of one or more opponent discs terminated by one of the mover's own
//! discs. An empty cell or the board edge kills the line.

use crate::board::{Board, Disc, Pos};

/// Direction vectors for capture checking (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // ↖
    (-1, 0),  // ↑
    (-1, 1),  // ↗
    (0, -1),  // ←
    (0, 1),   // →
    (1, -1),  // ↙
    (1, 0),   // ↓
    (1, 1),   // ↘
];

/// Check whether placing `disc` at `pos` captures along `(dr, dc)`.
///
/// Walks the ray one cell past `pos`: at least one opponent disc must be
/// crossed before one of the mover's discs is reached, strictly inside
/// the board.
pub fn captures_in_direction(board: &Board, pos: Pos, dr: i32, dc: i32, disc: Disc) -> bool {
    let mut seen_opponent = false;
    let mut cursor = pos.offset(dr, dc);

    while let Some(p) = cursor {
        match board.get(p) {
            Disc::Empty => return false,
            d if d == disc => return seen_opponent,
            _ => seen_opponent = true,
        }
        cursor = p.offset(dr, dc);
    }

    // Ran off the board without a terminating disc
    false
}

/// Check if a move at `pos` would capture in at least one direction.
///
/// This is the legality test for a single cell; it does not consult the
/// frontier, so callers filter candidates first.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, disc: Disc) -> bool {
    if !board.is_empty(pos) {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| captures_in_direction(board, pos, dr, dc, disc))
}

/// Find every disc flipped by placing `disc` at `pos`.
///
/// Scans all 8 directions and accumulates each direction's opponent run
/// only when that run is terminated by one of the mover's discs. The
/// returned set is complete before any mutation happens, so a caller can
/// decide legality (non-empty result) without touching the board.
///
/// # Returns
/// Positions of the opponent discs the move would flip; empty when the
/// move captures nothing.
pub fn captured_positions(board: &Board, pos: Pos, disc: Disc) -> Vec<Pos> {
    let mut captured = Vec::new();
    if !board.is_empty(pos) {
        return captured;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = Vec::new();
        let mut cursor = pos.offset(dr, dc);

        while let Some(p) = cursor {
            match board.get(p) {
                Disc::Empty => break,
                d if d == disc => {
                    captured.extend_from_slice(&line);
                    break;
                }
                _ => line.push(p),
            }
            cursor = p.offset(dr, dc);
        }
    }

    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_captures_single_disc() {
        let board = Board::standard();

        let captured = captured_positions(&board, Pos::new(2, 3), Disc::Black);
        assert_eq!(captured, vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_opening_legality_black() {
        let board = Board::standard();

        for (row, col) in [(2, 3), (3, 2), (4, 5), (5, 4)] {
            assert!(has_capture(&board, Pos::new(row, col), Disc::Black));
        }

        // Far corner and diagonal touch point capture nothing
        assert!(!has_capture(&board, Pos::new(0, 0), Disc::Black));
        assert!(!has_capture(&board, Pos::new(2, 2), Disc::Black));
    }

    #[test]
    fn test_opening_legality_white() {
        let board = Board::standard();

        for (row, col) in [(2, 4), (3, 5), (4, 2), (5, 3)] {
            assert!(has_capture(&board, Pos::new(row, col), Disc::White));
        }
        assert!(!has_capture(&board, Pos::new(2, 3), Disc::White));
    }

    #[test]
    fn test_occupied_cell_never_captures() {
        let board = Board::standard();
        assert!(!has_capture(&board, Pos::new(3, 3), Disc::Black));
        assert!(captured_positions(&board, Pos::new(3, 3), Disc::Black).is_empty());
    }

    #[test]
    fn test_direction_walk() {
        let board = Board::standard();

        // From (2,3) downward: white at (3,3), then black at (4,3)
        assert!(captures_in_direction(&board, Pos::new(2, 3), 1, 0, Disc::Black));
        // Same ray for white hits its own disc first
        assert!(!captures_in_direction(&board, Pos::new(2, 3), 1, 0, Disc::White));
        // Upward from (2,3) leaves the board immediately
        assert!(!captures_in_direction(&board, Pos::new(2, 3), -1, 0, Disc::Black));
    }

    #[test]
    fn test_run_to_edge_is_not_a_capture() {
        let mut board = Board::new();
        // Row 0: _ W W W W W W W - the run leaves the board unterminated
        for col in 1..8 {
            board.set(Pos::new(0, col), Disc::White);
        }

        assert!(!captures_in_direction(&board, Pos::new(0, 0), 0, 1, Disc::Black));
        assert!(!has_capture(&board, Pos::new(0, 0), Disc::Black));

        // Terminate the run and the same move captures all six before it
        board.set(Pos::new(0, 7), Disc::Black);
        let captured = captured_positions(&board, Pos::new(0, 0), Disc::Black);
        assert_eq!(captured.len(), 6);
        assert!(captured.contains(&Pos::new(0, 1)));
        assert!(captured.contains(&Pos::new(0, 6)));
    }

    #[test]
    fn test_empty_gap_kills_the_line() {
        let mut board = Board::new();
        // Row 5: _ W _ B - the gap at (5,2) breaks the sandwich
        board.set(Pos::new(5, 1), Disc::White);
        board.set(Pos::new(5, 3), Disc::Black);

        assert!(!captures_in_direction(&board, Pos::new(5, 0), 0, 1, Disc::Black));
        assert!(!has_capture(&board, Pos::new(5, 0), Disc::Black));
    }

    #[test]
    fn test_adjacent_own_disc_is_not_a_capture() {
        let mut board = Board::new();
        board.set(Pos::new(4, 4), Disc::Black);

        // No opponent disc is crossed before reaching the own disc
        assert!(!captures_in_direction(&board, Pos::new(4, 3), 0, 1, Disc::Black));
    }

    #[test]
    fn test_multiple_directions_capture_together() {
        let mut board = Board::new();
        // Placing black at (3,3) sandwiches both arms:
        //   (3,1)=B (3,2)=W [3,3] (2,3)=W (1,3)=B
        board.set(Pos::new(3, 1), Disc::Black);
        board.set(Pos::new(3, 2), Disc::White);
        board.set(Pos::new(2, 3), Disc::White);
        board.set(Pos::new(1, 3), Disc::Black);

        let mut captured = captured_positions(&board, Pos::new(3, 3), Disc::Black);
        captured.sort();
        assert_eq!(captured, vec![Pos::new(2, 3), Pos::new(3, 2)]);
    }
}
