use super::{Board, Disc, Pos, BOARD_SIZE, TOTAL_CELLS};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert_eq!(board.get(Pos::from_index(idx)), Disc::Empty);
    }
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_standard_opening() {
    let board = Board::standard();
    assert_eq!(board.get(Pos::new(3, 3)), Disc::White);
    assert_eq!(board.get(Pos::new(3, 4)), Disc::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Disc::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Disc::White);
    assert_eq!(board.count(Disc::Black), 2);
    assert_eq!(board.count(Disc::White), 2);
    assert_eq!(board.occupied(), 4);
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    let pos = Pos::new(5, 2);
    board.set(pos, Disc::Black);
    assert_eq!(board.get(pos), Disc::Black);
    assert!(!board.is_empty(pos));
    board.set(pos, Disc::Empty);
    assert!(board.is_empty(pos));
}

#[test]
fn test_flip_is_involution() {
    let mut board = Board::new();
    let pos = Pos::new(0, 7);
    board.set(pos, Disc::Black);

    board.flip(pos);
    assert_eq!(board.get(pos), Disc::White);

    board.flip(pos);
    assert_eq!(board.get(pos), Disc::Black);
}

#[test]
fn test_opponent() {
    assert_eq!(Disc::Black.opponent(), Disc::White);
    assert_eq!(Disc::White.opponent(), Disc::Black);
    assert_eq!(Disc::Empty.opponent(), Disc::Empty);
}

#[test]
fn test_count_and_full() {
    let mut board = Board::new();
    assert!(!board.is_full());

    for idx in 0..TOTAL_CELLS {
        let disc = if idx % 2 == 0 { Disc::Black } else { Disc::White };
        board.set(Pos::from_index(idx), disc);
    }

    assert!(board.is_full());
    assert_eq!(board.count(Disc::Black), 32);
    assert_eq!(board.count(Disc::White), 32);
    assert_eq!(board.occupied(), TOTAL_CELLS);
}

#[test]
fn test_pos_index_roundtrip() {
    for idx in 0..TOTAL_CELLS {
        assert_eq!(Pos::from_index(idx).to_index(), idx);
    }
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(7, 7).to_index(), TOTAL_CELLS - 1);
}

#[test]
fn test_pos_bounds() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, BOARD_SIZE as i32));
}

#[test]
fn test_pos_offset_at_edge() {
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(7, 7).offset(1, 1), None);
    assert_eq!(Pos::new(3, 4).offset(1, -1), Some(Pos::new(4, 3)));
}

#[test]
fn test_pos_display_notation() {
    assert_eq!(Pos::new(0, 0).to_string(), "a1");
    assert_eq!(Pos::new(2, 3).to_string(), "d3");
    assert_eq!(Pos::new(7, 7).to_string(), "h8");
}
