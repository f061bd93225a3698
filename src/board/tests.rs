use super::*;
use crate::error::BoardError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_pos_sentinel() {
    assert!(Pos::NONE.is_none());
    assert_eq!(Pos::NONE, Pos::new(-1, -1));
    assert!(!Pos::new(0, 0).is_none());
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_bitboard_bounds() {
    let set = Bitboard::full(7, 5);
    assert_eq!(set.len(), 35);
    assert!(set.contains(Pos::new(4, 6)));
    assert!(!set.contains(Pos::new(5, 0)));
    assert!(!set.contains(Pos::new(0, 7)));
    assert!(!set.contains(Pos::new(-1, 0)));
    assert!(!set.contains(Pos::new(0, -2)));
}

#[test]
fn test_bitboard_iter_row_major() {
    let mut set = Bitboard::new(16, 16);
    set.insert(Pos::new(15, 15));
    set.insert(Pos::new(0, 3));
    set.insert(Pos::new(4, 0));
    let cells: Vec<Pos> = set.iter().collect();
    assert_eq!(cells, vec![Pos::new(0, 3), Pos::new(4, 0), Pos::new(15, 15)]);
}

#[test]
fn test_bitboard_without_leaves_original() {
    let set = Bitboard::full(3, 3);
    let smaller = set.without(Pos::new(1, 1));
    assert_eq!(set.len(), 9);
    assert_eq!(smaller.len(), 8);
    assert!(set.contains(Pos::new(1, 1)));
    assert!(!smaller.contains(Pos::new(1, 1)));
}

#[test]
fn test_new_board() {
    let board = Board::default();
    assert_eq!(board.width(), 7);
    assert_eq!(board.height(), 7);
    assert_eq!(board.active_player(), Player::One);
    assert_eq!(board.blank_cells().len(), 49);
    assert_eq!(board.player_location(Player::One), None);
    assert_eq!(board.legal_moves().len(), 49);
    assert_eq!(board.utility(Player::One), 0.0);
}

#[test]
fn test_unsupported_sizes() {
    assert!(matches!(
        Board::try_new(0, 4),
        Err(BoardError::UnsupportedSize { width: 0, height: 4 })
    ));
    assert!(Board::try_new(17, 16).is_err());
    assert!(Board::try_new(16, 16).is_ok());
}

#[test]
fn test_single_row_and_column_boards() {
    for (width, height) in [(256, 1), (1, 256)] {
        let board = Board::try_new(width, height).unwrap();
        assert_eq!(board.width(), width);
        assert_eq!(board.height(), height);
        assert_eq!(board.blank_cells().len(), 256);

        let moves = board.legal_moves();
        assert_eq!(moves.len(), 256);
        assert_eq!(moves[255], Pos::new(height as i32 - 1, width as i32 - 1));

        // A knight never fits on a single line.
        let next = board.apply_move(Pos::new(0, 0));
        assert!(next.legal_moves_for(Player::One).is_empty());
    }
    assert!(Board::try_new(257, 1).is_err());
}

#[test]
fn test_apply_move_is_pure() {
    let board = Board::new(5, 5);
    let next = board.apply_move(Pos::new(2, 2));

    assert_eq!(board.active_player(), Player::One);
    assert_eq!(board.blank_cells().len(), 25);
    assert_eq!(board.player_location(Player::One), None);

    assert_eq!(next.active_player(), Player::Two);
    assert_eq!(next.blank_cells().len(), 24);
    assert_eq!(next.player_location(Player::One), Some(Pos::new(2, 2)));
    assert_eq!(next.move_count(), 1);
}

#[test]
fn test_knight_moves_after_placement() {
    let board = Board::new(5, 5)
        .apply_move(Pos::new(2, 2))
        .apply_move(Pos::new(0, 0));

    let moves = board.legal_moves();
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|&m| crate::rules::is_knight_move(m, Pos::new(2, 2))));

    // Player two's knight moves from the corner
    assert_eq!(
        board.legal_moves_for(Player::Two),
        vec![Pos::new(1, 2), Pos::new(2, 1)]
    );
}

#[test]
fn test_try_apply_move_rejects_illegal() {
    let board = Board::new(5, 5).apply_move(Pos::new(2, 2));
    assert!(matches!(
        board.try_apply_move(Pos::new(2, 2)),
        Err(BoardError::Occupied(_))
    ));
    assert!(matches!(
        board.try_apply_move(Pos::new(9, 0)),
        Err(BoardError::OutOfBounds(_))
    ));

    let board = board.apply_move(Pos::new(0, 0));
    assert!(matches!(
        board.try_apply_move(Pos::new(2, 3)),
        Err(BoardError::IllegalMove { player: Player::One, .. })
    ));
    assert!(board.try_apply_move(Pos::new(0, 1)).is_ok());
}

#[test]
fn test_utility_when_stuck() {
    // 2x2: player one in a corner has no knight moves at all
    let board = Board::new(2, 2)
        .apply_move(Pos::new(0, 0))
        .apply_move(Pos::new(1, 1));

    assert_eq!(board.active_player(), Player::One);
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.utility(Player::One), f64::NEG_INFINITY);
    assert_eq!(board.utility(Player::Two), f64::INFINITY);
    assert!(board.is_over());
    assert_eq!(board.winner(), Some(Player::Two));
}

#[test]
fn test_with_blocked() {
    let board = Board::with_blocked(3, 3, &[Pos::new(1, 1), Pos::new(0, 0)]).unwrap();
    assert_eq!(board.blank_cells().len(), 7);
    assert!(!board.is_blank(Pos::new(1, 1)));
    assert!(Board::with_blocked(3, 3, &[Pos::new(3, 0)]).is_err());
}

#[test]
fn test_display() {
    let board = Board::with_blocked(3, 2, &[Pos::new(1, 2)])
        .unwrap()
        .apply_move(Pos::new(0, 0))
        .apply_move(Pos::new(1, 1));
    assert_eq!(board.to_string(), "1 . .\n. 2 -\n");
}
