//! Tests for board state: moves, legality, and win detection.

use noughts_core::{Board, IllegalMove, Mark, RiggedBoard, Square, WIN_LINES};
use strum::IntoEnumIterator;

/// Builds a board from a 9-character pattern of 'X', 'O', and '.'.
fn board_from(pattern: &str) -> Board {
    assert_eq!(pattern.len(), 9, "pattern must cover the whole grid");
    let mut squares = [Square::Empty; 9];
    for (index, glyph) in pattern.chars().enumerate() {
        squares[index] = match glyph {
            'X' => Square::Occupied(Mark::X),
            'O' => Square::Occupied(Mark::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_blank_board_has_all_legal_moves() {
    let board = Board::new();
    assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
}

#[test]
fn test_legal_moves_shrink_after_center_move() {
    let mut board = Board::new();
    board.apply_move(Mark::X, 4).unwrap();
    assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_apply_move_out_of_range() {
    let mut board = Board::new();
    assert_eq!(board.apply_move(Mark::X, 9), Err(IllegalMove::OutOfRange(9)));
    assert_eq!(board, Board::new(), "a rejected move must not change the board");
}

#[test]
fn test_apply_move_to_occupied_square() {
    let mut board = Board::new();
    board.apply_move(Mark::X, 4).unwrap();
    assert_eq!(board.apply_move(Mark::O, 4), Err(IllegalMove::Occupied(4)));
    assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
}

#[test]
fn test_apply_then_undo_restores_the_board() {
    for mark in Mark::iter() {
        for index in 0..9 {
            let mut board = Board::new();
            board.apply_move(mark, index).unwrap();
            board.undo_move(mark, index);
            assert_eq!(board, Board::new(), "round trip failed at index {index}");
        }
    }
}

#[test]
fn test_apply_then_undo_restores_a_mid_game_board() {
    let before = board_from("XO..X....");
    let mut board = before.clone();
    board.apply_move(Mark::O, 8).unwrap();
    board.undo_move(Mark::O, 8);
    assert_eq!(board, before);
}

#[test]
fn test_undo_with_mismatched_mark_is_a_noop() {
    let mut board = Board::new();
    board.apply_move(Mark::X, 4).unwrap();
    board.undo_move(Mark::O, 4);
    assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
}

#[test]
fn test_undo_on_empty_or_out_of_range_square_is_a_noop() {
    let mut board = Board::new();
    board.undo_move(Mark::X, 4);
    board.undo_move(Mark::X, 12);
    assert_eq!(board, Board::new());
}

#[test]
fn test_winner_detects_every_line() {
    for line in WIN_LINES {
        let mut board = Board::new();
        for index in line {
            board.apply_move(Mark::O, index).unwrap();
        }
        assert_eq!(board.winner(), Ok(Some(Mark::O)), "line {line:?} not detected");
        assert_eq!(board.winning_line(), Ok(Some(line)));
    }
}

#[test]
fn test_winner_none_without_a_complete_line() {
    assert_eq!(Board::new().winner(), Ok(None));
    assert_eq!(board_from("XO..X....").winner(), Ok(None));
}

#[test]
fn test_two_different_winners_is_rigged() {
    let board = board_from("XXXOOO...");
    assert_eq!(board.winner(), Err(RiggedBoard));
    assert_eq!(board.winning_line(), Err(RiggedBoard));
}

#[test]
fn test_one_mark_completing_two_lines_is_a_normal_win() {
    // X holds the top row and the left column at once.
    let board = board_from("XXXX..X..");
    assert_eq!(board.winner(), Ok(Some(Mark::X)));
}

#[test]
fn test_board_with_a_winner_is_terminal() {
    let board = board_from("XXX.O.O..");
    assert!(board.is_terminal());
    assert!(board.winner().unwrap().is_some());
}

#[test]
fn test_full_draw_board_is_terminal() {
    let board = board_from("XOXXOOOXX");
    assert!(board.is_full());
    assert!(board.is_terminal());
    assert_eq!(board.winner(), Ok(None));
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_rigged_board_is_terminal() {
    assert!(board_from("XXXOOO...").is_terminal());
}

#[test]
fn test_board_in_progress_is_not_terminal() {
    assert!(!Board::new().is_terminal());
    assert!(!board_from("XO..X....").is_terminal());
}

#[test]
fn test_from_squares_does_not_validate() {
    // Three X marks and no O can never arise through alternating play,
    // but the raw loader takes the configuration as given.
    let board = board_from("X.X....X.");
    assert_eq!(board.winner(), Ok(None));
    assert_eq!(board.legal_moves().len(), 6);
}

#[test]
fn test_display_labels_empty_squares_by_number() {
    assert_eq!(format!("{}", Board::new()), "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");

    let mut board = Board::new();
    board.apply_move(Mark::X, 0).unwrap();
    board.apply_move(Mark::O, 4).unwrap();
    assert_eq!(format!("{board}"), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}

#[test]
fn test_board_serializes_round_trip() {
    let board = board_from("XO..X....");
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
