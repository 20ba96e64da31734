//! Tests for the minimax agent.

use noughts_core::{Board, Game, GameStatus, Mark, Minimax, Player, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;

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
fn test_picks_an_open_square_on_a_blank_board() {
    let agent = Minimax::new(Mark::X);
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0);

    let index = agent.choose_move(&mut board, &mut rng).expect("blank board has moves");
    assert!(index < 9);
}

#[test]
fn test_picks_the_only_remaining_square() {
    let agent = Minimax::new(Mark::X);
    let mut board = board_from(".XXXOXXXO");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(agent.choose_move(&mut board, &mut rng), Some(0));
}

#[test]
fn test_returns_none_when_the_game_is_over() {
    let agent = Minimax::new(Mark::X);
    let mut board = board_from("XXXXXXXXX");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(agent.choose_move(&mut board, &mut rng), None);
}

#[test]
fn test_returns_none_on_a_rigged_board() {
    let agent = Minimax::new(Mark::X);
    let mut board = board_from("XXXOOO...");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(agent.choose_move(&mut board, &mut rng), None);
}

#[test]
fn test_finds_the_direct_win() {
    // X completes the middle column.
    let agent = Minimax::new(Mark::X);
    let mut board = board_from("OX..X....");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(agent.choose_move(&mut board, &mut rng), Some(7));
}

#[test]
fn test_blocks_the_direct_loss() {
    // O threatens the middle column; X must close it.
    let agent = Minimax::new(Mark::X);
    let mut board = board_from("XO..O....");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(agent.choose_move(&mut board, &mut rng), Some(7));
}

#[test]
fn test_prefers_the_immediate_win_over_a_slower_one() {
    // X can win right now on the main diagonal. Every other move keeps
    // the win available but pays at least two more plies for it, so a
    // depth-blind agent could dawdle; this one may not.
    let agent = Minimax::new(Mark::X);
    let mut board = board_from("X.O.X.O..");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(agent.choose_move(&mut board, &mut rng), Some(8));
}

#[test]
fn test_delays_the_loss_when_losing_is_forced() {
    // O faces an immediate X threat on the top row. Even in positions
    // where X wins regardless, conceding at once is the worst option:
    // the block is the only move that does not lose on the spot.
    let agent = Minimax::new(Mark::O);
    let mut board = board_from("XX.......");
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(agent.choose_move(&mut board, &mut rng), Some(2));
}

#[test]
fn test_leaves_the_board_exactly_as_it_found_it() {
    let agent = Minimax::new(Mark::X);
    let before = board_from("OX..X....");
    let mut board = before.clone();
    let mut rng = StdRng::seed_from_u64(0);

    agent.choose_move(&mut board, &mut rng);
    assert_eq!(board, before);
}

#[test]
fn test_self_play_from_blank_always_draws() {
    for seed in 0..3 {
        let seats = [Player::agent(Mark::X), Player::agent(Mark::O)];
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        while game.status() == GameStatus::InProgress {
            let seat = seats
                .iter()
                .find(|seat| seat.mark() == game.to_move())
                .expect("one seat per mark");
            let index = seat
                .decide(game.board_mut(), &mut rng)
                .expect("an in-progress game has moves");
            game.make_move(index).expect("agent moves are legal");
        }

        assert_eq!(game.status(), GameStatus::Draw, "seed {seed} did not draw");
        assert!(game.board().is_full());
        assert_eq!(game.board().winner(), Ok(None));
    }
}
